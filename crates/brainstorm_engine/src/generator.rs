//! Random title generation.

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use brainstorm_foundation::{Error, GrammaticalEntity, Result};
use brainstorm_lexicon::SubjectSet;
use brainstorm_template::TitleFormatter;

use crate::library::TitleLibrary;
use crate::policy::GenerationPolicy;

/// Draws `count` distinct subjects uniformly at random.
///
/// The subject set itself is not modified; drawing works on a copy of its
/// indices.
///
/// # Errors
///
/// Returns an insufficient-subjects error if `count` exceeds the set size.
pub fn sample_subjects<'s, R: Rng + ?Sized>(
    subjects: &'s SubjectSet,
    count: usize,
    rng: &mut R,
) -> Result<Vec<&'s GrammaticalEntity>> {
    if count > subjects.len() {
        return Err(Error::insufficient_subjects(count, subjects.len()));
    }
    let mut pool: Vec<usize> = (0..subjects.len()).collect();
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        let i = rng.gen_range(0..pool.len());
        picked.push(&subjects[pool.swap_remove(i)]);
    }
    Ok(picked)
}

/// Generates titles from a library and a subject set.
pub struct TitleGenerator<R = ChaCha8Rng> {
    library: Arc<TitleLibrary>,
    policy: GenerationPolicy,
    formatter: TitleFormatter,
    rng: R,
}

impl TitleGenerator<ChaCha8Rng> {
    /// Creates a generator whose output is reproducible for a given seed.
    #[must_use]
    pub fn seeded(library: Arc<TitleLibrary>, seed: u64) -> Self {
        Self::with_rng(library, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy(library: Arc<TitleLibrary>) -> Self {
        Self::with_rng(library, ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> TitleGenerator<R> {
    /// Creates a generator with a caller-supplied random source.
    #[must_use]
    pub fn with_rng(library: Arc<TitleLibrary>, rng: R) -> Self {
        Self {
            library,
            policy: GenerationPolicy::default(),
            formatter: TitleFormatter::new(),
            rng,
        }
    }

    /// Replaces the generation policy.
    #[must_use]
    pub fn with_policy(mut self, policy: GenerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the title library.
    #[must_use]
    pub fn library(&self) -> &TitleLibrary {
        &self.library
    }

    /// Returns the generation policy.
    #[must_use]
    pub const fn policy(&self) -> &GenerationPolicy {
        &self.policy
    }

    /// Generates one title.
    ///
    /// # Errors
    ///
    /// Returns an error if `subjects` is empty or the library has no
    /// templates for the chosen number of subjects.
    pub fn generate(&mut self, subjects: &SubjectSet) -> Result<String> {
        if subjects.is_empty() {
            return Err(Error::insufficient_subjects(1, 0));
        }
        let roll = self.rng.gen_range(0.0..1.0);
        let arity = self.policy.pick_arity(subjects.len(), roll);
        let template = self.library.choose(arity, &mut self.rng)?;
        let picked = sample_subjects(subjects, arity, &mut self.rng)?;
        trace!(roll, arity, template = template.source(), "generating title");
        self.formatter.format(template, &picked)
    }

    /// Generates `count` titles.
    ///
    /// # Errors
    ///
    /// Returns the first error [`TitleGenerator::generate`] reports.
    pub fn generate_many(&mut self, subjects: &SubjectSet, count: usize) -> Result<Vec<String>> {
        (0..count).map(|_| self.generate(subjects)).collect()
    }
}
