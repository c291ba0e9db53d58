//! Start-up validation of a title library.
//!
//! Every template is formatted once against subjects drawn from a sample
//! set. A library that passes can format any correctly sized subject list.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

use brainstorm_foundation::{Error, ErrorContext, GrammaticalEntity, Result};
use brainstorm_lexicon::SubjectSet;
use brainstorm_template::TitleFormatter;

use crate::generator::sample_subjects;
use crate::library::{MAX_ARITY, TitleLibrary};

/// Subjects the command-line front-end checks the library against.
pub const SAMPLE_SUBJECTS: &str = "octopus, deer, abolitionism";

/// Outcome of [`TitleLibrary::self_check`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelfCheckReport {
    /// Number of templates formatted, indexed by arity - 1.
    pub checked: [usize; MAX_ARITY],
}

impl SelfCheckReport {
    /// Returns the total number of templates formatted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.checked.iter().sum()
    }
}

impl TitleLibrary {
    /// Formats every template against subjects drawn from `subjects`.
    ///
    /// Subjects are drawn without replacement when the set is large enough
    /// for the template, and with replacement otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if `subjects` is empty or any template fails to
    /// format. The error context names the failing template.
    pub fn self_check<R: Rng + ?Sized>(
        &self,
        subjects: &SubjectSet,
        rng: &mut R,
    ) -> Result<SelfCheckReport> {
        if subjects.is_empty() {
            return Err(Error::insufficient_subjects(1, 0));
        }
        let formatter = TitleFormatter::new();
        let mut report = SelfCheckReport::default();

        for arity in 1..=MAX_ARITY {
            for template in self.group(arity) {
                let picked: Vec<&GrammaticalEntity> = if arity <= subjects.len() {
                    sample_subjects(subjects, arity, rng)?
                } else {
                    (0..arity)
                        .filter_map(|_| subjects.as_slice().choose(&mut *rng))
                        .collect()
                };
                formatter.format(template, &picked).map_err(|e| {
                    e.with_context(
                        ErrorContext::new()
                            .with_source("self-check")
                            .with_frame(format!("template {:?}", template.source())),
                    )
                })?;
                report.checked[arity - 1] += 1;
            }
            info!(arity, templates = report.checked[arity - 1], "check {arity} passed");
        }
        Ok(report)
    }
}
