//! Session state for the front-end.
//!
//! A session owns the loaded data set and a title generator. Both the
//! interactive prompt and the non-interactive mode go through it.

use std::sync::Arc;

use brainstorm_engine::{SAMPLE_SUBJECTS, SelfCheckReport, TitleGenerator, TitleLibrary};
use brainstorm_foundation::Result;
use brainstorm_lexicon::{Lexicon, NounClass, NounResolver, SubjectSet};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::RuntimeConfig;

/// Loaded nouns and titles plus the generator drawing from them.
pub struct Session {
    lexicon: Lexicon,
    library: Arc<TitleLibrary>,
    generator: TitleGenerator,
    seed: Option<u64>,
}

impl Session {
    /// Creates a session over an already loaded data set.
    ///
    /// With a seed, every run over the same data prints the same titles.
    #[must_use]
    pub fn new(lexicon: Lexicon, library: TitleLibrary, seed: Option<u64>) -> Self {
        let library = Arc::new(library);
        let generator = match seed {
            Some(seed) => TitleGenerator::seeded(Arc::clone(&library), seed),
            None => TitleGenerator::from_entropy(Arc::clone(&library)),
        };
        Self {
            lexicon,
            library,
            generator,
            seed,
        }
    }

    /// Loads the data set named by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a word list or title file is missing or malformed.
    pub fn load(config: &RuntimeConfig) -> Result<Self> {
        let paths = config.data_paths();
        let lexicon = Lexicon::load(&paths)?;
        let library = TitleLibrary::load(&paths)?;
        info!(
            nouns = lexicon.len(),
            titles = library.len(),
            "data set loaded from {}",
            paths.root().display()
        );
        Ok(Self::new(lexicon, library, config.seed))
    }

    /// Returns the noun tables.
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Returns the title library.
    #[must_use]
    pub fn library(&self) -> &TitleLibrary {
        &self.library
    }

    /// Returns a resolver over this session's nouns.
    #[must_use]
    pub const fn resolver(&self) -> NounResolver<'_> {
        NounResolver::new(&self.lexicon)
    }

    /// Parses a comma-separated subject list.
    #[must_use]
    pub fn resolve_subjects(&self, text: &str) -> SubjectSet {
        self.resolver().resolve_subjects(text)
    }

    /// Describes how each item of a subject list resolves, one line per item.
    #[must_use]
    pub fn explain(&self, text: &str) -> Vec<String> {
        let resolver = self.resolver();
        text.split(',')
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(|word| {
                let entity = resolver.resolve(word);
                let forms = format!(
                    "{} / {}, {}",
                    entity.singular(),
                    entity.plural(),
                    entity.number()
                );
                match resolver.classify(word) {
                    Some((class, _)) => {
                        format!("{word}: {class} ({}) -> {forms}", class.file_name())
                    }
                    None => format!("{word}: not listed -> {forms}"),
                }
            })
            .collect()
    }

    /// Returns every spelling in the noun tables, for tab completion.
    #[must_use]
    pub fn words(&self) -> Vec<String> {
        NounClass::ALL
            .iter()
            .flat_map(|&class| self.lexicon.table(class))
            .flat_map(|record| record.spellings().map(str::to_string))
            .collect()
    }

    /// Generates `count` titles for `subjects`.
    ///
    /// # Errors
    ///
    /// Returns an error if `subjects` is empty or the library cannot serve
    /// the chosen number of subjects.
    pub fn generate(&mut self, subjects: &SubjectSet, count: usize) -> Result<Vec<String>> {
        debug!(subjects = subjects.len(), count, "generating");
        self.generator.generate_many(subjects, count)
    }

    /// Formats every template once against the built-in sample subjects.
    ///
    /// # Errors
    ///
    /// Returns the first formatting failure, naming the template.
    pub fn self_check(&self) -> Result<SelfCheckReport> {
        let subjects = self.resolve_subjects(SAMPLE_SUBJECTS);
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        self.library.self_check(&subjects, &mut rng)
    }
}
