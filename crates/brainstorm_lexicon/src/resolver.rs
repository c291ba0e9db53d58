//! Noun resolution.
//!
//! Turns user-supplied words into [`GrammaticalEntity`] values.

use std::ops::Index;

use brainstorm_foundation::{GrammaticalEntity, GrammaticalNumber};
use tracing::trace;

use crate::lexicon::Lexicon;
use crate::record::{NounClass, NounRecord};

/// Resolves words against a [`Lexicon`].
///
/// Resolution is total: a word found in no table becomes a singular entity
/// spelled the same in both numbers.
#[derive(Clone, Copy, Debug)]
pub struct NounResolver<'lex> {
    lexicon: &'lex Lexicon,
}

impl<'lex> NounResolver<'lex> {
    /// Creates a resolver over the given lexicon.
    #[must_use]
    pub const fn new(lexicon: &'lex Lexicon) -> Self {
        Self { lexicon }
    }

    /// Returns the class and record `word` resolves through, if any.
    #[must_use]
    pub fn classify(&self, word: &str) -> Option<(NounClass, &'lex NounRecord)> {
        self.lexicon.lookup(word)
    }

    /// Resolves a single word. Matching is exact and case-sensitive.
    #[must_use]
    pub fn resolve(&self, word: &str) -> GrammaticalEntity {
        match self.classify(word) {
            Some((class, NounRecord::Pair { singular, plural })) => {
                trace!(word, %class, "resolved pair");
                GrammaticalEntity::new(singular, plural, class.number())
            }
            Some((class, NounRecord::Fixed(_))) => {
                trace!(word, %class, "resolved fixed form");
                GrammaticalEntity::fixed(word, class.number())
            }
            None => {
                trace!(word, "no match, defaulting to singular");
                GrammaticalEntity::fixed(word, GrammaticalNumber::Singular)
            }
        }
    }

    /// Parses a comma-separated subject list into a [`SubjectSet`].
    ///
    /// Items are trimmed, empty items are skipped, and duplicate entities are
    /// collapsed. `"octopus, octopi"` is one subject.
    #[must_use]
    pub fn resolve_subjects(&self, text: &str) -> SubjectSet {
        text.split(',')
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(|word| self.resolve(word))
            .collect()
    }
}

/// An ordered set of distinct subjects.
///
/// Insertion order is kept so that seeded generation is reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubjectSet {
    entities: Vec<GrammaticalEntity>,
}

impl SubjectSet {
    /// Creates an empty subject set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entity unless an equal one is already present.
    ///
    /// Returns true if the entity was added.
    pub fn insert(&mut self, entity: GrammaticalEntity) -> bool {
        if self.entities.contains(&entity) {
            false
        } else {
            self.entities.push(entity);
            true
        }
    }

    /// Returns the number of subjects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if there are no subjects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns the subject at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GrammaticalEntity> {
        self.entities.get(index)
    }

    /// Returns the subjects as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[GrammaticalEntity] {
        &self.entities
    }

    /// Iterates over the subjects in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, GrammaticalEntity> {
        self.entities.iter()
    }
}

impl Index<usize> for SubjectSet {
    type Output = GrammaticalEntity;

    fn index(&self, index: usize) -> &GrammaticalEntity {
        &self.entities[index]
    }
}

impl FromIterator<GrammaticalEntity> for SubjectSet {
    fn from_iter<I: IntoIterator<Item = GrammaticalEntity>>(iter: I) -> Self {
        let mut set = Self::new();
        for entity in iter {
            set.insert(entity);
        }
        set
    }
}

impl Extend<GrammaticalEntity> for SubjectSet {
    fn extend<I: IntoIterator<Item = GrammaticalEntity>>(&mut self, iter: I) {
        for entity in iter {
            self.insert(entity);
        }
    }
}

impl<'a> IntoIterator for &'a SubjectSet {
    type Item = &'a GrammaticalEntity;
    type IntoIter = std::slice::Iter<'a, GrammaticalEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
