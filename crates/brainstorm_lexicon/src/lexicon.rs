//! The immutable noun table set.
//!
//! A [`Lexicon`] holds one table per [`NounClass`]. It is built once, either
//! from the word lists on disk (see [`crate::source`]) or through a
//! [`LexiconBuilder`], and is read-only afterwards.

use std::collections::HashMap;

use crate::record::{NounClass, NounRecord};

/// Immutable collection of noun tables with a spelling index.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    /// One table per class, indexed by [`NounClass::index`].
    tables: [Vec<NounRecord>; 6],
    /// Spelling -> first (class, record index) that answers to it.
    index: HashMap<String, (NounClass, usize)>,
}

impl Lexicon {
    /// Creates a lexicon with no nouns. Every word resolves to the fallback.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a builder for a new lexicon.
    #[must_use]
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::new()
    }

    /// Returns the records filed under `class`, in source order.
    #[must_use]
    pub fn table(&self, class: NounClass) -> &[NounRecord] {
        &self.tables[class.index()]
    }

    /// Returns the total number of records across all tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.iter().map(Vec::len).sum()
    }

    /// Returns true if every table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(Vec::is_empty)
    }

    /// Finds the highest-priority record answering to `word`.
    ///
    /// Equivalent to scanning the tables in [`NounClass::ALL`] order and each
    /// table in source order, stopping at the first exact match.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<(NounClass, &NounRecord)> {
        let &(class, i) = self.index.get(word)?;
        Some((class, &self.tables[class.index()][i]))
    }

    fn from_tables(tables: [Vec<NounRecord>; 6]) -> Self {
        let mut index = HashMap::new();
        for class in NounClass::ALL {
            for (i, record) in tables[class.index()].iter().enumerate() {
                for spelling in record.spellings().filter(|s| !s.is_empty()) {
                    index
                        .entry(spelling.to_string())
                        .or_insert((class, i));
                }
            }
        }
        Self { tables, index }
    }
}

/// Builder for [`Lexicon`].
#[derive(Clone, Debug, Default)]
pub struct LexiconBuilder {
    tables: [Vec<NounRecord>; 6],
}

impl LexiconBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record to the table for `class`.
    pub fn push(&mut self, class: NounClass, record: NounRecord) -> &mut Self {
        self.tables[class.index()].push(record);
        self
    }

    /// Appends records to the table for `class`, keeping their order.
    pub fn extend(
        &mut self,
        class: NounClass,
        records: impl IntoIterator<Item = NounRecord>,
    ) -> &mut Self {
        self.tables[class.index()].extend(records);
        self
    }

    /// Appends a pair record.
    #[must_use]
    pub fn with_pair(mut self, class: NounClass, singular: &str, plural: &str) -> Self {
        self.push(class, NounRecord::pair(singular, plural));
        self
    }

    /// Appends a fixed-form record.
    #[must_use]
    pub fn with_fixed(mut self, class: NounClass, form: &str) -> Self {
        self.push(class, NounRecord::fixed(form));
        self
    }

    /// Freezes the tables into a [`Lexicon`].
    #[must_use]
    pub fn build(self) -> Lexicon {
        Lexicon::from_tables(self.tables)
    }
}
