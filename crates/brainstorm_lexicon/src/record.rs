//! Noun records and noun classes.

use std::fmt;

use brainstorm_foundation::{GrammaticalEntity, GrammaticalNumber};

/// One line of a word list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NounRecord {
    /// A noun with distinct singular and plural spellings.
    Pair {
        /// Singular spelling, as written in the source.
        singular: String,
        /// Plural spelling, as written in the source.
        plural: String,
    },
    /// A noun with a single spelling used for both numbers.
    Fixed(String),
}

impl NounRecord {
    /// Creates a pair record.
    #[must_use]
    pub fn pair(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self::Pair {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Creates a fixed-form record.
    #[must_use]
    pub fn fixed(form: impl Into<String>) -> Self {
        Self::Fixed(form.into())
    }

    /// Returns the singular spelling.
    #[must_use]
    pub fn singular(&self) -> &str {
        match self {
            Self::Pair { singular, .. } => singular,
            Self::Fixed(form) => form,
        }
    }

    /// Returns the plural spelling.
    #[must_use]
    pub fn plural(&self) -> &str {
        match self {
            Self::Pair { plural, .. } => plural,
            Self::Fixed(form) => form,
        }
    }

    /// Returns the spellings this record answers to (one or two).
    pub fn spellings(&self) -> impl Iterator<Item = &str> {
        let second = match self {
            Self::Pair { plural, .. } => Some(plural.as_str()),
            Self::Fixed(_) => None,
        };
        std::iter::once(self.singular()).chain(second)
    }

    /// Returns true if `word` is exactly one of this record's spellings.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        self.spellings().any(|s| s == word)
    }

    /// Builds the entity for this record with the given number.
    #[must_use]
    pub fn to_entity(&self, number: GrammaticalNumber) -> GrammaticalEntity {
        GrammaticalEntity::new(self.singular(), self.plural(), number)
    }
}

impl fmt::Display for NounRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pair { singular, plural } => write!(f, "{singular},{plural}"),
            Self::Fixed(form) => f.write_str(form),
        }
    }
}

/// The word list a record was filed under.
///
/// Declaration order is lookup priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NounClass {
    /// Countable nouns, normally used in the plural.
    UsuallyPlural,
    /// Nouns that are usually uncountable but have a plural.
    UsuallyUncountable,
    /// Nouns used both countably and uncountably.
    CountableAndUncountable,
    /// Nouns that only exist in the plural ("scissors").
    PluraliaTantum,
    /// Nouns that are never counted ("abolitionism").
    Uncountable,
    /// Nouns with no attested plural.
    NonAttested,
}

impl NounClass {
    /// All classes in lookup priority order.
    pub const ALL: [Self; 6] = [
        Self::UsuallyPlural,
        Self::UsuallyUncountable,
        Self::CountableAndUncountable,
        Self::PluraliaTantum,
        Self::Uncountable,
        Self::NonAttested,
    ];

    /// Returns the number given to entities resolved from this class.
    #[must_use]
    pub const fn number(self) -> GrammaticalNumber {
        match self {
            Self::UsuallyPlural | Self::PluraliaTantum => GrammaticalNumber::Plural,
            Self::UsuallyUncountable
            | Self::CountableAndUncountable
            | Self::Uncountable
            | Self::NonAttested => GrammaticalNumber::Singular,
        }
    }

    /// Returns true for classes whose lines carry a singular/plural pair.
    #[must_use]
    pub const fn is_paired(self) -> bool {
        matches!(
            self,
            Self::UsuallyPlural | Self::UsuallyUncountable | Self::CountableAndUncountable
        )
    }

    /// Returns the word-list file name for this class.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::UsuallyPlural => "noun.csv",
            Self::UsuallyUncountable => "noun_usually_uncountable.csv",
            Self::CountableAndUncountable => "noun_countable_and_uncountable.csv",
            Self::PluraliaTantum => "noun_pluralia_tantum.csv",
            Self::Uncountable => "noun_uncountable.csv",
            Self::NonAttested => "noun_non_attested.csv",
        }
    }

    /// Returns the index of this class in [`NounClass::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NounClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UsuallyPlural => "usually plural",
            Self::UsuallyUncountable => "usually uncountable",
            Self::CountableAndUncountable => "countable and uncountable",
            Self::PluraliaTantum => "plurale tantum",
            Self::Uncountable => "uncountable",
            Self::NonAttested => "non-attested plural",
        };
        f.write_str(name)
    }
}
