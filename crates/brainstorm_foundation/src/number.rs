//! Grammatical number.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grammatical number of a noun.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GrammaticalNumber {
    /// One of something ("an octopus", "the deer is").
    #[default]
    Singular,
    /// More than one ("octopi", "the scissors are").
    Plural,
}

impl GrammaticalNumber {
    /// Returns true for [`GrammaticalNumber::Singular`].
    #[must_use]
    pub const fn is_singular(self) -> bool {
        matches!(self, Self::Singular)
    }

    /// Picks the first option for singular, the second for plural.
    ///
    /// Used for verb agreement: `number.select("is", "are")`.
    #[must_use]
    pub const fn select<'a>(self, singular: &'a str, plural: &'a str) -> &'a str {
        match self {
            Self::Singular => singular,
            Self::Plural => plural,
        }
    }
}

impl fmt::Display for GrammaticalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Singular => write!(f, "singular"),
            Self::Plural => write!(f, "plural"),
        }
    }
}
