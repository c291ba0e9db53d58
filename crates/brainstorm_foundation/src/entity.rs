//! Resolved nouns.
//!
//! A [`GrammaticalEntity`] is what a template placeholder binds to: both
//! spellings of a noun plus the number it is normally used in.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::number::GrammaticalNumber;

/// A noun with its singular and plural forms and a preferred number.
///
/// Both forms are capitalized on construction (first character uppercased,
/// the rest untouched). Entities are immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrammaticalEntity {
    singular: String,
    plural: String,
    number: GrammaticalNumber,
}

impl GrammaticalEntity {
    /// Creates an entity from a singular/plural pair.
    #[must_use]
    pub fn new(singular: &str, plural: &str, number: GrammaticalNumber) -> Self {
        Self {
            singular: capitalize(singular),
            plural: capitalize(plural),
            number,
        }
    }

    /// Creates an entity whose singular and plural forms are the same word.
    #[must_use]
    pub fn fixed(form: &str, number: GrammaticalNumber) -> Self {
        Self::new(form, form, number)
    }

    /// Returns the capitalized singular form.
    #[must_use]
    pub fn singular(&self) -> &str {
        &self.singular
    }

    /// Returns the capitalized plural form.
    #[must_use]
    pub fn plural(&self) -> &str {
        &self.plural
    }

    /// Returns the preferred grammatical number.
    #[must_use]
    pub const fn number(&self) -> GrammaticalNumber {
        self.number
    }

    /// Returns the form matching the preferred number.
    #[must_use]
    pub fn preferred_form(&self) -> &str {
        match self.number {
            GrammaticalNumber::Singular => &self.singular,
            GrammaticalNumber::Plural => &self.plural,
        }
    }

    /// Returns true if the preferred form starts with a vowel letter.
    ///
    /// Only `a`, `e`, `i`, `o` and `u` count, in either case.
    #[must_use]
    pub fn starts_with_vowel(&self) -> bool {
        self.preferred_form()
            .chars()
            .next()
            .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
    }
}

impl fmt::Display for GrammaticalEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.preferred_form())
    }
}

/// Uppercases the first character of `word`, leaving the rest unchanged.
///
/// Empty input yields an empty string.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
