//! Directive classification.
//!
//! The directive is the suffix of a placeholder's format spec. Suffixes are
//! checked in a fixed order so a template author can put an alignment spec in
//! front of any of them (`{0:>8is/are}`).

use brainstorm_foundation::GrammaticalEntity;

/// The grammatical variant a placeholder asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `is/are`: verb agreement with "to be".
    IsAre,
    /// `has/have`: verb agreement with "to have".
    HasHave,
    /// `a/an`: indefinite article for the preferred form.
    AOrAn,
    /// `s`: the singular form.
    SingularForm,
    /// `p`: the plural form.
    PluralForm,
    /// No recognized suffix: the preferred form.
    Default,
}

/// Suffixes in dispatch order.
const SUFFIXES: [(&str, DirectiveKind); 5] = [
    ("is/are", DirectiveKind::IsAre),
    ("has/have", DirectiveKind::HasHave),
    ("a/an", DirectiveKind::AOrAn),
    ("s", DirectiveKind::SingularForm),
    ("p", DirectiveKind::PluralForm),
];

/// Splits a format spec into its directive and the remaining alignment spec.
///
/// An unrecognized spec yields [`DirectiveKind::Default`] with the whole
/// spec as remainder.
#[must_use]
pub fn classify_directive(spec: &str) -> (DirectiveKind, &str) {
    for (suffix, kind) in SUFFIXES {
        if let Some(rest) = spec.strip_suffix(suffix) {
            return (kind, rest);
        }
    }
    (DirectiveKind::Default, spec)
}

impl DirectiveKind {
    /// Returns the word this directive selects for `entity`.
    #[must_use]
    pub fn resolve(self, entity: &GrammaticalEntity) -> &str {
        let number = entity.number();
        match self {
            Self::IsAre => number.select("is", "are"),
            Self::HasHave => number.select("has", "have"),
            Self::AOrAn => {
                if entity.starts_with_vowel() {
                    "an"
                } else {
                    "a"
                }
            }
            Self::SingularForm => entity.singular(),
            Self::PluralForm => entity.plural(),
            Self::Default => entity.preferred_form(),
        }
    }
}
