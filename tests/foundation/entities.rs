//! Integration tests for grammatical entities
//!
//! Tests capitalization, preferred forms, and the vowel check.

use brainstorm_foundation::{GrammaticalEntity, GrammaticalNumber, capitalize};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn pair_entity_capitalizes_both_forms() {
    let e = GrammaticalEntity::new("goose", "geese", GrammaticalNumber::Plural);
    assert_eq!(e.singular(), "Goose");
    assert_eq!(e.plural(), "Geese");
    assert_eq!(e.number(), GrammaticalNumber::Plural);
}

#[test]
fn fixed_entity_uses_one_spelling() {
    let e = GrammaticalEntity::fixed("scissors", GrammaticalNumber::Plural);
    assert_eq!(e.singular(), e.plural());
    assert_eq!(e.singular(), "Scissors");
}

#[test]
fn empty_word_gives_empty_forms() {
    let e = GrammaticalEntity::fixed("", GrammaticalNumber::Singular);
    assert_eq!(e.singular(), "");
    assert!(!e.starts_with_vowel());
}

#[test]
fn capitalize_only_touches_first_character() {
    assert_eq!(capitalize("mcDonald"), "McDonald");
    assert_eq!(capitalize("42 robots"), "42 robots");
    assert_eq!(capitalize("ßtraße"), "SStraße");
}

// =============================================================================
// Preferred Form
// =============================================================================

#[test]
fn preferred_form_follows_number() {
    let singular = GrammaticalEntity::new("cake", "cakes", GrammaticalNumber::Singular);
    let plural = GrammaticalEntity::new("cake", "cakes", GrammaticalNumber::Plural);
    assert_eq!(singular.preferred_form(), "Cake");
    assert_eq!(plural.preferred_form(), "Cakes");
    assert_eq!(plural.to_string(), "Cakes");
}

#[test]
fn default_number_is_singular() {
    assert_eq!(GrammaticalNumber::default(), GrammaticalNumber::Singular);
    assert!(GrammaticalNumber::Singular.is_singular());
    assert_eq!(GrammaticalNumber::Plural.select("is", "are"), "are");
}

// =============================================================================
// Vowel Check
// =============================================================================

#[test]
fn vowel_check_uses_preferred_form() {
    // Singular "Ox" starts with a vowel, so does plural "Oxen".
    let ox = GrammaticalEntity::new("ox", "oxen", GrammaticalNumber::Plural);
    assert!(ox.starts_with_vowel());

    // "Mouse" does not, whichever form is preferred.
    let mouse = GrammaticalEntity::new("mouse", "mice", GrammaticalNumber::Singular);
    assert!(!mouse.starts_with_vowel());
}

#[test]
fn vowel_check_ignores_y_and_accents() {
    let yak = GrammaticalEntity::fixed("yak", GrammaticalNumber::Singular);
    let elan = GrammaticalEntity::fixed("élan", GrammaticalNumber::Singular);
    assert!(!yak.starts_with_vowel());
    assert!(!elan.starts_with_vowel());
}
