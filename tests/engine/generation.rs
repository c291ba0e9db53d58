//! Title generation tests.
//!
//! Tests arity selection, sampling, reproducibility, and failure modes.

use std::collections::HashSet;
use std::sync::Arc;

use brainstorm_engine::{GenerationPolicy, TitleGenerator, TitleLibrary, sample_subjects};
use brainstorm_foundation::{ErrorKind, GrammaticalEntity, GrammaticalNumber};
use brainstorm_lexicon::SubjectSet;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn subjects(words: &[&str]) -> SubjectSet {
    words
        .iter()
        .map(|w| GrammaticalEntity::fixed(w, GrammaticalNumber::Singular))
        .collect()
}

fn tagged_library() -> Arc<TitleLibrary> {
    Arc::new(
        TitleLibrary::from_strs(&["one:{0}"], &["two:{0}+{1}"], &["three:{0}+{1}+{2}"]).unwrap(),
    )
}

// =============================================================================
// Sampling
// =============================================================================

#[test]
fn sampling_is_without_replacement() {
    let set = subjects(&["a", "b", "c", "d"]);
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for count in 0..=4 {
        let picked = sample_subjects(&set, count, &mut rng).unwrap();
        let distinct: HashSet<&str> = picked.iter().map(|e| e.singular()).collect();
        assert_eq!(distinct.len(), count);
    }
}

#[test]
fn sampling_reaches_every_subject() {
    let set = subjects(&["a", "b", "c"]);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut seen = HashSet::new();
    for _ in 0..200 {
        seen.insert(sample_subjects(&set, 1, &mut rng).unwrap()[0].singular().to_string());
    }
    assert_eq!(seen.len(), 3);
}

// =============================================================================
// Arity Distribution
// =============================================================================

#[test]
fn default_policy_mostly_uses_one_subject() {
    let set = subjects(&["a", "b", "c"]);
    let mut generator = TitleGenerator::seeded(tagged_library(), 2024);
    let titles = generator.generate_many(&set, 2000).unwrap();
    let count = |tag: &str| titles.iter().filter(|t| t.starts_with(tag)).count();
    let (one, two, three) = (count("one:"), count("two:"), count("three:"));
    assert_eq!(one + two + three, 2000);
    // Expected 1600 / 320 / 80.
    assert!((1450..=1750).contains(&one), "one = {one}");
    assert!((220..=420).contains(&two), "two = {two}");
    assert!((30..=140).contains(&three), "three = {three}");
}

#[test]
fn two_subjects_never_pick_three() {
    let set = subjects(&["a", "b"]);
    let policy = GenerationPolicy::new(1.0, 0.0).unwrap();
    let mut generator = TitleGenerator::seeded(tagged_library(), 5).with_policy(policy);
    for title in generator.generate_many(&set, 50).unwrap() {
        assert!(title.starts_with("two:"), "{title}");
    }
}

#[test]
fn multi_subject_titles_use_distinct_subjects() {
    let set = subjects(&["a", "b", "c"]);
    let policy = GenerationPolicy::new(1.0, 0.0).unwrap();
    let mut generator = TitleGenerator::seeded(tagged_library(), 8).with_policy(policy);
    for title in generator.generate_many(&set, 50).unwrap() {
        let parts: HashSet<&str> = title["three:".len()..].split('+').collect();
        assert_eq!(parts.len(), 3, "{title}");
    }
}

// =============================================================================
// Reproducibility and Failures
// =============================================================================

#[test]
fn different_seeds_diverge() {
    let set = subjects(&["a", "b", "c", "d", "e"]);
    let a = TitleGenerator::seeded(tagged_library(), 1)
        .generate_many(&set, 30)
        .unwrap();
    let b = TitleGenerator::seeded(tagged_library(), 2)
        .generate_many(&set, 30)
        .unwrap();
    assert_ne!(a, b);
}

#[test]
fn with_rng_matches_seeded() {
    let set = subjects(&["a", "b", "c"]);
    let a = TitleGenerator::seeded(tagged_library(), 77)
        .generate_many(&set, 10)
        .unwrap();
    let b = TitleGenerator::with_rng(tagged_library(), ChaCha8Rng::seed_from_u64(77))
        .generate_many(&set, 10)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_group_is_reported() {
    let library = Arc::new(TitleLibrary::from_strs(&["{0}"], &[], &[]).unwrap());
    let policy = GenerationPolicy::new(0.0, 1.0).unwrap();
    let mut generator = TitleGenerator::seeded(library, 3).with_policy(policy);
    let err = generator.generate(&subjects(&["a", "b"])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyTitleGroup { arity: 2 }));
}

#[test]
fn empty_subject_set_is_insufficient() {
    let mut generator = TitleGenerator::seeded(tagged_library(), 3);
    let err = generator.generate_many(&SubjectSet::new(), 1).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::InsufficientSubjects {
            required: 1,
            available: 0
        }
    ));
}

#[test]
fn zero_titles_is_empty() {
    let mut generator = TitleGenerator::seeded(tagged_library(), 3);
    assert!(
        generator
            .generate_many(&SubjectSet::new(), 0)
            .unwrap()
            .is_empty()
    );
}
