//! Data source tests.
//!
//! Tests reading the bundled word lists and title files.

use std::path::PathBuf;

use brainstorm_foundation::{ErrorKind, GrammaticalNumber};
use brainstorm_lexicon::source::{parse_word_records, read_title_file};
use brainstorm_lexicon::{DataPaths, Lexicon, NounClass, NounRecord, NounResolver};

fn resources() -> DataPaths {
    DataPaths::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources"))
}

// =============================================================================
// Bundled Data
// =============================================================================

#[test]
fn bundled_lexicon_loads_every_table() {
    let lex = Lexicon::load(&resources()).unwrap();
    for class in NounClass::ALL {
        assert!(!lex.table(class).is_empty(), "{class} table is empty");
    }
}

#[test]
fn bundled_lexicon_resolves_sample_subjects() {
    let lex = Lexicon::load(&resources()).unwrap();
    let resolver = NounResolver::new(&lex);

    let octopus = resolver.resolve("octopus");
    assert_eq!(octopus.plural(), "Octopi");
    assert_eq!(octopus.number(), GrammaticalNumber::Plural);

    let deer = resolver.resolve("deer");
    assert_eq!(deer.singular(), "Deer");
    assert_eq!(deer.plural(), "Deer");

    assert!(resolver.classify("abolitionism").is_none());
    assert_eq!(resolver.resolve_subjects("octopus, deer, abolitionism").len(), 3);
}

#[test]
fn bundled_title_files_have_templates() {
    let paths = resources();
    for arity in 1..=3 {
        let path = paths.titles(arity).unwrap();
        let lines = read_title_file(&path).unwrap();
        assert!(!lines.is_empty(), "{} has no titles", path.display());
        assert!(lines.iter().all(|l| !l.text.starts_with("//")));
    }
    assert!(paths.titles(0).is_none());
    assert!(paths.titles(4).is_none());
}

#[test]
fn sequel_title_has_a_real_newline() {
    let path = resources().titles(1).unwrap();
    let lines = read_title_file(&path).unwrap();
    assert!(lines.iter().any(|l| l.text == "{0}\nThe Sequel"));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_directory_is_a_data_source_error() {
    let err = Lexicon::load(&DataPaths::new("/nonexistent/brainstorm")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DataSource { .. }));
    assert!(err.describe().contains("loading usually plural nouns"));
}

// =============================================================================
// Word Records
// =============================================================================

#[test]
fn word_records_accept_pairs_and_singletons() {
    let input = "goose, geese\n\nscissors\n";
    let records = parse_word_records(input.as_bytes(), "inline").unwrap();
    assert_eq!(
        records,
        [NounRecord::pair("goose", "geese"), NounRecord::fixed("scissors")]
    );
}
