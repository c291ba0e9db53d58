//! Title library tests.
//!
//! Tests loading the bundled titles, grouping, and library self-checks.

use std::fs;
use std::path::PathBuf;

use brainstorm_engine::{MAX_ARITY, TitleLibrary};
use brainstorm_foundation::{ErrorKind, GrammaticalEntity, GrammaticalNumber};
use brainstorm_lexicon::{DataPaths, SubjectSet};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn resources() -> DataPaths {
    DataPaths::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources"))
}

/// Copies the bundled data set into a scratch directory and appends a line
/// to one title file.
fn scratch_with_extra_title(name: &str, arity: usize, extra: &str) -> DataPaths {
    let root = std::env::temp_dir().join(format!("brainstorm-{name}-{}", std::process::id()));
    let source = resources();
    for sub in ["titles", "words"] {
        fs::create_dir_all(root.join(sub)).unwrap();
        for entry in fs::read_dir(source.root().join(sub)).unwrap() {
            let entry = entry.unwrap();
            fs::copy(entry.path(), root.join(sub).join(entry.file_name())).unwrap();
        }
    }
    let paths = DataPaths::new(&root);
    let file = paths.titles(arity).unwrap();
    let mut text = fs::read_to_string(&file).unwrap();
    text.push_str(extra);
    text.push('\n');
    fs::write(&file, text).unwrap();
    paths
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn bundled_library_fills_every_group() {
    let library = TitleLibrary::load(&resources()).unwrap();
    for arity in 1..=MAX_ARITY {
        assert!(!library.group(arity).is_empty());
        assert!(library.group(arity).iter().all(|t| t.arity() == arity));
    }
    assert_eq!(library.templates().count(), library.len());
}

#[test]
fn misfiled_template_names_file_and_line() {
    let paths = scratch_with_extra_title("misfiled", 1, "{0} Meets {1}");
    let err = TitleLibrary::load(&paths).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::TemplateArity {
            expected: 1,
            actual: 2
        }
    ));
    let ctx = err.context.as_ref().unwrap();
    assert!(ctx.source.as_deref().unwrap().ends_with("one_topic_titles.txt"));
    assert!(ctx.line.is_some());
}

#[test]
fn broken_template_fails_load() {
    let paths = scratch_with_extra_title("broken", 2, "{0} and {1");
    let err = TitleLibrary::load(&paths).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TemplateSyntax { .. }));
}

// =============================================================================
// Self-Check
// =============================================================================

#[test]
fn bundled_library_passes_self_check() {
    let library = TitleLibrary::load(&resources()).unwrap();
    let subjects: SubjectSet = [
        GrammaticalEntity::new("octopus", "octopi", GrammaticalNumber::Plural),
        GrammaticalEntity::new("deer", "deer", GrammaticalNumber::Plural),
        GrammaticalEntity::fixed("abolitionism", GrammaticalNumber::Singular),
    ]
    .into_iter()
    .collect();
    let report = library
        .self_check(&subjects, &mut ChaCha8Rng::seed_from_u64(0))
        .unwrap();
    assert_eq!(report.total(), library.len());
    for arity in 1..=MAX_ARITY {
        assert_eq!(report.checked[arity - 1], library.group(arity).len());
    }
}
