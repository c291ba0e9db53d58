//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use brainstorm_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_template_arity() {
    let err = Error::template_arity(2, 1);
    assert!(matches!(
        err.kind,
        ErrorKind::TemplateArity {
            expected: 2,
            actual: 1
        }
    ));
    let msg = format!("{err}");
    assert!(msg.contains('2'));
    assert!(msg.contains('1'));
}

#[test]
fn error_insufficient_subjects() {
    let err = Error::insufficient_subjects(1, 0);
    assert!(matches!(err.kind, ErrorKind::InsufficientSubjects { .. }));
    assert!(format!("{err}").contains("insufficient subjects"));
}

#[test]
fn error_template_syntax() {
    let err = Error::template_syntax("{0", 0, "unclosed placeholder");
    let msg = format!("{err}");
    assert!(msg.contains("unclosed placeholder"));
    assert!(msg.contains("\"{0\""));
}

#[test]
fn error_data_source() {
    let err = Error::data_source("resources/words/noun.csv", "file not found");
    assert!(matches!(err.kind, ErrorKind::DataSource { .. }));
    assert!(format!("{err}").contains("noun.csv"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_not_part_of_display() {
    let err = Error::template_arity(1, 2)
        .with_context(ErrorContext::new().with_source("one_topic_titles.txt").with_line(7));
    assert!(!format!("{err}").contains("one_topic_titles.txt"));
}

#[test]
fn describe_includes_context() {
    let err = Error::template_arity(1, 2).with_context(
        ErrorContext::new()
            .with_source("one_topic_titles.txt")
            .with_line(7)
            .with_frame("template \"{0} and {1}\""),
    );
    let text = err.describe();
    assert!(text.contains("at one_topic_titles.txt:7"));
    assert!(text.contains("  in template"));
}

#[test]
fn describe_without_context_is_display() {
    let err = Error::new(ErrorKind::EmptyTitleGroup { arity: 3 });
    assert_eq!(err.describe(), err.to_string());
}
