//! Grammar-aware title templates for Brainstorm.
//!
//! A template is a title pattern with positional placeholders:
//!
//! ```text
//! "Why {0:is/are} {0:a/an} {0:s} Like {1:p}?"
//! ```
//!
//! Each placeholder binds to one entity. The text after `:` is a format
//! spec whose suffix (the directive) chooses which word is substituted, and
//! whose remainder is an optional alignment spec applied to that word.
//!
//! | Directive  | Substitutes                          |
//! |------------|--------------------------------------|
//! | `is/are`   | `is` or `are` by the entity's number |
//! | `has/have` | `has` or `have`                      |
//! | `a/an`     | the article for the preferred form   |
//! | `…s`       | the singular form                    |
//! | `…p`       | the plural form                      |
//! | anything else | the preferred form                |
//!
//! # Modules
//!
//! - [`directive`] - Directive classification
//! - [`align`] - Fill, alignment, width and precision
//! - [`template`] - Template parsing and substitution
//! - [`formatter`] - Binding entities to templates

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod align;
pub mod directive;
pub mod formatter;
pub mod template;

pub use align::{Align, AlignSpec, MAX_WIDTH};
pub use directive::{DirectiveKind, classify_directive};
pub use formatter::TitleFormatter;
pub use template::{Field, Segment, Template};
