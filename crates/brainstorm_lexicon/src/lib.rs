//! Noun tables and noun resolution for Brainstorm.
//!
//! This crate turns a raw word such as `"octopus"` into a
//! [`GrammaticalEntity`](brainstorm_foundation::GrammaticalEntity) by looking
//! it up in six ordered noun tables.
//!
//! # Lookup order
//!
//! ```text
//! "deer"
//!    │
//!    ▼
//! ┌──────────────────────────┐
//! │ usually-plural pairs     │  noun.csv                           → Plural
//! ├──────────────────────────┤
//! │ usually-singular pairs   │  noun_usually_uncountable.csv,
//! │                          │  noun_countable_and_uncountable.csv → Singular
//! ├──────────────────────────┤
//! │ always-plural forms      │  noun_pluralia_tantum.csv           → Plural
//! ├──────────────────────────┤
//! │ always-singular forms    │  noun_uncountable.csv,
//! │                          │  noun_non_attested.csv              → Singular
//! ├──────────────────────────┤
//! │ fallback                 │  the word itself                    → Singular
//! └──────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`record`] - Noun records and the classes they are filed under
//! - [`lexicon`] - The immutable table set and its builder
//! - [`resolver`] - Word → entity resolution and subject-list parsing
//! - [`source`] - Readers for the on-disk title and word lists

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexicon;
pub mod record;
pub mod resolver;
pub mod source;

pub use lexicon::{Lexicon, LexiconBuilder};
pub use record::{NounClass, NounRecord};
pub use resolver::{NounResolver, SubjectSet};
pub use source::{DataPaths, TitleLine};
