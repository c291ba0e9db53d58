//! Title library, generation policy, and title generator for Brainstorm.
//!
//! # Architecture
//!
//! ```text
//! SubjectSet { Octopus, Deer, Abolitionism }
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ POLICY          │  → roll 0.13 → 2 subjects
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SAMPLING        │  → [Deer, Octopus] (no repeats)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LIBRARY         │  → "{0:p} Versus {1:p}"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ FORMATTER       │  → "Deer Versus Octopi"
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`library`] - Templates grouped by arity
//! - [`policy`] - Arity selection probabilities
//! - [`generator`] - Random title generation
//! - [`check`] - Start-up validation of a library against sample subjects

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod check;
pub mod generator;
pub mod library;
pub mod policy;

pub use check::{SAMPLE_SUBJECTS, SelfCheckReport};
pub use generator::{TitleGenerator, sample_subjects};
pub use library::{MAX_ARITY, TitleLibrary};
pub use policy::GenerationPolicy;
