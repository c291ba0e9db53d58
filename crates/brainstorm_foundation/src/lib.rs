//! Core grammatical types and errors for Brainstorm.
//!
//! This crate provides:
//! - [`GrammaticalNumber`] - Singular or plural
//! - [`GrammaticalEntity`] - A resolved noun with both forms and a preferred number
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;
pub mod number;

pub use entity::{GrammaticalEntity, capitalize};
pub use error::{Error, ErrorContext, ErrorKind};
pub use number::GrammaticalNumber;

/// Result type alias using Brainstorm's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
