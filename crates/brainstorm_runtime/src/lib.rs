//! Interactive prompt, CLI, and configuration for Brainstorm.
//!
//! This crate provides:
//! - [`RuntimeConfig`] - Settings from defaults, environment, and arguments
//! - [`Session`] - Loaded data set plus a title generator
//! - [`Repl`] - The interactive subject/count prompt
//! - [`logging`] - Subscriber setup for `tracing` output

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod logging;
pub mod repl;
pub mod session;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use repl::Repl;
pub use session::Session;
