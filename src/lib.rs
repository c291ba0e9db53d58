//! Brainstorm - Grammar-aware project title generator
//!
//! This crate re-exports all layers of the Brainstorm system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: brainstorm_runtime    - CLI, interactive prompt, config, logging setup
//! Layer 3: brainstorm_engine     - Title library, generation policy, generator, self-check
//! Layer 2: brainstorm_template   - Template language, directives, formatter
//! Layer 1: brainstorm_lexicon    - Noun tables, resolution, data files
//! Layer 0: brainstorm_foundation - Core types (GrammaticalEntity, Error)
//! ```

pub use brainstorm_engine as engine;
pub use brainstorm_foundation as foundation;
pub use brainstorm_lexicon as lexicon;
pub use brainstorm_runtime as runtime;
pub use brainstorm_template as template;
