//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: GrammaticalNumber, GrammaticalEntity, and Error.

mod entities;
mod errors;
