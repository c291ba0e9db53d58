//! Integration tests for Layer 3: Engine
//!
//! Tests for the title library, generation policy, and generator.

mod generation;
mod library;
