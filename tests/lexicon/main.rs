//! Integration tests for Layer 1: Lexicon
//!
//! Tests for noun tables, resolution priority, and the on-disk word lists.

mod sources;
