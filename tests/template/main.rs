//! Integration tests for Layer 2: Template
//!
//! Tests for the template language, directives, alignment, and the formatter.

mod properties;
