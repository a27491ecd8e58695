//! # Common Primitive Tests
//!
//! Tests for the shared building blocks used by both CPU models.
