//! # CPU Core Tests
//!
//! Unit tests for both CPU models and their architectural equivalence.



/// Differential tests running the same programs on both models.
pub mod differential;
