//! # Unit Components
//!
//! Tests grouped by the crate module they exercise.

/// Constants, error messages and the register file.
pub mod common;
