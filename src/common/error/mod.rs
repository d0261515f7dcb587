//! Unified error types for the syncslides library.
//!
//! This module provides a single error type covering decode, encode and
//! I/O failures, presenting a consistent API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
