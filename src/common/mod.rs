//! Common types and utilities shared across the deck and slide model.
//!
//! This module provides the unified error type and identifier helpers used
//! by both the presentation model and the image layer.

// Submodule declarations
pub mod error;
pub mod id;

// Re-exports for convenience
pub use error::{Error, Result};
pub use id::generate_id;
