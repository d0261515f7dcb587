//! Unified error types for the syncslides library.
//!
//! Every fallible operation in the crate, from decoding a deck thumbnail to
//! generating a slide preview, reports failures through this single type.
use thiserror::Error;

/// Main error type for syncslides operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The entity carries no image bytes (absent or empty buffer)
    #[error("No image data")]
    NoImageData,

    /// The bytes are not in an image format the decoder understands
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The bytes look like an image but could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Re-encoding a bitmap failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// Requested output dimensions are unusable
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for syncslides operations.
pub type Result<T> = std::result::Result<T, Error>;
