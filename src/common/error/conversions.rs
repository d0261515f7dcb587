//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert errors raised
//! by the image codec into the unified Error type.

#[cfg(feature = "imgconv")]
use super::types::Error;

#[cfg(feature = "imgconv")]
impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            image::ImageError::Unsupported(e) => Error::UnsupportedFormat(e.to_string()),
            image::ImageError::Decoding(e) => Error::Decode(e.to_string()),
            image::ImageError::Encoding(e) => Error::Encode(e.to_string()),
            image::ImageError::Limits(e) => Error::Decode(e.to_string()),
            image::ImageError::Parameter(e) => Error::Other(e.to_string()),
        }
    }
}
