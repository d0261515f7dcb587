// Image decoding and thumbnail module
//
// This module is the boundary between the raw encoded bytes that decks and
// slides own and the bitmaps that rendering code displays.
//
// # Architecture
//
// - `bitmap`: `Bitmap`, an owned decoded image with resize/encode helpers
// - `thumbnail`: preview generation from full images
// - `options`: `ThumbnailOptions` configuration
//
// Absent or empty buffers never reach the decoder; they are reported as
// `Error::NoImageData`.

pub mod bitmap;
pub mod options;
pub mod thumbnail;

use crate::common::error::{Error, Result};
pub use bitmap::Bitmap;
pub use image::ImageFormat;
pub use options::ThumbnailOptions;
pub use thumbnail::{fit_within, make_thumbnail};

/// Detect the encoding of image bytes from their signature.
///
/// Returns `None` for empty input or unknown signatures.
pub fn detect_format(data: &[u8]) -> Option<ImageFormat> {
    if data.is_empty() {
        return None;
    }
    image::guess_format(data).ok()
}

/// Decode encoded image bytes into a [`Bitmap`].
///
/// # Arguments
/// * `data` - Encoded image bytes (PNG, JPEG, GIF, WebP, ...)
///
/// # Returns
/// A newly allocated bitmap. Repeated calls on the same bytes produce
/// independent bitmaps.
///
/// # Errors
/// * `Error::NoImageData` if `data` is empty
/// * `Error::UnsupportedFormat` if the signature is not recognized
/// * `Error::Decode` if the data is malformed
///
/// # Example
/// ```no_run
/// use syncslides::images::decode;
///
/// let data = std::fs::read("thumb.png")?;
/// let bitmap = decode(&data)?;
/// println!("{}x{}", bitmap.width(), bitmap.height());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn decode(data: &[u8]) -> Result<Bitmap> {
    if data.is_empty() {
        log::debug!("refusing to decode empty image buffer");
        return Err(Error::NoImageData);
    }

    let format = image::guess_format(data)?;
    log::trace!("decoding {} bytes as {:?}", data.len(), format);

    let img = image::load_from_memory_with_format(data, format)?;
    log::debug!(
        "decoded {:?} image {}x{}",
        format,
        img.width(),
        img.height()
    );
    Ok(Bitmap::new(img, Some(format)))
}

/// Decode an optional buffer, treating `None` like an empty buffer.
pub fn decode_optional(data: Option<&[u8]>) -> Result<Bitmap> {
    match data {
        Some(data) => decode(data),
        None => {
            log::debug!("refusing to decode absent image buffer");
            Err(Error::NoImageData)
        },
    }
}

/// Read and decode an image file.
///
/// # Example
/// ```no_run
/// use syncslides::images::decode_file;
///
/// let bitmap = decode_file("deck_thumb.jpg")?;
/// # Ok::<(), syncslides::common::Error>(())
/// ```
pub fn decode_file<P: AsRef<std::path::Path>>(path: P) -> Result<Bitmap> {
    let data = std::fs::read(path)?;
    decode(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};
    use std::io::Write;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut buf = std::io::Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_valid_png() {
        let bmp = decode(&png(5, 3)).unwrap();
        assert_eq!(bmp.dimensions(), (5, 3));
        assert!(bmp.width() > 0 && bmp.height() > 0);
        assert_eq!(bmp.source_format(), Some(ImageFormat::Png));
    }

    #[test]
    fn test_decode_empty() {
        assert!(matches!(decode(&[]), Err(Error::NoImageData)));
    }

    #[test]
    fn test_decode_optional_absent() {
        assert!(matches!(decode_optional(None), Err(Error::NoImageData)));
        assert!(matches!(decode_optional(Some(&[])), Err(Error::NoImageData)));
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode(b"not an image at all").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_decode_truncated_png() {
        let mut data = png(16, 16);
        data.truncate(40);
        assert!(decode(&data).is_err());
    }

    #[test]
    fn test_decode_returns_independent_bitmaps() {
        let data = png(2, 2);
        let mut first = decode(&data).unwrap();
        let second = decode(&data).unwrap();

        if let DynamicImage::ImageRgba8(buf) = first.as_image_mut() {
            buf.put_pixel(0, 0, Rgba([0, 0, 255, 255]));
        } else {
            panic!("expected rgba8");
        }

        assert_eq!(first.to_rgba8().get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
        assert_eq!(second.to_rgba8().get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format(&png(1, 1)), Some(ImageFormat::Png));
        assert_eq!(detect_format(&[]), None);
        assert_eq!(detect_format(b"plain text"), None);
    }

    #[test]
    fn test_decode_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&png(7, 9)).unwrap();
        let bmp = decode_file(file.path()).unwrap();
        assert_eq!(bmp.dimensions(), (7, 9));
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_file(dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
