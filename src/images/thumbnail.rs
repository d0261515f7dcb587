// Thumbnail generation
//
// Derives a small preview from a full slide or deck image: decode, scale
// down to fit the configured box, re-encode.

use super::options::ThumbnailOptions;
use crate::common::error::{Error, Result};

/// Compute the size of a `width` x `height` image scaled to fit inside
/// `max_width` x `max_height`, preserving aspect ratio.
///
/// Images already inside the box are left at their size; nothing is ever
/// upscaled. Neither output dimension drops below 1.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale = f64::min(
        max_width as f64 / width as f64,
        max_height as f64 / height as f64,
    );
    let w = ((width as f64 * scale).round() as u32).clamp(1, max_width);
    let h = ((height as f64 * scale).round() as u32).clamp(1, max_height);
    (w, h)
}

/// Produce encoded thumbnail bytes from encoded image bytes.
///
/// # Arguments
/// * `data` - Encoded source image
/// * `options` - Bounding box, output format and filter
///
/// # Returns
/// Thumbnail bytes in `options.format`
///
/// # Example
/// ```no_run
/// use syncslides::images::{make_thumbnail, ThumbnailOptions};
///
/// let slide = std::fs::read("slide.png")?;
/// let thumb = make_thumbnail(&slide, &ThumbnailOptions::new().with_max_size(160, 120))?;
/// std::fs::write("slide_thumb.png", thumb)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn make_thumbnail(data: &[u8], options: &ThumbnailOptions) -> Result<Vec<u8>> {
    if options.max_width == 0 || options.max_height == 0 {
        return Err(Error::InvalidDimensions {
            width: options.max_width,
            height: options.max_height,
        });
    }

    let bitmap = super::decode(data)?;
    let (w, h) = fit_within(
        bitmap.width(),
        bitmap.height(),
        options.max_width,
        options.max_height,
    );
    log::debug!(
        "thumbnail {}x{} -> {}x{} ({:?})",
        bitmap.width(),
        bitmap.height(),
        w,
        h,
        options.format
    );

    let thumb = bitmap.resized_with(Some(w), Some(h), options.filter)?;
    thumb.encode(options.format)
}
