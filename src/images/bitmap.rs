// Decoded bitmap
//
// A `Bitmap` is the on-demand view of a deck or slide image. It owns its
// pixels outright; every decode produces a fresh one.

use crate::common::error::{Error, Result};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, RgbaImage};

/// A decoded, displayable image
#[derive(Debug, Clone)]
pub struct Bitmap {
    image: DynamicImage,
    source_format: Option<ImageFormat>,
}

impl Bitmap {
    /// Wrap an already decoded image
    pub fn new(image: DynamicImage, source_format: Option<ImageFormat>) -> Self {
        Self {
            image,
            source_format,
        }
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// (width, height) in pixels
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Format the bitmap was decoded from, if it came from encoded bytes
    pub fn source_format(&self) -> Option<ImageFormat> {
        self.source_format
    }

    /// Borrow the underlying image
    pub fn as_image(&self) -> &DynamicImage {
        &self.image
    }

    /// Mutably borrow the underlying image
    pub fn as_image_mut(&mut self) -> &mut DynamicImage {
        &mut self.image
    }

    /// Take ownership of the underlying image
    pub fn into_image(self) -> DynamicImage {
        self.image
    }

    /// Copy the pixels out as 8-bit RGBA
    pub fn to_rgba8(&self) -> RgbaImage {
        self.image.to_rgba8()
    }

    /// Resize using Lanczos3 filtering.
    ///
    /// When only one dimension is given the other follows the source aspect
    /// ratio. When neither is given the bitmap is returned unchanged.
    pub fn resized(&self, width: Option<u32>, height: Option<u32>) -> Result<Bitmap> {
        self.resized_with(width, height, FilterType::Lanczos3)
    }

    /// Resize using the given filter. See [`Bitmap::resized`].
    pub fn resized_with(
        &self,
        width: Option<u32>,
        height: Option<u32>,
        filter: FilterType,
    ) -> Result<Bitmap> {
        if width == Some(0) || height == Some(0) {
            return Err(Error::InvalidDimensions {
                width: width.unwrap_or_default(),
                height: height.unwrap_or_default(),
            });
        }

        let (src_w, src_h) = self.dimensions();
        if (width.is_some() || height.is_some()) && (src_w == 0 || src_h == 0) {
            return Err(Error::InvalidDimensions {
                width: src_w,
                height: src_h,
            });
        }

        let (w, h) = match (width, height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => match scale_side(w, src_h, src_w) {
                Some(h) => (w, h),
                None => {
                    return Err(Error::InvalidDimensions {
                        width: w,
                        height: u32::MAX,
                    });
                },
            },
            (None, Some(h)) => match scale_side(h, src_w, src_h) {
                Some(w) => (w, h),
                None => {
                    return Err(Error::InvalidDimensions {
                        width: u32::MAX,
                        height: h,
                    });
                },
            },
            (None, None) => return Ok(self.clone()),
        };

        if (w, h) == self.dimensions() {
            return Ok(self.clone());
        }

        log::trace!(
            "resizing bitmap {}x{} -> {}x{}",
            self.width(),
            self.height(),
            w,
            h
        );
        let resized = image::imageops::resize(&self.image, w, h, filter);
        Ok(Bitmap::new(
            DynamicImage::ImageRgba8(resized),
            self.source_format,
        ))
    }

    /// Encode the bitmap into the given format
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>> {
        let mut buffer = std::io::Cursor::new(Vec::new());
        // JPEG has no alpha channel
        let result = if format == ImageFormat::Jpeg {
            DynamicImage::ImageRgb8(self.image.to_rgb8()).write_to(&mut buffer, format)
        } else {
            self.image.write_to(&mut buffer, format)
        };
        result.map_err(|e| Error::Encode(format!("Failed to encode image: {}", e)))?;
        Ok(buffer.into_inner())
    }

    /// Encode the bitmap as PNG
    pub fn to_png(&self) -> Result<Vec<u8>> {
        self.encode(ImageFormat::Png)
    }
}

/// Scale `target` by `num / den`, truncating and clamping to at least 1.
///
/// Returns `None` when the result does not fit in a `u32`.
fn scale_side(target: u32, num: u32, den: u32) -> Option<u32> {
    let side = (target as f64 * num as f64 / den as f64).floor();
    if side > u32::MAX as f64 {
        return None;
    }
    Some((side as u32).max(1))
}

impl From<DynamicImage> for Bitmap {
    fn from(image: DynamicImage) -> Self {
        Bitmap::new(image, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn sample(width: u32, height: u32) -> Bitmap {
        let img = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 128]));
        Bitmap::from(DynamicImage::ImageRgb8(img))
    }

    #[test]
    fn test_dimensions() {
        let bmp = sample(8, 4);
        assert_eq!(bmp.width(), 8);
        assert_eq!(bmp.height(), 4);
        assert_eq!(bmp.dimensions(), (8, 4));
        assert_eq!(bmp.source_format(), None);
    }

    #[test]
    fn test_resize_width_only_keeps_aspect() {
        let bmp = sample(20, 10).resized(Some(10), None).unwrap();
        assert_eq!(bmp.dimensions(), (10, 5));
    }

    #[test]
    fn test_resize_height_only_keeps_aspect() {
        let bmp = sample(20, 10).resized(None, Some(5)).unwrap();
        assert_eq!(bmp.dimensions(), (10, 5));
    }

    #[test]
    fn test_resize_exact() {
        let bmp = sample(20, 10).resized(Some(3), Some(7)).unwrap();
        assert_eq!(bmp.dimensions(), (3, 7));
    }

    #[test]
    fn test_resize_none_is_identity() {
        let bmp = sample(6, 6).resized(None, None).unwrap();
        assert_eq!(bmp.dimensions(), (6, 6));
    }

    #[test]
    fn test_resize_zero_rejected() {
        let err = sample(6, 6).resized(Some(0), None).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimensions {
                width: 0,
                height: 0
            }
        ));
    }

    #[test]
    fn test_resize_zero_width_source_rejected() {
        let bmp = Bitmap::from(DynamicImage::new_rgb8(0, 10));
        let err = bmp.resized(Some(5), None).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimensions {
                width: 0,
                height: 10
            }
        ));
    }

    #[test]
    fn test_resize_zero_height_source_rejected() {
        let bmp = Bitmap::from(DynamicImage::new_rgb8(10, 0));
        let err = bmp.resized(None, Some(5)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimensions {
                width: 10,
                height: 0
            }
        ));
    }

    #[test]
    fn test_resize_derived_side_overflow_rejected() {
        // 1x100000 scaled to width 100000 needs a height of 10^10
        let bmp = Bitmap::from(DynamicImage::new_luma8(1, 100_000));
        let err = bmp.resized(Some(100_000), None).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimensions {
                width: 100_000,
                height: u32::MAX
            }
        ));

        let bmp = Bitmap::from(DynamicImage::new_luma8(100_000, 1));
        let err = bmp.resized(None, Some(100_000)).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDimensions {
                width: u32::MAX,
                height: 100_000
            }
        ));
    }

    #[test]
    fn test_scale_side() {
        assert_eq!(scale_side(10, 1, 2), Some(5));
        assert_eq!(scale_side(1, 1, 1000), Some(1));
        assert_eq!(scale_side(u32::MAX, 1, 1), Some(u32::MAX));
        assert_eq!(scale_side(u32::MAX, 2, 1), None);
    }

    #[test]
    fn test_encode_png_signature() {
        let png = sample(4, 4).to_png().unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_jpeg_from_rgba() {
        let rgba = DynamicImage::ImageRgba8(sample(4, 4).to_rgba8());
        let jpeg = Bitmap::from(rgba).encode(ImageFormat::Jpeg).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
    }
}
