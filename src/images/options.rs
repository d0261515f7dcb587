use image::ImageFormat;
use image::imageops::FilterType;

/// Configuration for thumbnail generation.
///
/// Controls the bounding box a thumbnail must fit inside, the encoding of
/// the produced bytes and the resampling filter.
///
/// # Examples
///
/// ```rust
/// use syncslides::images::ThumbnailOptions;
/// use image::ImageFormat;
///
/// // Create with defaults
/// let options = ThumbnailOptions::default();
///
/// // Or customize
/// let options = ThumbnailOptions::new()
///     .with_max_size(160, 120)
///     .with_format(ImageFormat::Jpeg);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailOptions {
    /// Maximum width of the thumbnail in pixels
    pub max_width: u32,
    /// Maximum height of the thumbnail in pixels
    pub max_height: u32,
    /// Encoding of the produced thumbnail bytes
    pub format: ImageFormat,
    /// Filter used when scaling down
    pub filter: FilterType,
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self {
            max_width: 320,
            max_height: 240,
            format: ImageFormat::Png,
            filter: FilterType::Lanczos3,
        }
    }
}

impl ThumbnailOptions {
    /// Create a new `ThumbnailOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bounding box the thumbnail must fit inside.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncslides::images::ThumbnailOptions;
    ///
    /// let options = ThumbnailOptions::new().with_max_size(64, 64);
    /// assert_eq!(options.max_width, 64);
    /// ```
    #[inline]
    pub fn with_max_size(mut self, max_width: u32, max_height: u32) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    /// Set the output encoding.
    #[inline]
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the resampling filter.
    #[inline]
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }
}
