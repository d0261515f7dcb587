//! Slide capability contract and its owned implementation.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[cfg(feature = "imgconv")]
use crate::common::Result;
#[cfg(feature = "imgconv")]
use crate::images::{self, Bitmap, ThumbnailOptions};

/// A slide within a deck.
///
/// Raw encoded bytes are the owned representation; `thumb()` and `image()`
/// decode them on every call.
pub trait Slide {
    /// Returns the unique id for this slide.
    fn id(&self) -> &str;

    /// Returns the raw thumbnail data.
    fn thumb_data(&self) -> &[u8];

    /// Returns the raw image data.
    fn image_data(&self) -> &[u8];

    /// Returns the slide notes.
    fn notes(&self) -> &str;

    /// Returns a bitmap of the slide thumbnail.
    #[cfg(feature = "imgconv")]
    fn thumb(&self) -> Result<Bitmap> {
        images::decode(self.thumb_data())
    }

    /// Returns a bitmap of the slide image.
    #[cfg(feature = "imgconv")]
    fn image(&self) -> Result<Bitmap> {
        images::decode(self.image_data())
    }
}

/// An immutable slide holding its own thumbnail, image and notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideData {
    id: String,
    thumb: Bytes,
    image: Bytes,
    notes: String,
}

impl SlideData {
    /// Create a slide from already encoded thumbnail and image bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syncslides::{Slide, SlideData};
    ///
    /// let slide = SlideData::new("s1", Vec::<u8>::new(), Vec::<u8>::new(), "Welcome everyone");
    /// assert_eq!(slide.id(), "s1");
    /// assert_eq!(slide.notes(), "Welcome everyone");
    /// ```
    pub fn new(
        id: impl Into<String>,
        thumb: impl Into<Bytes>,
        image: impl Into<Bytes>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            thumb: thumb.into(),
            image: image.into(),
            notes: notes.into(),
        }
    }

    /// Create a slide whose thumbnail is rendered from its image.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use syncslides::{Slide, SlideData};
    /// use syncslides::images::ThumbnailOptions;
    ///
    /// let image = std::fs::read("slide1.png")?;
    /// let slide = SlideData::with_generated_thumb("s1", image, "", &ThumbnailOptions::default())?;
    /// assert!(slide.thumb()?.width() <= 320);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[cfg(feature = "imgconv")]
    pub fn with_generated_thumb(
        id: impl Into<String>,
        image: impl Into<Bytes>,
        notes: impl Into<String>,
        options: &ThumbnailOptions,
    ) -> Result<Self> {
        let image = image.into();
        let thumb = images::make_thumbnail(&image, options)?;
        Ok(Self::new(id, thumb, image, notes))
    }

    /// The thumbnail buffer handle.
    pub fn thumb_bytes(&self) -> &Bytes {
        &self.thumb
    }

    /// The image buffer handle.
    pub fn image_bytes(&self) -> &Bytes {
        &self.image
    }
}

impl Slide for SlideData {
    fn id(&self) -> &str {
        &self.id
    }

    fn thumb_data(&self) -> &[u8] {
        &self.thumb
    }

    fn image_data(&self) -> &[u8] {
        &self.image
    }

    fn notes(&self) -> &str {
        &self.notes
    }
}
