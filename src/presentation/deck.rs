//! Deck metadata for list and summary views.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "imgconv")]
use crate::common::Result;
#[cfg(feature = "imgconv")]
use crate::images::{self, Bitmap};

/// Read access to a slide deck's display metadata.
///
/// Absent title or id means the value is not known to the caller; whether
/// it is still loading or will never exist is for calling code to decide.
pub trait Deck {
    /// The human-readable title, if any.
    fn title(&self) -> Option<&str>;

    /// The opaque identifier naming this deck, if any.
    fn id(&self) -> Option<&str>;

    /// The raw encoded thumbnail, borrowed from the deck.
    fn thumb_data(&self) -> Option<&[u8]>;

    /// Decode the thumbnail into a bitmap.
    ///
    /// Every call decodes again and returns an independent bitmap.
    /// Absent or empty thumbnail data yields `Error::NoImageData`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use syncslides::{Deck, DeckSummary};
    ///
    /// let png = std::fs::read("thumb.png")?;
    /// let deck = DeckSummary::new(Some("Intro".into()), Some(png.into()), Some("d1".into()));
    /// let bitmap = deck.thumb()?;
    /// println!("{}x{}", bitmap.width(), bitmap.height());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[cfg(feature = "imgconv")]
    fn thumb(&self) -> Result<Bitmap> {
        images::decode_optional(self.thumb_data())
    }
}

/// Immutable metadata of one slide deck: title, thumbnail and identifier.
///
/// Values are stored exactly as given; nothing is validated or normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSummary {
    title: Option<String>,
    thumb: Option<Bytes>,
    id: Option<String>,
}

impl DeckSummary {
    /// Create a deck summary from its three fields.
    pub fn new(title: Option<String>, thumb: Option<Bytes>, id: Option<String>) -> Self {
        Self { title, thumb, id }
    }

    /// Assemble a new deck under a freshly generated identifier.
    pub fn create(title: Option<String>, thumb: Option<Bytes>) -> Self {
        let id = crate::common::generate_id();
        log::debug!("assigned id {} to new deck", id);
        Self::new(title, thumb, Some(id))
    }

    /// The thumbnail buffer handle itself.
    ///
    /// `Bytes` is immutable, so a clone of the handle shares the buffer
    /// without allowing it to change.
    pub fn thumb_bytes(&self) -> Option<&Bytes> {
        self.thumb.as_ref()
    }

    /// Whether any thumbnail data (possibly empty) is attached.
    pub fn has_thumb(&self) -> bool {
        self.thumb.is_some()
    }
}

impl Deck for DeckSummary {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn thumb_data(&self) -> Option<&[u8]> {
        self.thumb.as_deref()
    }
}

impl fmt::Display for DeckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[title=\"{}\", id={}, thumb={}]",
            self.title.as_deref().unwrap_or("unknown"),
            self.id.as_deref().unwrap_or("unknown"),
            if self.thumb.is_some() { "yes" } else { "no" }
        )
    }
}
