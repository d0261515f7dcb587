//! SyncSlides - deck and slide model for synchronized presentations
//!
//! This library provides the display-side data of a shared slide
//! presentation: deck metadata for list views and the slide contract that
//! exposes each slide's image, thumbnail and speaker notes.
//!
//! # Features
//!
//! - **Immutable model**: `DeckSummary` and `SlideData` are fixed at construction
//! - **Owned bytes, decoded views**: raw encoded images are stored; bitmaps are decoded on demand
//! - **Checked decoding**: absent or empty image data is reported, never handed to the decoder
//! - **Thumbnails**: derive slide previews from full images (`imgconv` feature)
//!
//! # Example - Deck listing
//!
//! ```
//! use syncslides::{Deck, DeckSummary};
//!
//! let deck = DeckSummary::new(Some("Intro".into()), Some(vec![0x89, b'P'].into()), Some("d1".into()));
//! assert_eq!(deck.to_string(), "[title=\"Intro\", id=d1, thumb=yes]");
//! assert_eq!(deck.thumb_data(), Some(&[0x89, b'P'][..]));
//!
//! let unknown = DeckSummary::new(None, None, None);
//! assert_eq!(unknown.to_string(), "[title=\"unknown\", id=unknown, thumb=no]");
//! ```
#![cfg_attr(
    feature = "imgconv",
    doc = r#"
# Example - Decoding thumbnails

```no_run
use syncslides::{Deck, DeckSummary};

# fn main() -> Result<(), Box<dyn std::error::Error>> {
let thumb = std::fs::read("deck_thumb.png")?;
let deck = DeckSummary::new(Some("Intro".into()), Some(thumb.into()), Some("d1".into()));

let bitmap = deck.thumb()?;
println!("thumbnail: {}x{}", bitmap.width(), bitmap.height());
# Ok(())
# }
```

# Example - Slides

```no_run
use syncslides::{Slide, SlideData};
use syncslides::images::ThumbnailOptions;

# fn main() -> Result<(), Box<dyn std::error::Error>> {
let image = std::fs::read("slide1.png")?;
let slide = SlideData::with_generated_thumb("s1", image, "Welcome", &ThumbnailOptions::default())?;

let full = slide.image()?;
let preview = slide.thumb()?;
println!("{}: {:?} / {:?}", slide.id(), full.dimensions(), preview.dimensions());
# Ok(())
# }
```
"#
)]

/// Common types shared across the crate
///
/// Contains the unified error type and identifier generation.
pub mod common;

/// Image decoding, bitmaps and thumbnail generation
///
/// Only available with the `imgconv` feature.
#[cfg(feature = "imgconv")]
pub mod images;

/// Deck and slide model
pub mod presentation;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
#[cfg(feature = "imgconv")]
pub use images::Bitmap;
pub use presentation::{Deck, DeckSummary, Slide, SlideData};
