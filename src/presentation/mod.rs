//! Deck and slide model.
//!
//! This module provides the display-side data of a synchronized slide
//! presentation:
//! - `Deck`: read access to a deck's title, thumbnail and identifier
//! - `DeckSummary`: the immutable deck metadata value
//! - `Slide`: read access to a slide's id, thumbnail, image and notes
//! - `SlideData`: the immutable owned slide value
//!
//! # Example
//!
//! ```rust
//! use syncslides::{Deck, DeckSummary, Slide, SlideData};
//!
//! let deck = DeckSummary::new(Some("Intro".into()), None, Some("d1".into()));
//! assert_eq!(deck.to_string(), "[title=\"Intro\", id=d1, thumb=no]");
//!
//! let slide = SlideData::new("s1", Vec::<u8>::new(), Vec::<u8>::new(), "Say hello");
//! assert_eq!(slide.notes(), "Say hello");
//! ```

// Submodule declarations
mod deck;
mod slide;

// Re-exports
pub use deck::{Deck, DeckSummary};
pub use slide::{Slide, SlideData};
