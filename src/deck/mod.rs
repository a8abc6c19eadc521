//! The fixed ten-slide deck.
//!
//! [`DeckBuilder`] implements the two slide layouts the deck uses;
//! [`build_deck`] assembles the full presentation from the hardcoded
//! slide definitions in [`content`](self).

mod builder;
mod content;


pub use builder::{DARK_BLUE, DeckBuilder, GRAY, GREEN, LIGHT_BLUE, RED, WHITE};
pub use content::{OUTPUT_FILE, build_deck};
