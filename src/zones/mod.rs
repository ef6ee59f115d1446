//! Zone decomposition of a deck.
//!
//! Zones are derived, never stored: every mutation of the entry list is
//! followed by a fresh `decompose`.
//!
//! ## Key Types
//!
//! - `DeckZone`: Legend, Battlefield, Main Deck, Runes, Sideboard
//! - `Zones`: The decomposition, borrowing the entries
//! - `CardGroup`: Same-name entries collapsed for display

pub mod decompose;
pub mod grouping;

pub use decompose::{decompose, DeckZone, Zones};
pub use grouping::{card_counts, group_by_name, CardGroup};
