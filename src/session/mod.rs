//! Stateful deck editing on top of the pure engine functions.

pub mod deck;

pub use deck::DeckSession;
