//! Plain-text deck lists.
//!
//! Import goes through two steps: `parse_decklist` reads `Nx Name` lines,
//! then `resolve_decklist` looks the names up in a `CardCatalog`.
//! `format_decklist` writes the same format back out.

pub mod format;
pub mod parse;

pub use format::format_decklist;
pub use parse::{
    import_decklist, parse_decklist, resolve_decklist, DecklistError, DecklistImport, DecklistLine, MAX_LINE_QUANTITY,
};
