//! # riftforge
//!
//! Deck construction rules engine for a collectible card game.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Classification, decomposition, validation and pool
//!    filtering are pure functions over a list of deck entries. The caller
//!    owns the entries and the editing state.
//!
//! 2. **One Classifier**: Every rule asks `classify` for a card's category.
//!    Card text is interpreted in exactly one place.
//!
//! 3. **Configuration Over Constants**: Zone sizes and copy limits live in
//!    `DeckRules`; the standard format is its `Default`.
//!
//! ## Architecture
//!
//! - **Normalize at the Boundary**: Tags and domains arrive as strings,
//!   lists or objects and become a `LabelSet` on deserialization.
//!
//! - **Persistent Data Structures**: `DeckSession` keeps entries in an
//!   `im::Vector`, so snapshots are O(1).
//!
//! ## Modules
//!
//! - `core`: Deck rule configuration
//! - `cards`: Card records, labels, classification, catalog, sorting
//! - `zones`: Zone decomposition and name grouping
//! - `rules`: Deck validation and the add-time guard
//! - `pool`: Editing sections and catalog constraints
//! - `session`: Stateful deck editing
//! - `decklist`: Plain-text import and export

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod pool;
pub mod session;
pub mod decklist;

// Re-export commonly used types
pub use crate::core::{ConfigError, DeckRules};

pub use crate::cards::{
    classify, is_signature, is_token, sort_cards,
    Card, CardCatalog, CardId, DeckEntry, LabelSet, SortMode, SortOrder, ZoneCategory,
};

pub use crate::zones::{card_counts, decompose, group_by_name, CardGroup, DeckZone, Zones};

pub use crate::rules::{
    check_addition, validate, validate_deck, validate_with,
    AddRejection, Admission, ChampionChoice, DeckIssue, ExcessiveCopies, ValidationReport,
};

pub use crate::pool::{advance, eligible_for, next_section, PoolConstraint, Section};

pub use crate::session::DeckSession;

pub use crate::decklist::{
    format_decklist, import_decklist, parse_decklist, resolve_decklist,
    DecklistError, DecklistImport, DecklistLine, MAX_LINE_QUANTITY,
};
