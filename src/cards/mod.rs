//! Card system: records, labels, classification and catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Stable card identity (string or numeric on the wire)
//! - `Card`: Read-only catalog record with normalized tags/domains
//! - `LabelSet`: Canonical tag/domain set, parsed once at the boundary
//! - `DeckEntry`: A card plus its sideboard flag
//! - `ZoneCategory`: Closed classification used by every rule
//! - `CardCatalog`: Id/name lookup and constrained browsing
//!
//! ## Reprints
//!
//! Several `Card`s may share a name. Copy limits and champion matching work
//! by name, never by id.

pub mod classify;
pub mod definition;
pub mod labels;
pub mod registry;
pub mod sort;

pub use classify::{classify, is_signature, is_token, ZoneCategory};
pub use definition::{Card, CardId, DeckEntry};
pub use labels::LabelSet;
pub use registry::CardCatalog;
pub use sort::{sort_cards, SortMode, SortOrder};
