//! Deck construction rules.
//!
//! - `validate`/`validate_with`: post-hoc legality report over a decomposed deck
//! - `check_addition`: add-time guard used while editing
//!
//! Both read their numbers from `DeckRules` and their categories from
//! `classify`; neither interprets card text directly.

pub mod admission;
pub mod report;
pub mod validator;

pub use admission::{check_addition, AddRejection, Admission};
pub use report::{ChampionChoice, DeckIssue, ExcessiveCopies, ValidationReport};
pub use validator::{validate, validate_deck, validate_with};
