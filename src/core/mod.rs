//! Core engine types: construction rules configuration.
//!
//! The engine never hardcodes zone sizes or copy caps in its checks. They
//! are read from `DeckRules`, whose `Default` is the standard format.

pub mod config;

pub use config::{ConfigError, DeckRules};
