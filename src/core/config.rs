//! Deck construction rules configuration.
//!
//! `DeckRules` holds every number the validator, the add-time guard and the
//! section state machine compare against:
//! - Zone capacities (battlefields, main deck, runes, sideboard)
//! - Per-name copy caps by card category
//!
//! `DeckRules::default()` is the standard constructed format. Callers that
//! run a variant format can build one with the `with_*` methods or load a
//! partial JSON override with `DeckRules::from_json`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or checking a rules configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("rules config parse error: {0}")]
    Parse(String),
    /// The configuration parsed but is not internally consistent.
    #[error("invalid rules config: {0}")]
    Invalid(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

/// Deck construction rules.
///
/// A deck always has exactly one Legend slot; everything else is configurable.
///
/// ## Example
///
/// ```
/// use riftforge::core::DeckRules;
///
/// let rules = DeckRules::default();
/// assert_eq!(rules.main_deck_size, 40);
///
/// let casual = DeckRules::default().with_main_deck_size(30).with_sideboard_max(0);
/// assert_eq!(casual.main_deck_size, 30);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckRules {
    /// Required number of Battlefields.
    pub battlefield_count: usize,

    /// Required number of Main Deck cards.
    pub main_deck_size: usize,

    /// Required number of Runes.
    pub rune_count: usize,

    /// Maximum Sideboard size.
    pub sideboard_max: usize,

    /// Copies of one Legend name allowed across the whole deck.
    pub legend_copy_limit: usize,

    /// Copies of one Battlefield name allowed across the whole deck.
    pub battlefield_copy_limit: usize,

    /// Copies of any other card name allowed across Main Deck and Sideboard.
    pub copy_limit: usize,

    /// Copies of one Rune name allowed. `None` for unlimited.
    pub rune_copy_limit: Option<usize>,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            battlefield_count: 3,
            main_deck_size: 40,
            rune_count: 12,
            sideboard_max: 8,
            legend_copy_limit: 1,
            battlefield_copy_limit: 3,
            copy_limit: 3,
            rune_copy_limit: None,
        }
    }
}

impl DeckRules {
    /// Create the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON override on top of the defaults.
    ///
    /// Missing fields keep their default values. The result is checked
    /// with [`DeckRules::check`] before being returned.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let rules: Self = serde_json::from_str(json)?;
        rules.check()?;
        Ok(rules)
    }

    /// Check the configuration for internal consistency.
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.main_deck_size == 0 {
            return Err(ConfigError::Invalid("main_deck_size must be positive".into()));
        }
        if self.legend_copy_limit == 0 || self.battlefield_copy_limit == 0 || self.copy_limit == 0 {
            return Err(ConfigError::Invalid("copy limits must be positive".into()));
        }
        if self.rune_copy_limit == Some(0) {
            return Err(ConfigError::Invalid("rune_copy_limit must be positive or unset".into()));
        }
        if self.sideboard_max > self.main_deck_size {
            return Err(ConfigError::Invalid(format!(
                "sideboard_max ({}) exceeds main_deck_size ({})",
                self.sideboard_max, self.main_deck_size
            )));
        }
        Ok(())
    }

    /// Set the required number of Battlefields.
    #[must_use]
    pub fn with_battlefield_count(mut self, count: usize) -> Self {
        self.battlefield_count = count;
        self
    }

    /// Set the required Main Deck size.
    #[must_use]
    pub fn with_main_deck_size(mut self, size: usize) -> Self {
        self.main_deck_size = size;
        self
    }

    /// Set the required number of Runes.
    #[must_use]
    pub fn with_rune_count(mut self, count: usize) -> Self {
        self.rune_count = count;
        self
    }

    /// Set the maximum Sideboard size.
    #[must_use]
    pub fn with_sideboard_max(mut self, max: usize) -> Self {
        self.sideboard_max = max;
        self
    }

    /// Set the per-name cap for ordinary cards.
    #[must_use]
    pub fn with_copy_limit(mut self, limit: usize) -> Self {
        self.copy_limit = limit;
        self
    }

    /// Set the per-name cap for Legends.
    #[must_use]
    pub fn with_legend_copy_limit(mut self, limit: usize) -> Self {
        self.legend_copy_limit = limit;
        self
    }

    /// Set the per-name cap for Battlefields.
    #[must_use]
    pub fn with_battlefield_copy_limit(mut self, limit: usize) -> Self {
        self.battlefield_copy_limit = limit;
        self
    }

    /// Cap Runes per name (unlimited by default).
    #[must_use]
    pub fn with_rune_copy_limit(mut self, limit: usize) -> Self {
        self.rune_copy_limit = Some(limit);
        self
    }
}
