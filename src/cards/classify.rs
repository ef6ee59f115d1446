//! Card classification into zone-eligibility categories.
//!
//! `classify` is the only place that interprets `type`/`supertype` text.
//! Every other module works with the closed `ZoneCategory` enum.

use serde::{Deserialize, Serialize};

use super::definition::Card;
use crate::core::DeckRules;

/// Zone-eligibility category of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneCategory {
    /// Deck identity card. Exactly one per deck.
    Legend,
    /// Battlefield zone card.
    Battlefield,
    /// Champion unit, eligible as Main Champion.
    Champion,
    /// Rune zone card.
    Rune,
    /// Standard units, spells and gear.
    Other,
}

impl ZoneCategory {
    /// True for categories that live in the Main Deck (or Sideboard).
    #[must_use]
    pub fn is_main_deck(self) -> bool {
        matches!(self, ZoneCategory::Champion | ZoneCategory::Other)
    }

    /// Per-name copy cap for this category. `None` means unlimited.
    #[must_use]
    pub fn copy_limit(self, rules: &DeckRules) -> Option<usize> {
        match self {
            ZoneCategory::Legend => Some(rules.legend_copy_limit),
            ZoneCategory::Battlefield => Some(rules.battlefield_copy_limit),
            ZoneCategory::Rune => rules.rune_copy_limit,
            ZoneCategory::Champion | ZoneCategory::Other => Some(rules.copy_limit),
        }
    }
}

const LEGEND: &str = "Legend";
const BATTLEFIELD: &str = "Battlefield";
const CHAMPION: &str = "Champion";
const RUNE: &str = "Rune";
const SIGNATURE: &str = "Signature";
const TOKEN: &str = "Token";

/// Split a category string into word tokens.
///
/// Handles multi-category values such as `"Champion Unit"` or
/// `"Legend - Unit"`.
pub(crate) fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || matches!(c, ',' | '/' | '-' | '—'))
        .filter(|t| !t.is_empty())
}

/// True if `text` is exactly `word` or contains it as a token.
pub(crate) fn has_token(text: &str, word: &str) -> bool {
    text == word || tokens(text).any(|t| t == word)
}

/// Classify a card.
///
/// Total: every card maps to exactly one category. Legend, Battlefield and
/// Rune are read from `type` only; Champion is also recognized from
/// `supertype` (a champion is usually typed "Unit"). Precedence is
/// Legend > Battlefield > Rune > Champion > Other, so a Legend carrying a
/// unit marker is never counted as a Main Deck card.
///
/// ```
/// use riftforge::cards::{classify, Card, ZoneCategory};
///
/// let jinx = Card::new("1", "Jinx", "Unit").with_supertype("Champion");
/// assert_eq!(classify(&jinx), ZoneCategory::Champion);
///
/// let bolt = Card::new("2", "Bolt", "Spell");
/// assert_eq!(classify(&bolt), ZoneCategory::Other);
/// ```
#[must_use]
pub fn classify(card: &Card) -> ZoneCategory {
    let ty = card.card_type.as_str();

    match ty {
        LEGEND => return ZoneCategory::Legend,
        BATTLEFIELD => return ZoneCategory::Battlefield,
        RUNE => return ZoneCategory::Rune,
        CHAMPION => return ZoneCategory::Champion,
        _ => {}
    }

    let category = if has_token(ty, LEGEND) {
        ZoneCategory::Legend
    } else if has_token(ty, BATTLEFIELD) {
        ZoneCategory::Battlefield
    } else if has_token(ty, RUNE) {
        ZoneCategory::Rune
    } else if has_token(ty, CHAMPION) || has_token(&card.supertype, CHAMPION) {
        ZoneCategory::Champion
    } else {
        return ZoneCategory::Other;
    };

    log::trace!("classified {:?} ({:?}/{:?}) as {:?} by token match", card.name, ty, card.supertype, category);
    category
}

/// True if the card is a non-collectible Token.
#[must_use]
pub fn is_token(card: &Card) -> bool {
    has_token(&card.supertype, TOKEN)
}

/// True if the card is a Signature card (restricted to tag-matching Legends).
#[must_use]
pub fn is_signature(card: &Card) -> bool {
    has_token(&card.supertype, SIGNATURE)
}
