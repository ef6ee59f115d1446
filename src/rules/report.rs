//! Validation report and user-facing deck issues.
//!
//! The report is a flat record of independent checks. It carries no
//! references into the deck, so it can be serialized and sent to the UI
//! as-is.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A card name whose copies exceed its cap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcessiveCopies {
    /// Card name (shared across reprints).
    pub name: String,
    /// Total copies across the whole deck, sideboard included.
    pub count: usize,
    /// Cap for this card's category.
    pub limit: usize,
}

/// A Champion that may be chosen as Main Champion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionChoice {
    /// Id of the first printing of this champion in the main deck.
    pub id: CardId,
    /// Champion name.
    pub name: String,
}

/// One outstanding problem with a deck, as shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DeckIssue {
    /// No Legend placed.
    MissingLegend,
    /// More than one Legend placed.
    TooManyLegends { count: usize },
    /// Battlefield count differs from the requirement.
    BattlefieldCount { count: usize, required: usize },
    /// Main Deck size differs from the requirement.
    MainDeckCount { count: usize, required: usize },
    /// Rune count differs from the requirement.
    RuneCount { count: usize, required: usize },
    /// Sideboard is over its cap.
    SideboardOverflow { count: usize, max: usize },
    /// A card name exceeds its copy cap.
    TooManyCopies { name: String, count: usize, limit: usize },
    /// At least one Rune shares no domain with the Legend.
    RuneDomainMismatch { legend_domains: Vec<String> },
    /// A complete deck has no Champion sharing a tag with the Legend.
    NoMatchingChampion { legend: String },
    /// Tag-matching Champions exist but none is selected as Main Champion.
    MainChampionNotSelected,
}

impl std::fmt::Display for DeckIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckIssue::MissingLegend => write!(f, "Missing Legend"),
            DeckIssue::TooManyLegends { count } => write!(f, "Legends: {}/1", count),
            DeckIssue::BattlefieldCount { count, required } => write!(f, "Battlefields: {}/{}", count, required),
            DeckIssue::MainDeckCount { count, required } => write!(f, "Main Deck: {}/{}", count, required),
            DeckIssue::RuneCount { count, required } => write!(f, "Runes: {}/{}", count, required),
            DeckIssue::SideboardOverflow { count, max } => {
                write!(f, "Sideboard: {}/{} (Max {} exceeded!)", count, max, max)
            }
            DeckIssue::TooManyCopies { name, count, .. } => {
                write!(f, "Too many copies of '{}' ({} total in Main + Sideboard)", name, count)
            }
            DeckIssue::RuneDomainMismatch { legend_domains } => {
                write!(f, "Some Runes don't match your Legend's domain ({})!", legend_domains.join(", "))
            }
            DeckIssue::NoMatchingChampion { legend } => {
                write!(f, "No Champions in your deck share a tag with {}!", legend)
            }
            DeckIssue::MainChampionNotSelected => write!(f, "Please select a valid Main Champion."),
        }
    }
}

/// Result of validating a deck.
///
/// Every check runs independently; nothing short-circuits, so all problems
/// are visible at once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Overall verdict.
    pub is_valid: bool,
    /// Legend, Battlefields, Main Deck and Runes all at their required counts.
    pub is_deck_complete: bool,

    pub has_legend: bool,
    pub legend_count: usize,
    pub battlefield_count: usize,
    pub main_deck_count: usize,
    pub rune_count: usize,
    pub sideboard_count: usize,
    pub has_sideboard_valid_size: bool,

    /// No card name over its cap.
    pub copies_limit_valid: bool,
    /// Offending names, in deck order.
    pub excessive_copies: Vec<ExcessiveCopies>,

    /// Every Rune shares a domain with the Legend (true with no Runes).
    pub runes_match_domain: bool,
    /// Names of Runes that share no domain with the Legend.
    pub mismatched_runes: Vec<String>,

    /// Legend name, if one is placed.
    pub legend_name: Option<String>,
    pub legend_tags: Vec<String>,
    pub legend_domains: Vec<String>,

    /// Tag-matching Champions, one per name.
    pub valid_champions: Vec<ChampionChoice>,
    /// Deck card the stored Main Champion id resolved to.
    pub main_champion: Option<CardId>,
    pub main_champ_is_valid: bool,

    /// User-facing list of everything wrong with the deck.
    pub issues: Vec<DeckIssue>,
}

impl ValidationReport {
    /// Check if a card name was flagged for excessive copies.
    #[must_use]
    pub fn has_excess(&self, name: &str) -> bool {
        self.excessive_copies.iter().any(|e| e.name == name)
    }

    /// Check if a card id is a valid Main Champion choice.
    #[must_use]
    pub fn is_champion_choice(&self, id: &CardId) -> bool {
        self.valid_champions.iter().any(|c| &c.id == id)
    }
}
