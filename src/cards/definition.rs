//! Card records and deck entries.
//!
//! `Card` is the engine's read-only view of a catalog row. Deserialization
//! is lenient in the same places the catalog is sloppy (nullable text,
//! numbers stored as strings, 0/1 sideboard flags) so that a row always
//! becomes a `Card` and validation stays total.

use serde::{Deserialize, Deserializer, Serialize};

use super::labels::LabelSet;

/// Stable card identity.
///
/// Ids arrive as strings or numbers depending on the source; both compare
/// by their string form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u32> for CardId {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl From<u64> for CardId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for CardId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s.trim().to_string()),
        })
    }
}

/// A catalog card.
///
/// Multiple cards may share a `name` (reprints). Copy limits count by name.
///
/// ## Example
///
/// ```
/// use riftforge::cards::Card;
///
/// let vi = Card::new("42", "Vi", "Unit")
///     .with_supertype("Champion")
///     .with_tags("Piltover, Zaun")
///     .with_domains("Fury");
///
/// assert!(vi.tags.contains("Zaun"));
/// assert_eq!(vi.domains.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this printing.
    pub id: CardId,

    /// Card name. Shared across reprints.
    #[serde(default, deserialize_with = "nullable_text")]
    pub name: String,

    /// Free-text category ("Unit", "Spell", "Legend", ...).
    #[serde(rename = "type", default, deserialize_with = "nullable_text")]
    pub card_type: String,

    /// Overlay category ("Champion", "Signature", "Token", ...).
    #[serde(default, deserialize_with = "nullable_text")]
    pub supertype: String,

    /// Loyalty/affiliation markers.
    #[serde(default)]
    pub tags: LabelSet,

    /// Elemental affiliations.
    #[serde(rename = "domain", alias = "domains", default)]
    pub domains: LabelSet,

    /// Play cost. Display only.
    #[serde(default, deserialize_with = "lenient_int")]
    pub energy: Option<i64>,

    /// Display only.
    #[serde(default, deserialize_with = "lenient_int")]
    pub power: Option<i64>,

    /// Display only.
    #[serde(default, deserialize_with = "lenient_int")]
    pub might: Option<i64>,

    /// Display only.
    #[serde(default)]
    pub rarity: Option<String>,
}

impl Card {
    /// Create a card with no supertype, labels or stats.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, card_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_type: card_type.into(),
            supertype: String::new(),
            tags: LabelSet::new(),
            domains: LabelSet::new(),
            energy: None,
            power: None,
            might: None,
            rarity: None,
        }
    }

    /// Set the supertype (builder pattern).
    #[must_use]
    pub fn with_supertype(mut self, supertype: impl Into<String>) -> Self {
        self.supertype = supertype.into();
        self
    }

    /// Set tags from a comma-joined string.
    #[must_use]
    pub fn with_tags(mut self, tags: &str) -> Self {
        self.tags = LabelSet::parse(tags);
        self
    }

    /// Set domains from a comma-joined string.
    #[must_use]
    pub fn with_domains(mut self, domains: &str) -> Self {
        self.domains = LabelSet::parse(domains);
        self
    }

    /// Set the energy cost.
    #[must_use]
    pub fn with_energy(mut self, energy: i64) -> Self {
        self.energy = Some(energy);
        self
    }

    /// Set power.
    #[must_use]
    pub fn with_power(mut self, power: i64) -> Self {
        self.power = Some(power);
        self
    }

    /// Set might.
    #[must_use]
    pub fn with_might(mut self, might: i64) -> Self {
        self.might = Some(might);
        self
    }

    /// Set rarity.
    #[must_use]
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }
}

/// One card in a deck, with its placement flag.
///
/// A deck is an unordered multiset of entries; duplicates are legal up to
/// the copy limits. Deserializes from the flat `{ ...card, is_sideboard }`
/// row shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    /// The card.
    #[serde(flatten)]
    pub card: Card,

    /// Sideboard placement.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_sideboard: bool,
}

impl DeckEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(card: Card, is_sideboard: bool) -> Self {
        Self { card, is_sideboard }
    }

    /// Create a non-sideboard entry.
    #[must_use]
    pub fn main(card: Card) -> Self {
        Self::new(card, false)
    }

    /// Create a sideboard entry.
    #[must_use]
    pub fn sideboard(card: Card) -> Self {
        Self::new(card, true)
    }
}

fn nullable_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Parse a number that may arrive as a string. Empty or garbage becomes `None`.
fn lenient_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Option::<RawNumber>::deserialize(deserializer)? {
        Some(RawNumber::Int(n)) => Some(n),
        Some(RawNumber::Float(f)) if f.is_finite() => Some(f.trunc() as i64),
        Some(RawNumber::Text(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Option::<RawFlag>::deserialize(deserializer)? {
        Some(RawFlag::Bool(b)) => b,
        Some(RawFlag::Int(n)) => n != 0,
        None => false,
    })
}
