//! Card-pool constraints for browsing the catalog.
//!
//! `eligible_for` turns the active section and the current deck into a
//! declarative `PoolConstraint`. The catalog layer translates it into its
//! own filter (SQL, search index, ...); `PoolConstraint::matches` is the
//! reference in-memory predicate.

use serde::{Deserialize, Serialize};

use super::section::Section;
use crate::cards::{classify, is_signature, is_token, Card, LabelSet, ZoneCategory};
use crate::zones::Zones;

/// Which catalog cards may be proposed right now.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolConstraint {
    /// Allowed `type` values for the catalog query. Empty allows every type.
    pub allowed_types: Vec<String>,

    /// Categories `matches` accepts. Empty allows every category.
    #[serde(default)]
    pub allowed_categories: Vec<ZoneCategory>,

    /// Signature cards are eligible only when their tags intersect these
    /// (the current Legend's tags). Empty means no Signature card is eligible.
    pub exclude_signature_unless: Vec<String>,
}

impl PoolConstraint {
    /// Comma-joined type list, the shape the catalog query parameter takes.
    #[must_use]
    pub fn type_param(&self) -> String {
        self.allowed_types.join(",")
    }

    /// Evaluate the constraint against a card.
    ///
    /// Tokens never match. The type check goes through `classify`, so a
    /// matching card is always one the section's zone accepts.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        if is_token(card) {
            return false;
        }
        if is_signature(card) {
            let required: LabelSet = self.exclude_signature_unless.iter().collect();
            if !card.tags.intersects(&required) {
                return false;
            }
        }
        self.allowed_categories.is_empty() || self.allowed_categories.contains(&classify(card))
    }
}

/// Constraint for the given section.
///
/// With no section every type is allowed. The Signature restriction always
/// uses the tags of the deck's current Legend. Rune domains are not
/// pre-filtered: a mismatched Rune can be added and is reported by the
/// validator afterwards.
///
/// ```
/// use riftforge::cards::{Card, DeckEntry};
/// use riftforge::pool::{eligible_for, Section};
/// use riftforge::zones::decompose;
///
/// let deck = vec![DeckEntry::main(Card::new("1", "Darius", "Legend").with_tags("Noxus"))];
/// let constraint = eligible_for(Some(Section::Main), &decompose(&deck));
///
/// let signature = Card::new("2", "Noxian Guillotine", "Spell")
///     .with_supertype("Signature")
///     .with_tags("Noxus");
/// assert!(constraint.matches(&signature));
/// ```
#[must_use]
pub fn eligible_for(section: Option<Section>, zones: &Zones<'_>) -> PoolConstraint {
    let allowed_types = section
        .map(|s| s.allowed_types().iter().map(|t| t.to_string()).collect())
        .unwrap_or_default();
    let allowed_categories = section.map(|s| s.allowed_categories().to_vec()).unwrap_or_default();
    let exclude_signature_unless = zones.legend().map(|l| l.tags.to_vec()).unwrap_or_default();

    log::debug!(
        "pool constraint for {:?}: types={:?} signature tags={:?}",
        section,
        allowed_types,
        exclude_signature_unless
    );

    PoolConstraint { allowed_types, allowed_categories, exclude_signature_unless }
}
