//! Deck decomposition into zones.
//!
//! `decompose` is a stable partition of a flat entry list into the five
//! deck zones. It never rejects input: a half-built deck with two Legends and
//! a 50-card main deck still decomposes, and the validator reports what is
//! wrong with it.

use serde::Serialize;

use crate::cards::{classify, Card, DeckEntry, ZoneCategory};

/// Zone a deck entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DeckZone {
    Legend,
    Battlefield,
    MainDeck,
    Runes,
    Sideboard,
}

impl DeckZone {
    /// Zone for an entry. Sideboard placement wins over category.
    #[must_use]
    pub fn of(entry: &DeckEntry) -> Self {
        if entry.is_sideboard {
            return DeckZone::Sideboard;
        }
        match classify(&entry.card) {
            ZoneCategory::Legend => DeckZone::Legend,
            ZoneCategory::Battlefield => DeckZone::Battlefield,
            ZoneCategory::Rune => DeckZone::Runes,
            ZoneCategory::Champion | ZoneCategory::Other => DeckZone::MainDeck,
        }
    }
}

/// A deck split into zones.
///
/// Borrows the entries it was built from. Every entry sits in exactly one
/// zone list, and each list keeps input order.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Zones<'a> {
    /// Non-sideboard Legends. Normally zero or one.
    pub legend: Vec<&'a DeckEntry>,
    /// Non-sideboard Battlefields.
    pub battlefields: Vec<&'a DeckEntry>,
    /// Non-sideboard cards that are not Legend, Battlefield or Rune.
    pub main_deck: Vec<&'a DeckEntry>,
    /// Non-sideboard Runes.
    pub runes: Vec<&'a DeckEntry>,
    /// Everything flagged as sideboard, whatever its category.
    pub sideboard: Vec<&'a DeckEntry>,
    /// Champion-category cards of the main deck, in main deck order.
    pub champions: Vec<&'a DeckEntry>,
}

impl<'a> Zones<'a> {
    /// The deck's Legend card (the first one, if several were placed).
    #[must_use]
    pub fn legend(&self) -> Option<&'a Card> {
        self.legend.first().map(|e| &e.card)
    }

    /// True if at least one Legend is placed.
    #[must_use]
    pub fn has_legend(&self) -> bool {
        !self.legend.is_empty()
    }

    /// Entries of a single zone.
    #[must_use]
    pub fn zone(&self, zone: DeckZone) -> &[&'a DeckEntry] {
        match zone {
            DeckZone::Legend => &self.legend,
            DeckZone::Battlefield => &self.battlefields,
            DeckZone::MainDeck => &self.main_deck,
            DeckZone::Runes => &self.runes,
            DeckZone::Sideboard => &self.sideboard,
        }
    }

    /// All entries, zone by zone (legend, battlefields, main deck, runes, sideboard).
    pub fn entries(&self) -> impl Iterator<Item = &'a DeckEntry> + '_ {
        self.legend
            .iter()
            .chain(&self.battlefields)
            .chain(&self.main_deck)
            .chain(&self.runes)
            .chain(&self.sideboard)
            .copied()
    }

    /// Total number of entries across all zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.legend.len() + self.battlefields.len() + self.main_deck.len() + self.runes.len() + self.sideboard.len()
    }

    /// True if the deck has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition deck entries into zones.
///
/// ```
/// use riftforge::cards::{Card, DeckEntry};
/// use riftforge::zones::decompose;
///
/// let entries = vec![
///     DeckEntry::main(Card::new("1", "Jinx", "Legend")),
///     DeckEntry::main(Card::new("2", "Ember Wolf", "Unit")),
///     DeckEntry::sideboard(Card::new("3", "Ember Wolf", "Unit")),
/// ];
/// let zones = decompose(&entries);
///
/// assert!(zones.has_legend());
/// assert_eq!(zones.main_deck.len(), 1);
/// assert_eq!(zones.sideboard.len(), 1);
/// ```
#[must_use]
pub fn decompose<'a, I>(entries: I) -> Zones<'a>
where
    I: IntoIterator<Item = &'a DeckEntry>,
{
    let mut zones = Zones::default();

    for entry in entries {
        match DeckZone::of(entry) {
            DeckZone::Legend => zones.legend.push(entry),
            DeckZone::Battlefield => zones.battlefields.push(entry),
            DeckZone::Runes => zones.runes.push(entry),
            DeckZone::Sideboard => zones.sideboard.push(entry),
            DeckZone::MainDeck => {
                if classify(&entry.card) == ZoneCategory::Champion {
                    zones.champions.push(entry);
                }
                zones.main_deck.push(entry);
            }
        }
    }

    log::debug!(
        "decomposed deck: legend={} battlefields={} main={} (champions={}) runes={} sideboard={}",
        zones.legend.len(),
        zones.battlefields.len(),
        zones.main_deck.len(),
        zones.champions.len(),
        zones.runes.len(),
        zones.sideboard.len()
    );

    zones
}
