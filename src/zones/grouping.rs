//! Name-based grouping and counting of deck entries.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::cards::{Card, DeckEntry};

/// A run of same-name cards shown as one line ("3x Ember Wolf").
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardGroup<'a> {
    /// The first printing seen for this name.
    pub card: &'a Card,
    /// Number of entries with this name.
    pub quantity: usize,
}

/// Group entries by card name.
///
/// Groups appear in first-seen order and are represented by the first
/// printing of each name.
#[must_use]
pub fn group_by_name<'a, I>(entries: I) -> Vec<CardGroup<'a>>
where
    I: IntoIterator<Item = &'a DeckEntry>,
{
    let mut groups: Vec<CardGroup<'a>> = Vec::new();
    let mut index: FxHashMap<&'a str, usize> = FxHashMap::default();

    for entry in entries {
        let name = entry.card.name.as_str();
        match index.get(name) {
            Some(&i) => groups[i].quantity += 1,
            None => {
                index.insert(name, groups.len());
                groups.push(CardGroup { card: &entry.card, quantity: 1 });
            }
        }
    }

    groups
}

/// Count entries per card name across everything passed in.
#[must_use]
pub fn card_counts<'a, I>(entries: I) -> FxHashMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a DeckEntry>,
{
    let mut counts: FxHashMap<&'a str, usize> = FxHashMap::default();
    for entry in entries {
        *counts.entry(entry.card.name.as_str()).or_insert(0) += 1;
    }
    counts
}
