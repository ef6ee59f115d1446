//! Card catalog for id and name lookup.
//!
//! The `CardCatalog` is an in-memory copy of the card pool. It supports
//! lookup by `CardId`, name resolution for pasted deck lists, and browsing
//! with a `PoolConstraint`.

use rustc_hash::FxHashMap;

use super::classify::is_token;
use super::definition::{Card, CardId};
use crate::pool::PoolConstraint;

/// In-memory card catalog.
///
/// Iteration order is insertion order.
///
/// ## Example
///
/// ```
/// use riftforge::cards::{Card, CardCatalog, CardId};
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert(Card::new("1", "Ember Wolf", "Unit"));
///
/// let found = catalog.get(&CardId::new("1")).unwrap();
/// assert_eq!(found.name, "Ember Wolf");
/// assert!(catalog.resolve_name("ember wolf").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    by_id: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a card.
    ///
    /// Returns the previous card with the same id, if any. A replaced card
    /// keeps its position.
    pub fn insert(&mut self, card: Card) -> Option<Card> {
        if let Some(&idx) = self.by_id.get(&card.id) {
            return Some(std::mem::replace(&mut self.cards[idx], card));
        }
        self.by_id.insert(card.id.clone(), self.cards.len());
        self.cards.push(card);
        None
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.by_id.get(id).map(|&idx| &self.cards[idx])
    }

    /// Check if a card ID is present.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards, Tokens included.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }

    /// Browse collectible cards eligible under a pool constraint.
    ///
    /// Tokens are never returned.
    pub fn browse<'a>(&'a self, constraint: &'a PoolConstraint) -> impl Iterator<Item = &'a Card> + 'a {
        self.cards.iter().filter(move |c| constraint.matches(c))
    }

    /// Resolve a free-text card name the way a pasted deck list is matched.
    ///
    /// Tries, in order: exact case-insensitive name, a name containing the
    /// query, and a name starting with the part of the query before its
    /// first comma. Tokens are skipped. Returns the first match in catalog
    /// order.
    #[must_use]
    pub fn resolve_name(&self, query: &str) -> Option<&Card> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        let collectible = || self.cards.iter().filter(|c| !is_token(c));

        collectible()
            .find(|c| c.name.to_lowercase() == query)
            .or_else(|| collectible().find(|c| c.name.to_lowercase().contains(&query)))
            .or_else(|| {
                let (head, _) = query.split_once(',')?;
                let head = head.trim();
                if head.is_empty() {
                    return None;
                }
                collectible().find(|c| c.name.to_lowercase().starts_with(head))
            })
    }
}

impl FromIterator<Card> for CardCatalog {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for card in iter {
            catalog.insert(card);
        }
        catalog
    }
}
