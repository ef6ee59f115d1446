//! Deck editing session.
//!
//! `DeckSession` is the caller-side state the engine's pure functions are
//! designed around: the entry multiset, the Main Champion id and the active
//! section. Every query (`zones`, `report`, `pool_constraint`) is recomputed
//! from the current entries.
//!
//! Entries are stored in an `im::Vector`, so `snapshot()` and `clone()` are
//! O(1) and a snapshot handed to another thread never observes later edits.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, DeckEntry};
use crate::core::DeckRules;
use crate::decklist::DecklistImport;
use crate::pool::{advance_with, eligible_for, next_section_with, PoolConstraint, Section};
use crate::rules::{check_addition, validate_with, AddRejection, Admission, ValidationReport};
use crate::zones::{decompose, Zones};

/// An in-progress deck.
///
/// ## Usage
///
/// ```
/// use riftforge::cards::Card;
/// use riftforge::pool::Section;
/// use riftforge::session::DeckSession;
///
/// let mut session = DeckSession::new();
/// assert_eq!(session.section(), Section::Legend);
///
/// session.add(Card::new("1", "Darius", "Legend").with_tags("Noxus")).unwrap();
/// assert_eq!(session.section(), Section::Battlefield);
///
/// let report = session.report();
/// assert!(report.has_legend);
/// assert!(!report.is_valid);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeckSession {
    entries: Vector<DeckEntry>,
    main_champion: Option<CardId>,
    section: Section,
    #[serde(default)]
    rules: DeckRules,
}

impl DeckSession {
    /// Create an empty session with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session with custom rules.
    #[must_use]
    pub fn with_rules(rules: DeckRules) -> Self {
        Self { rules, ..Self::default() }
    }

    /// Restore a persisted deck. Editing resumes at the first section that
    /// still needs cards.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = DeckEntry>, main_champion: Option<CardId>) -> Self {
        let mut session = Self::new();
        session.replace(entries.into_iter().collect(), main_champion);
        session
    }

    fn replace(&mut self, entries: Vector<DeckEntry>, main_champion: Option<CardId>) {
        self.entries = entries;
        self.main_champion = main_champion;
        self.section = next_section_with(&decompose(self.entries.iter()), &self.rules);
    }

    /// Replace the deck with an imported list.
    pub fn load(&mut self, import: DecklistImport) {
        log::info!(
            "loading {} entries into deck session ({} names unresolved)",
            import.entries.len(),
            import.missing.len()
        );
        self.replace(import.entries.into_iter().collect(), import.main_champion);
    }

    /// Current entries.
    #[must_use]
    pub fn entries(&self) -> &Vector<DeckEntry> {
        &self.entries
    }

    /// O(1) copy of the current entries.
    #[must_use]
    pub fn snapshot(&self) -> Vector<DeckEntry> {
        self.entries.clone()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored Main Champion id.
    #[must_use]
    pub fn main_champion(&self) -> Option<&CardId> {
        self.main_champion.as_ref()
    }

    /// Active section.
    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    /// Rules in force.
    #[must_use]
    pub fn rules(&self) -> &DeckRules {
        &self.rules
    }

    /// Zone decomposition of the current entries.
    #[must_use]
    pub fn zones(&self) -> Zones<'_> {
        decompose(self.entries.iter())
    }

    /// Validation report for the current entries.
    #[must_use]
    pub fn report(&self) -> ValidationReport {
        validate_with(&self.zones(), self.main_champion.as_ref(), &self.rules)
    }

    /// Catalog constraint for the active section.
    #[must_use]
    pub fn pool_constraint(&self) -> PoolConstraint {
        eligible_for(Some(self.section), &self.zones())
    }

    /// Switch section explicitly. No auto-advance happens here.
    pub fn select_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Designate the Main Champion. Validity is judged by the report.
    pub fn set_main_champion(&mut self, id: Option<CardId>) {
        self.main_champion = id;
    }

    /// Add a card to the active section's zone.
    pub fn add(&mut self, card: Card) -> Result<Admission, AddRejection> {
        self.add_to(card, false)
    }

    /// Add a card, forcing the sideboard when `to_sideboard` is set.
    ///
    /// A new Legend replaces the current one. After a successful add the
    /// active section auto-advances.
    pub fn add_to(&mut self, card: Card, to_sideboard: bool) -> Result<Admission, AddRejection> {
        let to_sideboard = to_sideboard || self.section.is_sideboard();
        let admission = check_addition(&self.zones(), &card, to_sideboard, &self.rules)?;

        if let Admission::ReplaceLegend { previous } = &admission {
            self.remove(previous, false);
        }
        log::debug!("adding {} ({}) as {:?}", card.id, card.name, admission);
        self.entries.push_back(DeckEntry::new(card, to_sideboard));

        self.section = advance_with(self.section, &decompose(self.entries.iter()), &self.rules);
        Ok(admission)
    }

    /// Remove one entry with this id and placement.
    ///
    /// Returns the removed entry, or `None` if there was no match.
    pub fn remove(&mut self, id: &CardId, is_sideboard: bool) -> Option<DeckEntry> {
        let idx = self
            .entries
            .iter()
            .position(|e| &e.card.id == id && e.is_sideboard == is_sideboard)?;
        Some(self.entries.remove(idx))
    }

    /// Remove every entry and the Main Champion; editing restarts at Legend.
    pub fn clear(&mut self) {
        self.replace(Vector::new(), None);
    }
}
