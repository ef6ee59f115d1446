//! Editing sections and the auto-advance policy.
//!
//! The active section is owned by the caller. These helpers only answer
//! "where should editing start" and "where should it move after an add":
//!
//! ```text
//! Legend ──filled──▶ Battlefield ──3 placed──▶ Main
//!    └──filled, battlefields already full──────▲
//! Runes / Sideboard: chosen explicitly, never auto-advanced from.
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::ZoneCategory;
use crate::core::DeckRules;
use crate::zones::{DeckZone, Zones};

/// Deck section currently being edited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Legend,
    Battlefield,
    Main,
    Runes,
    Sideboard,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 5] = [
        Section::Legend,
        Section::Battlefield,
        Section::Main,
        Section::Runes,
        Section::Sideboard,
    ];

    /// Card `type` values offered while editing this section.
    #[must_use]
    pub fn allowed_types(self) -> &'static [&'static str] {
        match self {
            Section::Legend => &["Legend"],
            Section::Battlefield => &["Battlefield"],
            Section::Main => &["Unit", "Spell", "Gear", "Champion"],
            Section::Runes => &["Rune"],
            Section::Sideboard => &["Unit", "Spell", "Gear", "Champion", "Rune"],
        }
    }

    /// Categories this section accepts. These are what `check_addition`
    /// places in `zone()`.
    #[must_use]
    pub fn allowed_categories(self) -> &'static [ZoneCategory] {
        match self {
            Section::Legend => &[ZoneCategory::Legend],
            Section::Battlefield => &[ZoneCategory::Battlefield],
            Section::Main => &[ZoneCategory::Champion, ZoneCategory::Other],
            Section::Runes => &[ZoneCategory::Rune],
            Section::Sideboard => &[ZoneCategory::Champion, ZoneCategory::Other, ZoneCategory::Rune],
        }
    }

    /// True if additions from this section go to the sideboard.
    #[must_use]
    pub fn is_sideboard(self) -> bool {
        self == Section::Sideboard
    }

    /// Zone this section fills.
    #[must_use]
    pub fn zone(self) -> DeckZone {
        match self {
            Section::Legend => DeckZone::Legend,
            Section::Battlefield => DeckZone::Battlefield,
            Section::Main => DeckZone::MainDeck,
            Section::Runes => DeckZone::Runes,
            Section::Sideboard => DeckZone::Sideboard,
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Section::Legend => "legend",
            Section::Battlefield => "battlefield",
            Section::Main => "main",
            Section::Runes => "runes",
            Section::Sideboard => "sideboard",
        };
        f.write_str(name)
    }
}

/// Section to open a deck at, using the standard rules.
#[must_use]
pub fn next_section(zones: &Zones<'_>) -> Section {
    next_section_with(zones, &DeckRules::default())
}

/// Section to open a deck at: the first of Legend, Battlefield, Main that
/// still needs cards (Main once the first two are satisfied).
#[must_use]
pub fn next_section_with(zones: &Zones<'_>, rules: &DeckRules) -> Section {
    if !zones.has_legend() {
        Section::Legend
    } else if zones.battlefields.len() < rules.battlefield_count {
        Section::Battlefield
    } else {
        Section::Main
    }
}

/// Auto-advance after a card was added, using the standard rules.
#[must_use]
pub fn advance(current: Section, zones: &Zones<'_>) -> Section {
    advance_with(current, zones, &DeckRules::default())
}

/// Auto-advance after a card was added.
///
/// Only the Legend and Battlefield sections move on their own; every other
/// section stays where the user put it.
#[must_use]
pub fn advance_with(current: Section, zones: &Zones<'_>, rules: &DeckRules) -> Section {
    match current {
        Section::Legend if zones.has_legend() => {
            if zones.battlefields.len() < rules.battlefield_count {
                Section::Battlefield
            } else {
                Section::Main
            }
        }
        Section::Battlefield if zones.battlefields.len() == rules.battlefield_count => Section::Main,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, DeckEntry};
    use crate::zones::decompose;

    fn legend() -> DeckEntry {
        DeckEntry::main(Card::new("L", "Darius", "Legend"))
    }

    fn battlefield(i: usize) -> DeckEntry {
        DeckEntry::main(Card::new(format!("b{}", i), format!("Field {}", i), "Battlefield"))
    }

    #[test]
    fn test_next_section() {
        let empty: Vec<DeckEntry> = Vec::new();
        assert_eq!(next_section(&decompose(&empty)), Section::Legend);

        let with_legend = vec![legend(), battlefield(0)];
        assert_eq!(next_section(&decompose(&with_legend)), Section::Battlefield);

        let full = vec![legend(), battlefield(0), battlefield(1), battlefield(2)];
        assert_eq!(next_section(&decompose(&full)), Section::Main);
    }

    #[test]
    fn test_advance_from_legend() {
        let entries = vec![legend()];
        assert_eq!(advance(Section::Legend, &decompose(&entries)), Section::Battlefield);

        let entries = vec![legend(), battlefield(0), battlefield(1), battlefield(2)];
        assert_eq!(advance(Section::Legend, &decompose(&entries)), Section::Main);

        let entries: Vec<DeckEntry> = Vec::new();
        assert_eq!(advance(Section::Legend, &decompose(&entries)), Section::Legend);
    }

    #[test]
    fn test_advance_from_battlefield() {
        let entries = vec![legend(), battlefield(0), battlefield(1)];
        assert_eq!(advance(Section::Battlefield, &decompose(&entries)), Section::Battlefield);

        let entries = vec![legend(), battlefield(0), battlefield(1), battlefield(2)];
        assert_eq!(advance(Section::Battlefield, &decompose(&entries)), Section::Main);
    }

    #[test]
    fn test_other_sections_never_advance() {
        let entries = vec![legend(), battlefield(0), battlefield(1), battlefield(2)];
        let zones = decompose(&entries);
        for section in [Section::Main, Section::Runes, Section::Sideboard] {
            assert_eq!(advance(section, &zones), section);
        }
    }

    #[test]
    fn test_section_metadata() {
        assert_eq!(Section::default(), Section::Legend);
        assert!(Section::Sideboard.is_sideboard());
        assert!(!Section::Main.is_sideboard());
        assert_eq!(Section::Runes.zone(), DeckZone::Runes);
        assert!(!Section::Sideboard.allowed_types().contains(&"Legend"));
        assert!(!Section::Sideboard.allowed_types().contains(&"Battlefield"));
        assert!(!Section::Sideboard.allowed_categories().contains(&ZoneCategory::Legend));
        assert!(Section::Main.allowed_categories().iter().all(|c| c.is_main_deck()));
        assert_eq!(Section::Main.to_string(), "main");
        assert_eq!(serde_json::to_string(&Section::Battlefield).unwrap(), r#""battlefield""#);
    }
}
