//! Add-time guard for deck edits.
//!
//! The validator reports problems after the fact; `check_addition` refuses
//! the edits that would only ever make a deck worse: over-cap copies, a full
//! zone, or a Legend/Battlefield in the sideboard. Rune domains and Signature
//! tags are not checked here.

use thiserror::Error;

use crate::cards::{classify, Card, CardId, ZoneCategory};
use crate::core::DeckRules;
use crate::zones::{DeckZone, Zones};

/// Why a card may not be added. `Display` is the message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AddRejection {
    #[error("You can only have {limit} copy of a Legend.")]
    LegendCopyLimit { limit: usize },
    #[error("You cannot have more than {limit} copies of '{name}' in total.")]
    CopyLimit { name: String, limit: usize },
    #[error("{card_type}s cannot be added to the sideboard.")]
    NotAllowedInSideboard { card_type: String },
    #[error("Sideboard is full (max {max} cards).")]
    SideboardFull { max: usize },
    #[error("You can only have {max} Battlefields.")]
    BattlefieldsFull { max: usize },
    #[error("You can only have {max} Runes.")]
    RunesFull { max: usize },
    #[error("Main deck is full (max {max} cards).")]
    MainDeckFull { max: usize },
}

/// How an accepted card enters the deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Add the card to this zone.
    Admit(DeckZone),
    /// Add the card as Legend after removing the current one.
    ReplaceLegend { previous: CardId },
}

/// Check whether `card` may be added to the deck.
pub fn check_addition(
    zones: &Zones<'_>,
    card: &Card,
    to_sideboard: bool,
    rules: &DeckRules,
) -> Result<Admission, AddRejection> {
    let category = classify(card);
    let copies = zones.entries().filter(|e| e.card.name == card.name).count();

    match category {
        ZoneCategory::Legend => {
            if copies >= rules.legend_copy_limit {
                return Err(AddRejection::LegendCopyLimit { limit: rules.legend_copy_limit });
            }
        }
        // Battlefields are bounded by their zone capacity.
        ZoneCategory::Battlefield => {}
        _ => {
            if let Some(limit) = category.copy_limit(rules) {
                if copies >= limit {
                    return Err(AddRejection::CopyLimit { name: card.name.clone(), limit });
                }
            }
        }
    }

    if to_sideboard {
        if matches!(category, ZoneCategory::Legend | ZoneCategory::Battlefield) {
            let card_type = if category == ZoneCategory::Legend { "Legend" } else { "Battlefield" };
            return Err(AddRejection::NotAllowedInSideboard { card_type: card_type.to_string() });
        }
        if zones.sideboard.len() >= rules.sideboard_max {
            return Err(AddRejection::SideboardFull { max: rules.sideboard_max });
        }
        return Ok(Admission::Admit(DeckZone::Sideboard));
    }

    match category {
        ZoneCategory::Legend => Ok(match zones.legend() {
            Some(previous) => Admission::ReplaceLegend { previous: previous.id.clone() },
            None => Admission::Admit(DeckZone::Legend),
        }),
        ZoneCategory::Battlefield if zones.battlefields.len() >= rules.battlefield_count => {
            Err(AddRejection::BattlefieldsFull { max: rules.battlefield_count })
        }
        ZoneCategory::Battlefield => Ok(Admission::Admit(DeckZone::Battlefield)),
        ZoneCategory::Rune if zones.runes.len() >= rules.rune_count => {
            Err(AddRejection::RunesFull { max: rules.rune_count })
        }
        ZoneCategory::Rune => Ok(Admission::Admit(DeckZone::Runes)),
        ZoneCategory::Champion | ZoneCategory::Other if zones.main_deck.len() >= rules.main_deck_size => {
            Err(AddRejection::MainDeckFull { max: rules.main_deck_size })
        }
        ZoneCategory::Champion | ZoneCategory::Other => Ok(Admission::Admit(DeckZone::MainDeck)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DeckEntry;
    use crate::zones::decompose;

    fn rules() -> DeckRules {
        DeckRules::default()
    }

    #[test]
    fn test_admit_into_empty_deck() {
        let entries: Vec<DeckEntry> = Vec::new();
        let zones = decompose(&entries);

        let legend = Card::new("L", "Darius", "Legend");
        assert_eq!(check_addition(&zones, &legend, false, &rules()), Ok(Admission::Admit(DeckZone::Legend)));

        let wolf = Card::new("w", "Wolf", "Unit");
        assert_eq!(check_addition(&zones, &wolf, false, &rules()), Ok(Admission::Admit(DeckZone::MainDeck)));
        assert_eq!(check_addition(&zones, &wolf, true, &rules()), Ok(Admission::Admit(DeckZone::Sideboard)));
    }

    #[test]
    fn test_replace_legend() {
        let entries = vec![DeckEntry::main(Card::new("L", "Darius", "Legend"))];
        let zones = decompose(&entries);

        let other = Card::new("L2", "Sett", "Legend");
        assert_eq!(
            check_addition(&zones, &other, false, &rules()),
            Ok(Admission::ReplaceLegend { previous: CardId::new("L") })
        );

        let same = Card::new("L3", "Darius", "Legend");
        assert_eq!(
            check_addition(&zones, &same, false, &rules()),
            Err(AddRejection::LegendCopyLimit { limit: 1 })
        );
    }

    #[test]
    fn test_global_copy_limit_counts_sideboard() {
        let entries = vec![
            DeckEntry::main(Card::new("1", "Wolf", "Unit")),
            DeckEntry::main(Card::new("2", "Wolf", "Unit")),
            DeckEntry::sideboard(Card::new("3", "Wolf", "Unit")),
        ];
        let zones = decompose(&entries);
        let err = check_addition(&zones, &Card::new("4", "Wolf", "Unit"), false, &rules()).unwrap_err();
        assert_eq!(err.to_string(), "You cannot have more than 3 copies of 'Wolf' in total.");
    }

    #[test]
    fn test_sideboard_refuses_legend_and_battlefield() {
        let entries: Vec<DeckEntry> = Vec::new();
        let zones = decompose(&entries);

        let err = check_addition(&zones, &Card::new("b", "Arena", "Battlefield"), true, &rules()).unwrap_err();
        assert_eq!(err.to_string(), "Battlefields cannot be added to the sideboard.");
        let err = check_addition(&zones, &Card::new("l", "Darius", "Legend"), true, &rules()).unwrap_err();
        assert!(matches!(err, AddRejection::NotAllowedInSideboard { .. }));
    }

    #[test]
    fn test_sideboard_full() {
        let entries: Vec<_> =
            (0..8).map(|i| DeckEntry::sideboard(Card::new(format!("{}", i), format!("Card {}", i), "Unit"))).collect();
        let zones = decompose(&entries);
        assert_eq!(
            check_addition(&zones, &Card::new("x", "Extra", "Spell"), true, &rules()),
            Err(AddRejection::SideboardFull { max: 8 })
        );
    }

    #[test]
    fn test_zone_capacities() {
        let mut entries: Vec<_> = (0..3)
            .map(|i| DeckEntry::main(Card::new(format!("b{}", i), format!("Field {}", i), "Battlefield")))
            .collect();
        entries.extend((0..12).map(|i| DeckEntry::main(Card::new(format!("r{}", i), "Fury Rune", "Rune"))));
        entries.extend((0..40).map(|i| DeckEntry::main(Card::new(format!("m{}", i), format!("Unit {}", i), "Unit"))));
        let zones = decompose(&entries);

        assert_eq!(
            check_addition(&zones, &Card::new("b9", "Field 9", "Battlefield"), false, &rules()),
            Err(AddRejection::BattlefieldsFull { max: 3 })
        );
        assert_eq!(
            check_addition(&zones, &Card::new("r99", "Fury Rune", "Rune"), false, &rules()),
            Err(AddRejection::RunesFull { max: 12 })
        );
        assert_eq!(
            check_addition(&zones, &Card::new("m99", "Fresh", "Unit"), false, &rules()),
            Err(AddRejection::MainDeckFull { max: 40 })
        );
    }

    #[test]
    fn test_mismatched_rune_is_admitted() {
        let entries = vec![DeckEntry::main(Card::new("L", "Darius", "Legend").with_domains("Fury"))];
        let zones = decompose(&entries);
        let rune = Card::new("r", "Order Rune", "Rune").with_domains("Order");
        assert_eq!(check_addition(&zones, &rune, false, &rules()), Ok(Admission::Admit(DeckZone::Runes)));
    }
}
