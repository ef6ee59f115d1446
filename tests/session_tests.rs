//! Deck session tests.
//!
//! These tests build decks the way the editor does:
//! - Section auto-advance while filling Legend and Battlefields
//! - Add-time rejections
//! - Import, export and persistence of a session

use riftforge::cards::{Card, CardCatalog, CardId};
use riftforge::core::DeckRules;
use riftforge::decklist::{format_decklist, import_decklist};
use riftforge::pool::Section;
use riftforge::rules::{AddRejection, Admission};
use riftforge::session::DeckSession;
use riftforge::zones::DeckZone;

fn darius() -> Card {
    Card::new("legend", "Darius", "Legend").with_tags("Noxus").with_domains("Fury")
}

fn battlefield(i: usize) -> Card {
    Card::new(format!("bf{}", i), format!("Battlefield {}", i), "Battlefield")
}

fn vi() -> Card {
    Card::new("vi", "Vi", "Unit").with_supertype("Champion").with_tags("Noxus")
}

fn fury_rune() -> Card {
    Card::new("rune", "Fury Rune", "Rune").with_domains("Fury")
}

/// Fill every zone through the session.
fn build_full(session: &mut DeckSession) {
    session.add(darius()).unwrap();
    for i in 0..3 {
        session.add(battlefield(i)).unwrap();
    }
    session.add(vi()).unwrap();
    for i in 0..39 {
        session.add(Card::new(format!("m{}", i), format!("Card {}", i), "Spell")).unwrap();
    }
    session.select_section(Section::Runes);
    for _ in 0..12 {
        session.add(fury_rune()).unwrap();
    }
}

// =============================================================================
// Building a deck
// =============================================================================

/// Legend then Battlefields then Main, without manual section changes.
#[test]
fn test_auto_advance_through_sections() {
    let mut session = DeckSession::new();
    assert_eq!(session.section(), Section::Legend);

    assert_eq!(session.add(darius()).unwrap(), Admission::Admit(DeckZone::Legend));
    assert_eq!(session.section(), Section::Battlefield);

    session.add(battlefield(0)).unwrap();
    session.add(battlefield(1)).unwrap();
    assert_eq!(session.section(), Section::Battlefield);

    session.add(battlefield(2)).unwrap();
    assert_eq!(session.section(), Section::Main);
}

/// A deck built through the session validates once the champion is chosen.
#[test]
fn test_full_build_is_valid() {
    let mut session = DeckSession::new();
    build_full(&mut session);

    let report = session.report();
    assert!(report.is_deck_complete);
    assert!(!report.is_valid);
    assert!(report.is_champion_choice(&CardId::new("vi")));

    session.set_main_champion(Some(CardId::new("vi")));
    assert!(session.report().is_valid);
}

/// Each zone refuses cards past its capacity.
#[test]
fn test_zone_capacity_rejections() {
    let mut session = DeckSession::new();
    build_full(&mut session);

    assert_eq!(session.add(fury_rune()), Err(AddRejection::RunesFull { max: 12 }));

    session.select_section(Section::Main);
    let extra = Card::new("x", "Extra", "Unit");
    assert_eq!(session.add(extra), Err(AddRejection::MainDeckFull { max: 40 }));

    session.select_section(Section::Battlefield);
    assert_eq!(session.add(battlefield(9)), Err(AddRejection::BattlefieldsFull { max: 3 }));
}

/// Copy caps count Main Deck and Sideboard together.
#[test]
fn test_copy_limit_spans_sideboard() {
    let mut session = DeckSession::new();
    session.select_section(Section::Main);
    let wolf = || Card::new("wolf", "Ember Wolf", "Unit");

    session.add(wolf()).unwrap();
    session.add(wolf()).unwrap();
    session.add_to(wolf(), true).unwrap();

    let err = session.add_to(wolf(), true).unwrap_err();
    assert_eq!(err, AddRejection::CopyLimit { name: "Ember Wolf".into(), limit: 3 });
    assert_eq!(err.to_string(), "You cannot have more than 3 copies of 'Ember Wolf' in total.");
}

/// Legends and Battlefields never go to the sideboard.
#[test]
fn test_sideboard_rejects_legend_and_battlefield() {
    let mut session = DeckSession::new();
    session.select_section(Section::Sideboard);

    assert_eq!(
        session.add(darius()),
        Err(AddRejection::NotAllowedInSideboard { card_type: "Legend".into() })
    );
    assert_eq!(
        session.add(battlefield(0)),
        Err(AddRejection::NotAllowedInSideboard { card_type: "Battlefield".into() })
    );
    assert!(session.is_empty());
}

/// Smaller formats come from custom rules.
#[test]
fn test_custom_rules_session() {
    let rules = DeckRules::default().with_battlefield_count(1).with_main_deck_size(2).with_rune_count(1);
    let mut session = DeckSession::with_rules(rules);

    session.add(darius()).unwrap();
    session.add(battlefield(0)).unwrap();
    assert_eq!(session.section(), Section::Main);
    session.add(vi()).unwrap();
    session.add(Card::new("w", "Ember Wolf", "Unit")).unwrap();
    session.select_section(Section::Runes);
    session.add(fury_rune()).unwrap();
    session.set_main_champion(Some(CardId::new("vi")));

    assert!(session.report().is_valid);
}

// =============================================================================
// Import, export and persistence
// =============================================================================

/// Export, re-import into a fresh session and get the same deck back.
#[test]
fn test_export_import_session() {
    let mut session = DeckSession::new();
    build_full(&mut session);
    session.add_to(Card::new("sb", "Spare", "Spell"), true).unwrap();

    let text = format_decklist(&session.zones());
    assert!(text.starts_with("1x Darius\n"));
    assert!(text.ends_with("\n\nSideboard:\n1x Spare"));

    let catalog: CardCatalog = session.entries().iter().map(|e| e.card.clone()).collect();
    let import = import_decklist(&text, &catalog).unwrap();
    assert_eq!(import.main_champion, Some(CardId::new("vi")));

    let mut restored = DeckSession::new();
    restored.load(import);

    assert_eq!(restored.len(), session.len());
    assert_eq!(restored.section(), Section::Main);
    assert!(restored.report().is_valid);
}

/// A session survives a JSON round trip with its rules and section.
#[test]
fn test_session_persists_as_json() {
    let mut session = DeckSession::with_rules(DeckRules::default().with_sideboard_max(4));
    session.add(darius()).unwrap();
    session.add(battlefield(0)).unwrap();

    let json = serde_json::to_string(&session).unwrap();
    let restored: DeckSession = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.len(), 2);
    assert_eq!(restored.section(), Section::Battlefield);
    assert_eq!(restored.rules().sideboard_max, 4);
    assert_eq!(restored.report(), session.report());
}
