//! Pool filter tests.
//!
//! These tests drive the catalog browse path end to end:
//! - Card records in their loose wire shape
//! - Section constraints applied through `CardCatalog::browse`
//! - Signature gating by the current Legend's tags

use riftforge::cards::{Card, CardCatalog, DeckEntry};
use riftforge::pool::{eligible_for, next_section, Section};
use riftforge::zones::decompose;

/// A small catalog in the shape the card database returns.
fn catalog() -> CardCatalog {
    let json = r#"[
        {"id": 1, "name": "Darius, Hand of Noxus", "type": "Legend", "tags": "Noxus", "domain": "Fury"},
        {"id": 2, "name": "Ahri, Nine-Tailed Fox", "type": "Legend", "tags": ["Ionia"], "domain": ["Calm", "Mind"]},
        {"id": 3, "name": "The Grand Plaza", "type": "Battlefield"},
        {"id": 4, "name": "Ember Wolf", "type": "Unit", "energy": "2"},
        {"id": 5, "name": "Vi", "type": "Unit", "supertype": "Champion", "tags": [{"name": "Noxus"}, {"name": "Piltover"}]},
        {"id": 6, "name": "Noxian Guillotine", "type": "Spell", "supertype": "Signature", "tags": "Noxus"},
        {"id": 7, "name": "Fox-Fire", "type": "Spell", "supertype": "Signature", "tags": "Ionia"},
        {"id": 8, "name": "Fury Rune", "type": "Rune", "domain": "Fury"},
        {"id": 9, "name": "Sprite", "type": "Unit", "supertype": "Token"},
        {"id": "10", "name": "Longsword", "type": "Gear", "tags": null, "domain": null}
    ]"#;
    let cards: Vec<Card> = serde_json::from_str(json).unwrap();
    cards.into_iter().collect()
}

fn names<'a>(cards: impl Iterator<Item = &'a Card>) -> Vec<&'a str> {
    cards.map(|c| c.name.as_str()).collect()
}

fn noxus_deck(catalog: &CardCatalog) -> Vec<DeckEntry> {
    let darius = catalog.resolve_name("Darius").unwrap().clone();
    vec![DeckEntry::main(darius)]
}

/// Wire records normalize into label sets and lenient stats.
#[test]
fn test_catalog_records_normalize() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 10);

    let vi = catalog.resolve_name("vi").unwrap();
    assert!(vi.tags.contains("Noxus"));
    assert!(vi.tags.contains("Piltover"));

    let wolf = catalog.resolve_name("Ember Wolf").unwrap();
    assert_eq!(wolf.energy, Some(2));

    let sword = catalog.resolve_name("Longsword").unwrap();
    assert!(sword.tags.is_empty());
    assert!(sword.domains.is_empty());
}

/// Without a Legend, editing starts at the Legend section.
#[test]
fn test_legend_section_browse() {
    let catalog = catalog();
    let entries: Vec<DeckEntry> = Vec::new();
    let zones = decompose(&entries);
    assert_eq!(next_section(&zones), Section::Legend);

    let constraint = eligible_for(Some(Section::Legend), &zones);
    assert_eq!(
        names(catalog.browse(&constraint)),
        vec!["Darius, Hand of Noxus", "Ahri, Nine-Tailed Fox"]
    );
}

/// Main section offers units, spells, gear and champions, with matching
/// Signatures only.
#[test]
fn test_main_section_browse() {
    let catalog = catalog();
    let deck = noxus_deck(&catalog);
    let constraint = eligible_for(Some(Section::Main), &decompose(&deck));

    assert_eq!(
        names(catalog.browse(&constraint)),
        vec!["Ember Wolf", "Vi", "Noxian Guillotine", "Longsword"]
    );
}

/// With no Legend, every Signature card is hidden.
#[test]
fn test_signatures_hidden_without_legend() {
    let catalog = catalog();
    let entries: Vec<DeckEntry> = Vec::new();
    let constraint = eligible_for(Some(Section::Main), &decompose(&entries));

    assert_eq!(names(catalog.browse(&constraint)), vec!["Ember Wolf", "Vi", "Longsword"]);
}

/// Sideboard offers everything except Legends and Battlefields.
#[test]
fn test_sideboard_section_browse() {
    let catalog = catalog();
    let deck = noxus_deck(&catalog);
    let constraint = eligible_for(Some(Section::Sideboard), &decompose(&deck));

    assert_eq!(
        names(catalog.browse(&constraint)),
        vec!["Ember Wolf", "Vi", "Noxian Guillotine", "Fury Rune", "Longsword"]
    );
}

/// Battlefield and Rune sections are single-category.
#[test]
fn test_single_category_sections() {
    let catalog = catalog();
    let deck = noxus_deck(&catalog);
    let zones = decompose(&deck);

    let fields = eligible_for(Some(Section::Battlefield), &zones);
    assert_eq!(names(catalog.browse(&fields)), vec!["The Grand Plaza"]);

    let runes = eligible_for(Some(Section::Runes), &zones);
    assert_eq!(names(catalog.browse(&runes)), vec!["Fury Rune"]);
    assert_eq!(runes.type_param(), "Rune");
}

/// No section means every collectible type, still gated on Signatures.
#[test]
fn test_no_section_browse() {
    let catalog = catalog();
    let deck = noxus_deck(&catalog);
    let constraint = eligible_for(None, &decompose(&deck));

    let browsed = names(catalog.browse(&constraint));
    assert_eq!(browsed.len(), 8);
    assert!(!browsed.contains(&"Sprite"));
    assert!(!browsed.contains(&"Fox-Fire"));
}
