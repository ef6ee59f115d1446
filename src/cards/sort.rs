//! Display sorting for card lists.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::definition::Card;

/// Sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Name,
    Energy,
    Rarity,
    Type,
    Power,
    Might,
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

fn rarity_rank(card: &Card) -> u8 {
    match card.rarity.as_deref().map(str::to_lowercase).as_deref() {
        Some("showcase") => 0,
        Some("epic") => 1,
        Some("rare") => 2,
        Some("uncommon") => 3,
        Some("common") => 4,
        _ => 5,
    }
}

fn type_rank(card: &Card) -> u8 {
    match card.card_type.as_str() {
        "Legend" => 0,
        "Battlefield" => 1,
        "Champion" => 2,
        "Unit" => 3,
        "Spell" => 4,
        "Gear" => 5,
        "Rune" => 6,
        _ => 7,
    }
}

fn compare(a: &Card, b: &Card, mode: SortMode) -> Ordering {
    let by_name = || a.name.cmp(&b.name);
    let primary = match mode {
        SortMode::Name => return by_name(),
        SortMode::Energy => a.energy.unwrap_or(0).cmp(&b.energy.unwrap_or(0)),
        SortMode::Rarity => rarity_rank(a).cmp(&rarity_rank(b)),
        SortMode::Type => type_rank(a).cmp(&type_rank(b)),
        SortMode::Power => a.power.unwrap_or(0).cmp(&b.power.unwrap_or(0)),
        SortMode::Might => a.might.unwrap_or(0).cmp(&b.might.unwrap_or(0)),
    };
    primary.then_with(by_name)
}

/// Sort cards for display.
///
/// Missing stats sort as 0, unknown rarities and types sort last, and ties
/// fall back to name. `Desc` reverses the whole comparison. The sort is
/// stable.
pub fn sort_cards(cards: &mut [Card], mode: SortMode, order: SortOrder) {
    cards.sort_by(|a, b| {
        let ord = compare(a, b, mode);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}
