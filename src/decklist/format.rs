//! Deck-list text export.

use crate::zones::{group_by_name, Zones};

/// Render a deck as `Nx Name` lines that `parse_decklist` reads back.
///
/// The Legend comes first, then the battlefields, main deck and runes
/// grouped by name. A `Sideboard:` block follows when the sideboard is not
/// empty, after a blank line if anything precedes it. Unnamed cards are
/// skipped.
///
/// ```
/// use riftforge::cards::{Card, DeckEntry};
/// use riftforge::decklist::format_decklist;
/// use riftforge::zones::decompose;
///
/// let deck = vec![
///     DeckEntry::main(Card::new("1", "Darius", "Legend")),
///     DeckEntry::main(Card::new("2", "Ember Wolf", "Unit")),
///     DeckEntry::main(Card::new("2", "Ember Wolf", "Unit")),
///     DeckEntry::sideboard(Card::new("3", "Vi", "Champion")),
/// ];
/// assert_eq!(
///     format_decklist(&decompose(&deck)),
///     "1x Darius\n2x Ember Wolf\n\nSideboard:\n1x Vi"
/// );
/// ```
#[must_use]
pub fn format_decklist(zones: &Zones<'_>) -> String {
    let mut lines: Vec<String> = Vec::new();

    if let Some(legend) = zones.legend().filter(|l| !l.name.is_empty()) {
        lines.push(format!("1x {}", legend.name));
    }

    let deck = zones.battlefields.iter().chain(&zones.main_deck).chain(&zones.runes).copied();
    for group in group_by_name(deck).into_iter().filter(|g| !g.card.name.is_empty()) {
        lines.push(format!("{}x {}", group.quantity, group.card.name));
    }

    let sideboard: Vec<_> =
        group_by_name(zones.sideboard.iter().copied()).into_iter().filter(|g| !g.card.name.is_empty()).collect();
    if !sideboard.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Sideboard:".to_string());
        for group in sideboard {
            lines.push(format!("{}x {}", group.quantity, group.card.name));
        }
    }

    lines.join("\n")
}
