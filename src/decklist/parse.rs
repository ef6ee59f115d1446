//! Deck-list text parsing and resolution.
//!
//! Accepted format, one card per line:
//!
//! ```text
//! 1x Darius, Hand of Noxus
//! 3x Ember Wolf
//! Vi
//!
//! Sideboard:
//! 2x Noxian Guillotine
//! ```
//!
//! A bare name means one copy. Everything after a line containing
//! `sideboard:` (any case) goes to the sideboard.

use serde::Serialize;
use thiserror::Error;

use crate::cards::{classify, CardCatalog, CardId, DeckEntry, ZoneCategory};

/// Errors raised while parsing a deck list.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecklistError {
    /// No card lines at all.
    #[error("no cards found in deck list")]
    Empty,
    /// A `<n>x` prefix that is zero, not a number or above `MAX_LINE_QUANTITY`.
    #[error("invalid quantity on line {line}: {text:?}")]
    InvalidQuantity { line: usize, text: String },
}

/// Largest quantity a single line may ask for. No deck zone holds more
/// cards than this.
pub const MAX_LINE_QUANTITY: usize = 99;

/// One parsed card line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecklistLine {
    pub quantity: usize,
    pub name: String,
    pub sideboard: bool,
}

/// A deck list resolved against the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecklistImport {
    /// Entries to load, one per copy, in list order.
    pub entries: Vec<DeckEntry>,
    /// First single-copy main deck Champion in the list.
    pub main_champion: Option<CardId>,
    /// Names that matched no catalog card.
    pub missing: Vec<String>,
}

/// Split `"3x Name"` into quantity and name. Lines without an `x` prefix
/// are a single copy.
fn split_quantity(line: &str) -> Option<Result<(usize, &str), ()>> {
    let (head, rest) = line.split_once(char::is_whitespace)?;
    let digits = head.strip_suffix(['x', 'X'])?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let name = rest.trim();
    if name.is_empty() {
        return None;
    }
    Some(match digits.parse::<usize>() {
        Ok(n) if (1..=MAX_LINE_QUANTITY).contains(&n) => Ok((n, name)),
        _ => Err(()),
    })
}

/// Parse deck-list text into lines.
pub fn parse_decklist(text: &str) -> Result<Vec<DecklistLine>, DecklistError> {
    let mut lines = Vec::new();
    let mut sideboard = false;

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.to_lowercase().contains("sideboard:") {
            sideboard = true;
            continue;
        }

        let (quantity, name) = match split_quantity(line) {
            Some(Ok(parsed)) => parsed,
            Some(Err(())) => {
                return Err(DecklistError::InvalidQuantity { line: i + 1, text: line.to_string() });
            }
            None => (1, line),
        };
        lines.push(DecklistLine { quantity, name: name.to_string(), sideboard });
    }

    if lines.is_empty() {
        return Err(DecklistError::Empty);
    }
    Ok(lines)
}

/// Resolve parsed lines against the catalog.
///
/// Unresolved names are collected rather than failing the import. A line
/// built by hand with more than `MAX_LINE_QUANTITY` copies is clamped.
#[must_use]
pub fn resolve_decklist(lines: &[DecklistLine], catalog: &CardCatalog) -> DecklistImport {
    let mut import = DecklistImport::default();

    for line in lines {
        let Some(card) = catalog.resolve_name(&line.name) else {
            log::warn!("deck list card not found: {}", line.name);
            import.missing.push(line.name.clone());
            continue;
        };

        if import.main_champion.is_none()
            && line.quantity == 1
            && !line.sideboard
            && classify(card) == ZoneCategory::Champion
        {
            import.main_champion = Some(card.id.clone());
        }
        let copies = line.quantity.min(MAX_LINE_QUANTITY);
        if copies < line.quantity {
            log::warn!("deck list asks for {}x {}, clamped to {}", line.quantity, line.name, copies);
        }
        for _ in 0..copies {
            import.entries.push(DeckEntry::new(card.clone(), line.sideboard));
        }
    }

    log::info!(
        "resolved deck list: {} entries, {} missing",
        import.entries.len(),
        import.missing.len()
    );
    import
}

/// Parse and resolve in one step.
pub fn import_decklist(text: &str, catalog: &CardCatalog) -> Result<DecklistImport, DecklistError> {
    let lines = parse_decklist(text)?;
    Ok(resolve_decklist(&lines, catalog))
}
