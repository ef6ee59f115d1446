//! Deck legality checks.
//!
//! `validate_with` runs every check over a `Zones` decomposition and folds
//! them into a `ValidationReport`:
//! - Zone counts against `DeckRules`
//! - Global per-name copy caps (Main Deck and Sideboard counted together)
//! - Rune/Legend domain overlap
//! - Champion/Legend tag overlap and the Main Champion selection
//!
//! Checks are independent and total. Missing tags or domains are empty sets,
//! so overlap checks degrade to "no match" rather than failing.

use rustc_hash::{FxHashMap, FxHashSet};

use super::report::{ChampionChoice, DeckIssue, ExcessiveCopies, ValidationReport};
use crate::cards::{classify, CardId, DeckEntry, LabelSet, ZoneCategory};
use crate::core::DeckRules;
use crate::zones::{decompose, Zones};

/// Validate zones against the standard rules.
#[must_use]
pub fn validate(zones: &Zones<'_>, main_champion: Option<&CardId>) -> ValidationReport {
    validate_with(zones, main_champion, &DeckRules::default())
}

/// Decompose and validate a flat entry list against the standard rules.
#[must_use]
pub fn validate_deck(entries: &[DeckEntry], main_champion: Option<&CardId>) -> ValidationReport {
    validate(&decompose(entries), main_champion)
}

/// Validate zones against the given rules.
#[must_use]
pub fn validate_with(zones: &Zones<'_>, main_champion: Option<&CardId>, rules: &DeckRules) -> ValidationReport {
    let legend = zones.legend();
    let empty = LabelSet::new();
    let legend_tags = legend.map_or(&empty, |l| &l.tags);
    let legend_domains = legend.map_or(&empty, |l| &l.domains);

    let legend_count = zones.legend.len();
    let battlefield_count = zones.battlefields.len();
    let main_deck_count = zones.main_deck.len();
    let rune_count = zones.runes.len();
    let sideboard_count = zones.sideboard.len();

    let is_deck_complete = legend_count == 1
        && battlefield_count == rules.battlefield_count
        && main_deck_count == rules.main_deck_size
        && rune_count == rules.rune_count;
    let has_sideboard_valid_size = sideboard_count <= rules.sideboard_max;

    let excessive_copies = excessive_copies(zones, rules);
    let copies_limit_valid = excessive_copies.is_empty();

    let mismatched_runes = mismatched_runes(zones, legend_domains);
    let runes_match_domain = mismatched_runes.is_empty();

    let valid_champions = valid_champions(zones, legend_tags);

    let resolved = main_champion.and_then(|id| zones.champions.iter().find(|e| &e.card.id == id));
    if let (Some(id), None) = (main_champion, resolved) {
        log::warn!("main champion {} is not a champion in this deck", id);
    }
    let main_champ_is_valid = resolved.is_some_and(|e| valid_champions.iter().any(|c| c.name == e.card.name));

    let is_valid =
        is_deck_complete && main_champ_is_valid && runes_match_domain && copies_limit_valid && has_sideboard_valid_size;

    let mut report = ValidationReport {
        is_valid,
        is_deck_complete,
        has_legend: legend_count > 0,
        legend_count,
        battlefield_count,
        main_deck_count,
        rune_count,
        sideboard_count,
        has_sideboard_valid_size,
        copies_limit_valid,
        excessive_copies,
        runes_match_domain,
        mismatched_runes,
        legend_name: legend.map(|l| l.name.clone()),
        legend_tags: legend_tags.to_vec(),
        legend_domains: legend_domains.to_vec(),
        valid_champions,
        main_champion: resolved.map(|e| e.card.id.clone()),
        main_champ_is_valid,
        issues: Vec::new(),
    };
    report.issues = collect_issues(&report, rules);

    log::debug!(
        "validated deck: valid={} complete={} issues={}",
        report.is_valid,
        report.is_deck_complete,
        report.issues.len()
    );

    report
}

/// Per-name totals over the whole deck, flagged against the cap of the
/// first printing seen for each name.
fn excessive_copies(zones: &Zones<'_>, rules: &DeckRules) -> Vec<ExcessiveCopies> {
    let mut order: Vec<(&str, ZoneCategory, usize)> = Vec::new();
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();

    for entry in zones.entries() {
        let name = entry.card.name.as_str();
        if let Some(&i) = index.get(name) {
            order[i].2 += 1;
        } else {
            index.insert(name, order.len());
            order.push((name, classify(&entry.card), 1));
        }
    }

    order
        .into_iter()
        .filter_map(|(name, category, count)| {
            let limit = category.copy_limit(rules)?;
            (count > limit).then(|| ExcessiveCopies { name: name.to_string(), count, limit })
        })
        .collect()
}

fn mismatched_runes(zones: &Zones<'_>, legend_domains: &LabelSet) -> Vec<String> {
    let mut seen = FxHashSet::default();
    zones
        .runes
        .iter()
        .filter(|e| !e.card.domains.intersects(legend_domains))
        .filter(|e| seen.insert(e.card.name.as_str()))
        .map(|e| e.card.name.clone())
        .collect()
}

fn valid_champions(zones: &Zones<'_>, legend_tags: &LabelSet) -> Vec<ChampionChoice> {
    let mut seen = FxHashSet::default();
    zones
        .champions
        .iter()
        .filter(|e| e.card.tags.intersects(legend_tags))
        .filter(|e| !e.card.name.is_empty() && seen.insert(e.card.name.as_str()))
        .map(|e| ChampionChoice { id: e.card.id.clone(), name: e.card.name.clone() })
        .collect()
}

fn collect_issues(report: &ValidationReport, rules: &DeckRules) -> Vec<DeckIssue> {
    let mut issues = Vec::new();

    match report.legend_count {
        0 => issues.push(DeckIssue::MissingLegend),
        1 => {}
        count => issues.push(DeckIssue::TooManyLegends { count }),
    }
    if report.battlefield_count != rules.battlefield_count {
        issues.push(DeckIssue::BattlefieldCount {
            count: report.battlefield_count,
            required: rules.battlefield_count,
        });
    }
    if report.main_deck_count != rules.main_deck_size {
        issues.push(DeckIssue::MainDeckCount { count: report.main_deck_count, required: rules.main_deck_size });
    }
    if report.rune_count != rules.rune_count {
        issues.push(DeckIssue::RuneCount { count: report.rune_count, required: rules.rune_count });
    }
    if !report.has_sideboard_valid_size {
        issues.push(DeckIssue::SideboardOverflow { count: report.sideboard_count, max: rules.sideboard_max });
    }
    issues.extend(report.excessive_copies.iter().map(|e| DeckIssue::TooManyCopies {
        name: e.name.clone(),
        count: e.count,
        limit: e.limit,
    }));
    if !report.runes_match_domain {
        issues.push(DeckIssue::RuneDomainMismatch { legend_domains: report.legend_domains.clone() });
    }
    // An incomplete deck's champion problems are covered by the count issues.
    if report.is_deck_complete {
        if report.valid_champions.is_empty() {
            issues.push(DeckIssue::NoMatchingChampion { legend: report.legend_name.clone().unwrap_or_default() });
        } else if !report.main_champ_is_valid {
            issues.push(DeckIssue::MainChampionNotSelected);
        }
    }

    issues
}
