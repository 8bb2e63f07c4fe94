use once_cell::sync::Lazy;
use regex::Regex;

use super::{Detections, EffectText, compile};
use crate::action::Action;
use crate::zone::Zone;

static SEARCH_ZONE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\bsearch(?:es)? (?:your|their|target player's|target opponent's|an opponent's|its owner's|that player's) (?P<zone>library|graveyard|hand|exile)\b",
    )
});

static FOR_NAMED: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?i)\bfor (?:an?|any|up to \w+) cards? named (?P<name>[^,.]+)")
});

static FOR_PHRASE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\bfor (?P<phrase>.+?)(?:,| and (?:put|reveal|exile|shuffle)\b| with\b|\.|$)",
    )
});

static LEADING_ARTICLE: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^(?:an?|the)\s+"));

/// Phrases that mean "any card" and leave the filter open.
const GENERIC_QUERIES: [&str; 4] = ["card", "cards", "any card", "any cards"];

fn normalize_query(phrase: &str) -> String {
    let query = LEADING_ARTICLE.replace(phrase.trim(), "");
    if GENERIC_QUERIES
        .iter()
        .any(|generic| query.eq_ignore_ascii_case(generic))
    {
        String::new()
    } else {
        query.into_owned()
    }
}

/// "search your library for …": the zone itself, then a by-name filter, then
/// the descriptive filter. All that apply are emitted.
pub(super) fn search_zone(ctx: &EffectText, out: &mut Detections) {
    let Some(caps) = SEARCH_ZONE.captures(&ctx.text) else {
        return;
    };
    let Some(zone) = Zone::from_word(&caps["zone"]) else {
        return;
    };
    let rest = caps
        .get(0)
        .map_or(ctx.text.as_str(), |found| &ctx.text[found.end()..]);

    out.push(Action::OpenZoneFilter {
        zone,
        query: String::new(),
        by_name: false,
    });

    if let Some(named) = FOR_NAMED.captures(rest) {
        out.push(Action::OpenZoneFilter {
            zone,
            query: named["name"].trim().to_string(),
            by_name: true,
        });
    }

    if let Some(phrase) = FOR_PHRASE.captures(rest) {
        out.push(Action::OpenZoneFilter {
            zone,
            query: normalize_query(&phrase["phrase"]),
            by_name: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::run_rule;
    use super::*;

    fn filter(zone: Zone, query: &str, by_name: bool) -> Action {
        Action::OpenZoneFilter {
            zone,
            query: query.to_string(),
            by_name,
        }
    }

    #[test]
    fn test_descriptive_search() {
        assert_eq!(
            run_rule(
                "search_zone",
                "Search your library for a basic land card, put it onto the battlefield tapped, then shuffle."
            ),
            Some(vec![
                filter(Zone::Library, "", false),
                filter(Zone::Library, "basic land card", false),
            ])
        );
    }

    #[test]
    fn test_generic_phrase_normalizes_to_open_query() {
        assert_eq!(
            run_rule(
                "search_zone",
                "Search your library for a card and put that card into your hand."
            ),
            Some(vec![
                filter(Zone::Library, "", false),
                filter(Zone::Library, "", false),
            ])
        );
    }

    #[test]
    fn test_named_search_emits_three_filters() {
        assert_eq!(
            run_rule(
                "search_zone",
                "Search your graveyard for a card named Dragon's Approach, reveal it, and put it into your hand."
            ),
            Some(vec![
                filter(Zone::Graveyard, "", false),
                filter(Zone::Graveyard, "Dragon's Approach", true),
                filter(Zone::Graveyard, "card named Dragon's Approach", false),
            ])
        );
    }

    #[test]
    fn test_search_needs_a_zone() {
        assert_eq!(run_rule("search_zone", "Search for meaning."), Some(Vec::new()));
    }
}
