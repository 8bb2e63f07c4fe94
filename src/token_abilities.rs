//! Abilities granted to tokens through reminder text.
//!
//! Cards such as "Create a Food token. (It's an artifact with "{2}, {T},
//! Sacrifice this artifact: You gain 3 life.")" only define the token's
//! ability inside parentheses. The scanner reads those definitions; the pairer
//! ties each `create … <Name> token` instruction to the definition that
//! follows it.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^()]*)\)").expect("parenthetical pattern"));

static TOKEN_DEFINITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?:\bAn?\s+)?\b(?P<name>[A-Z][\w'’-]*(?:\s+[A-Z][\w'’-]*)*(?:\s+tokens?)?)\s+(?:is|are)\s+(?:an?\s+)?(?:colorless\s+)?artifacts?\s+with\s+["“](?P<ability>[^"”]+)["”]"#,
    )
    .expect("token definition pattern")
});

static ARTIFACT_WITH_QUOTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bartifacts?\s+with\s+["“]"#).expect("artifact with quote pattern")
});

static QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"["“](?P<text>[^"”]+)["”]"#).expect("quoted text pattern"));

static INLINE_CREATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i:\bcreate)\b[^.()]*?\b(?P<name>[A-Z][\w'’-]*(?:\s+[A-Z][\w'’-]*)*)\s+tokens?\b")
        .expect("inline token creation pattern")
});

static TOKEN_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+tokens?$").expect("token suffix pattern"));

/// An ability a token has by definition, e.g. a Clue's draw ability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenAbilityDefinition {
    /// Singular display name, without a trailing "token".
    pub token: String,
    pub cost: String,
    /// Never ends with a period.
    pub effect: String,
}

impl TokenAbilityDefinition {
    /// Builds a definition from quoted `cost: effect` text. Returns `None`
    /// when the text has no colon.
    pub fn from_quoted(token: &str, quoted: &str) -> Option<Self> {
        let (cost, effect) = quoted.split_once(':')?;
        let effect = effect
            .trim()
            .trim_end_matches(|c: char| c == '.' || c.is_whitespace());
        let cost = cost.trim();
        if cost.is_empty() || effect.is_empty() {
            return None;
        }
        Some(Self {
            token: normalize_token_name(token),
            cost: cost.to_string(),
            effect: effect.to_string(),
        })
    }

    fn key(&self) -> String {
        self.token.to_lowercase()
    }
}

fn normalize_token_name(name: &str) -> String {
    TOKEN_SUFFIX
        .replace(name.trim(), "")
        .split_whitespace()
        .skip_while(|word| word.eq_ignore_ascii_case("x"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Deduplicates by lowercase token name, keeping the first definition seen.
pub fn merge_token_definitions<I>(definitions: I) -> Vec<TokenAbilityDefinition>
where
    I: IntoIterator<Item = TokenAbilityDefinition>,
{
    let mut merged: IndexMap<String, TokenAbilityDefinition> = IndexMap::new();
    for definition in definitions {
        merged.entry(definition.key()).or_insert(definition);
    }
    merged.into_values().collect()
}

fn scan_segment(segment: &str) -> impl Iterator<Item = TokenAbilityDefinition> + '_ {
    TOKEN_DEFINITION.captures_iter(segment).filter_map(|caps| {
        TokenAbilityDefinition::from_quoted(&caps["name"], &caps["ability"])
    })
}

/// Finds `<Name> is/are an artifact with "<cost>: <effect>"` definitions
/// inside the parenthetical segments of `text`.
pub fn scan_reminder_token_abilities(text: &str) -> Vec<TokenAbilityDefinition> {
    let found = PARENTHETICAL
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .flat_map(|segment| scan_segment(segment.as_str()).collect::<Vec<_>>());
    merge_token_definitions(found)
}

fn next_parenthetical(text: &str, from: usize) -> Option<&str> {
    PARENTHETICAL
        .captures_at(text, from)
        .and_then(|caps| caps.get(1))
        .map(|segment| segment.as_str())
}

fn definition_for_segment(created: &str, segment: &str) -> Option<TokenAbilityDefinition> {
    if !ARTIFACT_WITH_QUOTE.is_match(segment) {
        return None;
    }

    if let Some(named) =
        scan_segment(segment).find(|definition| definition.token.eq_ignore_ascii_case(created))
    {
        return Some(named);
    }

    let quoted: Vec<TokenAbilityDefinition> = QUOTED
        .captures_iter(segment)
        .filter_map(|caps| TokenAbilityDefinition::from_quoted(created, &caps["text"]))
        .collect();
    match quoted.as_slice() {
        [only] => Some(only.clone()),
        _ => None,
    }
}

/// Pairs each `create … <Name> token` instruction with the reminder text that
/// defines that token.
///
/// The first parenthetical after the instruction is consulted; when there is
/// none, definitions found anywhere in the text are matched by name.
pub fn pair_inline_token_creations(text: &str) -> Vec<TokenAbilityDefinition> {
    let mut global: Option<Vec<TokenAbilityDefinition>> = None;
    let mut paired = Vec::new();

    for caps in INLINE_CREATE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let created = normalize_token_name(&caps["name"]);
        if created.is_empty() {
            continue;
        }

        let definition = match next_parenthetical(text, whole.end()) {
            Some(segment) => definition_for_segment(&created, segment),
            None => global
                .get_or_insert_with(|| scan_reminder_token_abilities(text))
                .iter()
                .find(|definition| definition.token.eq_ignore_ascii_case(&created))
                .cloned(),
        };

        if let Some(definition) = definition {
            tracing::trace!(stage = "token_pair", token = %definition.token, "paired token definition");
            paired.push(definition);
        }
    }

    merge_token_definitions(paired)
}
