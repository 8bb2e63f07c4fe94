//! Splitting oracle text into ability clauses.
//!
//! The pipeline is: strip reminder text, split into sentence-like clauses,
//! classify each clause, then fold continuation clauses into the chain of the
//! activated or triggered ability they belong to.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::action::Action;
use crate::infer::infer_actions_from_text;
use crate::text::strip_reminder_text;

/// Words that open a new clause even when they follow a lowercase boundary.
pub const CONTINUATION_WORDS: [&str; 13] = [
    "Then",
    "If you do",
    "You may",
    "Among",
    "From among",
    "Of those",
    "Put",
    "Return",
    "Reveal",
    "Otherwise",
    "This way",
    "Create",
    "Draw",
];

/// Openers that refer back to the previous clause's subject.
pub const REFERENCE_WORDS: [&str; 10] = [
    "It",
    "They",
    "Those",
    "This creature",
    "Other creatures",
    "That card",
    "That creature",
    "That player",
    "That permanent",
    "That spell",
];

static BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?;—]\s+").expect("clause boundary pattern"));

static CONTINUATION_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(?:{})\b", CONTINUATION_WORDS.join("|")))
        .expect("continuation start pattern")
});

static CHAIN_START: Lazy<Regex> = Lazy::new(|| {
    let words: Vec<&str> = CONTINUATION_WORDS
        .iter()
        .chain(REFERENCE_WORDS.iter())
        .copied()
        .collect();
    Regex::new(&format!(r"(?i)^(?:{})\b", words.join("|"))).expect("chain start pattern")
});

static AS_ENTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^as\b").expect("as-enters pattern"));

static AS_LONG_AS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^as long as\b").expect("as long as pattern"));

static ENTERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\benters\b").expect("enters pattern"));

static WHOLLY_PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\([^()]*\)\.?$").expect("parenthetical clause pattern"));

static GRANTED_ARTIFACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^it['’]s an artifact with\b").expect("granted artifact pattern"));

static WHEN_WHENEVER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:when|whenever)\b").expect("when pattern"));

static AT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^at\b").expect("at pattern"));

static LOYALTY_COST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\([^()]*\)|\[[^\[\]]*\])\s*:").expect("loyalty cost pattern")
});

static COST_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\{[^{}]+\}|\b(?:tap|untap|discard|sacrifice|pay|exile)\b")
        .expect("cost token pattern")
});

/// How an ability clause functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityKind {
    Activated,
    Triggered,
    Static,
}

impl AbilityKind {
    /// Activated and triggered abilities are the ones a player can act on.
    pub fn is_ability(self) -> bool {
        matches!(self, AbilityKind::Activated | AbilityKind::Triggered)
    }
}

/// One classified clause of oracle text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityClause {
    #[cfg_attr(feature = "serialization", serde(rename = "type"))]
    pub kind: AbilityKind,
    pub raw: String,
    pub cost: Option<String>,
    pub effect: String,
    /// Continuation clauses owned by an activated or triggered head.
    #[cfg_attr(
        feature = "serialization",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub chain: Option<Vec<String>>,
}

impl AbilityClause {
    /// Classifies `raw` and splits its cost from its effect.
    pub fn from_raw(raw: &str) -> Self {
        let raw = raw.trim();
        let kind = classify(raw);
        let (cost, effect) = if kind == AbilityKind::Triggered && !raw.contains(':') {
            (None, trigger_effect(raw))
        } else {
            split_cost_effect(raw)
        };
        Self {
            kind,
            raw: raw.to_string(),
            cost,
            effect,
            chain: None,
        }
    }

    /// Chain steps, empty for clauses without a chain.
    pub fn chain_steps(&self) -> &[String] {
        self.chain.as_deref().unwrap_or_default()
    }

    /// Runs action inference over this clause's effect.
    pub fn actions(&self) -> Vec<Action> {
        infer_actions_from_text(&self.effect)
    }
}

/// Splits text into clauses: first on line breaks, then at sentence
/// boundaries that open a new instruction.
///
/// A boundary is one of `. ! ? ; —` plus whitespace, followed by an
/// uppercase letter, a quote, or one of [`CONTINUATION_WORDS`].
pub fn split_clauses(text: &str) -> Vec<String> {
    let mut clauses = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut start = 0usize;
        for boundary in BOUNDARY.find_iter(line) {
            let rest = &line[boundary.end()..];
            if !opens_clause(rest) {
                continue;
            }
            let punct_len = line[boundary.start()..]
                .chars()
                .next()
                .map(char::len_utf8)
                .unwrap_or(1);
            push_clause(&mut clauses, &line[start..boundary.start() + punct_len]);
            start = boundary.end();
        }
        push_clause(&mut clauses, &line[start..]);
    }
    tracing::trace!(stage = "split", clauses = clauses.len(), "split clauses");
    clauses
}

fn push_clause(clauses: &mut Vec<String>, clause: &str) {
    let clause = clause.trim();
    if !clause.is_empty() {
        clauses.push(clause.to_string());
    }
}

fn opens_clause(rest: &str) -> bool {
    let Some(first) = rest.chars().next() else {
        return false;
    };
    first.is_uppercase()
        || matches!(first, '"' | '\'' | '“' | '‘' | '’')
        || CONTINUATION_START.is_match(rest)
}

/// Classifies one clause. Rules are ordered; the first match wins.
pub fn classify(clause: &str) -> AbilityKind {
    let clause = clause.trim();

    let kind = if AS_ENTERS.is_match(clause)
        && !AS_LONG_AS.is_match(clause)
        && ENTERS.is_match(clause)
    {
        AbilityKind::Triggered
    } else if WHOLLY_PARENTHETICAL.is_match(clause) || GRANTED_ARTIFACT.is_match(clause) {
        AbilityKind::Static
    } else if WHEN_WHENEVER.is_match(clause) || AT.is_match(clause) {
        AbilityKind::Triggered
    } else if LOYALTY_COST.is_match(clause) {
        AbilityKind::Activated
    } else if clause
        .split_once(':')
        .is_some_and(|(cost, _)| COST_TOKEN.is_match(cost))
    {
        AbilityKind::Activated
    } else {
        AbilityKind::Static
    };

    tracing::trace!(stage = "classify", ?kind, clause, "classified clause");
    kind
}

/// Splits at the first colon. Without a colon there is no cost and the whole
/// clause is the effect.
pub fn split_cost_effect(clause: &str) -> (Option<String>, String) {
    match clause.split_once(':') {
        Some((cost, effect)) => (Some(cost.trim().to_string()), effect.trim().to_string()),
        None => (None, clause.trim().to_string()),
    }
}

/// The effect of a colon-free trigger is what follows its condition, which
/// ends at the first comma.
fn trigger_effect(clause: &str) -> String {
    clause
        .split_once(',')
        .map(|(_, effect)| effect.trim())
        .filter(|effect| !effect.is_empty())
        .unwrap_or(clause)
        .to_string()
}

fn is_chain_step(clause: &str) -> bool {
    CHAIN_START.is_match(clause.trim()) && classify(clause) == AbilityKind::Static
}

/// Parses oracle text into classified clauses with continuation chains.
///
/// Reminder text is removed first so it is never classified as a gameplay
/// clause.
pub fn parse_oracle(text: &str) -> Vec<AbilityClause> {
    let stripped = strip_reminder_text(text);
    let clauses = split_clauses(&stripped);

    let mut abilities = Vec::with_capacity(clauses.len());
    let mut idx = 0usize;
    while idx < clauses.len() {
        let mut ability = AbilityClause::from_raw(&clauses[idx]);
        idx += 1;

        if ability.kind.is_ability() {
            let mut chain = Vec::new();
            while let Some(next) = clauses.get(idx) {
                if !is_chain_step(next) {
                    break;
                }
                chain.push(next.clone());
                idx += 1;
            }
            if !chain.is_empty() {
                tracing::trace!(stage = "chain", head = %ability.raw, steps = chain.len(), "grouped chain");
                ability.chain = Some(chain);
            }
        }

        abilities.push(ability);
    }
    abilities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_keeps_trailing_period_in_effect() {
        let abilities = parse_oracle("When this creature enters, draw a card.");
        assert_eq!(abilities.len(), 1);
        assert_eq!(abilities[0].kind, AbilityKind::Triggered);
        assert_eq!(abilities[0].cost, None);
        assert_eq!(abilities[0].effect, "draw a card.");
        assert_eq!(abilities[0].raw, "When this creature enters, draw a card.");
    }

    #[test]
    fn test_split_on_sentence_boundaries() {
        assert_eq!(
            split_clauses("Flying\nDraw a card. Then discard a card."),
            vec!["Flying", "Draw a card.", "Then discard a card."]
        );
        assert_eq!(
            split_clauses("Scry 1; then draw a card."),
            vec!["Scry 1;", "then draw a card."]
        );
        assert_eq!(
            split_clauses("Choose one — target creature gets +1/+1."),
            vec!["Choose one — target creature gets +1/+1."]
        );
    }

    #[test]
    fn test_classify_rule_order() {
        assert_eq!(
            classify("As this creature enters, choose a color."),
            AbilityKind::Triggered
        );
        assert_eq!(
            classify("As long as you control an Elf, this creature has flying."),
            AbilityKind::Static
        );
        assert_eq!(classify("(This is reminder text.)"), AbilityKind::Static);
        assert_eq!(
            classify("It's an artifact with \"{T}: Add {C}.\""),
            AbilityKind::Static
        );
        assert_eq!(
            classify("At the beginning of your upkeep, scry 1."),
            AbilityKind::Triggered
        );
        assert_eq!(classify("(+1): Draw a card."), AbilityKind::Activated);
        assert_eq!(classify("[−2]: Exile target creature."), AbilityKind::Activated);
        assert_eq!(classify("{T}: Add {G}."), AbilityKind::Activated);
        assert_eq!(
            classify("Sacrifice an artifact: Scry 1."),
            AbilityKind::Activated
        );
        assert_eq!(classify("Choose one: draw or scry."), AbilityKind::Static);
        assert_eq!(classify("Flying"), AbilityKind::Static);
    }

    #[test]
    fn test_split_cost_effect() {
        assert_eq!(
            split_cost_effect("{2}, {T}: Draw a card: really."),
            (Some("{2}, {T}".to_string()), "Draw a card: really.".to_string())
        );
        assert_eq!(split_cost_effect(" Flying "), (None, "Flying".to_string()));
    }

    #[test]
    fn test_chain_absorbs_static_continuations_only() {
        let abilities = parse_oracle(
            "When this creature enters, look at the top three cards of your library. Put one of them into your hand. Then shuffle.\nFlying",
        );
        assert_eq!(abilities.len(), 2);
        assert_eq!(
            abilities[0].chain_steps(),
            ["Put one of them into your hand.", "Then shuffle."]
        );
        assert_eq!(abilities[1].raw, "Flying");
        assert_eq!(abilities[1].chain, None);
    }

    #[test]
    fn test_chain_stops_at_non_continuation() {
        let abilities =
            parse_oracle("{T}: Draw a card. Creatures you control get +1/+1. Then scry 1.");
        assert_eq!(abilities.len(), 3);
        assert_eq!(abilities[0].kind, AbilityKind::Activated);
        assert_eq!(abilities[0].chain, None);
        assert_eq!(abilities[1].kind, AbilityKind::Static);
        assert_eq!(abilities[2].chain, None);
    }

    #[test]
    fn test_chain_does_not_absorb_a_new_trigger() {
        let abilities = parse_oracle(
            "Whenever you attack, draw a card. When you do, it deals 1 damage to you.",
        );
        assert_eq!(abilities.len(), 2);
        assert!(abilities.iter().all(|ability| ability.chain.is_none()));
    }

    #[test]
    fn test_reminder_text_is_not_classified() {
        let abilities = parse_oracle("Flying (This creature can't be blocked except by creatures with flying or reach.)");
        assert_eq!(abilities.len(), 1);
        assert_eq!(abilities[0].raw, "Flying");
    }
}
