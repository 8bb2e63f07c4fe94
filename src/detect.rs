//! One-call aggregation of everything the library can read from a card's
//! oracle text.

use crate::clause::{AbilityClause, AbilityKind, parse_oracle};
use crate::token_abilities::{
    TokenAbilityDefinition, merge_token_definitions, pair_inline_token_creations,
    scan_reminder_token_abilities,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct DetectAllResult {
    /// Clauses as parsed, chains attached to their heads.
    pub abilities: Vec<AbilityClause>,
    /// Chains flattened into sibling entries.
    pub expanded_abilities: Vec<AbilityClause>,
    /// Activated and triggered entries of `expanded_abilities`.
    pub abilities_only: Vec<AbilityClause>,
    /// Token abilities defined by reminder text, one per token name.
    pub innate_tokens: Vec<TokenAbilityDefinition>,
}

impl DetectAllResult {
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty() && self.innate_tokens.is_empty()
    }
}

/// Flattens chains: each ability head is followed by one entry per chain
/// step. Static clauses pass through unchanged.
pub fn expand_abilities(abilities: &[AbilityClause]) -> Vec<AbilityClause> {
    let mut expanded = Vec::with_capacity(abilities.len());
    for ability in abilities {
        if !ability.kind.is_ability() {
            expanded.push(ability.clone());
            continue;
        }

        expanded.push(AbilityClause {
            chain: None,
            ..ability.clone()
        });
        expanded.extend(ability.chain_steps().iter().map(|step| AbilityClause {
            kind: ability.kind,
            raw: step.clone(),
            cost: None,
            effect: step.clone(),
            chain: None,
        }));
    }
    expanded
}

pub fn detect_all(text: &str) -> DetectAllResult {
    if text.trim().is_empty() {
        return DetectAllResult::default();
    }

    let abilities = parse_oracle(text);
    let expanded_abilities = expand_abilities(&abilities);
    let abilities_only = expanded_abilities
        .iter()
        .filter(|ability| matches!(ability.kind, AbilityKind::Activated | AbilityKind::Triggered))
        .cloned()
        .collect();
    let innate_tokens = merge_token_definitions(
        scan_reminder_token_abilities(text)
            .into_iter()
            .chain(pair_inline_token_creations(text)),
    );

    tracing::debug!(
        abilities = abilities.len(),
        expanded = expanded_abilities.len(),
        innate_tokens = innate_tokens.len(),
        "detected oracle text"
    );

    DetectAllResult {
        abilities,
        expanded_abilities,
        abilities_only,
        innate_tokens,
    }
}
