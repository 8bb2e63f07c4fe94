//! Resolution of the recipient of an effect.
//!
//! Scopes are tested in table order and the first match wins, so every entry
//! must come before any entry whose phrase it contains.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::chosen_type::ChosenType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TargetScope {
    TargetCreatureYouControl,
    TargetCreatureOpponentControls,
    AnyTarget,
    TargetCreature,
    TargetOpponent,
    TargetPlayer,
    TargetArtifact,
    TargetEnchantment,
    TargetLand,
    TargetPlaneswalker,
    TargetPermanent,
    TargetCard,
    EachOpponent,
    EachPlayer,
    YourOtherCreaturesOfChosenType,
    YourOtherCreatures,
    CreaturesYouControl,
    AllCreatures,
    EnchantedCreature,
    EquippedCreature,
    ThisCreature,
    ThisPermanent,
    You,
    Unspecified,
}

/// Priority-ordered phrase table. Patterns run against lowercased text.
pub const SCOPE_RULES: &[(&str, TargetScope)] = &[
    (
        r"\btarget creature you control\b",
        TargetScope::TargetCreatureYouControl,
    ),
    (
        r"\btarget creature (?:an opponent controls|you don't control)\b",
        TargetScope::TargetCreatureOpponentControls,
    ),
    (
        r"\bany target\b|\btarget creature or player\b",
        TargetScope::AnyTarget,
    ),
    (r"\btarget creature\b", TargetScope::TargetCreature),
    (r"\btarget opponent\b", TargetScope::TargetOpponent),
    (r"\btarget player\b", TargetScope::TargetPlayer),
    (r"\btarget artifact\b", TargetScope::TargetArtifact),
    (r"\btarget enchantment\b", TargetScope::TargetEnchantment),
    (r"\btarget land\b", TargetScope::TargetLand),
    (r"\btarget planeswalker\b", TargetScope::TargetPlaneswalker),
    (r"\btarget (?:\w+ )?permanent\b", TargetScope::TargetPermanent),
    (r"\btarget (?:\w+ )?card\b", TargetScope::TargetCard),
    (r"\beach opponent\b", TargetScope::EachOpponent),
    (r"\beach player\b", TargetScope::EachPlayer),
    (
        r"\bother creatures you control of the chosen type\b",
        TargetScope::YourOtherCreaturesOfChosenType,
    ),
    (r"\bother creatures you control\b", TargetScope::YourOtherCreatures),
    (
        r"\bcreatures you control\b|\b(?:each|all) creatures? you control\b",
        TargetScope::CreaturesYouControl,
    ),
    (r"\b(?:each|all) creatures?\b", TargetScope::AllCreatures),
    (r"\benchanted creature\b", TargetScope::EnchantedCreature),
    (r"\bequipped creature\b", TargetScope::EquippedCreature),
    (r"\bthis creature\b|\bthis card\b", TargetScope::ThisCreature),
    (
        r"\bthis (?:artifact|enchantment|land|permanent|planeswalker|vehicle)\b",
        TargetScope::ThisPermanent,
    ),
    (r"\byou\b", TargetScope::You),
];

static COMPILED_SCOPE_RULES: Lazy<Vec<(Regex, TargetScope)>> = Lazy::new(|| {
    SCOPE_RULES
        .iter()
        .map(|(pattern, scope)| {
            let regex = Regex::new(pattern).expect("scope rule pattern");
            (regex, *scope)
        })
        .collect()
});

/// Returns the first scope in [`SCOPE_RULES`] whose phrase occurs in `effect`.
pub fn resolve_target_scope(effect: &str) -> TargetScope {
    let lower = effect.to_lowercase();
    COMPILED_SCOPE_RULES
        .iter()
        .find(|(regex, _)| regex.is_match(&lower))
        .map(|(_, scope)| *scope)
        .unwrap_or(TargetScope::Unspecified)
}

impl TargetScope {
    /// True for scopes that name a group of creatures ("creatures you control").
    pub fn is_plural(&self) -> bool {
        matches!(
            self,
            TargetScope::YourOtherCreaturesOfChosenType
                | TargetScope::YourOtherCreatures
                | TargetScope::CreaturesYouControl
        )
    }

    /// Human-readable recipient. Only the chosen-type scope reads `chosen`.
    pub fn describe(&self, chosen: &ChosenType) -> String {
        let text = match self {
            TargetScope::TargetCreatureYouControl => "target creature you control",
            TargetScope::TargetCreatureOpponentControls => {
                "target creature an opponent controls"
            }
            TargetScope::AnyTarget => "any target",
            TargetScope::TargetCreature => "target creature",
            TargetScope::TargetOpponent => "target opponent",
            TargetScope::TargetPlayer => "target player",
            TargetScope::TargetArtifact => "target artifact",
            TargetScope::TargetEnchantment => "target enchantment",
            TargetScope::TargetLand => "target land",
            TargetScope::TargetPlaneswalker => "target planeswalker",
            TargetScope::TargetPermanent => "target permanent",
            TargetScope::TargetCard => "target card",
            TargetScope::EachOpponent => "each opponent",
            TargetScope::EachPlayer => "each player",
            TargetScope::YourOtherCreaturesOfChosenType => {
                return chosen.with_chosen_type("other {chosen_type} creatures you control");
            }
            TargetScope::YourOtherCreatures => "other creatures you control",
            TargetScope::CreaturesYouControl => "creatures you control",
            TargetScope::AllCreatures => "each creature",
            TargetScope::EnchantedCreature => "enchanted creature",
            TargetScope::EquippedCreature => "equipped creature",
            TargetScope::ThisCreature => "this creature",
            TargetScope::ThisPermanent => "this permanent",
            TargetScope::You => "you",
            TargetScope::Unspecified => "unspecified",
        };
        text.to_string()
    }
}
