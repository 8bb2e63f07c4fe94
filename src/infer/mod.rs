//! Action inference for a single effect string.
//!
//! Inference runs every rule in [`RULES`] against the same text, in order.
//! Rules are independent and additive: any number of them may fire, and the
//! order of the resulting actions follows the order of the table.
//!
//! # Module Structure
//!
//! ```text
//! infer/
//!   mod.rs          - rule table, shared context, entry points
//!   choices.rs      - choice lists, protection, keyword grants, P/T changes
//!   resources.rs    - life, cards, damage, scry/surveil, mana
//!   counters.rs     - counter placement
//!   tokens.rs       - investigate and token creation
//!   zones.rs        - library/graveyard searches
//!   permanents.rs   - tap/untap, removal, control, fight
//! ```

mod choices;
mod counters;
mod permanents;
mod resources;
mod tokens;
mod zones;

use regex::{Captures, Regex};

use crate::action::{Action, REMINDER_NOTE, UNRECOGNIZED_NOTE};
use crate::target::{TargetScope, resolve_target_scope};
use crate::text::{Amount, mentions_until_end_of_turn, number_after_keyword, strip_reminder_text};

/// The effect text plus everything rules share about it.
#[derive(Debug, Clone)]
pub struct EffectText {
    /// Reminder-stripped text with original casing.
    pub text: String,
    /// Lowercased `text`, with typographic apostrophes and minus signs
    /// normalized.
    pub lower: String,
    pub scope: TargetScope,
    pub until_eot: bool,
}

impl EffectText {
    pub fn new(effect: &str) -> Self {
        let text = strip_reminder_text(effect);
        let lower = text.to_lowercase().replace('’', "'").replace('−', "-");
        let scope = resolve_target_scope(&text);
        let until_eot = mentions_until_end_of_turn(&text);
        Self {
            text,
            lower,
            scope,
            until_eot,
        }
    }
}

/// Actions collected so far, plus flags one rule leaves for a later one.
#[derive(Debug, Default)]
pub struct Detections {
    actions: Vec<Action>,
    /// Set when an "A or B token" choice was produced; the generic token
    /// rule stays quiet for the same text.
    pub(crate) suppress_generic_tokens: bool,
}

impl Detections {
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }
}

pub type Detector = fn(&EffectText, &mut Detections);

/// A named detector. The id shows up in traces and lets tests run one rule
/// in isolation.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub detect: Detector,
}

impl Rule {
    pub const fn new(id: &'static str, detect: Detector) -> Self {
        Self { id, detect }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("id", &self.id).finish()
    }
}

/// The rule battery, in evaluation order.
pub const RULES: &[Rule] = &[
    Rule::new("choose_creature_type", choices::choose_creature_type),
    Rule::new("investigate", tokens::investigate),
    Rule::new("protection", choices::protection),
    Rule::new("gains_choice_of", choices::gains_choice_of),
    Rule::new("gains_keywords", choices::gains_keywords),
    Rule::new("any_color_mana", choices::any_color_mana),
    Rule::new("becomes_choice", choices::becomes_choice),
    Rule::new("token_either", choices::token_either),
    Rule::new("pt_change", choices::pt_change),
    Rule::new("chosen_type_lord", choices::chosen_type_lord),
    Rule::new("gain_life", resources::gain_life),
    Rule::new("lose_life", resources::lose_life),
    Rule::new("draw", resources::draw),
    Rule::new("discard", resources::discard),
    Rule::new("mill", resources::mill),
    Rule::new("deal_damage", resources::deal_damage),
    Rule::new("counters", counters::counters),
    Rule::new("create_tokens", tokens::create_tokens),
    Rule::new("untap", permanents::untap),
    Rule::new("tap", permanents::tap),
    Rule::new("add_mana", resources::add_mana),
    Rule::new("search_zone", zones::search_zone),
    Rule::new("scry", resources::scry),
    Rule::new("surveil", resources::surveil),
    Rule::new("return_to_hand", permanents::return_to_hand),
    Rule::new("reanimate", permanents::reanimate),
    Rule::new("exile", permanents::exile),
    Rule::new("sacrifice", permanents::sacrifice),
    Rule::new("destroy", permanents::destroy),
    Rule::new("gain_control", permanents::gain_control),
    Rule::new("fight", permanents::fight),
];

/// Which rule produced which actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFiring {
    pub rule: &'static str,
    pub actions: Vec<Action>,
}

/// Runs the full battery and reports the firing rules in order.
///
/// Returns an empty list for empty effects and for effects no rule
/// recognized; [`infer_actions_from_text`] turns those into notes.
pub fn infer_rule_firings(effect: &str) -> Vec<RuleFiring> {
    let ctx = EffectText::new(effect);
    if ctx.text.is_empty() {
        return Vec::new();
    }

    let mut detections = Detections::default();
    let mut firings = Vec::new();
    for rule in RULES {
        let before = detections.actions.len();
        (rule.detect)(&ctx, &mut detections);
        if detections.actions.len() > before {
            tracing::trace!(
                stage = "rule",
                rule = rule.id,
                produced = detections.actions.len() - before,
                "rule fired"
            );
            firings.push(RuleFiring {
                rule: rule.id,
                actions: detections.actions[before..].to_vec(),
            });
        }
    }
    firings
}

/// Runs a single rule by id. `None` when no rule has that id.
pub fn run_rule(id: &str, effect: &str) -> Option<Vec<Action>> {
    let rule = RULES.iter().find(|rule| rule.id == id)?;
    let ctx = EffectText::new(effect);
    let mut detections = Detections::default();
    (rule.detect)(&ctx, &mut detections);
    Some(detections.into_actions())
}

/// Infers the ordered list of actions described by one effect string.
///
/// Never fails: text that is only reminder text yields a `(reminder text)`
/// note, and text no rule understands yields a review note.
pub fn infer_actions_from_text(effect: &str) -> Vec<Action> {
    if strip_reminder_text(effect).is_empty() {
        return vec![Action::note(REMINDER_NOTE)];
    }

    let actions: Vec<Action> = infer_rule_firings(effect)
        .into_iter()
        .flat_map(|firing| firing.actions)
        .collect();

    if actions.is_empty() {
        tracing::debug!(effect, "no action recognized");
        return vec![Action::note(UNRECOGNIZED_NOTE)];
    }
    actions
}

pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid rule pattern {pattern:?}: {err}"))
}

/// Reads the amount that follows the `verb` capture of a rule match.
pub(crate) fn amount_after_verb(caps: &Captures<'_>) -> Option<Amount> {
    let verb = caps.name("verb")?.as_str();
    number_after_keyword(&caps[0], verb)
}

const NEGATIONS: [&str; 4] = ["doesn't ", "don't ", "does not ", "do not "];

/// True when `regex` matches and no match is negated by a preceding
/// "doesn't"/"don't".
pub(crate) fn has_affirmative(regex: &Regex, lower: &str) -> bool {
    let mut found_any = false;
    for found in regex.find_iter(lower) {
        let prefix = &lower[..found.start()];
        if NEGATIONS.iter().any(|negation| prefix.ends_with(negation)) {
            return false;
        }
        found_any = true;
    }
    found_any
}
