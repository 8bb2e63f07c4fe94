//! Counted resources: life, cards, damage, library manipulation and mana.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Detections, EffectText, amount_after_verb, compile};
use crate::action::Action;
use crate::mana::parse_mana_symbols;
use crate::text::Amount;

static GAIN_LIFE: Lazy<Regex> = Lazy::new(|| compile(r"\b(?P<verb>gains?) \w+ life\b"));
static LOSE_LIFE: Lazy<Regex> = Lazy::new(|| compile(r"\b(?P<verb>loses?) \w+ life\b"));
static DRAW: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(?P<verb>draws?) \w+ (?:additional )?cards?\b"));
static DISCARD: Lazy<Regex> = Lazy::new(|| compile(r"\b(?P<verb>discards?) \w+ cards?\b"));
static MILL: Lazy<Regex> = Lazy::new(|| compile(r"\b(?P<verb>mills?) \w+(?: cards?)?\b"));
static DEAL_DAMAGE: Lazy<Regex> = Lazy::new(|| compile(r"\b(?P<verb>deals?) \w+ damage\b"));
static SCRY: Lazy<Regex> = Lazy::new(|| compile(r"\b(?P<verb>scry) \w+"));
static SURVEIL: Lazy<Regex> = Lazy::new(|| compile(r"\b(?P<verb>surveil) \w+"));
static ADD: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\badd\b"));

fn counted(regex: &Regex, lower: &str) -> Option<Amount> {
    regex.captures(lower).and_then(|caps| amount_after_verb(&caps))
}

pub(super) fn gain_life(ctx: &EffectText, out: &mut Detections) {
    if let Some(amount) = counted(&GAIN_LIFE, &ctx.lower) {
        out.push(Action::GainLife {
            amount,
            target: ctx.scope,
        });
    }
}

pub(super) fn lose_life(ctx: &EffectText, out: &mut Detections) {
    if let Some(amount) = counted(&LOSE_LIFE, &ctx.lower) {
        out.push(Action::LoseLife {
            amount,
            target: ctx.scope,
        });
    }
}

pub(super) fn draw(ctx: &EffectText, out: &mut Detections) {
    if let Some(amount) = counted(&DRAW, &ctx.lower) {
        out.push(Action::DrawCards {
            amount,
            target: ctx.scope,
        });
    }
}

pub(super) fn discard(ctx: &EffectText, out: &mut Detections) {
    if let Some(amount) = counted(&DISCARD, &ctx.lower) {
        out.push(Action::DiscardCards {
            amount,
            target: ctx.scope,
        });
    }
}

pub(super) fn mill(ctx: &EffectText, out: &mut Detections) {
    if let Some(amount) = counted(&MILL, &ctx.lower) {
        out.push(Action::MillCards {
            amount,
            target: ctx.scope,
        });
    }
}

/// `deals N damage`, with `X` kept symbolic.
pub(super) fn deal_damage(ctx: &EffectText, out: &mut Detections) {
    if let Some(amount) = counted(&DEAL_DAMAGE, &ctx.lower) {
        out.push(Action::DealDamage {
            amount,
            target: ctx.scope,
        });
    }
}

pub(super) fn scry(ctx: &EffectText, out: &mut Detections) {
    if let Some(amount) = counted(&SCRY, &ctx.lower) {
        out.push(Action::Scry { amount });
    }
}

pub(super) fn surveil(ctx: &EffectText, out: &mut Detections) {
    if let Some(amount) = counted(&SURVEIL, &ctx.lower) {
        out.push(Action::Surveil { amount });
    }
}

/// Literal mana symbols written after "add".
pub(super) fn add_mana(ctx: &EffectText, out: &mut Detections) {
    let Some(found) = ADD.find(&ctx.text) else {
        return;
    };
    let rest = &ctx.text[found.end()..];
    let rest = rest.split_once('.').map_or(rest, |(head, _)| head);
    let symbols = parse_mana_symbols(rest);
    if !symbols.is_empty() {
        out.push(Action::AddMana { symbols });
    }
}
