use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::{Detections, EffectText, compile};
use crate::action::Action;
use crate::text::{Amount, parse_amount_token};

static PT_COUNTERS: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\b(?:puts?|with) (?P<amount>\w+) (?:additional )?(?P<counter>[+-]\d+/[+-]\d+) counters? on\b",
    )
});

static LOYALTY_COUNTERS: Lazy<Regex> = Lazy::new(|| {
    compile(r"\b(?:puts?|with) (?P<amount>\w+) (?:additional )?(?P<counter>loyalty) counters? on\b")
});

static NAMED_COUNTERS_NARROW: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\b(?:puts?|with) (?P<amount>an?|one|two|three|four|five|six|seven|eight|nine|ten|\d+|x) (?P<counter>[a-z]+) counters? on (?:it|this|that|target)\b",
    )
});

static NAMED_COUNTERS_BROAD: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\b(?:puts?|with) (?P<amount>\w+) (?:additional )?(?P<counter>[a-z]+(?: [a-z]+)?) counters? on\b",
    )
});

static UNNAMED_COUNTERS: Lazy<Regex> = Lazy::new(|| {
    compile(r"\b(?P<word>\w+) counters? on (?:it|this|that|them|him|her)\b")
});

fn counter_action(caps: &Captures<'_>, ctx: &EffectText) -> Option<Action> {
    let amount = parse_amount_token(&caps["amount"])?;
    Some(Action::PutCounters {
        counter: Some(caps["counter"].to_string()),
        amount,
        target: ctx.scope,
    })
}

fn named_pass(regex: &Regex, ctx: &EffectText, out: &mut Detections) {
    for caps in regex.captures_iter(&ctx.lower) {
        if caps["counter"].split_whitespace().any(|word| word == "loyalty") {
            continue;
        }
        if let Some(action) = counter_action(&caps, ctx) {
            out.push(action);
        }
    }
}

/// P/T counters, loyalty counters, then named counters in two passes.
///
/// The narrow and broad named passes overlap, so "put a stun counter on
/// target creature" yields two identical actions. When nothing was found the
/// unnamed "counters on it" fallback runs.
pub(super) fn counters(ctx: &EffectText, out: &mut Detections) {
    let before = out.actions().len();

    for regex in [&*PT_COUNTERS, &*LOYALTY_COUNTERS] {
        if let Some(action) = regex
            .captures(&ctx.lower)
            .and_then(|caps| counter_action(&caps, ctx))
        {
            out.push(action);
        }
    }

    named_pass(&NAMED_COUNTERS_NARROW, ctx, out);
    named_pass(&NAMED_COUNTERS_BROAD, ctx, out);

    if out.actions().len() > before {
        return;
    }

    if let Some(caps) = UNNAMED_COUNTERS.captures(&ctx.lower) {
        out.push(Action::PutCounters {
            counter: None,
            amount: parse_amount_token(&caps["word"]).unwrap_or(Amount::ONE),
            target: ctx.scope,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::run_rule;
    use super::*;
    use crate::target::TargetScope;

    fn counters_for(text: &str) -> Vec<Action> {
        run_rule("counters", text).unwrap_or_default()
    }

    #[test]
    fn test_plus_one_counters() {
        assert_eq!(
            counters_for("Put two +1/+1 counters on target creature you control."),
            vec![Action::PutCounters {
                counter: Some("+1/+1".to_string()),
                amount: Amount::Fixed(2),
                target: TargetScope::TargetCreatureYouControl,
            }]
        );
    }

    #[test]
    fn test_loyalty_counters_are_not_named_twice() {
        assert_eq!(
            counters_for("Put a loyalty counter on target planeswalker."),
            vec![Action::PutCounters {
                counter: Some("loyalty".to_string()),
                amount: Amount::ONE,
                target: TargetScope::TargetPlaneswalker,
            }]
        );
    }

    #[test]
    fn test_named_counter_passes_both_fire() {
        let stun = Action::PutCounters {
            counter: Some("stun".to_string()),
            amount: Amount::ONE,
            target: TargetScope::TargetCreature,
        };
        assert_eq!(
            counters_for("Put a stun counter on target creature."),
            vec![stun.clone(), stun]
        );
    }

    #[test]
    fn test_unnamed_fallback() {
        assert_eq!(
            counters_for("Double the number of counters on it."),
            vec![Action::PutCounters {
                counter: None,
                amount: Amount::ONE,
                target: TargetScope::Unspecified,
            }]
        );
        assert!(counters_for("Draw a card.").is_empty());
    }
}
