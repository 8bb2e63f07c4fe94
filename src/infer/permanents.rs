//! Rules acting on permanents and cards: tapping, zone moves, removal,
//! control and fights. Each fires at most once per effect.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Detections, EffectText, compile, has_affirmative};
use crate::action::Action;

const TAP_OBJECTS: &str =
    r"(?:all|another|each|enchanted|equipped|it|target|that|them|these|this|those|up to|x|\w+ target|an? untapped|\w+ untapped)\b";

static UNTAP: Lazy<Regex> = Lazy::new(|| compile(&format!(r"\buntaps?\s+{TAP_OBJECTS}")));

static TAP: Lazy<Regex> = Lazy::new(|| compile(&format!(r"\btaps?\s+{TAP_OBJECTS}")));

static RETURN_TO_HAND: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\breturns?\b[^.]*?\bto (?:its owner's|their owner's|their owners'|your|their) hands?\b",
    )
});

static REANIMATE: Lazy<Regex> =
    Lazy::new(|| compile(r"\bfrom [^.]*?\bgraveyards? (?:to|onto) the battlefield\b"));

static EXILE: Lazy<Regex> = Lazy::new(|| compile(r"\bexiles?\b"));

static SACRIFICE: Lazy<Regex> = Lazy::new(|| compile(r"\bsacrifices?\b"));

static DESTROY: Lazy<Regex> = Lazy::new(|| compile(r"\bdestroys?\b"));

static GAIN_CONTROL: Lazy<Regex> = Lazy::new(|| compile(r"\bgains? control of\b"));

static FIGHT: Lazy<Regex> = Lazy::new(|| compile(r"\bfights?\b"));

pub(super) fn untap(ctx: &EffectText, out: &mut Detections) {
    if has_affirmative(&UNTAP, &ctx.lower) {
        out.push(Action::Untap { target: ctx.scope });
    }
}

pub(super) fn tap(ctx: &EffectText, out: &mut Detections) {
    if has_affirmative(&TAP, &ctx.lower) {
        out.push(Action::Tap { target: ctx.scope });
    }
}

pub(super) fn return_to_hand(ctx: &EffectText, out: &mut Detections) {
    if RETURN_TO_HAND.is_match(&ctx.lower) {
        out.push(Action::ReturnToHand { target: ctx.scope });
    }
}

/// Graveyard to battlefield.
pub(super) fn reanimate(ctx: &EffectText, out: &mut Detections) {
    if REANIMATE.is_match(&ctx.lower) {
        out.push(Action::Reanimate { target: ctx.scope });
    }
}

/// "exile" as a verb; "from exile" and "in exile" name the zone.
pub(super) fn exile(ctx: &EffectText, out: &mut Detections) {
    let as_verb = EXILE.find_iter(&ctx.lower).any(|found| {
        let prefix = &ctx.lower[..found.start()];
        !(prefix.ends_with("from ") || prefix.ends_with("in "))
    });
    if as_verb {
        out.push(Action::Exile { target: ctx.scope });
    }
}

pub(super) fn sacrifice(ctx: &EffectText, out: &mut Detections) {
    if SACRIFICE.is_match(&ctx.lower) {
        out.push(Action::Sacrifice { target: ctx.scope });
    }
}

pub(super) fn destroy(ctx: &EffectText, out: &mut Detections) {
    if DESTROY.is_match(&ctx.lower) {
        out.push(Action::Destroy { target: ctx.scope });
    }
}

pub(super) fn gain_control(ctx: &EffectText, out: &mut Detections) {
    if GAIN_CONTROL.is_match(&ctx.lower) {
        out.push(Action::GainControl {
            target: ctx.scope,
            until_eot: ctx.until_eot,
        });
    }
}

pub(super) fn fight(ctx: &EffectText, out: &mut Detections) {
    if FIGHT.is_match(&ctx.lower) {
        out.push(Action::Fight { target: ctx.scope });
    }
}

#[cfg(test)]
mod tests {
    use super::super::run_rule;
    use super::*;
    use crate::target::TargetScope;

    #[test]
    fn test_tap_and_untap() {
        assert_eq!(
            run_rule("untap", "Untap target permanent."),
            Some(vec![Action::Untap {
                target: TargetScope::TargetPermanent
            }])
        );
        assert_eq!(
            run_rule("tap", "Tap target creature an opponent controls."),
            Some(vec![Action::Tap {
                target: TargetScope::TargetCreatureOpponentControls
            }])
        );
        assert_eq!(
            run_rule("untap", "This creature doesn't untap during your untap step."),
            Some(Vec::new())
        );
        assert_eq!(run_rule("tap", "Untap target permanent."), Some(Vec::new()));
    }

    #[test]
    fn test_zone_moves() {
        assert_eq!(
            run_rule("return_to_hand", "Return target creature to its owner's hand."),
            Some(vec![Action::ReturnToHand {
                target: TargetScope::TargetCreature
            }])
        );
        assert_eq!(
            run_rule(
                "reanimate",
                "Return target creature card from your graveyard to the battlefield."
            ),
            Some(vec![Action::Reanimate {
                target: TargetScope::TargetCreature
            }])
        );
    }

    #[test]
    fn test_exile_zone_name_is_not_an_exile() {
        assert_eq!(
            run_rule("exile", "You may cast spells from exile."),
            Some(Vec::new())
        );
        assert_eq!(
            run_rule("exile", "Exile target artifact."),
            Some(vec![Action::Exile {
                target: TargetScope::TargetArtifact
            }])
        );
    }

    #[test]
    fn test_gain_control_carries_duration() {
        assert_eq!(
            run_rule(
                "gain_control",
                "Gain control of target creature until end of turn."
            ),
            Some(vec![Action::GainControl {
                target: TargetScope::TargetCreature,
                until_eot: true,
            }])
        );
    }
}
