//! Rules that produce choices, keyword grants and P/T changes.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Detections, EffectText, compile};
use crate::action::Action;
use crate::chosen_type::CHOSEN_TYPE_PLACEHOLDER;
use crate::choice::{
    any_color_mana_options, choice_of_keywords, parse_pt_buff, parse_pt_swap,
    protection_color_options, pt_mod,
};
use crate::color::Color;
use crate::keyword::{GRANTABLE_KEYWORDS, Keyword};
use crate::target::TargetScope;
use crate::text::{Amount, capitalize_first};

static CHOOSE_CREATURE_TYPE: Lazy<Regex> = Lazy::new(|| compile(r"\bchoose a creature type\b"));

static YOUR_CHOICE_OF: Lazy<Regex> = Lazy::new(|| compile(r"\byour choice of\b"));

static PROTECTION_CHOSEN_COLOR: Lazy<Regex> =
    Lazy::new(|| compile(r"\bfrom (?:a|the) colou?r of your choice\b"));

static PROTECTION_NAMED_COLOR: Lazy<Regex> =
    Lazy::new(|| compile(r"\bprotection from (?P<color>white|blue|black|red|green)\b"));

static KEYWORD_GRANT: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(?:gains?|has|have)\s+(?P<list>[^.;:]+)"));

static UNTIL_CLAUSE: Lazy<Regex> = Lazy::new(|| compile(r"\s+until\b.*$"));

static LIST_SEPARATOR: Lazy<Regex> = Lazy::new(|| compile(r"\s*,\s*(?:and\s+)?|\s+and\s+"));

static ANY_COLOR_MANA: Lazy<Regex> = Lazy::new(|| compile(r"\badd one mana of any color\b"));

static BECOMES_COLOR_CHOICE: Lazy<Regex> =
    Lazy::new(|| compile(r"\bbecomes? the colou?r(?:s| or colou?rs)? of your choice\b"));

static BECOMES_TYPE_CHOICE: Lazy<Regex> =
    Lazy::new(|| compile(r"\bbecomes? the creature type of your choice\b"));

static TOKEN_EITHER: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?i)\bcreates? (?:an? )?(?P<first>[\w'/ -]+?)(?: token)? or (?:an? )?(?P<second>[\w'/ -]+?) tokens?\b",
    )
});

static CHOSEN_TYPE_LORD: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\bother creatures you control of the chosen type get (?P<power>[+-]\d+)/(?P<toughness>[+-]\d+)",
    )
});

/// "choose a creature type"
pub(super) fn choose_creature_type(ctx: &EffectText, out: &mut Detections) {
    if CHOOSE_CREATURE_TYPE.is_match(&ctx.lower) {
        out.push(Action::choice(vec![Action::SetTypeChoice { target: ctx.scope }]));
    }
}

/// Protection from colorless, from a chosen color, or from one named color.
pub(super) fn protection(ctx: &EffectText, out: &mut Detections) {
    let grant = |keyword| Action::GrantKeyword {
        keyword,
        target: ctx.scope,
        until_eot: ctx.until_eot,
    };
    let colorless = ctx.lower.contains("protection from colorless");
    let chosen_color = PROTECTION_CHOSEN_COLOR.is_match(&ctx.lower);

    match (colorless, chosen_color) {
        (true, true) => out.push(Action::choice(vec![
            grant(Keyword::ProtectionFromColorless),
            grant(Keyword::ProtectionFromChosenColor),
        ])),
        (true, false) => out.push(grant(Keyword::ProtectionFromColorless)),
        (false, true) => out.push(Action::choice(protection_color_options(
            ctx.scope,
            ctx.until_eot,
        ))),
        (false, false) => {
            if let Some(color) = PROTECTION_NAMED_COLOR
                .captures(&ctx.lower)
                .and_then(|caps| Color::from_name(&caps["color"]))
            {
                out.push(grant(Keyword::ProtectionFrom(color)));
            }
        }
    }
}

/// "gains your choice of flying, first strike, or trample"
pub(super) fn gains_choice_of(ctx: &EffectText, out: &mut Detections) {
    if let Some(options) = choice_of_keywords(&ctx.lower, ctx.scope, ctx.until_eot) {
        out.push(Action::choice(options));
    }
}

/// Plain keyword grants such as "gains flying and first strike".
pub(super) fn gains_keywords(ctx: &EffectText, out: &mut Detections) {
    if YOUR_CHOICE_OF.is_match(&ctx.lower) {
        return;
    }

    for caps in KEYWORD_GRANT.captures_iter(&ctx.lower) {
        let list = UNTIL_CLAUSE.replace(&caps["list"], "");
        for item in LIST_SEPARATOR.split(list.trim()) {
            let Ok(keyword) = item.parse::<Keyword>() else {
                continue;
            };
            if GRANTABLE_KEYWORDS.contains(&keyword) {
                out.push(Action::GrantKeyword {
                    keyword,
                    target: ctx.scope,
                    until_eot: ctx.until_eot,
                });
            }
        }
    }
}

/// "add one mana of any color"
pub(super) fn any_color_mana(ctx: &EffectText, out: &mut Detections) {
    if ANY_COLOR_MANA.is_match(&ctx.lower) {
        out.push(Action::choice(any_color_mana_options()));
    }
}

/// "becomes the color of your choice" / "becomes the creature type of your choice"
pub(super) fn becomes_choice(ctx: &EffectText, out: &mut Detections) {
    let mut options = Vec::new();
    if BECOMES_COLOR_CHOICE.is_match(&ctx.lower) {
        options.push(Action::SetColorChoice { target: ctx.scope });
    }
    if BECOMES_TYPE_CHOICE.is_match(&ctx.lower) {
        options.push(Action::SetTypeChoice { target: ctx.scope });
    }
    if !options.is_empty() {
        out.push(Action::choice(options));
    }
}

fn names_one_token(name: &str) -> bool {
    !name
        .split_whitespace()
        .any(|word| word.eq_ignore_ascii_case("token") || word.eq_ignore_ascii_case("tokens"))
}

/// "create a Food token or a Treasure token"
pub(super) fn token_either(ctx: &EffectText, out: &mut Detections) {
    let Some(caps) = TOKEN_EITHER
        .captures_iter(&ctx.text)
        .find(|caps| names_one_token(&caps["first"]) && names_one_token(&caps["second"]))
    else {
        return;
    };
    let option = |name: &str| Action::CreateTokens {
        amount: Amount::ONE,
        token: capitalize_first(name.trim()),
    };
    out.push(Action::choice(vec![
        option(&caps["first"]),
        option(&caps["second"]),
    ]));
    out.suppress_generic_tokens = true;
}

/// `gets +N/-M or -P/+Q` becomes a two-way choice; otherwise `gets +N/+M`.
pub(super) fn pt_change(ctx: &EffectText, out: &mut Detections) {
    if let Some([(p1, t1), (p2, t2)]) = parse_pt_swap(&ctx.lower) {
        out.push(Action::choice(vec![
            pt_mod(p1, t1, ctx.scope, ctx.until_eot),
            pt_mod(p2, t2, ctx.scope, ctx.until_eot),
        ]));
    } else if let Some((power, toughness)) = parse_pt_buff(&ctx.lower) {
        out.push(pt_mod(power, toughness, ctx.scope, ctx.until_eot));
    }
}

/// "other creatures you control of the chosen type get +1/+1"
pub(super) fn chosen_type_lord(ctx: &EffectText, out: &mut Detections) {
    let Some(caps) = CHOSEN_TYPE_LORD.captures(&ctx.lower) else {
        return;
    };
    let (Ok(power), Ok(toughness)) = (
        caps["power"].trim_start_matches('+').parse::<i32>(),
        caps["toughness"].trim_start_matches('+').parse::<i32>(),
    ) else {
        return;
    };
    out.push(Action::PtMod {
        power,
        toughness,
        target: TargetScope::YourOtherCreaturesOfChosenType,
        until_eot: ctx.until_eot,
        template: Some(format!(
            "Other {CHOSEN_TYPE_PLACEHOLDER} creatures you control"
        )),
    });
}

#[cfg(test)]
mod tests {
    use super::super::run_rule;
    use super::*;

    #[test]
    fn test_protection_variants() {
        assert_eq!(
            run_rule("protection", "This creature gains protection from colorless until end of turn."),
            Some(vec![Action::GrantKeyword {
                keyword: Keyword::ProtectionFromColorless,
                target: TargetScope::ThisCreature,
                until_eot: true,
            }])
        );

        let chosen = run_rule(
            "protection",
            "Target creature gains protection from the color of your choice until end of turn.",
        )
        .unwrap_or_default();
        assert!(matches!(&chosen[..], [Action::Choice { options }] if options.len() == 5));

        let both = run_rule(
            "protection",
            "This creature gains protection from colorless or from the color of your choice.",
        )
        .unwrap_or_default();
        assert!(matches!(&both[..], [Action::Choice { options }] if options.len() == 2));
    }

    #[test]
    fn test_protection_and_choice_list_both_fire() {
        let text = "It gains your choice of flying or protection from a color of your choice until end of turn.";
        let protection = run_rule("protection", text).unwrap_or_default();
        assert!(matches!(&protection[..], [Action::Choice { options }] if options.len() == 5));

        let kinds: Vec<&str> = crate::infer::infer_rule_firings(text)
            .iter()
            .map(|firing| firing.rule)
            .collect();
        assert_eq!(kinds, vec!["protection", "gains_choice_of"]);
    }

    #[test]
    fn test_gains_keywords_splits_lists() {
        assert_eq!(
            run_rule("gains_keywords", "Target creature gains flying and first strike until end of turn."),
            Some(vec![
                Action::GrantKeyword {
                    keyword: Keyword::Flying,
                    target: TargetScope::TargetCreature,
                    until_eot: true,
                },
                Action::GrantKeyword {
                    keyword: Keyword::FirstStrike,
                    target: TargetScope::TargetCreature,
                    until_eot: true,
                },
            ])
        );
        assert_eq!(run_rule("gains_keywords", "You gain 3 life."), Some(Vec::new()));
    }

    #[test]
    fn test_token_either_suppresses_generic_tokens() {
        let text = "Create a Food token or a Treasure token.";
        assert_eq!(
            run_rule("token_either", text),
            Some(vec![Action::choice(vec![
                Action::CreateTokens {
                    amount: Amount::ONE,
                    token: "Food".to_string(),
                },
                Action::CreateTokens {
                    amount: Amount::ONE,
                    token: "Treasure".to_string(),
                },
            ])])
        );
        let kinds: Vec<&str> = crate::infer::infer_actions_from_text(text)
            .iter()
            .map(Action::kind)
            .collect();
        assert_eq!(kinds, vec!["choice"]);
    }

    #[test]
    fn test_token_either_needs_two_token_names() {
        let text = "Create a Treasure token for each artifact or enchantment token you control.";
        assert_eq!(run_rule("token_either", text), Some(Vec::new()));
        assert_eq!(
            crate::infer::infer_actions_from_text(text),
            vec![Action::CreateTokens {
                amount: Amount::ONE,
                token: "Treasure".to_string(),
            }]
        );
    }

    #[test]
    fn test_lord_text_fires_buff_and_lord() {
        let text = "Other creatures you control of the chosen type get +1/+1.";
        assert_eq!(
            run_rule("pt_change", text),
            Some(vec![pt_mod(
                1,
                1,
                TargetScope::YourOtherCreaturesOfChosenType,
                false
            )])
        );
        assert_eq!(
            run_rule("chosen_type_lord", text),
            Some(vec![Action::PtMod {
                power: 1,
                toughness: 1,
                target: TargetScope::YourOtherCreaturesOfChosenType,
                until_eot: false,
                template: Some("Other {chosen_type} creatures you control".to_string()),
            }])
        );
    }

    #[test]
    fn test_becomes_choice_options() {
        assert_eq!(
            run_rule("becomes_choice", "Target creature becomes the color of your choice until end of turn."),
            Some(vec![Action::choice(vec![Action::SetColorChoice {
                target: TargetScope::TargetCreature
            }])])
        );
    }
}
