//! Small mappers from choice and P/T phrasing to structured options.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::action::Action;
use crate::color::Color;
use crate::keyword::{CHOICE_KEYWORDS, Keyword};
use crate::mana::ManaSymbol;
use crate::target::TargetScope;

static CHOICE_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bgains? your choice of (?P<list>.+?)(?:\s+until (?:the )?end of turn|\.|$)")
        .expect("choice list pattern")
});

static OR_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*,?\s*\bor\b\s*").expect("or separator pattern"));

static PT_BUFF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bgets? (?P<power>[+-]\d+)/(?P<toughness>[+-]\d+)").expect("pt buff pattern")
});

static PT_SWAP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bgets? (?P<p1>[+-]\d+)/(?P<t1>[+-]\d+) or (?P<p2>[+-]\d+)/(?P<t2>[+-]\d+)")
        .expect("pt swap pattern")
});

/// Replaces the typographic minus used in printed P/T changes.
fn normalize_minus(text: &str) -> String {
    text.replace('−', "-")
}

fn parse_signed(text: &str) -> Option<i32> {
    text.trim_start_matches('+').parse().ok()
}

/// Extracts the options of a "gains your choice of …" list.
///
/// The list ends at "until end of turn" or the next period; "or" counts as a
/// separator.
pub fn parse_choice_list(effect: &str) -> Option<Vec<String>> {
    let caps = CHOICE_LIST.captures(effect)?;
    let list = OR_SEPARATOR.replace_all(&caps["list"], ",");
    let options: Vec<String> = list
        .split(',')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(str::to_string)
        .collect();
    (!options.is_empty()).then_some(options)
}

/// Maps one listed option to a keyword grant, or to a note when the option
/// is not a known keyword.
pub fn map_choice_option(option: &str, target: TargetScope, until_eot: bool) -> Action {
    let keyword = option.parse::<Keyword>().ok().filter(|keyword| {
        CHOICE_KEYWORDS.contains(keyword)
            || matches!(
                keyword,
                Keyword::Bushido(_)
                    | Keyword::Rampage(_)
                    | Keyword::LandwalkOfChoice
                    | Keyword::ProtectionFromChosenColor
            )
    });

    match keyword {
        Some(keyword) => Action::GrantKeyword {
            keyword,
            target,
            until_eot,
        },
        None => Action::note(option.trim()),
    }
}

/// Options of a "gains your choice of …" effect, in listed order.
pub fn choice_of_keywords(effect: &str, target: TargetScope, until_eot: bool) -> Option<Vec<Action>> {
    let options = parse_choice_list(effect)?;
    Some(
        options
            .iter()
            .map(|option| map_choice_option(option, target, until_eot))
            .collect(),
    )
}

/// One protection grant per color, in WUBRG order.
pub fn protection_color_options(target: TargetScope, until_eot: bool) -> Vec<Action> {
    Color::ALL
        .into_iter()
        .map(|color| Action::GrantKeyword {
            keyword: Keyword::ProtectionFrom(color),
            target,
            until_eot,
        })
        .collect()
}

/// One single-symbol mana option per color, in WUBRG order.
pub fn any_color_mana_options() -> Vec<Action> {
    Color::ALL
        .into_iter()
        .map(|color| Action::AddMana {
            symbols: vec![ManaSymbol::from_color(color)],
        })
        .collect()
}

/// Reads a `gets +N/+M` change.
pub fn parse_pt_buff(effect: &str) -> Option<(i32, i32)> {
    let text = normalize_minus(effect);
    let caps = PT_BUFF.captures(&text)?;
    Some((parse_signed(&caps["power"])?, parse_signed(&caps["toughness"])?))
}

/// Reads a `gets +N/-M or -P/+Q` pair of alternatives.
pub fn parse_pt_swap(effect: &str) -> Option<[(i32, i32); 2]> {
    let text = normalize_minus(effect);
    let caps = PT_SWAP.captures(&text)?;
    Some([
        (parse_signed(&caps["p1"])?, parse_signed(&caps["t1"])?),
        (parse_signed(&caps["p2"])?, parse_signed(&caps["t2"])?),
    ])
}

pub fn pt_mod(power: i32, toughness: i32, target: TargetScope, until_eot: bool) -> Action {
    Action::PtMod {
        power,
        toughness,
        target,
        until_eot,
        template: None,
    }
}
