//! Human-readable lines for inferred actions.
//!
//! Rendering is the only place the chosen creature type is read; pass the
//! caller's [`ChosenType`] explicitly.

use crate::action::Action;
use crate::chosen_type::ChosenType;
use crate::keyword::Keyword;
use crate::mana::format_mana_symbols;
use crate::target::TargetScope;
use crate::text::{Amount, capitalize_first};
use crate::zone::Zone;

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_lowercase(), chars.as_str()),
        None => String::new(),
    }
}

fn join_with_or(parts: &[String]) -> String {
    match parts.len() {
        0 => String::new(),
        1 => parts[0].clone(),
        2 => format!("{} or {}", parts[0], parts[1]),
        _ => {
            let mut text = parts[..parts.len() - 1].join(", ");
            text.push_str(", or ");
            text.push_str(parts.last().map(String::as_str).unwrap_or_default());
            text
        }
    }
}

fn counted(amount: Amount, noun: &str) -> String {
    if amount.is_one() {
        format!("1 {noun}")
    } else {
        format!("{amount} {noun}s")
    }
}

fn until_eot_suffix(until_eot: bool) -> &'static str {
    if until_eot { " until end of turn" } else { "" }
}

/// The object an action touches. Unresolved scopes read as "it".
fn object(target: TargetScope, chosen: &ChosenType) -> String {
    match target {
        TargetScope::Unspecified => "it".to_string(),
        other => other.describe(chosen),
    }
}

/// A trailing "(recipient)" for player-facing amounts, omitted when unresolved.
fn recipient_suffix(target: TargetScope, chosen: &ChosenType) -> String {
    match target {
        TargetScope::Unspecified => String::new(),
        other => format!(" ({})", other.describe(chosen)),
    }
}

fn describe_zone_filter(zone: Zone, query: &str, by_name: bool) -> String {
    let verb = if zone.is_hidden() { "Search" } else { "Look through" };
    let zone = zone.name();
    if query.is_empty() {
        format!("{verb} {zone}")
    } else if by_name {
        format!("{verb} {zone} for a card named {query}")
    } else {
        format!("{verb} {zone} for {query}")
    }
}

fn describe_keyword_grant(
    keyword: Keyword,
    target: TargetScope,
    until_eot: bool,
    chosen: &ChosenType,
) -> String {
    format!(
        "{} {} {keyword}{}",
        capitalize_first(&object(target, chosen)),
        if target.is_plural() { "gain" } else { "gains" },
        until_eot_suffix(until_eot)
    )
}

/// One display sentence for an action, without numbering.
pub fn describe_action(action: &Action, chosen: &ChosenType) -> String {
    match action {
        Action::Note { text } => text.clone(),
        Action::Choice { options } => {
            let options: Vec<String> = options
                .iter()
                .map(|option| lowercase_first(&describe_action(option, chosen)))
                .collect();
            format!("Choose one: {}", join_with_or(&options))
        }
        Action::SetTypeChoice { target } => {
            format!("Choose a creature type for {}", object(*target, chosen))
        }
        Action::SetColorChoice { target } => {
            format!("Choose a color for {}", object(*target, chosen))
        }
        Action::CreateTokens { amount, token } => {
            format!("Create {}", counted(*amount, &format!("{token} token")))
        }
        Action::GrantKeyword {
            keyword,
            target,
            until_eot,
        } => describe_keyword_grant(*keyword, *target, *until_eot, chosen),
        Action::AddMana { symbols } => format!("Add {}", format_mana_symbols(symbols)),
        Action::PtMod {
            power,
            toughness,
            target,
            until_eot,
            template,
        } => {
            let subject = match template {
                Some(template) => chosen.with_chosen_type(template),
                None => capitalize_first(&object(*target, chosen)),
            };
            let verb = if template.is_some() || target.is_plural() {
                "get"
            } else {
                "gets"
            };
            format!(
                "{subject} {verb} {power:+}/{toughness:+}{}",
                until_eot_suffix(*until_eot)
            )
        }
        Action::GainLife { amount, target } => {
            format!("Gain {amount} life{}", recipient_suffix(*target, chosen))
        }
        Action::LoseLife { amount, target } => {
            format!("Lose {amount} life{}", recipient_suffix(*target, chosen))
        }
        Action::DrawCards { amount, target } => format!(
            "Draw {}{}",
            counted(*amount, "card"),
            recipient_suffix(*target, chosen)
        ),
        Action::DiscardCards { amount, target } => format!(
            "Discard {}{}",
            counted(*amount, "card"),
            recipient_suffix(*target, chosen)
        ),
        Action::MillCards { amount, target } => format!(
            "Mill {}{}",
            counted(*amount, "card"),
            recipient_suffix(*target, chosen)
        ),
        Action::DealDamage { amount, target } => match target {
            TargetScope::Unspecified => format!("Deal {amount} damage"),
            other => format!("Deal {amount} damage to {}", other.describe(chosen)),
        },
        Action::PutCounters {
            counter,
            amount,
            target,
        } => {
            let noun = match counter {
                Some(counter) => format!("{counter} counter"),
                None => "counter".to_string(),
            };
            format!("Put {} on {}", counted(*amount, &noun), object(*target, chosen))
        }
        Action::Untap { target } => format!("Untap {}", object(*target, chosen)),
        Action::Tap { target } => format!("Tap {}", object(*target, chosen)),
        Action::OpenZoneFilter {
            zone,
            query,
            by_name,
        } => describe_zone_filter(*zone, query, *by_name),
        Action::Scry { amount } => format!("Scry {amount}"),
        Action::Surveil { amount } => format!("Surveil {amount}"),
        Action::ReturnToHand { target } => {
            format!("Return {} to its owner's hand", object(*target, chosen))
        }
        Action::Reanimate { target } => format!(
            "Return {} from a graveyard to the battlefield",
            object(*target, chosen)
        ),
        Action::Exile { target } => format!("Exile {}", object(*target, chosen)),
        Action::Sacrifice { target } => format!("Sacrifice {}", object(*target, chosen)),
        Action::Destroy { target } => format!("Destroy {}", object(*target, chosen)),
        Action::GainControl { target, until_eot } => format!(
            "Gain control of {}{}",
            object(*target, chosen),
            until_eot_suffix(*until_eot)
        ),
        Action::Fight { target } => {
            format!("{} fights", capitalize_first(&object(*target, chosen)))
        }
    }
}

/// Numbered display lines, one per action, starting at 1.
pub fn action_lines(actions: &[Action], chosen: &ChosenType) -> Vec<String> {
    actions
        .iter()
        .enumerate()
        .map(|(idx, action)| format!("{}. {}", idx + 1, describe_action(action, chosen)))
        .collect()
}
