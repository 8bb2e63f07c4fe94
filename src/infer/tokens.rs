use once_cell::sync::Lazy;
use regex::Regex;

use super::{Detections, EffectText, compile};
use crate::action::Action;
use crate::text::{Amount, parse_amount_token};

static INVESTIGATE: Lazy<Regex> =
    Lazy::new(|| compile(r"\binvestigate(?: (?P<twice>twice)| (?P<times>\w+) times)?\b"));

static CREATE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)\bcreates? (?P<rest>[^.]+?) tokens?\b"));

/// "investigate", "investigate twice", "investigate three times"
pub(super) fn investigate(ctx: &EffectText, out: &mut Detections) {
    let Some(caps) = INVESTIGATE.captures(&ctx.lower) else {
        return;
    };
    let amount = if caps.name("twice").is_some() {
        Amount::Fixed(2)
    } else {
        caps.name("times")
            .and_then(|times| parse_amount_token(times.as_str()))
            .unwrap_or(Amount::ONE)
    };
    out.push(Action::CreateTokens {
        amount,
        token: "Clue".to_string(),
    });
}

/// Generic `create <amount> <description> token(s)`.
pub(super) fn create_tokens(ctx: &EffectText, out: &mut Detections) {
    if out.suppress_generic_tokens {
        return;
    }
    let Some(caps) = CREATE.captures(&ctx.text) else {
        return;
    };

    let rest = caps["rest"].trim();
    let (amount, token) = match rest.split_once(' ') {
        Some((first, tail)) => match parse_amount_token(first) {
            Some(amount) => (amount, tail.trim()),
            None => (Amount::ONE, rest),
        },
        None => match parse_amount_token(rest) {
            Some(amount) => (amount, ""),
            None => (Amount::ONE, rest),
        },
    };
    let token = if token.is_empty() { "Token" } else { token };

    out.push(Action::CreateTokens {
        amount,
        token: token.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::super::{infer_actions_from_text, run_rule};
    use super::*;

    fn tokens(amount: Amount, token: &str) -> Action {
        Action::CreateTokens {
            amount,
            token: token.to_string(),
        }
    }

    #[test]
    fn test_investigate_counts() {
        assert_eq!(
            run_rule("investigate", "Investigate."),
            Some(vec![tokens(Amount::ONE, "Clue")])
        );
        assert_eq!(
            run_rule("investigate", "Investigate twice."),
            Some(vec![tokens(Amount::Fixed(2), "Clue")])
        );
        assert_eq!(
            run_rule("investigate", "Investigate three times."),
            Some(vec![tokens(Amount::Fixed(3), "Clue")])
        );
    }

    #[test]
    fn test_generic_token_description() {
        assert_eq!(
            run_rule(
                "create_tokens",
                "Create two 1/1 white Soldier creature tokens."
            ),
            Some(vec![tokens(Amount::Fixed(2), "1/1 white Soldier creature")])
        );
        assert_eq!(
            run_rule("create_tokens", "Create X Treasure tokens."),
            Some(vec![tokens(Amount::X, "Treasure")])
        );
        assert_eq!(
            run_rule("create_tokens", "Create a token that's a copy of target creature."),
            Some(vec![tokens(Amount::ONE, "Token")])
        );
    }

    #[test]
    fn test_investigate_does_not_double_as_generic_token() {
        assert_eq!(
            infer_actions_from_text("Investigate."),
            vec![tokens(Amount::ONE, "Clue")]
        );
    }
}
