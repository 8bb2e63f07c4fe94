//! Length-bounded entry point for untrusted oracle text.

use crate::action::Action;
use crate::clause::{AbilityClause, parse_oracle};
use crate::detect::{DetectAllResult, detect_all};
use crate::error::CardTextError;
use crate::infer::infer_actions_from_text;

/// Default input bound, comfortably above the longest printed card.
pub const DEFAULT_MAX_INPUT_LEN: usize = 8 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Longest accepted input, in bytes.
    pub max_input_len: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}

/// Runs the pipeline after checking the input against [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct OracleParser {
    options: ParseOptions,
}

impl OracleParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn max_input_len(&self) -> usize {
        self.options.max_input_len
    }

    fn check(&self, text: &str) -> Result<(), CardTextError> {
        let max = self.options.max_input_len;
        if text.len() > max {
            tracing::warn!(len = text.len(), max, "rejecting oversized oracle text");
            return Err(CardTextError::InputTooLong {
                len: text.len(),
                max,
            });
        }
        Ok(())
    }

    pub fn parse_oracle(&self, text: &str) -> Result<Vec<AbilityClause>, CardTextError> {
        self.check(text)?;
        Ok(parse_oracle(text))
    }

    pub fn infer_actions(&self, effect: &str) -> Result<Vec<Action>, CardTextError> {
        self.check(effect)?;
        Ok(infer_actions_from_text(effect))
    }

    pub fn detect_all(&self, text: &str) -> Result<DetectAllResult, CardTextError> {
        self.check(text)?;
        Ok(detect_all(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit() {
        assert_eq!(OracleParser::default().max_input_len(), DEFAULT_MAX_INPUT_LEN);
    }

    #[test]
    fn test_oversized_input_is_rejected() {
        let parser = OracleParser::new(ParseOptions { max_input_len: 8 });
        let err = parser.detect_all("Draw a card.").unwrap_err();
        assert!(matches!(err, CardTextError::InputTooLong { len: 12, max: 8 }));
        assert_eq!(err.to_string(), "oracle text is 12 bytes, limit is 8");
    }

    #[test]
    fn test_bounded_calls_match_free_functions() {
        let parser = OracleParser::default();
        let text = "{T}: Add {G}.";
        assert_eq!(parser.parse_oracle(text).unwrap(), parse_oracle(text));
        assert_eq!(
            parser.infer_actions("Add {G}.").unwrap(),
            infer_actions_from_text("Add {G}.")
        );
    }
}
