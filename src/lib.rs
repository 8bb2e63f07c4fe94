//! Reads magic card oracle text into classified ability clauses, the token
//! abilities defined by reminder text, and normalized actions.
//!
//! ```
//! use oracle_infer::{Action, infer_actions_from_text, mana::ManaSymbol};
//!
//! assert_eq!(
//!     infer_actions_from_text("Add {C}."),
//!     vec![Action::AddMana { symbols: vec![ManaSymbol::Colorless] }]
//! );
//! ```

pub mod action;
pub mod choice;
pub mod chosen_type;
pub mod clause;
pub mod color;
pub mod detect;
pub mod error;
pub mod infer;
pub mod keyword;
pub mod mana;
pub mod parser;
pub mod render;
pub mod target;
pub mod text;
pub mod token_abilities;
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod wasm_api;
pub mod zone;

pub use action::{Action, REMINDER_NOTE, UNRECOGNIZED_NOTE};
pub use chosen_type::{CHOSEN_TYPE_PLACEHOLDER, ChosenType, NOT_CHOSEN};
pub use clause::{AbilityClause, AbilityKind, classify, parse_oracle, split_clauses, split_cost_effect};
pub use color::Color;
pub use detect::{DetectAllResult, detect_all, expand_abilities};
pub use error::CardTextError;
pub use infer::{RULES, Rule, RuleFiring, infer_actions_from_text, infer_rule_firings, run_rule};
pub use keyword::Keyword;
pub use mana::ManaSymbol;
pub use parser::{OracleParser, ParseOptions};
pub use render::{action_lines, describe_action};
pub use target::{SCOPE_RULES, TargetScope, resolve_target_scope};
pub use text::Amount;
pub use token_abilities::{
    TokenAbilityDefinition, merge_token_definitions, pair_inline_token_creations,
    scan_reminder_token_abilities,
};
pub use zone::Zone;
