//! Normalized game actions inferred from effect text.

use crate::keyword::Keyword;
use crate::mana::ManaSymbol;
use crate::target::TargetScope;
use crate::text::Amount;
use crate::zone::Zone;

/// Note text emitted when an effect string is nothing but reminder text.
pub const REMINDER_NOTE: &str = "(reminder text)";

/// Note text emitted when no rule recognized the effect.
pub const UNRECOGNIZED_NOTE: &str = "No concrete action recognized. Review manually.";

/// One unit of game effect.
///
/// Actions are plain values; the `kind` tag and field names are the wire
/// format consumed by renderers and effect engines.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Action {
    Note {
        text: String,
    },
    /// Exactly one of `options` happens.
    Choice {
        options: Vec<Action>,
    },
    SetTypeChoice {
        target: TargetScope,
    },
    SetColorChoice {
        target: TargetScope,
    },
    CreateTokens {
        amount: Amount,
        token: String,
    },
    GrantKeyword {
        keyword: Keyword,
        target: TargetScope,
        #[cfg_attr(feature = "serialization", serde(rename = "untilEOT"))]
        until_eot: bool,
    },
    AddMana {
        symbols: Vec<ManaSymbol>,
    },
    PtMod {
        power: i32,
        toughness: i32,
        target: TargetScope,
        #[cfg_attr(feature = "serialization", serde(rename = "untilEOT"))]
        until_eot: bool,
        /// Recipient text with a `{chosen_type}` placeholder, filled at render time.
        #[cfg_attr(
            feature = "serialization",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        template: Option<String>,
    },
    GainLife {
        amount: Amount,
        target: TargetScope,
    },
    LoseLife {
        amount: Amount,
        target: TargetScope,
    },
    DrawCards {
        amount: Amount,
        target: TargetScope,
    },
    DiscardCards {
        amount: Amount,
        target: TargetScope,
    },
    MillCards {
        amount: Amount,
        target: TargetScope,
    },
    DealDamage {
        amount: Amount,
        target: TargetScope,
    },
    PutCounters {
        /// `None` when the text never names the counter.
        #[cfg_attr(
            feature = "serialization",
            serde(default, skip_serializing_if = "Option::is_none")
        )]
        counter: Option<String>,
        amount: Amount,
        target: TargetScope,
    },
    Untap {
        target: TargetScope,
    },
    Tap {
        target: TargetScope,
    },
    OpenZoneFilter {
        zone: Zone,
        /// Empty means "any card".
        query: String,
        #[cfg_attr(feature = "serialization", serde(rename = "byName"))]
        by_name: bool,
    },
    Scry {
        amount: Amount,
    },
    Surveil {
        amount: Amount,
    },
    ReturnToHand {
        target: TargetScope,
    },
    Reanimate {
        target: TargetScope,
    },
    Exile {
        target: TargetScope,
    },
    Sacrifice {
        target: TargetScope,
    },
    Destroy {
        target: TargetScope,
    },
    GainControl {
        target: TargetScope,
        #[cfg_attr(feature = "serialization", serde(rename = "untilEOT"))]
        until_eot: bool,
    },
    Fight {
        target: TargetScope,
    },
}

impl Action {
    pub fn note(text: impl Into<String>) -> Self {
        Action::Note { text: text.into() }
    }

    pub fn choice(options: Vec<Action>) -> Self {
        Action::Choice { options }
    }

    /// The wire discriminator for this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Note { .. } => "note",
            Action::Choice { .. } => "choice",
            Action::SetTypeChoice { .. } => "set_type_choice",
            Action::SetColorChoice { .. } => "set_color_choice",
            Action::CreateTokens { .. } => "create_tokens",
            Action::GrantKeyword { .. } => "grant_keyword",
            Action::AddMana { .. } => "add_mana",
            Action::PtMod { .. } => "pt_mod",
            Action::GainLife { .. } => "gain_life",
            Action::LoseLife { .. } => "lose_life",
            Action::DrawCards { .. } => "draw_cards",
            Action::DiscardCards { .. } => "discard_cards",
            Action::MillCards { .. } => "mill_cards",
            Action::DealDamage { .. } => "deal_damage",
            Action::PutCounters { .. } => "put_counters",
            Action::Untap { .. } => "untap",
            Action::Tap { .. } => "tap",
            Action::OpenZoneFilter { .. } => "open_zone_filter",
            Action::Scry { .. } => "scry",
            Action::Surveil { .. } => "surveil",
            Action::ReturnToHand { .. } => "return_to_hand",
            Action::Reanimate { .. } => "reanimate",
            Action::Exile { .. } => "exile",
            Action::Sacrifice { .. } => "sacrifice",
            Action::Destroy { .. } => "destroy",
            Action::GainControl { .. } => "gain_control",
            Action::Fight { .. } => "fight",
        }
    }

    /// True for the two informational notes the engine emits on its own.
    pub fn is_fallback_note(&self) -> bool {
        matches!(self, Action::Note { text } if text == REMINDER_NOTE || text == UNRECOGNIZED_NOTE)
    }
}
