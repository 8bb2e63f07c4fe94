use once_cell::sync::Lazy;
use regex::Regex;

use crate::color::Color;

static MANA_SYMBOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]+)\}").expect("mana symbol pattern"));

/// A single mana symbol produced by an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub enum ManaSymbol {
    /// White mana {W}
    White,
    /// Blue mana {U}
    Blue,
    /// Black mana {B}
    Black,
    /// Red mana {R}
    Red,
    /// Green mana {G}
    Green,
    /// Colorless mana {C}
    Colorless,
    /// Generic mana {1}, {2}, etc.
    Generic(u8),
    /// Snow mana {S}
    Snow,
    /// Variable mana {X}
    X,
}

impl ManaSymbol {
    /// Creates a colored mana symbol from a Color.
    pub fn from_color(color: Color) -> Self {
        match color {
            Color::White => ManaSymbol::White,
            Color::Blue => ManaSymbol::Blue,
            Color::Black => ManaSymbol::Black,
            Color::Red => ManaSymbol::Red,
            Color::Green => ManaSymbol::Green,
        }
    }

    /// Parses the inside of a brace pair, e.g. `"G"` or `"2"`.
    ///
    /// Hybrid, phyrexian and tap symbols are not mana an effect adds, so they
    /// yield `None`.
    pub fn from_oracle(symbol: &str) -> Option<Self> {
        let symbol = symbol.trim();
        let parsed = match symbol.to_ascii_uppercase().as_str() {
            "W" => ManaSymbol::White,
            "U" => ManaSymbol::Blue,
            "B" => ManaSymbol::Black,
            "R" => ManaSymbol::Red,
            "G" => ManaSymbol::Green,
            "C" => ManaSymbol::Colorless,
            "S" => ManaSymbol::Snow,
            "X" => ManaSymbol::X,
            other => ManaSymbol::Generic(other.parse::<u8>().ok()?),
        };
        Some(parsed)
    }

    /// The letter (or number) printed inside the braces.
    pub fn to_oracle(self) -> String {
        match self {
            ManaSymbol::White => "W".to_string(),
            ManaSymbol::Blue => "U".to_string(),
            ManaSymbol::Black => "B".to_string(),
            ManaSymbol::Red => "R".to_string(),
            ManaSymbol::Green => "G".to_string(),
            ManaSymbol::Colorless => "C".to_string(),
            ManaSymbol::Generic(n) => n.to_string(),
            ManaSymbol::Snow => "S".to_string(),
            ManaSymbol::X => "X".to_string(),
        }
    }
}

impl From<ManaSymbol> for String {
    fn from(symbol: ManaSymbol) -> Self {
        symbol.to_oracle()
    }
}

impl TryFrom<String> for ManaSymbol {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ManaSymbol::from_oracle(&value).ok_or_else(|| format!("unknown mana symbol '{value}'"))
    }
}

/// Collects every mana symbol written in braces, in order of appearance.
pub fn parse_mana_symbols(text: &str) -> Vec<ManaSymbol> {
    MANA_SYMBOL
        .captures_iter(text)
        .filter_map(|caps| ManaSymbol::from_oracle(&caps[1]))
        .collect()
}

/// Formats symbols back into oracle syntax, e.g. `{R}{R}`.
pub fn format_mana_symbols(symbols: &[ManaSymbol]) -> String {
    symbols
        .iter()
        .map(|symbol| format!("{{{}}}", symbol.to_oracle()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mana_symbols_in_order() {
        assert_eq!(
            parse_mana_symbols("Add {R}{R}{2} or {C}."),
            vec![
                ManaSymbol::Red,
                ManaSymbol::Red,
                ManaSymbol::Generic(2),
                ManaSymbol::Colorless
            ]
        );
    }

    #[test]
    fn test_non_mana_symbols_are_skipped() {
        assert_eq!(parse_mana_symbols("{T}, {W/U}: Add {G}."), vec![ManaSymbol::Green]);
    }

    #[test]
    fn test_format_mana_symbols() {
        assert_eq!(
            format_mana_symbols(&[ManaSymbol::Generic(1), ManaSymbol::from_color(Color::Blue)]),
            "{1}{U}"
        );
    }
}
