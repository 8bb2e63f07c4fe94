//! Keyword abilities an effect can grant.

use std::str::FromStr;

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub enum Keyword {
    Banding,
    Deathtouch,
    DoubleStrike,
    Fear,
    FirstStrike,
    Flying,
    Haste,
    Hexproof,
    Indestructible,
    Lifelink,
    Menace,
    Provoke,
    Reach,
    Shadow,
    Trample,
    Vigilance,
    Bushido(u32),
    Rampage(u32),
    /// "landwalk of your choice"
    LandwalkOfChoice,
    ProtectionFromColorless,
    ProtectionFrom(Color),
    /// "protection from a color of your choice"
    ProtectionFromChosenColor,
}

/// Plain keywords offered by "gains your choice of" lists.
pub const CHOICE_KEYWORDS: [Keyword; 9] = [
    Keyword::Banding,
    Keyword::DoubleStrike,
    Keyword::Fear,
    Keyword::Flying,
    Keyword::FirstStrike,
    Keyword::Haste,
    Keyword::Provoke,
    Keyword::Shadow,
    Keyword::Trample,
];

/// Plain keywords recognized in "gains <keyword>" grants.
pub const GRANTABLE_KEYWORDS: [Keyword; 16] = [
    Keyword::Banding,
    Keyword::Deathtouch,
    Keyword::DoubleStrike,
    Keyword::Fear,
    Keyword::FirstStrike,
    Keyword::Flying,
    Keyword::Haste,
    Keyword::Hexproof,
    Keyword::Indestructible,
    Keyword::Lifelink,
    Keyword::Menace,
    Keyword::Provoke,
    Keyword::Reach,
    Keyword::Shadow,
    Keyword::Trample,
    Keyword::Vigilance,
];

impl Keyword {
    /// True for the protection family.
    pub fn is_protection(&self) -> bool {
        matches!(
            self,
            Keyword::ProtectionFromColorless
                | Keyword::ProtectionFrom(_)
                | Keyword::ProtectionFromChosenColor
        )
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Keyword::Banding => f.write_str("banding"),
            Keyword::Deathtouch => f.write_str("deathtouch"),
            Keyword::DoubleStrike => f.write_str("double strike"),
            Keyword::Fear => f.write_str("fear"),
            Keyword::FirstStrike => f.write_str("first strike"),
            Keyword::Flying => f.write_str("flying"),
            Keyword::Haste => f.write_str("haste"),
            Keyword::Hexproof => f.write_str("hexproof"),
            Keyword::Indestructible => f.write_str("indestructible"),
            Keyword::Lifelink => f.write_str("lifelink"),
            Keyword::Menace => f.write_str("menace"),
            Keyword::Provoke => f.write_str("provoke"),
            Keyword::Reach => f.write_str("reach"),
            Keyword::Shadow => f.write_str("shadow"),
            Keyword::Trample => f.write_str("trample"),
            Keyword::Vigilance => f.write_str("vigilance"),
            Keyword::Bushido(n) => write!(f, "bushido {n}"),
            Keyword::Rampage(n) => write!(f, "rampage {n}"),
            Keyword::LandwalkOfChoice => f.write_str("landwalk of your choice"),
            Keyword::ProtectionFromColorless => f.write_str("protection from colorless"),
            Keyword::ProtectionFrom(color) => write!(f, "protection from {color}"),
            Keyword::ProtectionFromChosenColor => {
                f.write_str("protection from a color of your choice")
            }
        }
    }
}

impl FromStr for Keyword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s
            .trim()
            .trim_end_matches('.')
            .trim()
            .to_ascii_lowercase();

        if let Some(keyword) = GRANTABLE_KEYWORDS
            .into_iter()
            .find(|keyword| keyword.to_string() == text)
        {
            return Ok(keyword);
        }

        let parametrized = |prefix: &str| {
            text.strip_prefix(prefix)
                .and_then(|rest| rest.trim().parse::<u32>().ok())
        };
        if let Some(n) = parametrized("bushido ") {
            return Ok(Keyword::Bushido(n));
        }
        if let Some(n) = parametrized("rampage ") {
            return Ok(Keyword::Rampage(n));
        }

        match text.as_str() {
            "landwalk of your choice" => return Ok(Keyword::LandwalkOfChoice),
            "protection from colorless" => return Ok(Keyword::ProtectionFromColorless),
            "protection from a color of your choice"
            | "protection from the color of your choice" => {
                return Ok(Keyword::ProtectionFromChosenColor);
            }
            _ => {}
        }

        if let Some(color) = text
            .strip_prefix("protection from ")
            .and_then(Color::from_name)
        {
            return Ok(Keyword::ProtectionFrom(color));
        }

        Err(format!("unknown keyword '{s}'"))
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.to_string()
    }
}

impl TryFrom<String> for Keyword {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_parametrized_keywords() {
        assert_eq!("First Strike".parse(), Ok(Keyword::FirstStrike));
        assert_eq!("bushido 2".parse(), Ok(Keyword::Bushido(2)));
        assert_eq!("rampage 3.".parse(), Ok(Keyword::Rampage(3)));
        assert!("bushido".parse::<Keyword>().is_err());
    }

    #[test]
    fn test_parse_protection_forms() {
        assert_eq!(
            "protection from red".parse(),
            Ok(Keyword::ProtectionFrom(Color::Red))
        );
        assert_eq!(
            "protection from a color of your choice".parse(),
            Ok(Keyword::ProtectionFromChosenColor)
        );
        assert_eq!(
            "protection from colorless".parse(),
            Ok(Keyword::ProtectionFromColorless)
        );
        assert!(Keyword::ProtectionFromColorless.is_protection());
        assert!(!Keyword::Trample.is_protection());
    }

    #[test]
    fn test_choice_keywords_are_grantable() {
        for keyword in CHOICE_KEYWORDS {
            assert!(GRANTABLE_KEYWORDS.contains(&keyword));
        }
    }
}
