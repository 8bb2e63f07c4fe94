//! Lexical helpers shared by the clause pipeline and the inference rules.
//!
//! Everything here works on plain `&str` and never fails: unparseable input
//! yields `None` or an empty string.

use once_cell::sync::Lazy;
use regex::Regex;

static REMINDER_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^()]*\)").expect("reminder text pattern"));

static INLINE_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+").expect("inline whitespace pattern"));

static SPACE_BEFORE_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" +([.,;:])").expect("space before punctuation pattern"));

static UNTIL_END_OF_TURN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\buntil (?:the )?end of (?:the )?turn\b").expect("until end of turn pattern")
});

/// A count read out of rules text.
///
/// `X` stays symbolic; it is never coerced to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Amount {
    Fixed(u32),
    X,
}

impl Amount {
    pub const ONE: Amount = Amount::Fixed(1);

    pub fn fixed(&self) -> Option<u32> {
        match self {
            Amount::Fixed(value) => Some(*value),
            Amount::X => None,
        }
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Amount::Fixed(1))
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::ONE
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Amount::Fixed(value) => write!(f, "{value}"),
            Amount::X => f.write_str("X"),
        }
    }
}

#[cfg(feature = "serialization")]
impl serde::Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Amount::Fixed(value) => serializer.serialize_u32(*value),
            Amount::X => serializer.serialize_str("X"),
        }
    }
}

#[cfg(feature = "serialization")]
impl<'de> serde::Deserialize<'de> for Amount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u32),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(Amount::Fixed(value)),
            Repr::Text(text) => parse_amount_token(&text).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid amount '{text}'"))
            }),
        }
    }
}

/// Maps an English number word (`a`/`an`/`one` through `twenty`) to its value.
pub fn parse_number_word(word: &str) -> Option<u32> {
    let value = match word.to_ascii_lowercase().as_str() {
        "a" | "an" | "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        "twenty" => 20,
        _ => return None,
    };
    Some(value)
}

/// Parses one token as digits, a number word, or the symbolic `X`.
///
/// Surrounding punctuation is ignored, so `"3,"` and `"X."` both parse.
pub fn parse_amount_token(token: &str) -> Option<Amount> {
    let token = token.trim_matches(|ch: char| !ch.is_ascii_alphanumeric());
    if token.is_empty() {
        return None;
    }
    if token.eq_ignore_ascii_case("x") {
        return Some(Amount::X);
    }
    if let Ok(value) = token.parse::<u32>() {
        return Some(Amount::Fixed(value));
    }
    parse_number_word(token).map(Amount::Fixed)
}

fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'\''
}

/// Reads the amount immediately following the first whole-word occurrence of
/// `keyword` that is followed by something numeric.
///
/// `number_after_keyword("Draw two cards.", "draw")` is `Some(Fixed(2))`.
pub fn number_after_keyword(text: &str, keyword: &str) -> Option<Amount> {
    let haystack = text.to_ascii_lowercase();
    let needle = keyword.to_ascii_lowercase();
    if needle.is_empty() {
        return None;
    }
    let bytes = haystack.as_bytes();

    for (idx, _) in haystack.match_indices(needle.as_str()) {
        let end = idx + needle.len();
        let start_ok = idx == 0 || !is_word_byte(bytes[idx - 1]);
        let end_ok = end >= bytes.len() || !is_word_byte(bytes[end]);
        if !start_ok || !end_ok {
            continue;
        }
        let next = haystack[end..].split_whitespace().next();
        if let Some(amount) = next.and_then(parse_amount_token) {
            return Some(amount);
        }
    }
    None
}

/// True when the text carries an "until end of turn" duration.
pub fn mentions_until_end_of_turn(text: &str) -> bool {
    UNTIL_END_OF_TURN.is_match(text)
}

/// Removes parenthetical reminder text and tidies the whitespace it leaves.
///
/// Line breaks are kept; blank lines are dropped.
pub fn strip_reminder_text(text: &str) -> String {
    let mut stripped = text.to_string();
    loop {
        let next = REMINDER_TEXT.replace_all(&stripped, "");
        if next == stripped {
            break;
        }
        stripped = next.into_owned();
    }
    stripped
        .lines()
        .map(|line| {
            let collapsed = INLINE_WHITESPACE.replace_all(line.trim(), " ");
            SPACE_BEFORE_PUNCT.replace_all(&collapsed, "$1").into_owned()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Uppercases the first character; used when echoing lowercased fragments.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
