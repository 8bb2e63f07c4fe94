#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Zone {
    Library,
    Hand,
    Battlefield,
    Graveyard,
    Exile,
}

impl Zone {
    /// Parses the zone word used after a possessive ("your library").
    pub fn from_word(word: &str) -> Option<Self> {
        match word.trim().to_ascii_lowercase().as_str() {
            "library" => Some(Zone::Library),
            "hand" => Some(Zone::Hand),
            "battlefield" => Some(Zone::Battlefield),
            "graveyard" => Some(Zone::Graveyard),
            "exile" => Some(Zone::Exile),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Zone::Library => "library",
            Zone::Hand => "hand",
            Zone::Battlefield => "battlefield",
            Zone::Graveyard => "graveyard",
            Zone::Exile => "exile",
        }
    }

    /// Returns true if objects in this zone are hidden (private to owner).
    pub fn is_hidden(&self) -> bool {
        matches!(self, Zone::Library | Zone::Hand)
    }
}
