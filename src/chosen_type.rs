//! The creature type a player named for "of the chosen type" text.
//!
//! Callers own a [`ChosenType`] and pass it to whatever renders templated
//! text. Inference never reads it; it only emits placeholders.

/// Placeholder substituted by [`ChosenType::with_chosen_type`].
pub const CHOSEN_TYPE_PLACEHOLDER: &str = "{chosen_type}";

/// Shown in place of the placeholder while nothing has been chosen.
pub const NOT_CHOSEN: &str = "(not chosen)";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ChosenType(Option<String>);

impl ChosenType {
    pub fn new(value: impl Into<String>) -> Self {
        let mut chosen = Self::default();
        chosen.set(Some(value.into()));
        chosen
    }

    /// Sets or clears the chosen type. Blank values clear it.
    pub fn set(&mut self, value: Option<String>) {
        self.0 = value
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        tracing::debug!(chosen_type = ?self.0, "chosen type updated");
    }

    pub fn clear(&mut self) {
        self.set(None);
    }

    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Replaces every placeholder in `template` with the chosen type, or with
    /// `(not chosen)` when unset.
    pub fn with_chosen_type(&self, template: &str) -> String {
        template.replace(CHOSEN_TYPE_PLACEHOLDER, self.get().unwrap_or(NOT_CHOSEN))
    }
}
