use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of entries kept in a [`HistoryList`].
pub const HISTORY_CAPACITY: usize = 8;

/// Fallback token written to the clipboard when no explicit color is active.
pub const GRADIENT_TOKEN: &str = "gradient";

pub const DEFAULT_DRAFT_COLOR: &str = "#4e54c8";
pub const DEFAULT_GRADIENT_START: &str = "#4e54c8";
pub const DEFAULT_GRADIENT_END: &str = "#8f94fb";

pub const PRESET_COLORS: [&str; 24] = [
    "red",
    "green",
    "blue",
    "gray",
    "orange",
    "pink",
    "violet",
    "purple",
    "yellow",
    "brown",
    "teal",
    "cyan",
    "indigo",
    "lime",
    "skyblue",
    "magenta",
    "maroon",
    "gold",
    "coral",
    "navy",
    "crimson",
    "olive",
    "darkgreen",
    "chocolate",
];

/// A CSS-style color token (named color or hex), stored verbatim.
///
/// An empty value means "no explicit color" and selects the default gradient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ColorValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ColorValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Recently used colors, most recent first.
///
/// Holds at most [`HISTORY_CAPACITY`] distinct, non-empty values. Recording a
/// value that is already present leaves the list untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryList(Vec<ColorValue>);

impl HistoryList {
    pub fn new() -> Self {
        Self(Vec::with_capacity(HISTORY_CAPACITY))
    }

    /// Returns `true` when the list changed.
    pub fn record(&mut self, value: &ColorValue) -> bool {
        if value.is_empty() || self.contains(value) {
            return false;
        }
        self.0.insert(0, value.clone());
        self.0.truncate(HISTORY_CAPACITY);
        true
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn contains(&self, value: &ColorValue) -> bool {
        self.0.iter().any(|entry| entry == value)
    }

    pub fn get(&self, index: usize) -> Option<&ColorValue> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorValue> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ColorValue] {
        &self.0
    }
}

/// What the display paints behind the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Solid(ColorValue),
    DefaultGradient,
}

impl Background {
    pub fn for_active(active: &ColorValue) -> Self {
        if active.is_empty() {
            Self::DefaultGradient
        } else {
            Self::Solid(active.clone())
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Solid(color) => format!("Background: {color}"),
            Self::DefaultGradient => "Gradient Background".to_string(),
        }
    }
}

pub fn default_palette() -> Vec<ColorValue> {
    PRESET_COLORS.iter().copied().map(ColorValue::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(history: &HistoryList) -> Vec<&str> {
        history.iter().map(ColorValue::as_str).collect()
    }

    #[test]
    fn record_prepends_new_values() {
        let mut history = HistoryList::new();
        assert!(history.record(&"red".into()));
        assert!(history.record(&"blue".into()));
        assert_eq!(colors(&history), ["blue", "red"]);
    }

    #[test]
    fn record_ignores_present_value_without_reordering() {
        let mut history = HistoryList::new();
        history.record(&"red".into());
        history.record(&"blue".into());
        assert!(!history.record(&"red".into()));
        assert_eq!(colors(&history), ["blue", "red"]);
    }

    #[test]
    fn record_never_stores_empty_value() {
        let mut history = HistoryList::new();
        assert!(!history.record(&ColorValue::empty()));
        assert!(history.is_empty());
    }

    #[test]
    fn record_evicts_oldest_past_capacity() {
        let mut history = HistoryList::new();
        for color in &PRESET_COLORS[..HISTORY_CAPACITY + 1] {
            history.record(&(*color).into());
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.get(0).map(ColorValue::as_str), Some("yellow"));
        assert!(!history.contains(&"red".into()));
    }

    #[test]
    fn duplicate_check_is_exact_string_match() {
        let mut history = HistoryList::new();
        history.record(&"Red".into());
        assert!(history.record(&"red".into()));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn background_label_reflects_active_color() {
        assert_eq!(
            Background::for_active(&"teal".into()).label(),
            "Background: teal"
        );
        assert_eq!(
            Background::for_active(&ColorValue::empty()).label(),
            "Gradient Background"
        );
    }

    #[test]
    fn default_palette_has_every_preset_in_order() {
        let palette = default_palette();
        assert_eq!(palette.len(), 24);
        assert_eq!(palette[0].as_str(), "red");
        assert_eq!(palette[23].as_str(), "chocolate");
    }
}
