//! Construction-time settings for a [`Paginator`](super::Paginator).
//!
//! Everything locale- or theme-specific lives here: the link prefix, the word used in link
//! titles, and the label/glyph pairs of the first and last page controls.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LINK: &str = "?page=";
pub const DEFAULT_TITLE: &str = "Página";

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Label (used as the link `title`) and glyph (the visible text) of a first/last control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelPair {
    pub label: String,
    pub glyph: String,
}

impl LabelPair {
    pub fn new(label: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            glyph: glyph.into(),
        }
    }

    pub fn default_first() -> Self {
        Self::new("Primeira página", "«")
    }

    pub fn default_last() -> Self {
        Self::new("Última página", "»")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginatorConfig {
    /// Prefix every page number is appended to, e.g. `/records?page=`.
    pub link: String,
    /// Word placed before the page number in link titles ("Página 3").
    pub title: String,
    pub first: LabelPair,
    pub last: LabelPair,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            link: DEFAULT_LINK.to_string(),
            title: DEFAULT_TITLE.to_string(),
            first: LabelPair::default_first(),
            last: LabelPair::default_last(),
        }
    }
}

impl PaginatorConfig {
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_first(mut self, first: LabelPair) -> Self {
        self.first = first;
        self
    }

    pub fn with_last(mut self, last: LabelPair) -> Self {
        self.last = last;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PaginatorConfig::default();
        assert_eq!(config.link, "?page=");
        assert_eq!(config.title, "Página");
        assert_eq!(config.first, LabelPair::new("Primeira página", "«"));
        assert_eq!(config.last, LabelPair::new("Última página", "»"));
    }

    #[test]
    fn test_builder_overrides_only_named_fields() {
        let config = PaginatorConfig::default()
            .with_link("/users?p=")
            .with_first(LabelPair::new("First page", "<<"));
        assert_eq!(config.link, "/users?p=");
        assert_eq!(config.first.glyph, "<<");
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.last, LabelPair::default_last());
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let config: PaginatorConfig =
            serde_json::from_str(r#"{"title": "Page"}"#).expect("valid json");
        assert_eq!(config.title, "Page");
        assert_eq!(config.link, DEFAULT_LINK);
        assert_eq!(config.first, LabelPair::default_first());
    }
}
