//! Card options and the render layout derived from them.

use serde::{Deserialize, Serialize};

use crate::classes::ClassList;
use crate::error::ConfigError;

/// Number of shimmering blocks shown while a card is loading.
pub const SKELETON_BLOCKS: usize = 3;

/// Widths of the loading blocks, top to bottom.
pub const SKELETON_WIDTHS: [&str; SKELETON_BLOCKS] = ["100%", "80%", "60%"];

/// Card flags and strings. Children, footer, and click handler are view
/// payloads and stay on the component.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CardOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub hoverable: bool,
    pub bordered: bool,
    pub loading: bool,
    /// Extra classes appended after the component's own.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub class: String,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            hoverable: false,
            bordered: true,
            loading: false,
            class: String::new(),
        }
    }
}

/// Header strings, already stripped of empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardHeader {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

/// What goes into the card body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBody {
    Children,
    Skeleton,
}

impl CardBody {
    pub fn resolve(loading: bool) -> Self {
        if loading {
            Self::Skeleton
        } else {
            Self::Children
        }
    }

    /// Widths of the placeholder blocks to render. Empty for `Children`.
    pub fn placeholders(self) -> &'static [&'static str] {
        match self {
            Self::Children => &[],
            Self::Skeleton => &SKELETON_WIDTHS,
        }
    }
}

/// Regions and classes for one card render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub class: String,
    pub header: Option<CardHeader>,
    pub body: CardBody,
    pub footer: bool,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).cloned()
}

impl CardOptions {
    /// Parse options from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))
    }

    pub fn header(&self) -> Option<CardHeader> {
        let title = non_empty(self.title.as_ref());
        let subtitle = non_empty(self.subtitle.as_ref());
        if title.is_none() && subtitle.is_none() {
            return None;
        }
        Some(CardHeader { title, subtitle })
    }

    pub fn class_name(&self, clickable: bool) -> String {
        ClassList::new("card")
            .with("card--hoverable", self.hoverable)
            .with("card--bordered", self.bordered)
            .with("card--clickable", clickable)
            .extend_raw(&self.class)
            .build()
    }

    pub fn layout(&self, has_footer: bool, clickable: bool) -> CardLayout {
        CardLayout {
            class: self.class_name(clickable),
            header: self.header(),
            body: CardBody::resolve(self.loading),
            footer: has_footer,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CardOptions::default();
        assert!(options.bordered);
        assert!(!options.hoverable);
        assert!(!options.loading);
        assert_eq!(options.class_name(false), "card card--bordered");
    }

    #[test]
    fn test_loading_always_has_three_placeholders() {
        for title in [None, Some("Stats".to_string())] {
            let options = CardOptions { title, loading: true, ..Default::default() };
            let layout = options.layout(true, false);
            assert_eq!(layout.body, CardBody::Skeleton);
            assert_eq!(layout.body.placeholders().len(), 3);
        }
        assert!(CardBody::resolve(false).placeholders().is_empty());
    }

    #[test]
    fn test_header_absent_iff_title_and_subtitle_empty() {
        let cases = [
            (None, None, false),
            (Some(""), None, false),
            (None, Some("  "), false),
            (Some("Stats"), None, true),
            (None, Some("last 24h"), true),
            (Some(""), Some("last 24h"), true),
        ];
        for (title, subtitle, expected) in cases {
            let options = CardOptions {
                title: title.map(str::to_string),
                subtitle: subtitle.map(str::to_string),
                ..Default::default()
            };
            assert_eq!(options.header().is_some(), expected, "{title:?} / {subtitle:?}");
        }
    }

    #[test]
    fn test_empty_title_is_dropped_from_header() {
        let options = CardOptions {
            title: Some(String::new()),
            subtitle: Some("sub".to_string()),
            ..Default::default()
        };
        let header = options.header().unwrap();
        assert_eq!(header.title, None);
        assert_eq!(header.subtitle.as_deref(), Some("sub"));
    }

    #[test]
    fn test_stats_card_with_footer() {
        let options = CardOptions { title: Some("Stats".to_string()), ..Default::default() };
        let layout = options.layout(true, false);
        assert_eq!(layout.header.unwrap().title.as_deref(), Some("Stats"));
        assert!(layout.footer);
        assert_eq!(layout.body, CardBody::Children);
    }

    #[test]
    fn test_class_order() {
        let options = CardOptions {
            hoverable: true,
            bordered: false,
            class: "wide".to_string(),
            ..Default::default()
        };
        assert_eq!(options.class_name(true), "card card--hoverable card--clickable wide");
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let options = CardOptions::from_json(r#"{"title":"Usage","hoverable":true}"#).unwrap();
        assert_eq!(options.title.as_deref(), Some("Usage"));
        assert!(options.hoverable);
        assert!(options.bordered);

        let err = CardOptions::from_json("{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
