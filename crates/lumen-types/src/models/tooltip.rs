//! Tooltip options: placement, variant, and timing defaults.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::classes::ClassList;
use crate::error::ConfigError;

/// Hover delay before the overlay shows.
pub const DEFAULT_DELAY_MS: u32 = 200;

/// Overlay max-width in pixels.
pub const DEFAULT_MAX_WIDTH: u32 = 300;

/// Side of the target the overlay anchors to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Placement {
    pub const ALL: [Placement; 4] =
        [Placement::Top, Placement::Bottom, Placement::Left, Placement::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Top => "top",
            Placement::Bottom => "bottom",
            Placement::Left => "left",
            Placement::Right => "right",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Placement::Top),
            "bottom" => Ok(Placement::Bottom),
            "left" => Ok(Placement::Left),
            "right" => Ok(Placement::Right),
            _ => Err(ConfigError::UnknownPlacement { value: s.to_string() }),
        }
    }
}

/// Visual style of the overlay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Dark,
    Light,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Dark => "dark",
            Variant::Light => "light",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Variant::Dark),
            "light" => Ok(Variant::Light),
            _ => Err(ConfigError::UnknownVariant { value: s.to_string() }),
        }
    }
}

/// Non-content tooltip configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct TooltipOptions {
    /// Side of the target to anchor to
    #[serde(default)]
    pub placement: Placement,
    /// Hover delay in milliseconds.
    #[serde(default = "default_delay_ms", rename = "delay")]
    pub delay_ms: u32,
    /// Draw the arrow diamond
    #[serde(default = "default_arrow")]
    pub arrow: bool,
    /// Dark or light styling
    #[serde(default)]
    pub variant: Variant,
    /// Ignore hover entirely
    #[serde(default)]
    pub disabled: bool,
    /// Overlay max-width in pixels.
    #[validate(range(min = 1_u32, message = "must be greater than zero"))]
    #[serde(default = "default_max_width")]
    pub max_width: u32,
    /// Extra overlay classes, appended last
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub class: String,
}

fn default_delay_ms() -> u32 {
    DEFAULT_DELAY_MS
}

fn default_arrow() -> bool {
    true
}

fn default_max_width() -> u32 {
    DEFAULT_MAX_WIDTH
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            placement: Placement::Top,
            delay_ms: DEFAULT_DELAY_MS,
            arrow: true,
            variant: Variant::Dark,
            disabled: false,
            max_width: DEFAULT_MAX_WIDTH,
            class: String::new(),
        }
    }
}

impl TooltipOptions {
    /// Parse and validate options from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let options: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))?;
        options.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;
        Ok(options)
    }

    pub fn overlay_class(&self) -> String {
        overlay_class(self.variant, self.placement, &self.class)
    }

    pub fn max_width_style(&self) -> String {
        format!("max-width: {}px;", self.max_width)
    }
}

/// Classes for the floating overlay element.
pub fn overlay_class(variant: Variant, placement: Placement, extra: &str) -> String {
    ClassList::new("tooltip")
        .with(&format!("tooltip--{variant}"), true)
        .with(&format!("tooltip--{placement}"), true)
        .extend_raw(extra)
        .build()
}

/// Classes for the arrow diamond; it sits on the edge facing the target.
pub fn arrow_class(placement: Placement) -> String {
    format!("tooltip__arrow tooltip__arrow--{placement}")
}
