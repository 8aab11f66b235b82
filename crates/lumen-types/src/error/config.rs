//! Option parsing errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while reading component options.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// Placement name is not one of top/bottom/left/right
    #[error("Unknown placement: {value}")]
    UnknownPlacement {
        /// The rejected input
        value: String,
    },

    /// Variant name is not one of dark/light
    #[error("Unknown variant: {value}")]
    UnknownVariant {
        /// The rejected input
        value: String,
    },

    /// Options parsed but hold an unusable value
    #[error("Config validation error for {field}: {message}")]
    Validation {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Options JSON could not be parsed
    #[error("Config parse error: {message}")]
    Parse {
        /// Description of the parse failure
        message: String,
    },
}

impl ConfigError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::Parse { message: e.to_string() }
    }

    /// Create a validation error from the first failing field.
    pub fn from_validation_errors(errors: &validator::ValidationErrors) -> Self {
        let first = errors.field_errors().into_iter().next().and_then(|(field, failures)| {
            failures.first().map(|failure| {
                let message = failure
                    .message
                    .as_ref()
                    .map_or_else(|| failure.code.to_string(), ToString::to_string);
                (field.to_string(), message)
            })
        });
        match first {
            Some((field, message)) => Self::Validation { field, message },
            None => Self::Validation { field: "unknown".to_string(), message: errors.to_string() },
        }
    }
}
