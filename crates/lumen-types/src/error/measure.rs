//! Layout measurement errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a [`crate::geometry::LayoutSource`].
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum MeasureError {
    /// Element has not been attached to the document yet
    #[error("{element} element is not mounted")]
    NotMounted {
        /// Which element was missing (target or overlay)
        element: String,
    },

    /// No browser window is available to read the viewport from
    #[error("No window available")]
    NoWindow,
}

impl MeasureError {
    pub fn not_mounted(element: &str) -> Self {
        Self::NotMounted { element: element.to_string() }
    }
}
