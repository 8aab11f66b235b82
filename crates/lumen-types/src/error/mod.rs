//! Typed error definitions for Lumen.
//!
//! Components never surface these to the user. Configuration errors come
//! back from option parsing, measurement errors make a position
//! recalculation skip until the next trigger.

mod config;
mod measure;

pub use config::ConfigError;
pub use measure::MeasureError;
