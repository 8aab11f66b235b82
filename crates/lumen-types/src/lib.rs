//! # Lumen Types
//!
//! Host-independent core of the Lumen UI component set.
//!
//! - **`classes`** - Ordered CSS class composition
//! - **`error`** - Typed errors for configuration and measurement
//! - **`geometry`** - Tooltip placement and viewport clamping
//! - **`hover`** - Hover/delay state machine for the tooltip
//! - **`models`** - Card and tooltip options with their defaults
//!
//! ## Architecture Role
//!
//! ```text
//!        lumen-types (this crate)
//!               │
//!               ▼
//!         lumen-leptos (components, DOM measurement, timers)
//! ```
//!
//! Nothing here touches the DOM. The Leptos crate feeds measurements in
//! through [`geometry::LayoutSource`] and turns [`hover::HoverCommand`]s into
//! timers and signal writes.

pub mod classes;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, MeasureError};

pub use classes::ClassList;
pub use geometry::{locate, LayoutSource, Position, Rect, Size};
pub use hover::{HoverCommand, HoverPhase, HoverState, TimerTicket};
pub use models::{CardBody, CardLayout, CardOptions, Placement, TooltipOptions, Variant};
