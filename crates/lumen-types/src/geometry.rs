//! Tooltip placement geometry.
//!
//! All coordinates are viewport pixels as reported by
//! `getBoundingClientRect`; the overlay is rendered `position: fixed`.

use crate::error::MeasureError;
use crate::models::Placement;

/// Space between target and overlay.
pub const GAP: f64 = 8.0;

/// Extra distance reserved for the arrow when it is drawn.
pub const ARROW_SIZE: f64 = 6.0;

/// Minimum distance kept between the overlay and each viewport edge.
pub const VIEWPORT_PADDING: f64 = 8.0;

/// Element box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Distance from the viewport top edge
    pub top: f64,
    /// Distance from the viewport left edge
    pub left: f64,
    /// Box width in pixels
    pub width: f64,
    /// Box height in pixels
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn size(&self) -> Size {
        Size { width: self.width, height: self.height }
    }
}

/// Width and height, used for the overlay and the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Width in pixels
    pub width: f64,
    /// Height in pixels
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Top-left corner of the overlay. Defaults to `{0, 0}` until measured.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// CSS `top` in pixels
    pub top: f64,
    /// CSS `left` in pixels
    pub left: f64,
}

impl Position {
    pub fn style(&self) -> String {
        format!("top: {}px; left: {}px;", self.top, self.left)
    }
}

/// Source of the three measurements the position algorithm needs.
pub trait LayoutSource {
    fn target_rect(&self) -> Result<Rect, MeasureError>;
    fn overlay_rect(&self) -> Result<Rect, MeasureError>;
    fn viewport(&self) -> Result<Size, MeasureError>;
}

/// Unclamped overlay position for `placement`.
pub fn raw_position(placement: Placement, target: Rect, overlay: Size, arrow: bool) -> Position {
    let offset = GAP + if arrow { ARROW_SIZE } else { 0.0 };
    let centered_left = target.left + (target.width - overlay.width) / 2.0;
    let centered_top = target.top + (target.height - overlay.height) / 2.0;

    match placement {
        Placement::Top => {
            Position { top: target.top - overlay.height - offset, left: centered_left }
        }
        Placement::Bottom => Position { top: target.bottom() + offset, left: centered_left },
        Placement::Left => {
            Position { top: centered_top, left: target.left - overlay.width - offset }
        }
        Placement::Right => Position { top: centered_top, left: target.right() + offset },
    }
}

// Far edge wins when the overlay is larger than the viewport.
fn clamp_axis(start: f64, extent: f64, limit: f64) -> f64 {
    let mut start = start;
    if start < VIEWPORT_PADDING {
        start = VIEWPORT_PADDING;
    }
    if start + extent > limit - VIEWPORT_PADDING {
        start = limit - VIEWPORT_PADDING - extent;
    }
    start
}

/// Keep the overlay inside the viewport. Axes are independent and the
/// overlay is not re-centered on the target afterwards.
pub fn clamp_to_viewport(position: Position, overlay: Size, viewport: Size) -> Position {
    Position {
        top: clamp_axis(position.top, overlay.height, viewport.height),
        left: clamp_axis(position.left, overlay.width, viewport.width),
    }
}

pub fn compute_position(
    placement: Placement,
    target: Rect,
    overlay: Size,
    viewport: Size,
    arrow: bool,
) -> Position {
    clamp_to_viewport(raw_position(placement, target, overlay, arrow), overlay, viewport)
}

/// Measure through `layout` and compute the clamped position.
///
/// Any measurement failure is returned untouched so the caller can skip
/// this recalculation and keep the previous position.
pub fn locate<P: LayoutSource + ?Sized>(
    layout: &P,
    placement: Placement,
    arrow: bool,
) -> Result<Position, MeasureError> {
    let target = layout.target_rect()?;
    let overlay = layout.overlay_rect()?;
    let viewport = layout.viewport()?;
    Ok(compute_position(placement, target, overlay.size(), viewport, arrow))
}

/// Inline style for the arrow diamond on the edge facing the target.
pub fn arrow_style(placement: Placement) -> &'static str {
    match placement {
        Placement::Top => "bottom: -4px; left: 50%; transform: translateX(-50%) rotate(45deg);",
        Placement::Bottom => "top: -4px; left: 50%; transform: translateX(-50%) rotate(45deg);",
        Placement::Left => "right: -4px; top: 50%; transform: translateY(-50%) rotate(45deg);",
        Placement::Right => "left: -4px; top: 50%; transform: translateY(-50%) rotate(45deg);",
    }
}
