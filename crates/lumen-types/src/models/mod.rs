//! Component option models.

mod card;
mod tooltip;

pub use card::{CardBody, CardHeader, CardLayout, CardOptions, SKELETON_BLOCKS, SKELETON_WIDTHS};
pub use tooltip::{
    arrow_class, overlay_class, Placement, TooltipOptions, Variant, DEFAULT_DELAY_MS,
    DEFAULT_MAX_WIDTH,
};
