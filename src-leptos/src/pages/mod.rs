//! Gallery pages

mod cards;
mod tooltips;

pub use cards::CardGallery;
pub use tooltips::TooltipGallery;
