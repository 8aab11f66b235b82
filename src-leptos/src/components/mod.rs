//! Reusable UI components

mod card;
mod nav;
mod skeleton;
mod tooltip;

pub use card::Card;
pub use nav::GalleryNav;
pub use skeleton::Skeleton;
pub use tooltip::Tooltip;
