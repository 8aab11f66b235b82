//! Lumen UI - Card and Tooltip components for Leptos

pub mod app;
pub mod components;
pub mod dom;
pub mod pages;

pub use components::{Card, Skeleton, Tooltip};
