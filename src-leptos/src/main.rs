//! Lumen UI - component gallery
//!
//! Mounts the gallery app that exercises every component in the library.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use gloo_timers as _;
use leptos_meta as _;
use leptos_router as _;
use lumen_types as _;
use wasm_bindgen as _;
use web_sys as _;

use leptos::prelude::*;
use lumen_leptos::app::App;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Lumen UI gallery starting...");

    mount_to_body(App);
}
