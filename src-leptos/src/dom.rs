//! Browser-backed layout measurement.

use leptos::html::Div;
use leptos::prelude::*;
use lumen_types::{LayoutSource, MeasureError, Rect, Size};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlDivElement};

/// Measures a tooltip's trigger and overlay through their node refs.
#[derive(Clone, Copy)]
pub struct DomLayout {
    pub target: NodeRef<Div>,
    pub overlay: NodeRef<Div>,
}

impl DomLayout {
    pub fn new(target: NodeRef<Div>, overlay: NodeRef<Div>) -> Self {
        Self { target, overlay }
    }
}

fn measure(element: Option<HtmlDivElement>, name: &str) -> Result<Rect, MeasureError> {
    let element = element
        .filter(|el| el.is_connected())
        .ok_or_else(|| MeasureError::not_mounted(name))?;
    let rect = element.get_bounding_client_rect();
    Ok(Rect::new(rect.top(), rect.left(), rect.width(), rect.height()))
}

impl LayoutSource for DomLayout {
    fn target_rect(&self) -> Result<Rect, MeasureError> {
        measure(self.target.get_untracked(), "target")
    }

    fn overlay_rect(&self) -> Result<Rect, MeasureError> {
        measure(self.overlay.get_untracked(), "overlay")
    }

    fn viewport(&self) -> Result<Size, MeasureError> {
        viewport_size()
    }
}

/// Current `innerWidth`/`innerHeight` of the window.
pub fn viewport_size() -> Result<Size, MeasureError> {
    let window = web_sys::window().ok_or(MeasureError::NoWindow)?;
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    match (width, height) {
        (Some(width), Some(height)) => Ok(Size::new(width, height)),
        _ => Err(MeasureError::NoWindow),
    }
}

/// `scroll` listener on the document in the capture phase, so scrolling
/// any nested container is seen. Removed on drop.
pub struct CaptureScroll {
    document: Document,
    callback: Closure<dyn FnMut(Event)>,
}

impl CaptureScroll {
    pub fn attach(handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        document
            .add_event_listener_with_callback_and_bool(
                "scroll",
                callback.as_ref().unchecked_ref(),
                true,
            )
            .ok()?;
        Some(Self { document, callback })
    }
}

impl Drop for CaptureScroll {
    fn drop(&mut self) {
        drop(self.document.remove_event_listener_with_callback_and_bool(
            "scroll",
            self.callback.as_ref().unchecked_ref(),
            true,
        ));
    }
}
