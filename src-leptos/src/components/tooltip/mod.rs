//! Tooltip component

mod driver;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::dom::{CaptureScroll, DomLayout};
use driver::HoverDriver;
use leptos::ev;
use leptos::html::Div;
use leptos::portal::Portal;
use leptos::prelude::*;
use lumen_types::geometry::arrow_style;
use lumen_types::models::{arrow_class, overlay_class, DEFAULT_DELAY_MS, DEFAULT_MAX_WIDTH};
use lumen_types::{locate, HoverCommand, HoverState, Placement, Position, Variant};

static NEXT_TOOLTIP_ID: AtomicU64 = AtomicU64::new(0);

/// Recompute the overlay position. Unmeasurable elements skip the update
/// and leave the last position in place.
fn reposition(
    layout: DomLayout,
    placement: Placement,
    arrow: bool,
    position: RwSignal<Position>,
) -> bool {
    match locate(&layout, placement, arrow) {
        Ok(next) => {
            position.set(next);
            true
        }
        Err(err) => {
            log::debug!("tooltip position skipped: {err}");
            false
        }
    }
}

/// Shows `content` in a floating overlay after hovering `children` for `delay` ms.
///
/// The overlay is portalled to `<body>` with fixed positioning and kept
/// 8px inside the viewport. Leaving the trigger hides it immediately.
#[component]
pub fn Tooltip(
    /// Overlay content
    #[prop(into)]
    content: ViewFn,
    /// Hover target
    children: Children,
    /// Side of the target to anchor to
    #[prop(into, default = Signal::stored(Placement::Top))]
    placement: Signal<Placement>,
    /// Hover delay in milliseconds, applied from the next hover
    #[prop(into, default = Signal::stored(DEFAULT_DELAY_MS))]
    delay: Signal<u32>,
    /// Draw the arrow diamond
    #[prop(default = true)]
    arrow: bool,
    /// Dark or light styling
    #[prop(optional)]
    variant: Variant,
    /// Disabled tooltips ignore hover entirely
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Overlay max-width in pixels
    #[prop(default = DEFAULT_MAX_WIDTH)]
    max_width: u32,
    /// Additional CSS class for the overlay
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let overlay_id = StoredValue::new(format!(
        "lumen-tooltip-{}",
        NEXT_TOOLTIP_ID.fetch_add(1, Ordering::Relaxed)
    ));
    let content = StoredValue::new(content);
    let overlay_class_name = Signal::derive(move || overlay_class(variant, placement.get(), &class));

    let visible = RwSignal::new(false);
    let position = RwSignal::new(Position::default());
    let placed = RwSignal::new(false);
    let target_ref = NodeRef::<Div>::new();
    let overlay_ref = NodeRef::<Div>::new();
    let layout = DomLayout::new(target_ref, overlay_ref);
    let driver = HoverDriver::new(delay.get_untracked(), visible);

    Effect::new(move |_| {
        let delay = delay.get();
        driver.dispatch(|state| {
            state.set_delay(delay);
            HoverCommand::Idle
        });
    });

    Effect::new(move |_| {
        let disabled = disabled.get();
        driver.dispatch(|state| state.set_disabled(disabled));
    });

    // Re-runs when visibility or placement changes, and once more when the
    // overlay node mounts so it can be measured.
    Effect::new(move |_| {
        let placement = placement.get();
        let mounted = overlay_ref.get().is_some();
        if !visible.get() {
            placed.set(false);
            return;
        }
        if mounted && reposition(layout, placement, arrow, position) {
            placed.set(true);
        }
    });

    let on_viewport_change = move || {
        if visible.get_untracked() {
            reposition(layout, placement.get_untracked(), arrow, position);
        }
    };
    let resize = window_event_listener(ev::resize, move |_| on_viewport_change());
    // Scroll does not bubble, so nested overflow containers need the capture phase.
    let scroll = StoredValue::new_local(CaptureScroll::attach(move |_| on_viewport_change()));

    on_cleanup(move || {
        driver.teardown();
        resize.remove();
        scroll.try_update_value(|listener| drop(listener.take()));
    });

    view! {
        <div
            class="tooltip-trigger"
            node_ref=target_ref
            aria-describedby=move || visible.get().then(|| overlay_id.get_value())
            on:mouseenter=move |_| driver.dispatch(HoverState::hover_enter)
            on:mouseleave=move |_| driver.dispatch(HoverState::hover_leave)
        >
            {children()}
        </div>
        <Show when=move || visible.get()>
            <Portal>
                <div
                    id=overlay_id.get_value()
                    role="tooltip"
                    class=move || overlay_class_name.get()
                    style=move || {
                        let visibility = if placed.get() { "visible" } else { "hidden" };
                        format!(
                            "position: fixed; {} max-width: {}px; visibility: {};",
                            position.get().style(),
                            max_width,
                            visibility,
                        )
                    }
                    node_ref=overlay_ref
                >
                    {content.with_value(|content| content.run())}
                    {arrow.then(|| view! {
                        <div
                            class=move || arrow_class(placement.get())
                            style=move || arrow_style(placement.get())
                        />
                    })}
                </div>
            </Portal>
        </Show>
    }
}
