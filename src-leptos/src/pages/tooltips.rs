//! Tooltip gallery page

use crate::components::{Card, Tooltip};
use leptos::prelude::*;
use lumen_types::models::DEFAULT_DELAY_MS;
use lumen_types::{Placement, TooltipOptions};

const PRESETS: [&str; 5] = [
    r#"{"placement":"top"}"#,
    r#"{"placement":"bottom","variant":"light"}"#,
    r#"{"placement":"left","delay":0}"#,
    r#"{"placement":"right","arrow":false}"#,
    r#"{"placement":"top","max_width":160,"class":"tooltip--wrap"}"#,
];

fn load_presets() -> Vec<TooltipOptions> {
    PRESETS
        .iter()
        .filter_map(|json| match TooltipOptions::from_json(json) {
            Ok(options) => Some(options),
            Err(err) => {
                log::warn!("Skipping tooltip preset {json}: {err}");
                None
            }
        })
        .collect()
}

#[component]
pub fn TooltipGallery() -> impl IntoView {
    let disabled = RwSignal::new(false);
    let cycling = RwSignal::new(Placement::Top);
    let delay = RwSignal::new(DEFAULT_DELAY_MS);

    let next_placement = move |_| {
        cycling.update(|current| {
            let index = Placement::ALL.iter().position(|p| p == current).unwrap_or(0);
            *current = Placement::ALL[(index + 1) % Placement::ALL.len()];
        });
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Tooltips"</h1>
                <label class="toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || disabled.get()
                        on:change=move |_| disabled.update(|d| *d = !*d)
                    />
                    "Disable all"
                </label>
            </header>

            <Card title="Presets" subtitle="Loaded from JSON options">
                <div class="tooltip-row">
                    {load_presets()
                        .into_iter()
                        .map(|options| {
                            let label = format!(
                                "{} / {} / {}ms",
                                options.placement,
                                options.variant,
                                options.delay_ms,
                            );
                            let text = label.clone();
                            view! {
                                <Tooltip
                                    content=move || text.clone()
                                    placement=options.placement
                                    delay=options.delay_ms
                                    arrow=options.arrow
                                    variant=options.variant
                                    max_width=options.max_width
                                    class=options.class
                                    disabled=disabled
                                >
                                    <button class="btn btn--ghost">{label}</button>
                                </Tooltip>
                            }
                        })
                        .collect_view()}
                </div>
            </Card>

            <Card title="Placement changes while open">
                <Tooltip
                    content=move || format!("Anchored {}", cycling.get())
                    placement=cycling
                    disabled=disabled
                >
                    <button class="btn btn--primary" on:click=next_placement>
                        "Click to move"
                    </button>
                </Tooltip>
            </Card>

            <Card title="Adjustable delay" subtitle="Applies from the next hover">
                <input
                    type="range"
                    min="0"
                    max="1500"
                    step="100"
                    prop:value=move || delay.get().to_string()
                    on:input=move |ev| {
                        if let Ok(ms) = event_target_value(&ev).parse::<u32>() {
                            delay.set(ms);
                        }
                    }
                />
                <Tooltip
                    content=move || format!("Shown after {}ms", delay.get_untracked())
                    delay=delay
                    disabled=disabled
                >
                    <button class="btn btn--ghost">{move || format!("{}ms", delay.get())}</button>
                </Tooltip>
            </Card>

            <div class="edge-demo">
                <Tooltip
                    content=|| "This overlay is clamped 8px inside the viewport edge"
                    disabled=disabled
                >
                    <span class="edge-demo__target">"Edge"</span>
                </Tooltip>
            </div>
        </div>
    }
}
