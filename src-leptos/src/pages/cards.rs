//! Card gallery page

use crate::components::Card;
use leptos::prelude::*;

#[component]
pub fn CardGallery() -> impl IntoView {
    let loading = RwSignal::new(true);
    let clicks = RwSignal::new(0u32);

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Cards"</h1>
                <button
                    class="btn btn--secondary"
                    on:click=move |_| loading.update(|l| *l = !*l)
                >
                    {move || if loading.get() { "Finish loading" } else { "Reload" }}
                </button>
            </header>

            <div class="gallery-grid">
                <Card title="Stats" footer=|| view! { <span>"Updated just now"</span> }>
                    <p>"128 requests, 3 errors"</p>
                </Card>

                <Card title="Usage" subtitle="Last 24 hours" loading=loading>
                    <p>"4.2k tokens"</p>
                </Card>

                <Card hoverable=true bordered=false>
                    <p>"Borderless, lifts on hover"</p>
                </Card>

                <Card
                    title="Clickable"
                    class="gallery-card--accent"
                    on_click=Callback::new(move |_| clicks.update(|c| *c += 1))
                >
                    <p>{move || format!("Clicked {} times", clicks.get())}</p>
                </Card>
            </div>
        </div>
    }
}
