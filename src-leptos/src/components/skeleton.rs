//! Loading placeholder block

use leptos::prelude::*;
use lumen_types::ClassList;

/// One shimmering block. The animation lives in the stylesheet.
#[component]
pub fn Skeleton(
    /// CSS width, e.g. "80%"
    #[prop(optional, into)]
    width: Option<String>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div
            class=ClassList::new("skeleton").extend_raw(&class).build()
            style=width.map(|w| format!("width: {w};"))
        />
    }
}
