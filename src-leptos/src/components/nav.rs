//! Top bar linking the gallery pages

use leptos::prelude::*;
use leptos_router::components::A;
use lumen_types::Placement;

use super::Tooltip;

const VERSION: &str = env!("GIT_VERSION");

/// `(path, label, hover hint)` for each gallery page.
const PAGES: [(&str, &str, &str); 2] = [
    ("/", "Cards", "Headers, footers and loading skeletons"),
    ("/tooltips", "Tooltips", "Placements, delays and viewport clamping"),
];

/// Gallery header. Each link explains its page through a [`Tooltip`], which
/// keeps the component in use on every route.
#[component]
pub fn GalleryNav() -> impl IntoView {
    view! {
        <header class="gallery-nav">
            <span class="gallery-nav-title">"Lumen UI"</span>
            <nav class="gallery-nav-links">
                {PAGES
                    .into_iter()
                    .map(|(path, label, hint)| {
                        view! {
                            <Tooltip content=move || hint placement=Placement::Bottom>
                                // `A` marks the current route with aria-current="page".
                                <A href=path exact={path == "/"}>
                                    {label}
                                </A>
                            </Tooltip>
                        }
                    })
                    .collect_view()}
            </nav>
            <Tooltip content=|| format!("Built from {VERSION}") placement=Placement::Left delay=0_u32>
                <span class="gallery-nav-version">{format!("v{VERSION}")}</span>
            </Tooltip>
        </header>
    }
}
