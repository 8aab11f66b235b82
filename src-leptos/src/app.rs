//! Component gallery app with routing

use crate::components::GalleryNav;
use crate::pages::{CardGallery, TooltipGallery};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Lumen UI" />
        <Router>
            <GalleryNav />
            <main class="gallery-content">
                <Routes fallback=|| "Page not found">
                    <Route path=path!("/") view=CardGallery />
                    <Route path=path!("/tooltips") view=TooltipGallery />
                </Routes>
            </main>
        </Router>
    }
}
