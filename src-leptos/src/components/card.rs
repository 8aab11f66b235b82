//! Card container with optional header, loading body, and footer

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use lumen_types::{CardBody, CardOptions};

use super::Skeleton;

#[component]
pub fn Card(
    /// Body content, replaced by skeleton blocks while loading
    children: ChildrenFn,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Footer content; the footer region is omitted without it
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    #[prop(optional)] hoverable: bool,
    #[prop(default = true)] bordered: bool,
    #[prop(into, default = Signal::stored(false))] loading: Signal<bool>,
    /// Additional CSS class, appended last
    #[prop(optional, into)]
    class: String,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let options = CardOptions { title, subtitle, hoverable, bordered, loading: false, class };
    let layout = options.layout(footer.is_some(), on_click.is_some());

    let header = layout.header.map(|header| {
        view! {
            <div class="card__header">
                {header.title.map(|t| view! { <h3 class="card__title">{t}</h3> })}
                {header.subtitle.map(|s| view! { <p class="card__subtitle">{s}</p> })}
            </div>
        }
    });

    let body = move || match CardBody::resolve(loading.get()) {
        CardBody::Children => children().into_any(),
        skeleton @ CardBody::Skeleton => skeleton
            .placeholders()
            .iter()
            .map(|width| view! { <Skeleton width=*width class="card__skeleton" /> })
            .collect_view()
            .into_any(),
    };

    view! {
        <div
            class=layout.class
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {header}
            <div class="card__body">{body}</div>
            {footer.map(|footer| view! { <div class="card__footer">{footer.run()}</div> })}
        </div>
    }
}
