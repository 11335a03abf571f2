use leptos::prelude::*;

pub mod api;
mod components;
pub mod form;
mod pages;

use pages::Panel;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main>
            <Panel/>
        </main>
    }
}
