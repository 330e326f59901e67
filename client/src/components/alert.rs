//! Inline error banner.

use leptos::prelude::*;

#[component]
pub fn Alert(#[prop(into)] title: String, #[prop(into)] description: Signal<String>) -> impl IntoView {
    view! {
        <div class="alert alert--destructive" role="alert">
            <span class="alert__icon" aria-hidden="true">"⚠"</span>
            <h5 class="alert__title">{title}</h5>
            <div class="alert__description">{move || description.get()}</div>
        </div>
    }
}
