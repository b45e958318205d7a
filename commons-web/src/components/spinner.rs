//! Loading placeholder

use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loader">
            <div class="spinner"></div>
            <p class="spinner-message">{message}</p>
        </div>
    }
}
