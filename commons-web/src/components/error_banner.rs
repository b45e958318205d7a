//! Dismissible banner for the last connection error

use leptos::prelude::*;

use crate::state::use_connection_context;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_connection_context();

    move || {
        ctx.last_error().map(|err| {
            view! {
                <div class="error" role="alert">
                    <p class="error-title">{err.user_message()}</p>
                    <p class="error-detail">{err.to_string()}</p>
                    <button class="btn btn-small" on:click=move |_| ctx.dismiss_error()>
                        "Dismiss"
                    </button>
                </div>
            }
        })
    }
}
