//! Faucet Page - request test Ether for the current account

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::state::use_connection_context;
use crate::utils::format::format_json;

#[component]
pub fn FaucetPage() -> impl IntoView {
    let ctx = use_connection_context();

    let (requesting, set_requesting) = signal(false);
    let (response, set_response) = signal(None::<Value>);

    let on_request = move |_: MouseEvent| {
        set_requesting.set(true);
        set_response.set(None);

        spawn_local(async move {
            let result = ctx.request_from_faucet().await;
            if result.is_some() {
                log::info!("[FAUCET] Request completed");
            }
            set_response.set(result);
            set_requesting.set(false);
        });
    };

    view! {
        <div class="page">
            <h1 class="page-title">"Faucet"</h1>
            <p class="subtitle">"Request test Ether for the account you are logged in with."</p>

            <div class="card">
                {move || match ctx.account() {
                    Some(account) => view! {
                        <p class="mono">{account}</p>
                    }.into_any(),
                    None => view! {
                        <p>"Log in with your wallet to request tokens."</p>
                    }.into_any(),
                }}

                <button
                    class="btn"
                    disabled=move || !ctx.is_logged() || requesting.get()
                    on:click=on_request
                >
                    {move || if requesting.get() { "Requesting..." } else { "Request Ether" }}
                </button>

                {move || response.get().map(|value| view! {
                    <pre class="faucet-response">{format_json(&value)}</pre>
                })}
            </div>
        </div>
    }
}
