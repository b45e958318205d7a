//! Home Page - connection summary

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::state::use_connection_context;
use crate::utils::constants::{APP_NAME, APP_TAGLINE};
use crate::utils::format::{format_eth, format_ocn};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_connection_context();

    view! {
        <div class="page">
            <h1 class="page-title">{APP_NAME}</h1>
            <p class="subtitle">{APP_TAGLINE}</p>

            {move || {
                let network = ctx.network();
                (!network.is_empty() && !ctx.is_nile()).then(|| view! {
                    <div class="info">
                        <p>
                            {format!(
                                "You are connected to {}. Please switch your wallet to the {} network.",
                                network,
                                ctx.expected_network()
                            )}
                        </p>
                    </div>
                })
            }}

            <div class="card">
                <h2 class="card-title">"Connection"</h2>
                <dl class="status-list">
                    <dt>"Wallet"</dt>
                    <dd>{move || if ctx.has_wallet() { "Detected" } else { "Not detected" }}</dd>

                    <dt>"Network"</dt>
                    <dd>{move || ctx.network()}</dd>

                    <dt>"Account"</dt>
                    <dd class="mono">
                        {move || ctx.account().unwrap_or_else(|| "Not logged in".to_string())}
                    </dd>

                    <dt>"Balance"</dt>
                    <dd>
                        {move || {
                            let balance = ctx.balance();
                            format!("{} / {}", format_eth(balance.eth), format_ocn(balance.ocn))
                        }}
                    </dd>
                </dl>

                <Show when=move || ctx.has_wallet() && !ctx.is_logged()>
                    <button
                        class="btn"
                        on:click=move |ev: MouseEvent| ctx.start_login(Some(ev.as_ref()))
                    >
                        "Unlock account"
                    </button>
                </Show>
            </div>
        </div>
    }
}
