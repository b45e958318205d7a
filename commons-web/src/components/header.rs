//! Header with navigation and account status

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use shared::utils::truncate_address;

use crate::state::use_connection_context;
use crate::utils::constants::{APP_NAME, METAMASK_URL};
use crate::utils::format::{format_eth, format_ocn};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-inner">
                <A href="/">
                    <span class="header-title">{APP_NAME}</span>
                </A>
                <nav class="header-nav">
                    <A href="/faucet">"Faucet"</A>
                    <A href="/about">"About"</A>
                </nav>
                <AccountStatus/>
            </div>
        </header>
    }
}

#[component]
fn AccountStatus() -> impl IntoView {
    let ctx = use_connection_context();

    move || {
        if let Some(account) = ctx.account() {
            let balance = ctx.balance();
            view! {
                <div class="account-status">
                    <span class="account-address" title=account.clone()>
                        {truncate_address(&account)}
                    </span>
                    <span class="account-balance">{format_eth(balance.eth)}</span>
                    <span class="account-balance">{format_ocn(balance.ocn)}</span>
                </div>
            }
            .into_any()
        } else if ctx.has_wallet() {
            view! {
                <button
                    class="btn btn-login"
                    on:click=move |ev: MouseEvent| ctx.start_login(Some(ev.as_ref()))
                >
                    "Log in with Web3"
                </button>
            }
            .into_any()
        } else {
            view! {
                <a class="btn btn-install" href=METAMASK_URL target="_blank" rel="noopener noreferrer">
                    "Install MetaMask"
                </a>
            }
            .into_any()
        }
    }
}
