//! About Page

use leptos::prelude::*;

use crate::utils::constants::{APP_NAME, OCEAN_DOCS_URL};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="card">
                <h1 class="card-title">{format!("About {}", APP_NAME)}</h1>
                <p>
                    "Commons is a marketplace for publishing and discovering data sets, \
                     built on Ocean Protocol. It runs entirely in your browser and talks to the \
                     network through your Web3 wallet."
                </p>
                <p>
                    "Without a wallet you can still browse: the app connects to a public Ocean \
                     node instead. Log in with MetaMask to see your account and balance, and use \
                     the faucet to get test Ether on the Nile network."
                </p>
                <p>
                    <a href=OCEAN_DOCS_URL target="_blank" rel="noopener noreferrer">"Read the Ocean Protocol docs"</a>
                </p>
            </div>
        </div>
    }
}
