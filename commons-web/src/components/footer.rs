//! Footer

use leptos::prelude::*;

use crate::state::use_connection_context;
use crate::utils::constants::{APP_NAME, OCEAN_DOCS_URL};

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_connection_context();

    view! {
        <footer class="footer">
            <p>
                {APP_NAME}
                " · "
                {move || {
                    let network = ctx.network();
                    if network.is_empty() {
                        "Not connected".to_string()
                    } else {
                        format!("Connected to {}", network)
                    }
                }}
            </p>
            <p>
                <a href=OCEAN_DOCS_URL target="_blank" rel="noopener noreferrer">"Ocean Protocol docs"</a>
            </p>
        </footer>
    }
}
