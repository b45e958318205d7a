//! Commons Web App - Leptos Frontend
//!
//! Root component: installs the connection context, bootstraps it once and
//! shows a spinner until bootstrap settles.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{ErrorBanner, Footer, Header, Spinner};
use crate::pages::{AboutPage, FaucetPage, HomePage};
use crate::state::provide_connection_context;
use crate::utils::constants::load_config;

#[component]
pub fn App() -> impl IntoView {
    let ctx = provide_connection_context(load_config());
    ctx.start();

    let loading = Memo::new(move |_| ctx.is_loading());

    view! {
        <Router>
            <div class="app">
                <Header/>
                <main class="main">
                    <ErrorBanner/>
                    <Show
                        when=move || !loading.get()
                        fallback=move || view! { <Spinner message=ctx.message()/> }
                    >
                        <Routes fallback=|| view! { <NotFound/> }>
                            <Route path=path!("/") view=HomePage/>
                            <Route path=path!("/faucet") view=FaucetPage/>
                            <Route path=path!("/about") view=AboutPage/>
                        </Routes>
                    </Show>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="card">
                <h1 class="card-title">"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
