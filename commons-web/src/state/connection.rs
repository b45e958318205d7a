//! Connection context
//!
//! Holds the [`ConnectionState`] signal every component reads, the SDK handle
//! and the two poll intervals. All writes go through
//! [`ConnectionContext::dispatch`]; the intervals are owned by a [`Pollers`]
//! guard and cancelled when the owning component is cleaned up.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_connection::bootstrap::{bootstrap, into_event};
use lib_connection::faucet::request_from_faucet;
use lib_connection::login::login;
use lib_connection::poll::{poll_accounts, poll_network};
use lib_connection::{
    Config, ConnectionError, ConnectionEvent, ConnectionState, ACCOUNT_POLL_MS, NETWORK_POLL_MS,
};
use serde_json::Value;
use shared::Balance;

use crate::services::{GlooFaucet, InjectedWallet, JsOcean, OceanConnector};

/// Both poll timers. Dropping the guard cancels them.
pub struct Pollers {
    _accounts: Interval,
    _network: Interval,
}

/// Global connection context
#[derive(Clone, Copy)]
pub struct ConnectionContext {
    pub state: RwSignal<ConnectionState>,
    config: StoredValue<Config>,
    ocean: StoredValue<Option<JsOcean>, LocalStorage>,
    pollers: StoredValue<Option<Pollers>, LocalStorage>,
    polling_accounts: StoredValue<bool>,
    polling_network: StoredValue<bool>,
}

impl ConnectionContext {
    pub fn new(config: Config) -> Self {
        Self {
            state: RwSignal::new(ConnectionState::new(&config)),
            config: StoredValue::new(config),
            ocean: StoredValue::new_local(None),
            pollers: StoredValue::new_local(None),
            polling_accounts: StoredValue::new(false),
            polling_network: StoredValue::new(false),
        }
    }

    // region:    --- Reads

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn is_logged(&self) -> bool {
        self.state.with(|s| s.is_logged())
    }

    pub fn has_wallet(&self) -> bool {
        self.state.with(|s| s.has_wallet)
    }

    pub fn is_nile(&self) -> bool {
        self.state.with(|s| s.is_nile)
    }

    pub fn account(&self) -> Option<String> {
        self.state.with(|s| s.account.clone())
    }

    pub fn balance(&self) -> Balance {
        self.state.with(|s| s.balance)
    }

    pub fn network(&self) -> String {
        self.state.with(|s| s.network.clone())
    }

    pub fn message(&self) -> String {
        self.state.with(|s| s.message.clone())
    }

    pub fn last_error(&self) -> Option<ConnectionError> {
        self.state.with(|s| s.last_error.clone())
    }

    pub fn expected_network(&self) -> String {
        self.state.with(|s| s.expected_network().to_string())
    }

    // endregion: --- Reads

    /// Apply `event` to the state; subscribers are only notified on change.
    pub fn dispatch(&self, event: ConnectionEvent) {
        let name = event.name();
        let changed = self
            .state
            .try_maybe_update(|state| {
                let changed = state.apply(event);
                (changed, changed)
            })
            .unwrap_or(false);
        log::debug!("[CONNECTION] {} (changed: {})", name, changed);
    }

    fn fail(&self, context: &str, err: ConnectionError) {
        log::warn!("[CONNECTION] {} failed: {}", context, err);
        self.dispatch(ConnectionEvent::Failed(err));
    }

    /// Apply a poll tick's outcome. A failing tick is only reported once per
    /// outage; the first successful tick afterwards clears it.
    fn settle_poll(
        &self,
        poller: &str,
        before: &ConnectionState,
        result: lib_connection::Result<Option<ConnectionEvent>>,
    ) {
        match result {
            Ok(event) => {
                if before.has_poll_error() {
                    self.dispatch(ConnectionEvent::PollRecovered);
                }
                if let Some(event) = event {
                    self.dispatch(event);
                }
            }
            Err(err) => {
                log::warn!("[CONNECTION] {} failed: {}", poller, err);
                self.dispatch(ConnectionEvent::PollFailed(err));
            }
        }
    }

    fn snapshot(&self) -> Option<ConnectionState> {
        self.state.try_get_untracked()
    }

    /// Bootstrap once, then start both pollers.
    pub fn start(self) {
        spawn_local(async move {
            let config = self.config.get_value();
            let connector = OceanConnector::new(config.clone());
            let result = bootstrap(&connector, &InjectedWallet, &config).await;

            let (ocean, event) = into_event(result);
            self.ocean.set_value(ocean);
            self.dispatch(event);

            self.start_pollers();
        });
    }

    fn start_pollers(self) {
        let already_running = self.pollers.try_with_value(|p| p.is_some()).unwrap_or(true);
        if already_running {
            return;
        }

        let pollers = Pollers {
            _accounts: Interval::new(ACCOUNT_POLL_MS, move || self.tick_accounts()),
            _network: Interval::new(NETWORK_POLL_MS, move || self.tick_network()),
        };
        self.pollers.set_value(Some(pollers));
        log::info!(
            "[CONNECTION] Polling accounts every {}ms, network every {}ms",
            ACCOUNT_POLL_MS,
            NETWORK_POLL_MS
        );
    }

    /// Cancel both poll intervals.
    pub fn stop_pollers(&self) {
        if let Some(Some(_)) = self.pollers.try_update_value(|p| p.take()) {
            log::info!("[CONNECTION] Pollers stopped");
        }
    }

    fn tick_accounts(self) {
        let Some(ocean) = self.ocean.try_get_value().flatten() else {
            return;
        };
        // Skip while the previous tick is still waiting on the SDK
        if self.polling_accounts.try_get_value().unwrap_or(true) {
            return;
        }
        self.polling_accounts.set_value(true);

        spawn_local(async move {
            let Some(state) = self.snapshot() else {
                return;
            };
            let result = poll_accounts(&ocean, &InjectedWallet, &state).await;
            self.polling_accounts.try_set_value(false);

            self.settle_poll("account poll", &state, result);
        });
    }

    fn tick_network(self) {
        let Some(ocean) = self.ocean.try_get_value().flatten() else {
            return;
        };
        if self.polling_network.try_get_value().unwrap_or(true) {
            return;
        }
        self.polling_network.set_value(true);

        spawn_local(async move {
            let Some(state) = self.snapshot() else {
                return;
            };
            let result = poll_network(&ocean, &InjectedWallet, &state).await;
            self.polling_network.try_set_value(false);

            self.settle_poll("network poll", &state, result);
        });
    }

    /// Ask the wallet for authorization and log in with its first account.
    pub fn start_login(self, event: Option<&web_sys::Event>) {
        if let Some(event) = event {
            event.prevent_default();
        }

        spawn_local(async move {
            let Some(ocean) = self.ocean.try_get_value().flatten() else {
                self.fail(
                    "login",
                    ConnectionError::Provider("Ocean is not connected".to_string()),
                );
                return;
            };
            let Some(state) = self.snapshot() else {
                return;
            };

            match login(&ocean, &InjectedWallet, &state).await {
                Ok(Some(event)) => self.dispatch(event),
                Ok(None) => log::info!("[LOGIN] Wallet is still locked"),
                Err(err) => self.fail("login", err),
            }
        });
    }

    /// Request test tokens for the current account.
    ///
    /// Resolves to the faucet's JSON response, or `None` when there is no
    /// account or the request failed (the error lands in the state).
    pub async fn request_from_faucet(self) -> Option<Value> {
        let config = self.config.get_value();
        let state = self.snapshot()?;

        match request_from_faucet(&GlooFaucet, &config, &state).await {
            Ok(response) => response,
            Err(err) => {
                self.fail("requestFromFaucet", err);
                None
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.dispatch(ConnectionEvent::ErrorDismissed);
    }
}

pub fn provide_connection_context(config: Config) -> ConnectionContext {
    let context = ConnectionContext::new(config);
    provide_context(context);
    on_cleanup(move || context.stop_pollers());
    context
}

pub fn use_connection_context() -> ConnectionContext {
    expect_context::<ConnectionContext>()
}
