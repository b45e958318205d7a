//! # Connection State
//!
//! The one record every part of the UI reads. It is only ever changed through
//! [`ConnectionState::apply`], which takes a [`ConnectionEvent`] and reports
//! whether anything changed. Callers that hold the state behind a reactive
//! signal use that flag to skip needless notifications.
//!
//! The login flag is derived from the account (`is_logged() == account.is_some()`),
//! so "account empty iff logged out" cannot be broken by any sequence of events.

use shared::Balance;

use crate::config::Config;
use crate::error::ConnectionError;
use crate::event::{Bootstrap, ConnectionEvent};
use crate::sdk::ProviderKind;

/// Status message shown while bootstrapping.
pub const CONNECTING_MESSAGE: &str = "Connecting to Ocean...";

#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionState {
    /// Bootstrap has not settled yet
    pub is_loading: bool,
    /// An injected wallet is present
    pub has_wallet: bool,
    /// Connected network is the expected one
    pub is_nile: bool,
    /// First wallet account, `None` when logged out
    pub account: Option<String>,
    pub balance: Balance,
    /// Network name reported by the SDK
    pub network: String,
    /// Provider backing the SDK handle
    pub provider: ProviderKind,
    /// Status message for the loading placeholder
    pub message: String,
    /// Most recent failure, until dismissed
    pub last_error: Option<ConnectionError>,
    expected_network: String,
    /// Error reported by the last failing poll tick, until a tick succeeds
    poll_error: Option<ConnectionError>,
    /// Poll error the user dismissed; not raised again until polling recovers
    dismissed_poll_error: Option<ConnectionError>,
}

impl ConnectionState {
    pub fn new(config: &Config) -> Self {
        Self {
            is_loading: true,
            has_wallet: false,
            is_nile: false,
            account: None,
            balance: Balance::default(),
            network: String::new(),
            provider: ProviderKind::Node {
                uri: config.node.uri(),
            },
            message: CONNECTING_MESSAGE.to_string(),
            last_error: None,
            expected_network: config.expected_network.clone(),
            poll_error: None,
            dismissed_poll_error: None,
        }
    }

    pub fn is_logged(&self) -> bool {
        self.account.is_some()
    }

    /// Current account or `""`.
    pub fn account_id(&self) -> &str {
        self.account.as_deref().unwrap_or_default()
    }

    pub fn expected_network(&self) -> &str {
        &self.expected_network
    }

    /// Whether `network` is the expected network. Exact, case-sensitive match.
    pub fn is_expected_network(&self, network: &str) -> bool {
        network == self.expected_network
    }

    /// A poll tick failed and no tick has succeeded since.
    pub fn has_poll_error(&self) -> bool {
        self.poll_error.is_some()
    }

    /// Apply `event`, returning `true` if the state changed.
    pub fn apply(&mut self, event: ConnectionEvent) -> bool {
        match event {
            ConnectionEvent::Bootstrapped(bootstrap) => {
                self.apply_bootstrap(bootstrap);
                true
            }
            ConnectionEvent::BootstrapFailed(error) => {
                self.is_loading = false;
                self.last_error = Some(error);
                true
            }
            ConnectionEvent::AccountChanged { account, balance } => {
                if account.is_empty() {
                    return self.clear_account();
                }
                if self.account.as_deref() == Some(account.as_str()) {
                    return false;
                }
                self.account = Some(account);
                self.balance = balance;
                true
            }
            ConnectionEvent::AccountsCleared => self.clear_account(),
            ConnectionEvent::WalletLost => {
                let changed = self.has_wallet || self.account.is_some();
                self.has_wallet = false;
                self.account = None;
                changed
            }
            ConnectionEvent::NetworkChanged(network) => {
                if network == self.network {
                    return false;
                }
                self.is_nile = self.is_expected_network(&network);
                self.network = network;
                true
            }
            ConnectionEvent::LoggedIn { account, balance } => {
                if account.is_empty() {
                    return false;
                }
                let same_account = self.account.as_deref() == Some(account.as_str());
                if same_account && self.balance == balance {
                    return false;
                }
                self.account = Some(account);
                self.balance = balance;
                true
            }
            ConnectionEvent::Failed(error) => {
                if self.last_error.as_ref() == Some(&error) {
                    return false;
                }
                self.last_error = Some(error);
                true
            }
            ConnectionEvent::PollFailed(error) => {
                self.poll_error = Some(error.clone());
                if self.dismissed_poll_error.as_ref() == Some(&error)
                    || self.last_error.as_ref() == Some(&error)
                {
                    return false;
                }
                self.last_error = Some(error);
                true
            }
            ConnectionEvent::PollRecovered => {
                self.dismissed_poll_error = None;
                let Some(error) = self.poll_error.take() else {
                    return false;
                };
                if self.last_error.as_ref() != Some(&error) {
                    return false;
                }
                self.last_error = None;
                true
            }
            ConnectionEvent::ErrorDismissed => {
                let Some(error) = self.last_error.take() else {
                    return false;
                };
                if self.poll_error.as_ref() == Some(&error) {
                    self.dismissed_poll_error = Some(error);
                }
                true
            }
        }
    }

    fn apply_bootstrap(&mut self, bootstrap: Bootstrap) {
        self.is_loading = false;
        self.provider = bootstrap.provider;
        self.has_wallet = bootstrap.has_wallet;
        self.is_nile = self.is_expected_network(&bootstrap.network);
        self.network = bootstrap.network;

        match bootstrap.account {
            Some((account, balance)) if !account.is_empty() => {
                self.account = Some(account);
                self.balance = balance;
            }
            _ => self.account = None,
        }
    }

    fn clear_account(&mut self) -> bool {
        self.account.take().is_some()
    }
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
