//! # Connection Events
//!
//! Every writer of [`ConnectionState`](crate::state::ConnectionState) expresses
//! its update as a [`ConnectionEvent`]; the state applies them one at a time.

use shared::Balance;

use crate::error::ConnectionError;
use crate::sdk::ProviderKind;

/// Outcome of a successful bootstrap.
#[derive(Debug, Clone, PartialEq)]
pub struct Bootstrap {
    /// Which provider the SDK was created on
    pub provider: ProviderKind,
    /// An injected wallet was found
    pub has_wallet: bool,
    pub network: String,
    /// First account and its balance, when the wallet exposes one
    pub account: Option<(String, Balance)>,
}

/// State transition requested by one of the connection's event sources.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionEvent {
    /// Bootstrap finished
    Bootstrapped(Bootstrap),
    /// Bootstrap failed; loading ends with default state
    BootstrapFailed(ConnectionError),
    /// Account poller saw a different first account
    AccountChanged { account: String, balance: Balance },
    /// Account poller saw no accounts
    AccountsCleared,
    /// Injected wallet disappeared
    WalletLost,
    /// Network poller saw a different network name
    NetworkChanged(String),
    /// Login initiator obtained an account
    LoggedIn { account: String, balance: Balance },
    /// A handler failed after bootstrap
    Failed(ConnectionError),
    /// A poll tick failed
    PollFailed(ConnectionError),
    /// A poll tick succeeded after a failure
    PollRecovered,
    /// User dismissed the last error
    ErrorDismissed,
}

impl ConnectionEvent {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            ConnectionEvent::Bootstrapped(_) => "Bootstrapped",
            ConnectionEvent::BootstrapFailed(_) => "BootstrapFailed",
            ConnectionEvent::AccountChanged { .. } => "AccountChanged",
            ConnectionEvent::AccountsCleared => "AccountsCleared",
            ConnectionEvent::WalletLost => "WalletLost",
            ConnectionEvent::NetworkChanged(_) => "NetworkChanged",
            ConnectionEvent::LoggedIn { .. } => "LoggedIn",
            ConnectionEvent::Failed(_) => "Failed",
            ConnectionEvent::PollFailed(_) => "PollFailed",
            ConnectionEvent::PollRecovered => "PollRecovered",
            ConnectionEvent::ErrorDismissed => "ErrorDismissed",
        }
    }
}
