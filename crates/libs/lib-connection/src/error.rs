//! # Connection Errors
//!
//! [`ConnectionError`] is the single error type returned by every operation in
//! this crate. Errors are never thrown past the handler that triggered them:
//! callers log them and record them in [`ConnectionState::last_error`] so the UI
//! decides how to show them.
//!
//! ## Error Categories
//!
//! - [`Provider`](ConnectionError::Provider) - wallet provider or SDK initialization
//! - [`Sdk`](ConnectionError::Sdk) - account, balance or network queries
//! - [`Faucet`](ConnectionError::Faucet) - faucet HTTP request or response parsing
//! - [`Authorization`](ConnectionError::Authorization) - wallet refused `enable()`
//! - [`NoWallet`](ConnectionError::NoWallet) - login attempted without an injected wallet
//! - [`Config`](ConnectionError::Config) - invalid configuration values
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_connection::error::{ConnectionError, Result};
//!
//! fn parse_port(raw: &str) -> Result<u16> {
//!     raw.parse()
//!         .map_err(|_| ConnectionError::Config(format!("invalid port: {raw}")))
//! }
//!
//! assert!(parse_port("8545").is_ok());
//! assert_eq!(
//!     parse_port("eighty").unwrap_err().to_string(),
//!     "Configuration error: invalid port: eighty"
//! );
//! ```
//!
//! [`ConnectionState::last_error`]: crate::state::ConnectionState::last_error

use thiserror::Error;

/// Convenience type alias for `Result<T, ConnectionError>`.
pub type Result<T> = std::result::Result<T, ConnectionError>;

/// Error type covering every failure the connection layer can observe.
///
/// Variants carry a `String` so the error stays `Clone + PartialEq` and can be
/// stored in the state record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// Wallet provider wrapping or SDK initialization failed.
    #[error("Provider error: {0}")]
    Provider(String),

    /// An SDK call (accounts, balance, network name) failed.
    #[error("SDK error: {0}")]
    Sdk(String),

    /// Faucet request failed or returned something that is not JSON.
    #[error("Faucet error: {0}")]
    Faucet(String),

    /// The wallet refused or failed the authorization request.
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Login needs an injected wallet and none is available.
    #[error("No wallet available: {0}")]
    NoWallet(String),

    /// Configuration value missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConnectionError {
    /// Short message suitable for a UI banner.
    pub fn user_message(&self) -> String {
        match self {
            ConnectionError::Provider(_) => "Could not connect to Ocean".to_string(),
            ConnectionError::Sdk(_) => "Lost contact with the network".to_string(),
            ConnectionError::Faucet(_) => "Faucet request failed".to_string(),
            ConnectionError::Authorization(_) => "Wallet authorization was not granted".to_string(),
            ConnectionError::NoWallet(_) => "No Web3 wallet detected".to_string(),
            ConnectionError::Config(msg) => msg.clone(),
        }
    }
}
