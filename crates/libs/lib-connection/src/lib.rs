//! # Connection Library
//!
//! Wallet detection, Ocean SDK bootstrap, account/network polling, login and
//! faucet requests for the Commons marketplace client, independent of the
//! browser.
//!
//! ## Modules
//!
//! - [`config`] - node, faucet and SDK endpoints
//! - [`error`] - [`ConnectionError`] and the crate [`Result`]
//! - [`state`] - [`ConnectionState`], the record the UI broadcasts
//! - [`event`] - [`ConnectionEvent`], the only way state changes
//! - [`sdk`] - traits for the wallet, the SDK and its accounts
//! - [`bootstrap`], [`poll`], [`login`], [`faucet`] - the event sources
//!
//! ## Flow
//!
//! ```text
//! bootstrap ──┐
//! poll_accounts ──┤
//! poll_network ───┼──> ConnectionEvent ──> ConnectionState::apply
//! login ──────────┤
//! faucet (errors) ┘
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod event;
pub mod faucet;
pub mod login;
pub mod poll;
pub mod sdk;
pub mod state;

pub use config::{Config, Endpoint};
pub use error::{ConnectionError, Result};
pub use event::{Bootstrap, ConnectionEvent};
pub use faucet::FaucetClient;
pub use poll::{ACCOUNT_POLL_MS, NETWORK_POLL_MS};
pub use sdk::{Account, Connect, Ocean, ProviderKind, ProviderSource, Wallet};
pub use state::ConnectionState;
