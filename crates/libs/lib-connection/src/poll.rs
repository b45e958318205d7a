//! # Pollers
//!
//! One tick of each fixed-interval poller. A tick compares what the SDK
//! reports with the current state and returns the event to apply, or `None`
//! when nothing changed. Scheduling belongs to the caller.

use tracing::{debug, info};

use crate::error::Result;
use crate::event::ConnectionEvent;
use crate::sdk::{Account, Ocean, Wallet};
use crate::state::ConnectionState;

/// Account poll period.
pub const ACCOUNT_POLL_MS: u32 = 1_000;

/// Network poll period.
pub const NETWORK_POLL_MS: u32 = ACCOUNT_POLL_MS * 60;

/// Re-read the first account and compare it with `state`.
///
/// - wallet gone while the state still has one: [`ConnectionEvent::WalletLost`]
/// - different first account: [`ConnectionEvent::AccountChanged`] with a fresh balance
/// - no accounts while logged in: [`ConnectionEvent::AccountsCleared`]
pub async fn poll_accounts<O, W>(
    ocean: &O,
    wallet: &W,
    state: &ConnectionState,
) -> Result<Option<ConnectionEvent>>
where
    O: Ocean,
    W: Wallet + ?Sized,
{
    if !wallet.is_present() {
        if state.has_wallet {
            info!("Injected wallet disappeared");
            return Ok(Some(ConnectionEvent::WalletLost));
        }
        return Ok(None);
    }

    let accounts = ocean.list_accounts().await?;

    match accounts.first() {
        Some(first) if !first.id().is_empty() => {
            let account = first.id();
            if account == state.account_id() {
                return Ok(None);
            }

            let balance = first.balance().await?;
            info!(account = %account, "Active account changed");
            Ok(Some(ConnectionEvent::AccountChanged { account, balance }))
        }
        _ if state.is_logged() => {
            info!("No accounts exposed - logging out");
            Ok(Some(ConnectionEvent::AccountsCleared))
        }
        _ => Ok(None),
    }
}

/// Re-read the network name and compare it with `state`.
pub async fn poll_network<O, W>(
    ocean: &O,
    wallet: &W,
    state: &ConnectionState,
) -> Result<Option<ConnectionEvent>>
where
    O: Ocean,
    W: Wallet + ?Sized,
{
    if !wallet.is_present() {
        return Ok(None);
    }

    let network = ocean.network_name().await?;
    if network == state.network {
        debug!(network = %network, "Network unchanged");
        return Ok(None);
    }

    info!(from = %state.network, to = %network, "Network changed");
    Ok(Some(ConnectionEvent::NetworkChanged(network)))
}
