//! # Login
//!
//! User-triggered wallet authorization. Failures are returned, never retried.

use tracing::info;

use crate::error::{ConnectionError, Result};
use crate::event::ConnectionEvent;
use crate::sdk::{first_account, Ocean, Wallet};
use crate::state::ConnectionState;

/// Ask the wallet for authorization, then read the first account.
///
/// Returns `Ok(None)` when the wallet authorized but still exposes no
/// account (locked wallet).
pub async fn login<O, W>(
    ocean: &O,
    wallet: &W,
    state: &ConnectionState,
) -> Result<Option<ConnectionEvent>>
where
    O: Ocean,
    W: Wallet + ?Sized,
{
    if !state.has_wallet || !wallet.can_authorize() {
        return Err(ConnectionError::NoWallet(
            "install a Web3 wallet such as MetaMask to log in".to_string(),
        ));
    }

    wallet.enable().await?;

    match first_account(ocean).await? {
        Some((account, balance)) => {
            info!(account = %account, "Login granted");
            Ok(Some(ConnectionEvent::LoggedIn { account, balance }))
        }
        None => {
            info!("Wallet authorized but no account unlocked");
            Ok(None)
        }
    }
}
