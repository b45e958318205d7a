//! # Bootstrap
//!
//! Runs once at startup. With an injected wallet the SDK is created on the
//! wallet's provider and the first account (if any) is read; without one the
//! SDK falls back to the configured node and account fields stay empty.

use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::event::{Bootstrap, ConnectionEvent};
use crate::sdk::{first_account, Connect, Ocean, ProviderKind, ProviderSource, Wallet};

/// Connect the SDK and read the initial account and network.
///
/// Returns the SDK handle together with the [`Bootstrap`] summary to apply.
/// Any failure is returned as is; the caller turns it into
/// [`ConnectionEvent::BootstrapFailed`] (see [`into_event`]).
pub async fn bootstrap<C, W>(
    connector: &C,
    wallet: &W,
    config: &Config,
) -> Result<(C::Ocean, Bootstrap)>
where
    C: Connect,
    W: Wallet + ?Sized,
{
    let has_wallet = wallet.is_present();
    let source = if has_wallet {
        ProviderSource::Injected
    } else {
        ProviderSource::Node(config.node.uri())
    };

    info!(has_wallet, source = ?source, "Bootstrapping Ocean connection");

    let ocean = connector.connect(&source).await?;

    let account = if has_wallet {
        first_account(&ocean).await?
    } else {
        None
    };
    let network = ocean.network_name().await?;

    info!(
        network = %network,
        expected = %config.expected_network,
        logged = account.is_some(),
        "Bootstrap complete"
    );

    Ok((
        ocean,
        Bootstrap {
            provider: ProviderKind::from(&source),
            has_wallet,
            network,
            account,
        },
    ))
}

/// Turn a bootstrap result into the event that settles the loading phase,
/// handing back the SDK handle on success.
pub fn into_event<O>(result: Result<(O, Bootstrap)>) -> (Option<O>, ConnectionEvent) {
    match result {
        Ok((ocean, bootstrap)) => (Some(ocean), ConnectionEvent::Bootstrapped(bootstrap)),
        Err(err) => {
            warn!(error = %err, "Bootstrap failed - continuing with default state");
            (None, ConnectionEvent::BootstrapFailed(err))
        }
    }
}
