//! # Faucet Requester
//!
//! Asks the faucet service to fund the current account. One request per call,
//! no retry.

use async_trait::async_trait;
use serde_json::Value;
use shared::FaucetRequest;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::state::ConnectionState;

/// HTTP transport for the faucet.
///
/// Implementations POST `body` as JSON with `Accept: application/json` and
/// return the parsed response body. Transport and parse failures map to
/// [`ConnectionError::Faucet`](crate::error::ConnectionError::Faucet).
#[async_trait(?Send)]
pub trait FaucetClient {
    async fn post_json(&self, url: &str, body: &FaucetRequest) -> Result<Value>;
}

/// Request test tokens for the current account.
///
/// Without an account no request is made and `Ok(None)` is returned.
pub async fn request_from_faucet<F>(
    client: &F,
    config: &Config,
    state: &ConnectionState,
) -> Result<Option<Value>>
where
    F: FaucetClient + ?Sized,
{
    let Some(account) = state.account.as_deref() else {
        debug!("Faucet request skipped - no account");
        return Ok(None);
    };

    let url = config.faucet_url();
    let body = FaucetRequest::commons(account);

    info!(url = %url, address = %account, "Requesting tokens from faucet");
    let response = client.post_json(&url, &body).await?;

    Ok(Some(response))
}
