//! Faucet HTTP client

use async_trait::async_trait;
use gloo_net::http::Request;
use lib_connection::error::{ConnectionError, Result};
use lib_connection::FaucetClient;
use serde_json::Value;
use shared::FaucetRequest;

/// `fetch`-backed [`FaucetClient`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooFaucet;

#[async_trait(?Send)]
impl FaucetClient for GlooFaucet {
    async fn post_json(&self, url: &str, body: &FaucetRequest) -> Result<Value> {
        let response = Request::post(url)
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| ConnectionError::Faucet(format!("failed to encode request: {e}")))?
            .send()
            .await
            .map_err(|e| ConnectionError::Faucet(format!("request failed: {e}")))?;

        log::debug!("[FAUCET] Response status: {}", response.status());

        // The body is handed back whatever the status code; the faucet reports
        // its own errors in JSON
        response
            .json::<Value>()
            .await
            .map_err(|e| ConnectionError::Faucet(format!("invalid JSON response: {e}")))
    }
}
