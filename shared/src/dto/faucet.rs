use serde::{Deserialize, Serialize};

/// Agent tag the faucet uses to attribute requests coming from this app.
pub const FAUCET_AGENT: &str = "commons";

/// Faucet request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaucetRequest {
    pub address: String,
    pub agent: String,
}

impl FaucetRequest {
    /// Build a request for `address` tagged with [`FAUCET_AGENT`].
    pub fn commons(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            agent: FAUCET_AGENT.to_string(),
        }
    }
}
