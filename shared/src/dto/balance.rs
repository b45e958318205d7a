use serde::{Deserialize, Serialize};

/// Balance of an account, as returned by the SDK's `getBalance()`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    /// Ether balance
    pub eth: f64,
    /// Ocean token balance
    pub ocn: f64,
}

impl Balance {
    pub fn new(eth: f64, ocn: f64) -> Self {
        Self { eth, ocn }
    }
}
