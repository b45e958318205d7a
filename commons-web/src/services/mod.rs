//! Browser implementations of the connection boundaries

pub mod faucet;
pub mod ocean;
pub mod wallet;

pub use faucet::GlooFaucet;
pub use ocean::{JsOcean, OceanConnector};
pub use wallet::InjectedWallet;
