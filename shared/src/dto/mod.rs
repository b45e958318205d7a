//! # Data Transfer Objects (DTOs)
//!
//! ## Module Organization
//!
//! - [`balance`] - Ether and Ocean token balance of an account
//! - [`faucet`] - Body posted to the faucet service
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /faucet
//! Accept: application/json
//! Content-Type: application/json
//!
//! {
//!   "address": "0x00bd138abd70e2f00903268f3db08f2d25677c9e",
//!   "agent": "commons"
//! }
//! ```
//!
//! The faucet's response body is arbitrary JSON and is passed through
//! untouched as a `serde_json::Value`.

pub mod balance;
pub mod faucet;

pub use balance::*;
pub use faucet::*;
