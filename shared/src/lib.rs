//! # Shared Data Transfer Objects Library
//!
//! Wire types exchanged between the connection core, the browser app and the
//! services it talks to (Ocean SDK, faucet).
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::balance`]**: Account balance as reported by the Ocean SDK
//!   - **[`dto::faucet`]**: Faucet request body
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format account addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior, so field
//! names appear exactly as declared (`eth`, `ocn`, `address`, `agent`).
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::faucet::FaucetRequest;
//! use shared::utils::truncate_address;
//!
//! let request = FaucetRequest::commons("0x00bd138abd70e2f00903268f3db08f2d25677c9e");
//! assert_eq!(request.agent, "commons");
//!
//! let display = truncate_address(&request.address);
//! assert_eq!(display, "0x00bd...7c9e");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
