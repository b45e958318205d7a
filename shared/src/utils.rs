//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting account addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the defaults used in the header
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x00bd138abd70e2f00903268f3db08f2d25677c9e";
//! let formatted = format_address(address, 6, 4);
//! assert_eq!(formatted, "0x00bd...7c9e");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x00bd138abd70e2f00903268f3db08f2d25677c9e";
/// assert_eq!(format_address(addr, 6, 4), "0x00bd...7c9e");
/// assert_eq!(format_address(addr, 4, 4), "0x00...7c9e");
/// assert_eq!(format_address("0xABC", 6, 4), "0xABC");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
        || !address.is_ascii()
    {
        return address.to_string();
    }

    // Hex addresses are ASCII-only, so byte indexing is safe here
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address keeping the `0x` prefix plus four hex digits on each side.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x00bd138abd70e2f00903268f3db08f2d25677c9e";
/// assert_eq!(truncate_address(addr), "0x00bd...7c9e");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
