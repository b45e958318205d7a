//! # Formatting Utilities
//!
//! - [`format_number`] - Format numbers with comma separators
//! - [`format_eth`] / [`format_ocn`] - Balance amounts with their unit
//! - [`format_json`] - Pretty-print a faucet response

use serde_json::Value;

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (formatted.as_str(), ""),
    };

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let mut integer_with_commas: String = result.chars().rev().collect();
    let rounds_to_zero = formatted.chars().all(|ch| ch == '0' || ch == '.');
    if value.is_sign_negative() && !rounds_to_zero {
        integer_with_commas.insert(0, '-');
    }

    if decimal_part.is_empty() {
        integer_with_commas
    } else {
        format!("{}.{}", integer_with_commas, decimal_part)
    }
}

/// Ether amount with 3 decimals
pub fn format_eth(eth: f64) -> String {
    format!("Ξ {}", format_number(eth, 3))
}

/// Ocean token amount without decimals
pub fn format_ocn(ocn: f64) -> String {
    format!("{} OCEAN", format_number(ocn, 0))
}

pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
