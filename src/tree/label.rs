//! Label text assembly for tree nodes and edges.
//!
//! All formatting here is part of the tree contract, not the terminal
//! presentation: the renderer receives finished label strings.

use rust_decimal_macros::dec;

use crate::domain::{Money, Probability};
use crate::error::ConstructionError;

/// Format a monetary amount as `$1,234,567.89`.
#[must_use]
pub fn currency(value: Money) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let formatted = format!("{:.2}", value.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Format a probability as a whole percentage, e.g. `0.6` -> `60%`.
///
/// # Errors
///
/// Returns [`ConstructionError::Label`] when the value cannot be scaled
/// to a percentage without overflowing.
pub fn percent(probability: Probability) -> Result<String, ConstructionError> {
    let scaled = probability
        .checked_mul(dec!(100))
        .ok_or_else(|| ConstructionError::Label {
            detail: format!("probability {probability} does not scale to a percentage"),
        })?;
    Ok(format!("{}%", scaled.round_dp(0)))
}

/// Insert thousands separators into a digit string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
