//! Monetary and probability types.

use rust_decimal::Decimal;

/// Monetary amount represented as a Decimal for precision.
pub type Money = Decimal;

/// Probability represented as a Decimal for precision.
pub type Probability = Decimal;
