//! Probability pair validation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::money::Probability;
use crate::error::ValidationError;

/// Maximum deviation from 1.0 accepted for a probability pair.
pub const SUM_TOLERANCE: Decimal = dec!(0.000001);

/// A pair of scenario probabilities known to sum to 1.0.
///
/// Construction is the only way to obtain one, so holding a
/// `ProbabilityPair` is proof the invariant was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbabilityPair {
    first: Probability,
    second: Probability,
}

impl ProbabilityPair {
    /// Validate that `first + second` is 1.0 within [`SUM_TOLERANCE`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ProbabilitySum`] when the pair does not
    /// sum to 1.0; `label` names the option being validated so the error
    /// message points at the offending inputs.
    pub fn new(
        first: Probability,
        second: Probability,
        label: &'static str,
    ) -> Result<Self, ValidationError> {
        let sum = first + second;
        if (sum - Decimal::ONE).abs() > SUM_TOLERANCE {
            return Err(ValidationError::ProbabilitySum { label, sum });
        }
        Ok(Self { first, second })
    }

    /// Probability of the first scenario.
    #[must_use]
    pub const fn first(&self) -> Probability {
        self.first
    }

    /// Probability of the second scenario.
    #[must_use]
    pub const fn second(&self) -> Probability {
        self.second
    }
}
