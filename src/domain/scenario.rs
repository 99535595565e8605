//! A single outcome scenario.

use super::money::{Money, Probability};

/// One possible future outcome with an associated probability.
///
/// Revenue is `units * unit_price`; the study cost, when one applies,
/// is deducted later by the EMV evaluation, not stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    units: Money,
    unit_price: Money,
    probability: Probability,
}

impl Scenario {
    /// Create a scenario from its raw inputs.
    #[must_use]
    pub const fn new(units: Money, unit_price: Money, probability: Probability) -> Self {
        Self {
            units,
            unit_price,
            probability,
        }
    }

    /// Units sold in this scenario.
    #[must_use]
    pub const fn units(&self) -> Money {
        self.units
    }

    /// Price per unit in this scenario.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Probability of this scenario occurring.
    #[must_use]
    pub const fn probability(&self) -> Probability {
        self.probability
    }

    /// Gross revenue: `units * unit_price`.
    #[must_use]
    pub fn revenue(&self) -> Money {
        self.units * self.unit_price
    }
}
