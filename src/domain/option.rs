//! A decision branch: two scenarios plus an optional fixed cost.

use super::ids::OptionId;
use super::money::Money;
use super::probability::ProbabilityPair;
use super::scenario::Scenario;
use crate::error::ValidationError;

/// One of the two mutually exclusive options being compared.
///
/// Construction validates the probability invariant: the two scenario
/// probabilities must sum to 1.0 within tolerance, independently of the
/// other option. An invalid option has no EMV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionOption {
    id: OptionId,
    scenarios: [Scenario; 2],
    cost: Option<Money>,
}

impl DecisionOption {
    /// Create a validated option from its two scenarios.
    ///
    /// `cost` is the fixed study cost deducted from every scenario's
    /// revenue; pass `None` for the baseline option.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ProbabilitySum`] when the scenario
    /// probabilities do not sum to 1.0.
    pub fn new(
        id: OptionId,
        first: Scenario,
        second: Scenario,
        cost: Option<Money>,
    ) -> Result<Self, ValidationError> {
        ProbabilityPair::new(first.probability(), second.probability(), id.label())?;
        Ok(Self {
            id,
            scenarios: [first, second],
            cost,
        })
    }

    /// Which branch this option is.
    #[must_use]
    pub const fn id(&self) -> OptionId {
        self.id
    }

    /// The two outcome scenarios, in order.
    #[must_use]
    pub const fn scenarios(&self) -> &[Scenario; 2] {
        &self.scenarios
    }

    /// Fixed cost applied to every scenario, if any.
    #[must_use]
    pub const fn cost(&self) -> Option<Money> {
        self.cost
    }

    /// The validated probability pair.
    ///
    /// Cannot fail: the invariant was checked at construction.
    #[must_use]
    pub fn probabilities(&self) -> ProbabilityPair {
        ProbabilityPair::new(
            self.scenarios[0].probability(),
            self.scenarios[1].probability(),
            self.id.label(),
        )
        .unwrap_or_else(|_| unreachable!("validated at construction"))
    }
}
