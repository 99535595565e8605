//! Recommendation between the two options.

use super::emv::EmvResult;
use super::ids::OptionId;
use super::money::Money;

/// The outcome of comparing the two EMVs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    choice: OptionId,
    emv: Money,
}

impl Recommendation {
    /// Choose the option with the strictly greater EMV.
    ///
    /// Ties go to the option without study. The asymmetry is deliberate:
    /// on equal expected value, the option that avoids the study cost
    /// wins.
    #[must_use]
    pub fn decide(without_study: &EmvResult, with_study: &EmvResult) -> Self {
        if with_study.emv() > without_study.emv() {
            Self {
                choice: OptionId::WithStudy,
                emv: with_study.emv(),
            }
        } else {
            Self {
                choice: OptionId::WithoutStudy,
                emv: without_study.emv(),
            }
        }
    }

    /// The recommended option.
    #[must_use]
    pub const fn choice(&self) -> OptionId {
        self.choice
    }

    /// The winning EMV value.
    #[must_use]
    pub const fn emv(&self) -> Money {
        self.emv
    }
}
