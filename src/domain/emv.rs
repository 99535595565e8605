//! Expected monetary value computation.

use super::ids::OptionId;
use super::money::Money;
use super::option::DecisionOption;

/// The EMV of one option, with its per-scenario net revenues.
///
/// Derived from a [`DecisionOption`] and immutable once computed. For the
/// costed option each scenario's revenue has the fixed cost deducted
/// before weighting; net revenue may go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmvResult {
    option_id: OptionId,
    net_revenues: [Money; 2],
    emv: Money,
}

impl EmvResult {
    /// Compute the EMV of an option.
    ///
    /// `net_i = units_i * unit_price_i - cost` (cost 0 when absent);
    /// `emv = net_1 * p_1 + net_2 * p_2`. Pure arithmetic: the option's
    /// probability invariant was already checked at construction, and no
    /// further domain checks apply here.
    #[must_use]
    pub fn evaluate(option: &DecisionOption) -> Self {
        let cost = option.cost().unwrap_or_default();
        let [first, second] = option.scenarios();

        let net_first = first.revenue() - cost;
        let net_second = second.revenue() - cost;
        let emv = net_first * first.probability() + net_second * second.probability();

        Self {
            option_id: option.id(),
            net_revenues: [net_first, net_second],
            emv,
        }
    }

    /// Which option this result belongs to.
    #[must_use]
    pub const fn option_id(&self) -> OptionId {
        self.option_id
    }

    /// Per-scenario net revenues, in scenario order.
    #[must_use]
    pub const fn net_revenues(&self) -> &[Money; 2] {
        &self.net_revenues
    }

    /// The probability-weighted expected monetary value.
    #[must_use]
    pub const fn emv(&self) -> Money {
        self.emv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Scenario;
    use rust_decimal_macros::dec;

    fn without_study() -> DecisionOption {
        DecisionOption::new(
            OptionId::WithoutStudy,
            Scenario::new(dec!(100000), dec!(550.0), dec!(0.6)),
            Scenario::new(dec!(75000), dec!(550.0), dec!(0.4)),
            None,
        )
        .unwrap()
    }

    fn with_study() -> DecisionOption {
        DecisionOption::new(
            OptionId::WithStudy,
            Scenario::new(dec!(75000), dec!(750.0), dec!(0.7)),
            Scenario::new(dec!(70000), dec!(750.0), dec!(0.3)),
            Some(dec!(100000.0)),
        )
        .unwrap()
    }

    #[test]
    fn emv_without_cost_matches_worked_example() {
        let result = EmvResult::evaluate(&without_study());

        assert_eq!(result.net_revenues()[0], dec!(55000000.0));
        assert_eq!(result.net_revenues()[1], dec!(41250000.0));
        assert_eq!(result.emv(), dec!(49500000.00));
    }

    #[test]
    fn emv_with_cost_matches_worked_example() {
        let result = EmvResult::evaluate(&with_study());

        assert_eq!(result.net_revenues()[0], dec!(56150000.0));
        assert_eq!(result.net_revenues()[1], dec!(52400000.0));
        assert_eq!(result.emv(), dec!(55025000.00));
    }

    #[test]
    fn doubling_units_doubles_only_that_contribution() {
        let base = EmvResult::evaluate(&without_study());
        let doubled = DecisionOption::new(
            OptionId::WithoutStudy,
            Scenario::new(dec!(200000), dec!(550.0), dec!(0.6)),
            Scenario::new(dec!(75000), dec!(550.0), dec!(0.4)),
            None,
        )
        .unwrap();
        let result = EmvResult::evaluate(&doubled);

        // Scenario 1 contribution doubles; scenario 2's is untouched.
        let base_first = dec!(55000000.0) * dec!(0.6);
        assert_eq!(result.emv(), base.emv() + base_first);
        assert_eq!(result.net_revenues()[1], base.net_revenues()[1]);
    }

    #[test]
    fn cost_shifts_emv_by_exactly_cost() {
        let costless = DecisionOption::new(
            OptionId::WithStudy,
            Scenario::new(dec!(75000), dec!(750.0), dec!(0.7)),
            Scenario::new(dec!(70000), dec!(750.0), dec!(0.3)),
            None,
        )
        .unwrap();

        let without_cost = EmvResult::evaluate(&costless);
        let with_cost = EmvResult::evaluate(&with_study());

        // cost*p1 + cost*p2 = cost when the pair sums to 1.
        assert_eq!(with_cost.emv(), without_cost.emv() - dec!(100000.0));
    }

    #[test]
    fn net_revenue_may_go_negative() {
        let option = DecisionOption::new(
            OptionId::WithStudy,
            Scenario::new(dec!(10), dec!(5.0), dec!(0.5)),
            Scenario::new(dec!(20), dec!(5.0), dec!(0.5)),
            Some(dec!(1000.0)),
        )
        .unwrap();
        let result = EmvResult::evaluate(&option);

        assert_eq!(result.net_revenues()[0], dec!(-950.0));
        assert_eq!(result.net_revenues()[1], dec!(-900.0));
        assert_eq!(result.emv(), dec!(-925.00));
    }
}
