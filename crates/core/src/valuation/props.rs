//! Property-based tests for the valuation calculator.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::ValuationCalculator;
use crate::multiples::{MultipleRange, MultipleSource, SelectedMultiples};
use crate::sde::SdeMetrics;

/// Strategy for positive SDE amounts (1.00 to 100,000,000.00).
fn positive_sde() -> impl Strategy<Value = Decimal> {
    (100i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for valid multiple ranges: 0.1x to 10.0x with low <= high.
fn multiple_range() -> impl Strategy<Value = MultipleRange> {
    (1i64..100, 0i64..100).prop_map(|(low_tenths, spread_tenths)| {
        let low = Decimal::new(low_tenths, 1);
        let high = Decimal::new(low_tenths + spread_tenths, 1);
        MultipleRange::new(low, high)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// For any valid input, `low <= point <= high`.
    #[test]
    fn prop_estimates_are_ordered(
        sde in positive_sde(),
        range in multiple_range(),
    ) {
        let metrics = SdeMetrics { sde, sde_margin: Decimal::ZERO };
        let selection = SelectedMultiples { range, source: MultipleSource::Industry };

        let result = ValuationCalculator::calculate(&metrics, &selection).unwrap();

        prop_assert!(
            result.valuation_low <= result.valuation_point,
            "low {} must not exceed point {}",
            result.valuation_low,
            result.valuation_point
        );
        prop_assert!(
            result.valuation_point <= result.valuation_high,
            "point {} must not exceed high {}",
            result.valuation_point,
            result.valuation_high
        );
    }

    /// Estimates are never negative and always whole currency units.
    #[test]
    fn prop_estimates_are_whole_and_non_negative(
        sde in positive_sde(),
        range in multiple_range(),
    ) {
        let metrics = SdeMetrics { sde, sde_margin: Decimal::ZERO };
        let selection = SelectedMultiples { range, source: MultipleSource::Industry };

        let result = ValuationCalculator::calculate(&metrics, &selection).unwrap();

        for value in [result.valuation_low, result.valuation_point, result.valuation_high] {
            prop_assert!(value >= Decimal::ZERO);
            prop_assert_eq!(value, value.trunc(), "value {} must be whole", value);
        }
    }

    /// The calculator is deterministic.
    #[test]
    fn prop_calculation_is_deterministic(
        sde in positive_sde(),
        range in multiple_range(),
    ) {
        let metrics = SdeMetrics { sde, sde_margin: Decimal::ZERO };
        let selection = SelectedMultiples { range, source: MultipleSource::Industry };

        let first = ValuationCalculator::calculate(&metrics, &selection).unwrap();
        let second = ValuationCalculator::calculate(&metrics, &selection).unwrap();
        prop_assert_eq!(first, second);
    }
}
