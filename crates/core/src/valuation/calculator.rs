//! The shared valuation calculator.
//!
//! Every surface that needs a valuation (API responses, report sections)
//! consumes this one calculator's output; nothing downstream re-derives
//! SDE, margins, multiples, or enterprise values.

use rust_decimal::Decimal;

use super::error::ValuationError;
use super::types::ValuationResult;
use crate::multiples::SelectedMultiples;
use crate::sde::SdeMetrics;
use worthwell_shared::types::round_currency;

/// Combines SDE metrics and a selected multiple range into enterprise value
/// estimates.
pub struct ValuationCalculator;

impl ValuationCalculator {
    /// Calculates low/high/point enterprise value estimates.
    ///
    /// Values round to the nearest whole currency unit. Upstream invariants
    /// guarantee positive SDE and positive multiples; the SDE re-check here
    /// is defensive and fails loudly instead of producing a silent zero
    /// valuation.
    pub fn calculate(
        metrics: &SdeMetrics,
        selection: &SelectedMultiples,
    ) -> Result<ValuationResult, ValuationError> {
        if metrics.sde <= Decimal::ZERO {
            return Err(ValuationError::NonPositiveSde(metrics.sde));
        }

        let valuation_low = round_currency(metrics.sde * selection.range.low);
        let valuation_high = round_currency(metrics.sde * selection.range.high);
        let valuation_point = round_currency((valuation_low + valuation_high) / Decimal::TWO);

        Ok(ValuationResult {
            sde: metrics.sde,
            sde_margin: metrics.sde_margin,
            multiple_low: selection.range.low,
            multiple_high: selection.range.high,
            multiple_source: selection.source,
            valuation_low,
            valuation_high,
            valuation_point,
        })
    }
}
