//! Valuation result types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::multiples::MultipleSource;

/// Computed valuation for one input snapshot.
///
/// Created once at submission time and treated as immutable thereafter: a
/// new questionnaire submission produces a new result, never mutates an old
/// one. The dashboard and comparison features depend on that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Seller's discretionary earnings used for the calculation.
    pub sde: Decimal,
    /// SDE as a percentage of annual revenue; zero when revenue is zero.
    pub sde_margin: Decimal,
    /// Adjusted lower bound of the SDE multiple.
    pub multiple_low: Decimal,
    /// Adjusted upper bound of the SDE multiple.
    pub multiple_high: Decimal,
    /// Whether the base range came from the industry table or the fallback.
    pub multiple_source: MultipleSource,
    /// Low enterprise value estimate, whole currency units.
    pub valuation_low: Decimal,
    /// High enterprise value estimate, whole currency units.
    pub valuation_high: Decimal,
    /// Midpoint estimate, whole currency units.
    pub valuation_point: Decimal,
}
