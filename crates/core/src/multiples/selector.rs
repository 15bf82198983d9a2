//! Multiple selection and qualitative adjustment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::table::{MultipleRange, base_range, default_range};
use crate::input::{OwnerInvolvement, QualitativeSignals};

/// Where the selected range came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultipleSource {
    /// Base range found in the industry table.
    Industry,
    /// Industry key unknown; the conservative default range was used.
    DefaultFallback,
}

/// Outcome of multiple selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedMultiples {
    /// Adjusted, clamped multiple range.
    pub range: MultipleRange,
    /// Whether the base range came from the table or the fallback.
    pub source: MultipleSource,
}

/// One qualitative adjustment: a signed delta applied to both bounds, or
/// `None` when the signal does not fire.
type AdjustmentRule = fn(&QualitativeSignals) -> Option<Decimal>;

/// Adjustment rules in evaluation order.
///
/// Order matters only for explainability (the set of deltas is summed), but
/// keeping a fixed order keeps the rule set auditable against the narrative
/// rules that mirror these thresholds.
const ADJUSTMENT_RULES: &[AdjustmentRule] = &[
    retention_bonus,
    recurring_revenue_bonus,
    growth_bonus,
    declining_revenue_penalty,
    owner_involvement_adjustment,
    concentration_penalty,
];

fn retention_bonus(signals: &QualitativeSignals) -> Option<Decimal> {
    (signals.customer_retention_rate > Decimal::from(90)).then(|| Decimal::new(2, 1))
}

fn recurring_revenue_bonus(signals: &QualitativeSignals) -> Option<Decimal> {
    (signals.recurring_revenue_pct > Decimal::from(50)).then(|| Decimal::new(3, 1))
}

fn growth_bonus(signals: &QualitativeSignals) -> Option<Decimal> {
    (signals.revenue_growth_rate > Decimal::from(15)).then(|| Decimal::new(2, 1))
}

fn declining_revenue_penalty(signals: &QualitativeSignals) -> Option<Decimal> {
    (signals.revenue_growth_rate < Decimal::ZERO).then(|| Decimal::new(-2, 1))
}

fn owner_involvement_adjustment(signals: &QualitativeSignals) -> Option<Decimal> {
    match signals.owner_involvement {
        OwnerInvolvement::High => Some(Decimal::new(-3, 1)),
        OwnerInvolvement::Minimal => Some(Decimal::new(1, 1)),
        OwnerInvolvement::Moderate => None,
    }
}

fn concentration_penalty(signals: &QualitativeSignals) -> Option<Decimal> {
    (signals.top5_customers_pct > Decimal::from(30)).then(|| Decimal::new(-2, 1))
}

/// Multiples never fall below this bound after adjustment.
fn multiple_floor() -> Decimal {
    Decimal::new(1, 1)
}

/// Selects and adjusts the SDE-multiple range for one business.
pub struct MultipleSelector;

impl MultipleSelector {
    /// Maps an industry and its qualitative signals to a multiple range.
    ///
    /// Unknown industries are not an error: the conservative default range
    /// is substituted and reported via [`MultipleSource::DefaultFallback`]
    /// so the caller can record the recovery. Deterministic: identical
    /// input always yields an identical range.
    #[must_use]
    pub fn select(industry: &str, signals: &QualitativeSignals) -> SelectedMultiples {
        let (base, source) = match base_range(industry) {
            Some(range) => (range, MultipleSource::Industry),
            None => (default_range(), MultipleSource::DefaultFallback),
        };

        let adjustment: Decimal = ADJUSTMENT_RULES
            .iter()
            .filter_map(|rule| rule(signals))
            .sum();

        let range = clamp(MultipleRange::new(
            base.low + adjustment,
            base.high + adjustment,
        ));

        SelectedMultiples { range, source }
    }
}

/// Restores `low <= high` and floors both bounds at a small positive
/// epsilon; multiples must never be zero or negative.
fn clamp(range: MultipleRange) -> MultipleRange {
    let (mut low, mut high) = if range.low > range.high {
        (range.high, range.low)
    } else {
        (range.low, range.high)
    };

    low = low.max(multiple_floor());
    high = high.max(low);

    MultipleRange::new(low, high)
}
