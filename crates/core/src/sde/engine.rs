//! SDE metric calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::ValuationInput;

/// Direction of revenue over the reported history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevenueTrend {
    /// Most recent year is above the prior year.
    Growing,
    /// No meaningful change year over year.
    Flat,
    /// Most recent year is below the prior year.
    Declining,
}

impl RevenueTrend {
    /// Lowercase label for narrative text.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Growing => "growing",
            Self::Flat => "flat",
            Self::Declining => "declining",
        }
    }
}

/// Core earnings metrics derived from normalized input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SdeMetrics {
    /// Seller's discretionary earnings, taken from the input as entered.
    pub sde: Decimal,
    /// SDE as a percentage of annual revenue; zero when revenue is zero.
    pub sde_margin: Decimal,
}

/// Computes SDE-derived metrics.
///
/// The user-entered SDE figure is authoritative: no build-up from net
/// income and add-backs happens here. `add_backs` and `owner_salary` are
/// informational display fields only.
pub struct SdeEngine;

impl SdeEngine {
    /// Computes SDE and margin from normalized input.
    ///
    /// Never divides by zero and never fails: a zero revenue yields a zero
    /// margin.
    #[must_use]
    pub fn compute(input: &ValuationInput) -> SdeMetrics {
        let sde_margin = if input.annual_revenue > Decimal::ZERO {
            (input.sde / input.annual_revenue * Decimal::ONE_HUNDRED).round_dp(2)
        } else {
            Decimal::ZERO
        };

        SdeMetrics {
            sde: input.sde,
            sde_margin,
        }
    }

    /// Derives the revenue trend from the input's history.
    ///
    /// With at least two years of history the most recent year is compared
    /// against the prior one; otherwise the self-reported growth rate
    /// decides.
    #[must_use]
    pub fn revenue_trend(input: &ValuationInput) -> RevenueTrend {
        if input.revenue_history.len() >= 2 {
            let current = input.revenue_history[0];
            let prior = input.revenue_history[1];
            if current > prior {
                RevenueTrend::Growing
            } else if current < prior {
                RevenueTrend::Declining
            } else {
                RevenueTrend::Flat
            }
        } else if input.revenue_growth_rate > Decimal::ZERO {
            RevenueTrend::Growing
        } else if input.revenue_growth_rate < Decimal::ZERO {
            RevenueTrend::Declining
        } else {
            RevenueTrend::Flat
        }
    }
}
