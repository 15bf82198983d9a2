//! Canonical valuation input types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How involved the owner is in day-to-day operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerInvolvement {
    /// Business runs without the owner.
    Minimal,
    /// Owner is involved part-time or in oversight.
    #[default]
    Moderate,
    /// Owner is essential to daily operations.
    High,
}

impl OwnerInvolvement {
    /// Parses a raw questionnaire value, defaulting to `Moderate` for
    /// anything unrecognized.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "minimal" => Self::Minimal,
            "high" => Self::High,
            _ => Self::Moderate,
        }
    }

    /// Display label for reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

/// Immutable snapshot of one questionnaire submission after normalization.
///
/// Created once per submission. Required fields (`business_name`, `sde`,
/// `annual_revenue`) are enforced by the validation gate; everything else
/// defaults to neutral values so downstream components never branch on
/// nullability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationInput {
    /// Legal or trading name of the business.
    pub business_name: String,
    /// Industry key into the multiple table.
    pub industry: String,
    /// Free-text location, empty when not provided.
    pub location: String,
    /// Year the business was founded.
    pub founded_year: Option<i32>,
    /// Number of employees.
    pub employee_count: Option<u32>,
    /// Current-year annual revenue.
    pub annual_revenue: Decimal,
    /// Up to three yearly revenue values, most recent first.
    pub revenue_history: Vec<Decimal>,
    /// Seller's discretionary earnings, the core value metric.
    pub sde: Decimal,
    /// Owner add-backs included in SDE (display only).
    pub add_backs: Decimal,
    /// Owner salary included in SDE (display only).
    pub owner_salary: Decimal,
    /// Gross margin percentage.
    pub gross_margin: Decimal,
    /// Net margin percentage.
    pub net_margin: Decimal,
    /// Owner involvement level.
    pub owner_involvement: OwnerInvolvement,
    /// Annual customer retention rate percentage.
    pub customer_retention_rate: Decimal,
    /// Share of revenue from the top five customers, percentage.
    pub top5_customers_pct: Decimal,
    /// Year-over-year revenue growth rate percentage.
    pub revenue_growth_rate: Decimal,
    /// Share of revenue that is recurring, percentage.
    pub recurring_revenue_pct: Decimal,
    /// User-supplied competitive advantages, in submission order.
    pub competitive_advantages: Vec<String>,
    /// User-supplied risk factors, in submission order.
    pub major_risk_factors: Vec<String>,
    /// User-supplied growth opportunities, in submission order.
    pub growth_opportunities: Vec<String>,
}

impl ValuationInput {
    /// Extracts the qualitative signals consumed by the multiple selector.
    #[must_use]
    pub fn signals(&self) -> QualitativeSignals {
        QualitativeSignals {
            owner_involvement: self.owner_involvement,
            customer_retention_rate: self.customer_retention_rate,
            top5_customers_pct: self.top5_customers_pct,
            revenue_growth_rate: self.revenue_growth_rate,
            recurring_revenue_pct: self.recurring_revenue_pct,
        }
    }
}

/// Qualitative signals that adjust the industry multiple range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualitativeSignals {
    /// Owner involvement level.
    pub owner_involvement: OwnerInvolvement,
    /// Annual customer retention rate percentage.
    pub customer_retention_rate: Decimal,
    /// Share of revenue from the top five customers, percentage.
    pub top5_customers_pct: Decimal,
    /// Year-over-year revenue growth rate percentage.
    pub revenue_growth_rate: Decimal,
    /// Share of revenue that is recurring, percentage.
    pub recurring_revenue_pct: Decimal,
}
