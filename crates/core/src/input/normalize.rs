//! Normalization of raw questionnaire input.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::error::ValidationError;
use super::raw::{NumericValue, RawValuationInput};
use super::types::{OwnerInvolvement, ValuationInput};

/// Revenue histories keep at most this many years.
const MAX_HISTORY_YEARS: usize = 3;

/// Reduces raw questionnaire input to a canonical [`ValuationInput`].
pub struct Normalizer;

impl Normalizer {
    /// Normalizes arbitrary raw input.
    ///
    /// Total function: never fails. Optional numeric fields that are
    /// missing or non-numeric become zero; lists become empty; multi-year
    /// fields reduce to the most recent year (index 0). Whether the result
    /// is fit for computation is decided separately by [`Self::validate`].
    #[must_use]
    pub fn normalize(raw: RawValuationInput) -> ValuationInput {
        let (annual_revenue, revenue_history) = match raw.annual_revenue {
            Some(revenue) => {
                let mut history = revenue.history();
                history.truncate(MAX_HISTORY_YEARS);
                (revenue.current().unwrap_or(Decimal::ZERO), history)
            }
            None => (Decimal::ZERO, Vec::new()),
        };

        ValuationInput {
            business_name: raw.business_name.map(|s| s.trim().to_string()).unwrap_or_default(),
            industry: raw
                .industry
                .map(|s| s.trim().to_lowercase())
                .unwrap_or_default(),
            location: raw.location.map(|s| s.trim().to_string()).unwrap_or_default(),
            founded_year: raw
                .founded_year
                .as_ref()
                .and_then(NumericValue::as_decimal)
                .and_then(|d| d.to_i32())
                .filter(|year| *year > 0),
            employee_count: raw
                .employee_count
                .as_ref()
                .and_then(NumericValue::as_decimal)
                .and_then(|d| d.to_u32()),
            annual_revenue,
            revenue_history,
            sde: decimal_or_zero(raw.sde.as_ref()),
            add_backs: decimal_or_zero(raw.add_backs.as_ref()),
            owner_salary: decimal_or_zero(raw.owner_salary.as_ref()),
            gross_margin: decimal_or_zero(raw.gross_margin.as_ref()),
            net_margin: decimal_or_zero(raw.net_margin.as_ref()),
            owner_involvement: raw
                .owner_involvement
                .as_deref()
                .map(OwnerInvolvement::parse)
                .unwrap_or_default(),
            customer_retention_rate: decimal_or_zero(raw.customer_retention_rate.as_ref()),
            top5_customers_pct: decimal_or_zero(raw.top5_customers_pct.as_ref()),
            revenue_growth_rate: decimal_or_zero(raw.revenue_growth_rate.as_ref()),
            recurring_revenue_pct: decimal_or_zero(raw.recurring_revenue_pct.as_ref()),
            competitive_advantages: text_list(raw.competitive_advantages),
            major_risk_factors: text_list(raw.major_risk_factors),
            growth_opportunities: text_list(raw.growth_opportunities),
        }
    }

    /// Gates computation on the required fields.
    ///
    /// Runs before any valuation math; failures block the pipeline and are
    /// surfaced to the caller, never silently defaulted.
    pub fn validate(input: &ValuationInput) -> Result<(), ValidationError> {
        if input.business_name.is_empty() {
            return Err(ValidationError::MissingBusinessName);
        }
        if input.sde <= Decimal::ZERO {
            return Err(ValidationError::MissingSde);
        }
        if input.annual_revenue <= Decimal::ZERO {
            return Err(ValidationError::MissingRevenue);
        }
        Ok(())
    }
}

fn decimal_or_zero(value: Option<&NumericValue>) -> Decimal {
    value
        .and_then(NumericValue::as_decimal)
        .unwrap_or(Decimal::ZERO)
}

fn text_list(values: Option<Vec<String>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
