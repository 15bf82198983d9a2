//! Declarative narrative rule tables.
//!
//! Every report variant reads from these tables, so drivers and risks can
//! never diverge between templates. Each rule is a pure function evaluated
//! in fixed order; identical input always yields the same statements in the
//! same order.

use rust_decimal::Decimal;

use crate::input::{OwnerInvolvement, ValuationInput};
use crate::valuation::ValuationResult;
use worthwell_shared::types::format_percent;

/// A narrative rule: fires with a statement, or stays silent.
pub type NarrativeRule = fn(&ValuationInput, &ValuationResult) -> Option<String>;

/// Value-driver rules, in evaluation order.
pub const DRIVER_RULES: &[NarrativeRule] = &[
    strong_retention,
    recurring_revenue,
    strong_growth,
    owner_independence,
    exceptional_margin,
];

/// Risk-factor rules, in evaluation order.
pub const RISK_RULES: &[NarrativeRule] = &[
    customer_concentration,
    owner_dependency,
    declining_revenue,
    weak_retention,
    thin_margin,
];

/// Recommendation rules, in evaluation order.
pub const RECOMMENDATION_RULES: &[NarrativeRule] = &[
    delegate_operations,
    diversify_customers,
    build_recurring_revenue,
];

// ============================================================================
// Value drivers
// ============================================================================

fn strong_retention(input: &ValuationInput, _: &ValuationResult) -> Option<String> {
    (input.customer_retention_rate > Decimal::from(90)).then(|| {
        format!(
            "Strong customer retention at {}",
            format_percent(input.customer_retention_rate)
        )
    })
}

fn recurring_revenue(input: &ValuationInput, _: &ValuationResult) -> Option<String> {
    (input.recurring_revenue_pct > Decimal::from(50)).then(|| {
        format!(
            "Recurring revenue makes up {} of sales",
            format_percent(input.recurring_revenue_pct)
        )
    })
}

fn strong_growth(input: &ValuationInput, _: &ValuationResult) -> Option<String> {
    (input.revenue_growth_rate > Decimal::from(15)).then(|| {
        format!(
            "Revenue growing at {} year over year",
            format_percent(input.revenue_growth_rate)
        )
    })
}

fn owner_independence(input: &ValuationInput, _: &ValuationResult) -> Option<String> {
    (input.owner_involvement == OwnerInvolvement::Minimal)
        .then(|| "Operations run with minimal owner involvement".to_string())
}

fn exceptional_margin(_: &ValuationInput, result: &ValuationResult) -> Option<String> {
    (result.sde_margin > Decimal::from(25)).then(|| {
        format!(
            "SDE margin of {} is well above typical small-business levels",
            format_percent(result.sde_margin)
        )
    })
}

// ============================================================================
// Risk factors
// ============================================================================

fn customer_concentration(input: &ValuationInput, _: &ValuationResult) -> Option<String> {
    (input.top5_customers_pct > Decimal::from(30)).then(|| {
        format!(
            "Top five customers account for {} of revenue",
            format_percent(input.top5_customers_pct)
        )
    })
}

fn owner_dependency(input: &ValuationInput, _: &ValuationResult) -> Option<String> {
    (input.owner_involvement == OwnerInvolvement::High)
        .then(|| "Owner is essential to day-to-day operations".to_string())
}

fn declining_revenue(input: &ValuationInput, _: &ValuationResult) -> Option<String> {
    (input.revenue_growth_rate < Decimal::ZERO).then(|| {
        format!(
            "Revenue declined {} over the last year",
            format_percent(input.revenue_growth_rate.abs())
        )
    })
}

fn weak_retention(input: &ValuationInput, _: &ValuationResult) -> Option<String> {
    let rate = input.customer_retention_rate;
    (rate > Decimal::ZERO && rate < Decimal::from(70)).then(|| {
        format!(
            "Customer retention at {} is below healthy levels",
            format_percent(rate)
        )
    })
}

fn thin_margin(_: &ValuationInput, result: &ValuationResult) -> Option<String> {
    let margin = result.sde_margin;
    (margin > Decimal::ZERO && margin < Decimal::from(10)).then(|| {
        format!(
            "SDE margin of {} leaves limited room for error",
            format_percent(margin)
        )
    })
}

// ============================================================================
// Recommendations
// ============================================================================

fn delegate_operations(input: &ValuationInput, _: &ValuationResult) -> Option<String> {
    (input.owner_involvement == OwnerInvolvement::High).then(|| {
        "Document processes and delegate day-to-day responsibilities before going to market"
            .to_string()
    })
}

fn diversify_customers(input: &ValuationInput, _: &ValuationResult) -> Option<String> {
    (input.top5_customers_pct > Decimal::from(30))
        .then(|| "Broaden the customer base to reduce concentration risk".to_string())
}

fn build_recurring_revenue(input: &ValuationInput, _: &ValuationResult) -> Option<String> {
    (input.recurring_revenue_pct < Decimal::from(25)).then(|| {
        "Shift more revenue onto recurring contracts to support a higher multiple".to_string()
    })
}
