//! Narrative composition from rule tables and user-supplied lists.

use rust_decimal::Decimal;

use super::rules::{DRIVER_RULES, NarrativeRule, RECOMMENDATION_RULES, RISK_RULES};
use crate::input::ValuationInput;
use crate::multiples::industry_label;
use crate::valuation::ValuationResult;
use worthwell_shared::types::{format_currency, format_percent};

/// Maximum entries per narrative list after truncation.
pub const MAX_LIST_ITEMS: usize = 6;

/// Qualitative statements derived from one valuation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    /// Factors supporting the multiple, rule-based items first.
    pub value_drivers: Vec<String>,
    /// Due-diligence concerns, rule-based items first.
    pub risk_factors: Vec<String>,
    /// Suggested actions before going to market.
    pub recommendations: Vec<String>,
    /// One-sentence executive summary.
    pub summary: String,
}

/// Builds the qualitative narrative for a valuation.
pub struct NarrativeComposer;

impl NarrativeComposer {
    /// Composes the narrative from normalized input and the computed result.
    ///
    /// Deterministic: the same input always yields the same lists in the
    /// same order. Rule-based items come first; user-supplied free text is
    /// appended and the list truncated at [`MAX_LIST_ITEMS`].
    #[must_use]
    pub fn compose(input: &ValuationInput, result: &ValuationResult) -> Narrative {
        Narrative {
            value_drivers: merged_list(
                DRIVER_RULES,
                &input.competitive_advantages,
                input,
                result,
            ),
            risk_factors: merged_list(RISK_RULES, &input.major_risk_factors, input, result),
            recommendations: merged_list(
                RECOMMENDATION_RULES,
                &input.growth_opportunities,
                input,
                result,
            ),
            summary: summary_sentence(input, result),
        }
    }

    /// Margin tier descriptor used by the summary templates.
    #[must_use]
    pub fn margin_descriptor(margin: Decimal) -> &'static str {
        if margin > Decimal::from(25) {
            "exceptional"
        } else if margin > Decimal::from(15) {
            "strong"
        } else {
            "stable"
        }
    }
}

fn merged_list(
    rules: &[NarrativeRule],
    user_items: &[String],
    input: &ValuationInput,
    result: &ValuationResult,
) -> Vec<String> {
    let mut items: Vec<String> = rules.iter().filter_map(|rule| rule(input, result)).collect();
    items.extend(user_items.iter().cloned());
    items.truncate(MAX_LIST_ITEMS);
    items
}

fn summary_sentence(input: &ValuationInput, result: &ValuationResult) -> String {
    let name = &input.business_name;
    let industry = industry_label(&input.industry);
    let revenue = format_currency(input.annual_revenue);
    let sde = format_currency(result.sde);
    let margin = format_percent(result.sde_margin);

    match NarrativeComposer::margin_descriptor(result.sde_margin) {
        "exceptional" => format!(
            "{name} is a {industry} business generating {revenue} in annual revenue \
             with {sde} in seller's discretionary earnings, an exceptional SDE margin \
             of {margin}."
        ),
        "strong" => format!(
            "{name} is a {industry} business generating {revenue} in annual revenue \
             with {sde} in seller's discretionary earnings, a strong SDE margin of \
             {margin}."
        ),
        _ => format!(
            "{name} is a {industry} business generating {revenue} in annual revenue \
             with {sde} in seller's discretionary earnings, a stable SDE margin of \
             {margin}."
        ),
    }
}
