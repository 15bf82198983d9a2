//! Narrative composer tests.

use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use super::composer::{MAX_LIST_ITEMS, NarrativeComposer};
use crate::input::{Normalizer, RawValuationInput, ValuationInput};
use crate::multiples::MultipleSelector;
use crate::sde::SdeEngine;
use crate::valuation::{ValuationCalculator, ValuationResult};

fn pipeline(value: serde_json::Value) -> (ValuationInput, ValuationResult) {
    let raw: RawValuationInput = serde_json::from_value(value).unwrap();
    let input = Normalizer::normalize(raw);
    let metrics = SdeEngine::compute(&input);
    let selection = MultipleSelector::select(&input.industry, &input.signals());
    let result = ValuationCalculator::calculate(&metrics, &selection).unwrap();
    (input, result)
}

#[test]
fn test_rule_items_precede_user_items() {
    let (input, result) = pipeline(json!({
        "businessName": "Orbit SaaS",
        "industry": "saas",
        "annualRevenue": 1000000,
        "sde": 300000,
        "customerRetentionRate": 95,
        "competitiveAdvantages": ["Proprietary data set"]
    }));

    let narrative = NarrativeComposer::compose(&input, &result);

    // Retention and margin rules fire before the user-supplied advantage.
    assert!(narrative.value_drivers[0].contains("retention"));
    assert_eq!(
        narrative.value_drivers.last().map(String::as_str),
        Some("Proprietary data set")
    );
}

#[test]
fn test_lists_are_capped_preserving_rule_items() {
    let (input, result) = pipeline(json!({
        "businessName": "Orbit SaaS",
        "industry": "saas",
        "annualRevenue": 1000000,
        "sde": 300000,
        "customerRetentionRate": 95,
        "recurringRevenuePct": 80,
        "revenueGrowthRate": 25,
        "ownerInvolvement": "minimal",
        "competitiveAdvantages": ["A", "B", "C", "D", "E", "F"]
    }));

    let narrative = NarrativeComposer::compose(&input, &result);

    assert_eq!(narrative.value_drivers.len(), MAX_LIST_ITEMS);
    // All five driver rules fire for this input; one slot remains for the
    // first user-supplied item.
    assert!(narrative.value_drivers[0].contains("retention"));
    assert_eq!(narrative.value_drivers[5], "A");
}

#[test]
fn test_composition_is_stable_across_calls() {
    let (input, result) = pipeline(json!({
        "businessName": "Summit Advisory",
        "industry": "consulting",
        "annualRevenue": 500000,
        "sde": 185500,
        "top5CustomersPct": 45,
        "ownerInvolvement": "high",
        "majorRiskFactors": ["Lease expires next year"]
    }));

    let first = NarrativeComposer::compose(&input, &result);
    let second = NarrativeComposer::compose(&input, &result);
    assert_eq!(first, second);

    assert!(first.risk_factors[0].contains("Top five customers"));
    assert!(first.risk_factors.contains(&"Lease expires next year".to_string()));
}

#[test]
fn test_recommendations_mix_rules_and_user_opportunities() {
    let (input, result) = pipeline(json!({
        "businessName": "Summit Advisory",
        "industry": "consulting",
        "annualRevenue": 500000,
        "sde": 100000,
        "ownerInvolvement": "high",
        "growthOpportunities": ["Expand to adjacent metro markets"]
    }));

    let narrative = NarrativeComposer::compose(&input, &result);

    assert!(narrative.recommendations[0].contains("delegate"));
    assert!(
        narrative
            .recommendations
            .contains(&"Expand to adjacent metro markets".to_string())
    );
}

#[rstest]
#[case(dec!(30), "exceptional")]
#[case(dec!(25.01), "exceptional")]
#[case(dec!(25), "strong")]
#[case(dec!(20), "strong")]
#[case(dec!(15), "stable")]
#[case(dec!(5), "stable")]
#[case(Decimal::ZERO, "stable")]
fn test_margin_descriptor_tiers(#[case] margin: Decimal, #[case] expected: &str) {
    assert_eq!(NarrativeComposer::margin_descriptor(margin), expected);
}

#[test]
fn test_summary_substitutes_computed_values() {
    let (input, result) = pipeline(json!({
        "businessName": "Summit Advisory",
        "industry": "consulting",
        "annualRevenue": 500000,
        "sde": 185500
    }));

    let narrative = NarrativeComposer::compose(&input, &result);

    assert!(narrative.summary.contains("Summit Advisory"));
    assert!(narrative.summary.contains("Consulting"));
    assert!(narrative.summary.contains("$500,000"));
    assert!(narrative.summary.contains("$185,500"));
    // 37.1% margin lands in the exceptional tier.
    assert!(narrative.summary.contains("exceptional"));
    assert!(narrative.summary.contains("37.1%"));
}
