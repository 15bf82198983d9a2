//! Report assembly tests.

use chrono::NaiveDate;
use serde_json::json;

use super::assembler::{ReportAssembler, ReportBuilder};
use super::error::ReportError;
use super::types::{
    CANONICAL_ORDER, DISCLAIMER_TEXT, ReportDocument, SectionContent, SectionKind,
};
use crate::input::{Normalizer, RawValuationInput, ValuationInput};
use crate::multiples::MultipleSelector;
use crate::narrative::{Narrative, NarrativeComposer};
use crate::sde::SdeEngine;
use crate::valuation::{ValuationCalculator, ValuationResult};

fn pipeline(value: serde_json::Value) -> (ValuationInput, ValuationResult, Narrative) {
    let raw: RawValuationInput = serde_json::from_value(value).unwrap();
    let input = Normalizer::normalize(raw);
    let metrics = SdeEngine::compute(&input);
    let selection = MultipleSelector::select(&input.industry, &input.signals());
    let result = ValuationCalculator::calculate(&metrics, &selection).unwrap();
    let narrative = NarrativeComposer::compose(&input, &result);
    (input, result, narrative)
}

fn consulting_fixture() -> (ValuationInput, ValuationResult, Narrative) {
    pipeline(json!({
        "businessName": "Summit Advisory",
        "industry": "consulting",
        "annualRevenue": 500000,
        "sde": 185500,
        "location": "Denver, CO",
        "foundedYear": 2012,
        "employeeCount": 8,
        "top5CustomersPct": 45,
        "majorRiskFactors": ["Lease expires next year"]
    }))
}

fn generated_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

fn assemble_fixture() -> ReportDocument {
    let (input, result, narrative) = consulting_fixture();
    ReportAssembler::assemble(&input, &result, &narrative, generated_on()).unwrap()
}

#[test]
fn test_sections_follow_canonical_order() {
    let document = assemble_fixture();
    assert_eq!(document.kinds(), CANONICAL_ORDER.to_vec());
}

#[test]
fn test_assembly_is_idempotent() {
    let (input, result, narrative) = consulting_fixture();

    let first = ReportAssembler::assemble(&input, &result, &narrative, generated_on()).unwrap();
    let second = ReportAssembler::assemble(&input, &result, &narrative, generated_on()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_disclaimer_is_verbatim_boilerplate() {
    let document = assemble_fixture();
    let disclaimer = document.section(SectionKind::Disclaimer).unwrap();

    match &disclaimer.content {
        SectionContent::Boilerplate { text } => assert_eq!(text, DISCLAIMER_TEXT),
        other => panic!("unexpected disclaimer content: {other:?}"),
    }
}

#[test]
fn test_highlight_carries_preformatted_currency() {
    let document = assemble_fixture();
    let highlight = document.section(SectionKind::ValuationHighlight).unwrap();

    match &highlight.content {
        SectionContent::ValuationHighlight {
            valuation_low,
            valuation_point,
            valuation_high,
            multiple_range,
        } => {
            // Consulting base 0.5x-2.5x less the 0.2 concentration penalty.
            assert_eq!(multiple_range, "0.3x to 2.3x");
            assert_eq!(valuation_low, "$55,650");
            assert_eq!(valuation_point, "$241,150");
            assert_eq!(valuation_high, "$426,650");
        }
        other => panic!("unexpected highlight content: {other:?}"),
    }
}

#[test]
fn test_first_section_never_breaks_and_breaks_are_deterministic() {
    let document = assemble_fixture();

    assert!(!document.sections[0].page_break_before);

    let breaks: Vec<bool> = document
        .sections
        .iter()
        .map(|section| section.page_break_before)
        .collect();
    let again: Vec<bool> = assemble_fixture()
        .sections
        .iter()
        .map(|section| section.page_break_before)
        .collect();
    assert_eq!(breaks, again);

    // The fixed layout budget forces at least one break in a full report.
    assert!(breaks.iter().any(|flag| *flag));
}

#[test]
fn test_optional_figures_render_as_not_specified() {
    let (input, result, narrative) = pipeline(json!({
        "businessName": "Bare Minimum LLC",
        "industry": "retail",
        "annualRevenue": 300000,
        "sde": 60000
    }));

    let document =
        ReportAssembler::assemble(&input, &result, &narrative, generated_on()).unwrap();
    let financials = document.section(SectionKind::FinancialTable).unwrap();

    match &financials.content {
        SectionContent::Rows { rows } => {
            let add_backs = rows
                .iter()
                .find(|row| row.label == "Owner add-backs")
                .unwrap();
            assert_eq!(add_backs.value, "Not specified");
        }
        other => panic!("unexpected financials content: {other:?}"),
    }
}

#[test]
fn test_fallback_industry_adds_methodology_note() {
    let (input, result, narrative) = pipeline(json!({
        "businessName": "Deep Blue Crafts",
        "industry": "underwater-basket-weaving",
        "annualRevenue": 200000,
        "sde": 80000
    }));

    let document =
        ReportAssembler::assemble(&input, &result, &narrative, generated_on()).unwrap();
    let methodology = document.section(SectionKind::Methodology).unwrap();

    match &methodology.content {
        SectionContent::Paragraphs { paragraphs } => {
            assert!(paragraphs.iter().any(|p| p.contains("default multiple range")));
        }
        other => panic!("unexpected methodology content: {other:?}"),
    }
}

#[test]
fn test_builder_rejects_out_of_order_transitions() {
    let mut builder = ReportBuilder::new();

    let err = builder
        .add_financials(SectionContent::Rows { rows: vec![] })
        .unwrap_err();

    assert_eq!(
        err,
        ReportError::InvalidTransition {
            attempted: "add_financials",
            expected: "SummaryAdded",
            actual: "Empty",
        }
    );
}

#[test]
fn test_builder_rejects_duplicate_header() {
    let mut builder = ReportBuilder::new();
    let header = SectionContent::Header {
        business_name: "Acme".to_string(),
        industry: "Retail".to_string(),
        generated_on: "March 15, 2026".to_string(),
    };

    builder.add_header(header.clone()).unwrap();
    assert!(builder.add_header(header).is_err());
}

#[test]
fn test_header_carries_generation_date() {
    let document = assemble_fixture();
    let header = document.section(SectionKind::Header).unwrap();

    match &header.content {
        SectionContent::Header {
            business_name,
            generated_on,
            ..
        } => {
            assert_eq!(business_name, "Summit Advisory");
            assert_eq!(generated_on, "March 15, 2026");
        }
        other => panic!("unexpected header content: {other:?}"),
    }
}
