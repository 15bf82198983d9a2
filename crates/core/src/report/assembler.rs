//! Report assembly: the builder state machine and the assembler that
//! drives it.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::ReportError;
use super::types::{
    DISCLAIMER_TEXT, LabeledValue, ReportDocument, Section, SectionContent, SectionKind,
};
use crate::input::ValuationInput;
use crate::multiples::{MultipleSource, industry_label};
use crate::narrative::Narrative;
use crate::sde::SdeEngine;
use crate::valuation::ValuationResult;
use worthwell_shared::types::{format_currency, format_percent};

/// Layout budget per page, in abstract height units.
const PAGE_HEIGHT_UNITS: u32 = 24;

/// Approximate content height per section kind.
///
/// These are layout hints for pagination, not measurements; the renderer
/// may still reflow.
const fn layout_height(kind: SectionKind) -> u32 {
    match kind {
        SectionKind::Header => 3,
        SectionKind::ValuationHighlight | SectionKind::CompanyOverview => 5,
        SectionKind::ExecutiveSummary => 4,
        SectionKind::FinancialTable => 7,
        SectionKind::Methodology | SectionKind::ValueDrivers | SectionKind::RiskFactors => 6,
        SectionKind::Recommendations => 5,
        SectionKind::Disclaimer => 4,
        SectionKind::Footer => 1,
    }
}

/// Builder construction states, advanced strictly in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuilderState {
    Empty,
    HeaderAdded,
    SummaryAdded,
    FinancialsAdded,
    MethodologyAdded,
    RiskDriversAdded,
}

impl BuilderState {
    const fn name(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::HeaderAdded => "HeaderAdded",
            Self::SummaryAdded => "SummaryAdded",
            Self::FinancialsAdded => "FinancialsAdded",
            Self::MethodologyAdded => "MethodologyAdded",
            Self::RiskDriversAdded => "RiskDriversAdded",
        }
    }
}

/// Constructs a [`ReportDocument`] one stage at a time.
///
/// Transitions follow `Empty -> HeaderAdded -> SummaryAdded ->
/// FinancialsAdded -> MethodologyAdded -> RiskDriversAdded -> Finalized`.
/// Each stage appends one or more sections. `finalize` consumes the
/// builder, so a finalized document is terminal and immutable.
#[derive(Debug)]
pub struct ReportBuilder {
    sections: Vec<Section>,
    state: BuilderState,
    page_used: u32,
}

impl ReportBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: Vec::with_capacity(11),
            state: BuilderState::Empty,
            page_used: 0,
        }
    }

    fn expect(
        &self,
        attempted: &'static str,
        expected: BuilderState,
    ) -> Result<(), ReportError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(ReportError::InvalidTransition {
                attempted,
                expected: expected.name(),
                actual: self.state.name(),
            })
        }
    }

    /// Appends a section, annotating it with the pagination hint.
    fn push(&mut self, kind: SectionKind, content: SectionContent) {
        let height = layout_height(kind);
        let page_break_before =
            !self.sections.is_empty() && self.page_used + height > PAGE_HEIGHT_UNITS;

        if page_break_before {
            self.page_used = height;
        } else {
            self.page_used += height;
        }

        self.sections.push(Section {
            kind,
            content,
            page_break_before,
        });
    }

    /// Adds the report header.
    pub fn add_header(&mut self, content: SectionContent) -> Result<(), ReportError> {
        self.expect("add_header", BuilderState::Empty)?;
        self.push(SectionKind::Header, content);
        self.state = BuilderState::HeaderAdded;
        Ok(())
    }

    /// Adds the valuation highlight, company overview, and executive
    /// summary sections.
    pub fn add_summary(
        &mut self,
        highlight: SectionContent,
        overview: SectionContent,
        executive: SectionContent,
    ) -> Result<(), ReportError> {
        self.expect("add_summary", BuilderState::HeaderAdded)?;
        self.push(SectionKind::ValuationHighlight, highlight);
        self.push(SectionKind::CompanyOverview, overview);
        self.push(SectionKind::ExecutiveSummary, executive);
        self.state = BuilderState::SummaryAdded;
        Ok(())
    }

    /// Adds the financial table section.
    pub fn add_financials(&mut self, table: SectionContent) -> Result<(), ReportError> {
        self.expect("add_financials", BuilderState::SummaryAdded)?;
        self.push(SectionKind::FinancialTable, table);
        self.state = BuilderState::FinancialsAdded;
        Ok(())
    }

    /// Adds the methodology section.
    pub fn add_methodology(&mut self, methodology: SectionContent) -> Result<(), ReportError> {
        self.expect("add_methodology", BuilderState::FinancialsAdded)?;
        self.push(SectionKind::Methodology, methodology);
        self.state = BuilderState::MethodologyAdded;
        Ok(())
    }

    /// Adds the value drivers, risk factors, and recommendations sections.
    pub fn add_risk_drivers(
        &mut self,
        drivers: SectionContent,
        risks: SectionContent,
        recommendations: SectionContent,
    ) -> Result<(), ReportError> {
        self.expect("add_risk_drivers", BuilderState::MethodologyAdded)?;
        self.push(SectionKind::ValueDrivers, drivers);
        self.push(SectionKind::RiskFactors, risks);
        self.push(SectionKind::Recommendations, recommendations);
        self.state = BuilderState::RiskDriversAdded;
        Ok(())
    }

    /// Adds the disclaimer and footer, consuming the builder.
    ///
    /// The returned document is immutable; there is no way back into the
    /// builder.
    pub fn finalize(mut self, footer_line: String) -> Result<ReportDocument, ReportError> {
        self.expect("finalize", BuilderState::RiskDriversAdded)?;
        self.push(
            SectionKind::Disclaimer,
            SectionContent::Boilerplate {
                text: DISCLAIMER_TEXT.to_string(),
            },
        );
        self.push(SectionKind::Footer, SectionContent::FooterLine { line: footer_line });
        Ok(ReportDocument {
            sections: self.sections,
        })
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Assembles the canonical report document for one valuation.
pub struct ReportAssembler;

impl ReportAssembler {
    /// Builds the full document.
    ///
    /// Pure: apart from the explicitly passed `generated_on` date, the
    /// output depends only on the arguments, so assembling twice yields
    /// structurally identical documents.
    pub fn assemble(
        input: &ValuationInput,
        result: &ValuationResult,
        narrative: &Narrative,
        generated_on: NaiveDate,
    ) -> Result<ReportDocument, ReportError> {
        let generated_label = generated_on.format("%B %d, %Y").to_string();
        let industry = industry_label(&input.industry);

        let mut builder = ReportBuilder::new();

        builder.add_header(SectionContent::Header {
            business_name: input.business_name.clone(),
            industry: industry.clone(),
            generated_on: generated_label.clone(),
        })?;

        builder.add_summary(
            SectionContent::ValuationHighlight {
                valuation_low: format_currency(result.valuation_low),
                valuation_point: format_currency(result.valuation_point),
                valuation_high: format_currency(result.valuation_high),
                multiple_range: multiple_range_label(result.multiple_low, result.multiple_high),
            },
            SectionContent::Rows {
                rows: overview_rows(input, &industry),
            },
            SectionContent::Paragraphs {
                paragraphs: vec![
                    narrative.summary.clone(),
                    format!(
                        "Revenue has been {} over the reporting period.",
                        SdeEngine::revenue_trend(input).label()
                    ),
                ],
            },
        )?;

        builder.add_financials(SectionContent::Rows {
            rows: financial_rows(input, result),
        })?;

        builder.add_methodology(SectionContent::Paragraphs {
            paragraphs: methodology_paragraphs(result, &industry),
        })?;

        builder.add_risk_drivers(
            SectionContent::ItemList {
                title: "Value Drivers".to_string(),
                items: narrative.value_drivers.clone(),
            },
            SectionContent::ItemList {
                title: "Risk Factors".to_string(),
                items: narrative.risk_factors.clone(),
            },
            SectionContent::ItemList {
                title: "Recommendations".to_string(),
                items: narrative.recommendations.clone(),
            },
        )?;

        builder.finalize(format!("Worthwell Valuation Report | Generated {generated_label}"))
    }
}

/// Formats a multiple with up to two decimals, e.g. `0.5x` or `2.75x`.
fn multiple_label(multiple: Decimal) -> String {
    format!("{}x", multiple.round_dp(2).normalize())
}

fn multiple_range_label(low: Decimal, high: Decimal) -> String {
    format!("{} to {}", multiple_label(low), multiple_label(high))
}

/// Display value for optional figures: "Not specified" when absent.
fn or_not_specified(value: Option<String>) -> String {
    value.unwrap_or_else(|| "Not specified".to_string())
}

fn overview_rows(input: &ValuationInput, industry: &str) -> Vec<LabeledValue> {
    vec![
        LabeledValue::new("Industry", industry),
        LabeledValue::new(
            "Location",
            or_not_specified((!input.location.is_empty()).then(|| input.location.clone())),
        ),
        LabeledValue::new(
            "Founded",
            or_not_specified(input.founded_year.map(|year| year.to_string())),
        ),
        LabeledValue::new(
            "Employees",
            or_not_specified(input.employee_count.map(|count| count.to_string())),
        ),
        LabeledValue::new("Owner involvement", input.owner_involvement.label()),
    ]
}

fn financial_rows(input: &ValuationInput, result: &ValuationResult) -> Vec<LabeledValue> {
    let optional_currency = |value: Decimal| {
        or_not_specified((value > Decimal::ZERO).then(|| format_currency(value)))
    };
    let optional_percent = |value: Decimal| {
        or_not_specified((value != Decimal::ZERO).then(|| format_percent(value)))
    };

    vec![
        LabeledValue::new("Annual revenue", format_currency(input.annual_revenue)),
        LabeledValue::new(
            "Seller's discretionary earnings",
            format_currency(result.sde),
        ),
        LabeledValue::new("SDE margin", format_percent(result.sde_margin)),
        LabeledValue::new("Owner add-backs", optional_currency(input.add_backs)),
        LabeledValue::new("Owner salary", optional_currency(input.owner_salary)),
        LabeledValue::new("Gross margin", optional_percent(input.gross_margin)),
        LabeledValue::new(
            "Revenue growth rate",
            optional_percent(input.revenue_growth_rate),
        ),
    ]
}

fn methodology_paragraphs(result: &ValuationResult, industry: &str) -> Vec<String> {
    let mut paragraphs = vec![
        "This estimate uses the Seller's Discretionary Earnings (SDE) multiple method, the \
         standard approach for owner-operated small businesses. SDE captures the total \
         financial benefit available to a single owner-operator; a market-derived multiple \
         range is then applied to produce an enterprise value range."
            .to_string(),
        format!(
            "Based on the {industry} industry and the qualitative factors reported, a multiple \
             range of {} was applied to SDE of {}. The point estimate is the midpoint of the \
             resulting range.",
            multiple_range_label(result.multiple_low, result.multiple_high),
            format_currency(result.sde),
        ),
    ];

    if result.multiple_source == MultipleSource::DefaultFallback {
        paragraphs.push(
            "No industry benchmark was available for the reported industry, so a conservative \
             default multiple range was applied. The estimate remains directionally useful but \
             is less precise than an industry-matched range."
                .to_string(),
        );
    }

    paragraphs
}
