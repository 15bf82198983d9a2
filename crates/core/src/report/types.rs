//! Report document model.
//!
//! Every numeric value embedded here is a pre-formatted string. The
//! renderer performs no arithmetic and no formatting decisions.

use serde::{Deserialize, Serialize};

/// The kinds of section a report can contain, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Report masthead with business identity.
    Header,
    /// The headline valuation range.
    ValuationHighlight,
    /// Basic facts about the company.
    CompanyOverview,
    /// Narrative summary paragraphs.
    ExecutiveSummary,
    /// Key financial figures.
    FinancialTable,
    /// How the estimate was produced.
    Methodology,
    /// Factors supporting the multiple.
    ValueDrivers,
    /// Due-diligence concerns.
    RiskFactors,
    /// Suggested actions before a sale.
    Recommendations,
    /// Fixed legal boilerplate.
    Disclaimer,
    /// Report footer line.
    Footer,
}

/// The canonical section order every report follows.
///
/// Header and Disclaimer/Footer are mandatory; renderers must not reorder
/// or drop sections.
pub const CANONICAL_ORDER: [SectionKind; 11] = [
    SectionKind::Header,
    SectionKind::ValuationHighlight,
    SectionKind::CompanyOverview,
    SectionKind::ExecutiveSummary,
    SectionKind::FinancialTable,
    SectionKind::Methodology,
    SectionKind::ValueDrivers,
    SectionKind::RiskFactors,
    SectionKind::Recommendations,
    SectionKind::Disclaimer,
    SectionKind::Footer,
];

/// Fixed disclaimer boilerplate, present verbatim in every report variant.
pub const DISCLAIMER_TEXT: &str = "This report provides an estimate of business value based on \
the information supplied and industry-standard Seller's Discretionary Earnings multiples. It is \
intended for informational purposes only and does not constitute a formal business appraisal, \
tax advice, or investment advice. Actual transaction prices depend on deal structure, market \
conditions, and due diligence findings. Consult a qualified professional before making decisions \
based on this estimate.";

/// A labeled display value, e.g. `Annual Revenue: $500,000`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledValue {
    /// Row label.
    pub label: String,
    /// Display-ready value.
    pub value: String,
}

impl LabeledValue {
    /// Creates a labeled value.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Structured payload for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionContent {
    /// Masthead payload.
    Header {
        /// Business name.
        business_name: String,
        /// Industry display label.
        industry: String,
        /// Pre-formatted generation date.
        generated_on: String,
    },
    /// Headline valuation payload.
    ValuationHighlight {
        /// Low estimate, formatted.
        valuation_low: String,
        /// Point estimate, formatted.
        valuation_point: String,
        /// High estimate, formatted.
        valuation_high: String,
        /// Applied multiple range, formatted.
        multiple_range: String,
    },
    /// Label/value rows (company overview, financial table).
    Rows {
        /// Ordered display rows.
        rows: Vec<LabeledValue>,
    },
    /// Paragraph text (executive summary, methodology).
    Paragraphs {
        /// Ordered paragraphs.
        paragraphs: Vec<String>,
    },
    /// Bulleted list (drivers, risks, recommendations).
    ItemList {
        /// List heading.
        title: String,
        /// Ordered items.
        items: Vec<String>,
    },
    /// Fixed boilerplate text.
    Boilerplate {
        /// The text, verbatim.
        text: String,
    },
    /// Single footer line.
    FooterLine {
        /// The line.
        line: String,
    },
}

/// One report section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// What kind of section this is.
    pub kind: SectionKind,
    /// Display-ready payload.
    pub content: SectionContent,
    /// Layout hint: start a new page before this section. Renderers may
    /// reflow but must not reorder or drop sections.
    pub page_break_before: bool,
}

/// An assembled report: an ordered, immutable sequence of sections.
///
/// Rebuilt on every render request from the persisted input and result;
/// never persisted itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Sections in canonical order.
    pub sections: Vec<Section>,
}

impl ReportDocument {
    /// Returns the section kinds in document order.
    #[must_use]
    pub fn kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|section| section.kind).collect()
    }

    /// Finds the first section of a kind.
    #[must_use]
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|section| section.kind == kind)
    }
}
