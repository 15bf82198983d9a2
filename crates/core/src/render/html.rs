//! Pure HTML rendering of report documents.
//!
//! The renderer consumes only display-ready strings from the document
//! model: no arithmetic, no formatting decisions, no browser or DOM
//! coupling. The output embeds a print stylesheet so the same artifact
//! serves as the on-screen report and the print/PDF source.

use super::error::RenderError;
use super::service::{RenderedReport, ReportRenderer};
use crate::report::{ReportDocument, Section, SectionContent, SectionKind};

/// Embedded stylesheet, including print page-break rules.
const STYLES: &str = "\
body { font-family: Georgia, 'Times New Roman', serif; color: #1f2933; \
margin: 0 auto; max-width: 52rem; padding: 2rem; }
h1 { font-size: 1.8rem; margin-bottom: 0.2rem; }
h2 { font-size: 1.2rem; border-bottom: 1px solid #cbd2d9; padding-bottom: 0.3rem; }
table { border-collapse: collapse; width: 100%; }
td { padding: 0.35rem 0.5rem; border-bottom: 1px solid #e4e7eb; }
td.label { color: #52606d; width: 40%; }
.highlight { background: #f5f7fa; padding: 1rem 1.5rem; }
.highlight .point { font-size: 1.6rem; font-weight: bold; }
.muted { color: #52606d; font-size: 0.85rem; }
@media print {
  .page-break { page-break-before: always; }
  body { padding: 0; }
}";

/// Renders a document to a complete HTML page.
///
/// Pure: the same document always yields the same string.
#[must_use]
pub fn render_document(document: &ReportDocument) -> String {
    let title = document
        .section(SectionKind::Header)
        .and_then(|section| match &section.content {
            SectionContent::Header { business_name, .. } => {
                Some(format!("{} Valuation Report", escape_html(business_name)))
            }
            _ => None,
        })
        .unwrap_or_else(|| "Valuation Report".to_string());

    let mut out = String::with_capacity(8 * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(&format!("<style>\n{STYLES}\n</style>\n</head>\n<body>\n"));

    for section in &document.sections {
        render_section(&mut out, section);
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn render_section(out: &mut String, section: &Section) {
    let break_class = if section.page_break_before {
        " class=\"page-break\""
    } else {
        ""
    };
    out.push_str(&format!("<section{break_class}>\n"));

    match &section.content {
        SectionContent::Header {
            business_name,
            industry,
            generated_on,
        } => {
            out.push_str(&format!("<h1>{}</h1>\n", escape_html(business_name)));
            out.push_str(&format!(
                "<p class=\"muted\">{} | {}</p>\n",
                escape_html(industry),
                escape_html(generated_on)
            ));
        }
        SectionContent::ValuationHighlight {
            valuation_low,
            valuation_point,
            valuation_high,
            multiple_range,
        } => {
            out.push_str("<div class=\"highlight\">\n<h2>Estimated Value</h2>\n");
            out.push_str(&format!(
                "<p class=\"point\">{}</p>\n",
                escape_html(valuation_point)
            ));
            out.push_str(&format!(
                "<p>Range: {} to {} (SDE multiple {})</p>\n</div>\n",
                escape_html(valuation_low),
                escape_html(valuation_high),
                escape_html(multiple_range)
            ));
        }
        SectionContent::Rows { rows } => {
            out.push_str(&format!("<h2>{}</h2>\n<table>\n", section_title(section.kind)));
            for row in rows {
                out.push_str(&format!(
                    "<tr><td class=\"label\">{}</td><td>{}</td></tr>\n",
                    escape_html(&row.label),
                    escape_html(&row.value)
                ));
            }
            out.push_str("</table>\n");
        }
        SectionContent::Paragraphs { paragraphs } => {
            out.push_str(&format!("<h2>{}</h2>\n", section_title(section.kind)));
            for paragraph in paragraphs {
                out.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
            }
        }
        SectionContent::ItemList { title, items } => {
            out.push_str(&format!("<h2>{}</h2>\n<ul>\n", escape_html(title)));
            for item in items {
                out.push_str(&format!("<li>{}</li>\n", escape_html(item)));
            }
            out.push_str("</ul>\n");
        }
        SectionContent::Boilerplate { text } => {
            out.push_str(&format!(
                "<h2>Disclaimer</h2>\n<p class=\"muted\">{}</p>\n",
                escape_html(text)
            ));
        }
        SectionContent::FooterLine { line } => {
            out.push_str(&format!("<p class=\"muted\">{}</p>\n", escape_html(line)));
        }
    }

    out.push_str("</section>\n");
}

fn section_title(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Header => "Header",
        SectionKind::ValuationHighlight => "Estimated Value",
        SectionKind::CompanyOverview => "Company Overview",
        SectionKind::ExecutiveSummary => "Executive Summary",
        SectionKind::FinancialTable => "Financial Summary",
        SectionKind::Methodology => "Methodology",
        SectionKind::ValueDrivers => "Value Drivers",
        SectionKind::RiskFactors => "Risk Factors",
        SectionKind::Recommendations => "Recommendations",
        SectionKind::Disclaimer => "Disclaimer",
        SectionKind::Footer => "Footer",
    }
}

/// Escapes text for safe embedding in HTML.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// The production renderer: pure HTML generation behind the async
/// [`ReportRenderer`] boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Creates a new HTML renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportRenderer for HtmlRenderer {
    async fn render(&self, document: &ReportDocument) -> Result<RenderedReport, RenderError> {
        Ok(RenderedReport {
            content_type: "text/html; charset=utf-8",
            body: render_document(document),
        })
    }
}
