//! The async, timeout-bound rendering service.

use std::time::Duration;

use super::error::RenderError;
use crate::report::ReportDocument;

/// A rendered report artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    /// MIME type of the artifact.
    pub content_type: &'static str,
    /// The artifact body.
    pub body: String,
}

/// A renderer turns a finished document into a concrete artifact.
///
/// Implementations may suspend (external render processes, headless
/// engines) but must not mutate the document or reorder its sections.
pub trait ReportRenderer {
    /// Renders the document.
    fn render(
        &self,
        document: &ReportDocument,
    ) -> impl Future<Output = Result<RenderedReport, RenderError>> + Send;
}

/// Wraps a renderer with the configured time budget.
///
/// A render that exceeds the budget is cancelled and surfaced as
/// [`RenderError::Timeout`]; no partial artifact is returned and the call
/// is not retried here, so callers stay in control of billing-adjacent
/// side effects.
#[derive(Debug, Clone, Copy)]
pub struct RenderService {
    timeout: Duration,
}

impl RenderService {
    /// Creates a service with the given time budget.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Renders a document within the time budget.
    pub async fn render<R: ReportRenderer>(
        &self,
        renderer: &R,
        document: &ReportDocument,
    ) -> Result<RenderedReport, RenderError> {
        match tokio::time::timeout(self.timeout, renderer.render(document)).await {
            Ok(result) => result,
            Err(_) => Err(RenderError::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }),
        }
    }
}
