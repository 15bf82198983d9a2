//! Rendering boundary for report artifacts.
//!
//! Rendering is split in two: a pure function from document to HTML that
//! carries no environment coupling, and an async service wrapper that
//! enforces the render time budget.

pub mod error;
pub mod html;
pub mod service;

pub use error::RenderError;
pub use html::{HtmlRenderer, render_document};
pub use service::{RenderService, RenderedReport, ReportRenderer};
