//! Report document assembly.
//!
//! This module turns a valuation and its narrative into an ordered sequence
//! of typed sections with display-ready strings. Renderers consume the
//! document as-is: they may reflow pages but never reorder, drop, or
//! recompute anything.

pub mod assembler;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use assembler::{ReportAssembler, ReportBuilder};
pub use error::ReportError;
pub use types::{
    CANONICAL_ORDER, DISCLAIMER_TEXT, LabeledValue, ReportDocument, Section, SectionContent,
    SectionKind,
};
