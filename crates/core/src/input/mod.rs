//! Questionnaire input handling.
//!
//! Raw questionnaire submissions are untrusted JSON: numbers arrive as
//! strings, multi-year fields arrive as scalars or arrays, and most fields
//! may be missing entirely. Everything funnels through one normalization
//! boundary so that downstream components only ever see fully-typed,
//! already-validated data.

pub mod error;
pub mod normalize;
pub mod raw;
pub mod types;

pub use error::ValidationError;
pub use normalize::Normalizer;
pub use raw::{NumericValue, RawValuationInput, ScalarOrSeries};
pub use types::{OwnerInvolvement, QualitativeSignals, ValuationInput};
