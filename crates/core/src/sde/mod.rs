//! Seller's Discretionary Earnings metrics.

pub mod engine;

pub use engine::{RevenueTrend, SdeEngine, SdeMetrics};
