//! Industry SDE-multiple selection.

pub mod selector;
pub mod table;

#[cfg(test)]
mod props;

pub use selector::{MultipleSelector, MultipleSource, SelectedMultiples};
pub use table::{MultipleRange, base_range, default_range, industry_label};
