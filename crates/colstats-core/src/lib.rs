//! colstats-core: statistics over a single numeric spreadsheet column
//!
//! This crate provides the sample type, the column loading contract, the
//! moment summary and the hypothesis tests run by the `colstats` binary.

pub mod diagnostics;
pub mod errors;
pub mod loader;
pub mod tests;
pub mod types;

pub use errors::{StatsError, StatsResult};
pub use loader::{load_sample, Cell, ColumnSelector, ColumnSource};
pub use types::*;
