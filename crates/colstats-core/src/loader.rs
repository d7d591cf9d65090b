//! Loading a numeric column into a [`Sample`]
//!
//! The spreadsheet reader itself lives behind [`ColumnSource`], so the
//! coercion and filtering rules here can be exercised with in-memory cells.

use std::path::{Path, PathBuf};

use crate::errors::{StatsError, StatsResult};
use crate::types::Sample;

/// Which column of which sheet to read
#[derive(Debug, Clone)]
pub struct ColumnSelector {
    /// Spreadsheet file
    pub path: PathBuf,
    /// Zero-based sheet index
    pub sheet: usize,
    /// Zero-based column index
    pub column: usize,
    /// Leading rows skipped before coercion (the header label)
    pub header_rows: usize,
}

impl ColumnSelector {
    pub fn new(path: impl AsRef<Path>, sheet: usize, column: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheet,
            column,
            header_rows: 1,
        }
    }

    pub fn with_header_rows(mut self, header_rows: usize) -> Self {
        self.header_rows = header_rows;
        self
    }

    /// Wrap a reader failure with this selector's context
    pub fn load_error(&self, message: impl ToString) -> StatsError {
        StatsError::Load {
            path: self.path.clone(),
            sheet: self.sheet,
            column: self.column,
            message: message.to_string(),
        }
    }
}

/// A raw cell as delivered by a [`ColumnSource`]
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Bool(bool),
    /// Cell-level error such as `#DIV/0!`
    Error(String),
    Empty,
}

impl Cell {
    /// Numeric value of the cell, or `None` if it counts as missing
    pub fn coerce(&self) -> Option<f64> {
        let value = match self {
            Cell::Number(x) => *x,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Bool(b) => f64::from(u8::from(*b)),
            Cell::Error(_) | Cell::Empty => return None,
        };
        value.is_finite().then_some(value)
    }
}

/// Anything that can hand back the cells of one column, header included
pub trait ColumnSource {
    fn read_column(&self, selector: &ColumnSelector) -> StatsResult<Vec<Cell>>;
}

/// Read, coerce and filter one column into a sample
///
/// Cells that do not coerce to a finite number are dropped. Fails with
/// [`StatsError::NoValidData`] when nothing survives.
pub fn load_sample<S: ColumnSource + ?Sized>(
    source: &S,
    selector: &ColumnSelector,
) -> StatsResult<Sample> {
    tracing::info!(
        path = %selector.path.display(),
        sheet = selector.sheet,
        column = selector.column,
        "reading column"
    );

    let cells = source.read_column(selector)?;
    let total = cells.len().saturating_sub(selector.header_rows);
    let values: Vec<f64> = cells
        .iter()
        .skip(selector.header_rows)
        .filter_map(Cell::coerce)
        .collect();

    if values.is_empty() {
        return Err(StatsError::NoValidData {
            path: selector.path.clone(),
            sheet: selector.sheet,
            column: selector.column,
        });
    }

    tracing::debug!(kept = values.len(), dropped = total - values.len(), "coerced column");

    let sample = Sample::new(values)?;
    let summary = sample.summary();
    tracing::info!(
        "Loaded {} records from {} (sheet {}, column {}). min={:.4}, max={:.4}, sample={:?}",
        summary.n,
        selector.path.display(),
        selector.sheet + 1,
        selector.column + 1,
        summary.min,
        summary.max,
        summary.head
    );

    Ok(sample)
}
