//! Spreadsheet-backed column source (calamine)

use calamine::{open_workbook_auto, Data, Range, Reader};
use colstats_core::{Cell, ColumnSelector, ColumnSource, StatsResult};

/// Reads `.xls`, `.xlsx`, `.xlsm`, `.xlsb` and `.ods` files
///
/// The workbook is opened per call and dropped before returning.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkbookSource;

impl ColumnSource for WorkbookSource {
    fn read_column(&self, selector: &ColumnSelector) -> StatsResult<Vec<Cell>> {
        let mut workbook =
            open_workbook_auto(&selector.path).map_err(|e| selector.load_error(e))?;

        let sheet_count = workbook.sheet_names().len();
        let range = match workbook.worksheet_range_at(selector.sheet) {
            Some(range) => range.map_err(|e| selector.load_error(e))?,
            None => {
                return Err(selector.load_error(format!(
                    "workbook has {} sheet(s), no sheet {}",
                    sheet_count,
                    selector.sheet + 1
                )))
            }
        };

        tracing::debug!(
            sheet_count,
            rows = range.height(),
            columns = range.width(),
            "opened worksheet"
        );

        column_cells(&range, selector)
    }
}

/// Cells of the selected absolute column, top to bottom
///
/// An empty sheet yields no cells; a column right of the used area is an
/// error.
fn column_cells(range: &Range<Data>, selector: &ColumnSelector) -> StatsResult<Vec<Cell>> {
    let (Some((_, first_col)), Some((_, last_col))) = (range.start(), range.end()) else {
        return Ok(Vec::new());
    };

    let column = selector.column as u64;
    if column > u64::from(last_col) {
        return Err(selector.load_error(format!(
            "sheet has {} column(s), no column {}",
            last_col + 1,
            selector.column + 1
        )));
    }
    if column < u64::from(first_col) {
        return Ok(vec![Cell::Empty; range.height()]);
    }

    let offset = (column - u64::from(first_col)) as usize;
    Ok(range
        .rows()
        .map(|row| row.get(offset).map_or(Cell::Empty, to_cell))
        .collect())
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        Data::Error(e) => Cell::Error(e.to_string()),
        // Dates and durations are not observations
        _ => Cell::Empty,
    }
}
