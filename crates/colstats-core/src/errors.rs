use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a sample or running a test on it
#[derive(Error, Debug)]
pub enum StatsError {
    // Loading errors
    #[error(
        "Failed to read {} (sheet {}, column {}): {message}",
        .path.display(),
        .sheet + 1,
        .column + 1
    )]
    Load {
        path: PathBuf,
        sheet: usize,
        column: usize,
        message: String,
    },

    #[error(
        "No valid numeric data found in {} (sheet {}, column {})",
        .path.display(),
        .sheet + 1,
        .column + 1
    )]
    NoValidData {
        path: PathBuf,
        sheet: usize,
        column: usize,
    },

    // Input validation errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Numerical errors
    #[error("{test}: {reason}")]
    Computation { test: &'static str, reason: String },
}

impl StatsError {
    pub(crate) fn computation(test: &'static str, reason: impl Into<String>) -> Self {
        StatsError::Computation {
            test,
            reason: reason.into(),
        }
    }
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_reports_one_based_selector() {
        let err = StatsError::Load {
            path: PathBuf::from("data/data.xls"),
            sheet: 5,
            column: 0,
            message: "file not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read data/data.xls (sheet 6, column 1): file not found"
        );
    }

    #[test]
    fn test_computation_error_names_the_test() {
        let err = StatsError::computation("Runs test", "n1 + n2 must exceed 1");
        assert_eq!(err.to_string(), "Runs test: n1 + n2 must exceed 1");
    }
}
