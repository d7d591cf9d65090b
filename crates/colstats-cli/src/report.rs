//! Human-readable and JSON rendering of the analysis

use std::path::Path;

use anyhow::{Context, Result};
use colstats_core::diagnostics::MomentSummary;
use colstats_core::tests::goodness::ChiSquareResult;
use colstats_core::tests::nonparametric::MannWhitneyResult;
use colstats_core::tests::runs::RunsTestResult;
use colstats_core::SampleSummary;
use serde::Serialize;

/// Everything computed for one column
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub sample: SampleSummary,
    pub moments: MomentSummary,
    pub runs: RunsTestResult,
    pub chi_square: ChiSquareResult,
    pub mann_whitney: MannWhitneyResult,
}

pub fn log_moments(m: &MomentSummary) {
    tracing::info!("--- Moments ---");
    tracing::info!("Mean: {:.4}", m.mean);
    tracing::info!("Variance: {:.4}", m.variance);
    tracing::info!("Std. deviation: {:.4}", m.std_dev);
    tracing::info!("Median: {:.4}", m.median);
    tracing::info!("Skewness: {:.4}", m.skewness);
    tracing::info!("Excess kurtosis: {:.4}", m.kurtosis);
    tracing::info!("Maximum (ML estimate of theta): {}", m.max);
}

pub fn log_runs(r: &RunsTestResult) {
    tracing::info!("--- Runs test (randomness) ---");
    tracing::info!("n1 (+): {}, n2 (-): {}, runs: {}", r.n1, r.n2, r.runs);
    tracing::info!(
        "Z: {:.4} (compare with Z_crit={}), p={:.4}: {}",
        r.statistic,
        r.critical_value,
        r.p_value,
        if r.rejected {
            "randomness rejected"
        } else {
            "randomness not rejected"
        }
    );
}

pub fn log_chi_square_header() {
    tracing::info!("--- Chi-square (intervals) ---");
}

pub fn log_chi_square(c: &ChiSquareResult) {
    tracing::info!("Chi-square: {:.4}", c.statistic);
    match c.rejected {
        Some(rejected) => tracing::info!(
            "df={}, critical={:.4}, p={:.4}: {}",
            c.df,
            c.critical_value,
            c.p_value,
            if rejected {
                "quadratic CDF rejected"
            } else {
                "quadratic CDF not rejected"
            }
        ),
        None => tracing::info!("df={}: too few intervals for a decision", c.df),
    }
}

pub fn log_mann_whitney(r: &MannWhitneyResult) {
    tracing::info!("--- Mann-Whitney (homogeneity of halves) ---");
    tracing::info!("U: {}", r.u);
    tracing::info!(
        "Z: {:.4} (compare with Z_crit={}), p={:.4}: {}",
        r.statistic,
        r.critical_value,
        r.p_value,
        if r.rejected {
            "homogeneity rejected"
        } else {
            "homogeneity not rejected"
        }
    );
}

/// Write the report as pretty JSON; NaN values become `null`
pub fn write_json(path: &Path, report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write report to {}", path.display()))?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}
