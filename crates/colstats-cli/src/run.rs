//! The analysis pipeline: load, then each statistic in turn

use std::path::PathBuf;

use anyhow::{Context, Result};
use colstats_core::diagnostics::moments;
use colstats_core::tests::goodness::{chisq_quadratic_fit, GoodnessOfFitOptions};
use colstats_core::tests::nonparametric::{mann_whitney_halves, MannWhitneyOptions};
use colstats_core::tests::runs::{runs_test, RunsOptions};
use colstats_core::{load_sample, ColumnSelector, ColumnSource};

use crate::report::{self, Report};

/// Resolved run configuration
#[derive(Debug, Clone)]
pub struct Settings {
    pub selector: ColumnSelector,
    pub runs: RunsOptions,
    pub goodness: GoodnessOfFitOptions,
    pub mann_whitney: MannWhitneyOptions,
    /// Optional JSON copy of the report
    pub json: Option<PathBuf>,
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        let alpha = self.goodness.alpha;
        if alpha.is_nan() || alpha <= 0.0 || alpha >= 1.0 {
            anyhow::bail!("alpha must be in (0, 1), got {alpha}");
        }
        for (name, value) in [
            ("runs critical value", self.runs.critical_value),
            ("Mann-Whitney critical value", self.mann_whitney.critical_value),
        ] {
            if value.is_nan() || value <= 0.0 {
                anyhow::bail!("{name} must be > 0, got {value}");
            }
        }
        Ok(())
    }
}

/// Run every statistic over the selected column, logging each section as
/// soon as it is computed
///
/// Stops at the first failure; sections already logged stay in the log.
pub fn run<S: ColumnSource + ?Sized>(source: &S, settings: &Settings) -> Result<Report> {
    let sample = load_sample(source, &settings.selector)?;

    let moments = moments(&sample);
    report::log_moments(&moments);

    let runs = runs_test(&sample, &settings.runs)
        .context("Error computing runs test statistic (possible division by zero)")?;
    report::log_runs(&runs);

    report::log_chi_square_header();
    let chi_square = chisq_quadratic_fit(&sample, &settings.goodness);
    report::log_chi_square(&chi_square);

    let mann_whitney = mann_whitney_halves(&sample, &settings.mann_whitney)
        .context("Error computing Mann-Whitney Z (possible division by zero)")?;
    report::log_mann_whitney(&mann_whitney);

    let report = Report {
        sample: sample.summary(),
        moments,
        runs,
        chi_square,
        mann_whitney,
    };

    if let Some(path) = &settings.json {
        report::write_json(path, &report)?;
    }

    Ok(report)
}
