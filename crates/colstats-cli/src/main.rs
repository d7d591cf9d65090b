//! colstats CLI

mod logging;
mod report;
mod run;
mod workbook;

use anyhow::Result;
use clap::Parser;
use colstats_core::tests::goodness::GoodnessOfFitOptions;
use colstats_core::tests::nonparametric::MannWhitneyOptions;
use colstats_core::tests::runs::RunsOptions;
use colstats_core::ColumnSelector;
use std::path::PathBuf;

use crate::run::Settings;
use crate::workbook::WorkbookSource;

#[derive(Parser)]
#[command(name = "colstats")]
#[command(about = "Moments, runs, chi-square and Mann-Whitney tests over one spreadsheet column")]
#[command(version)]
struct Cli {
    /// Spreadsheet file (.xls, .xlsx, .xlsm, .xlsb, .ods)
    #[arg(default_value = "data/data.xls")]
    path: PathBuf,

    /// Zero-based sheet index
    #[arg(long, default_value = "5")]
    sheet: usize,

    /// Zero-based column index
    #[arg(long, default_value = "0")]
    column: usize,

    /// Leading rows skipped before the data (the header label)
    #[arg(long, default_value = "1")]
    header_rows: usize,

    /// Log file, appended to alongside stdout
    #[arg(long, default_value = "app.log")]
    log_file: PathBuf,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,

    /// Critical |z| for the runs test
    #[arg(long, default_value = "1.96")]
    runs_critical: f64,

    /// Critical |z| for the Mann-Whitney test
    #[arg(long, default_value = "2.57")]
    mw_critical: f64,

    /// Significance level for the chi-square critical value
    #[arg(long, default_value = "0.05")]
    alpha: f64,

    /// Also write the full report as pretty JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            selector: ColumnSelector::new(&self.path, self.sheet, self.column)
                .with_header_rows(self.header_rows),
            runs: RunsOptions {
                critical_value: self.runs_critical,
            },
            goodness: GoodnessOfFitOptions { alpha: self.alpha },
            mann_whitney: MannWhitneyOptions {
                critical_value: self.mw_critical,
            },
            json: self.json.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_file, cli.log_level)?;

    let settings = cli.settings();
    let outcome = settings
        .validate()
        .and_then(|()| run::run(&WorkbookSource, &settings));

    if let Err(err) = outcome {
        tracing::error!("{err:#}");
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_constants() {
        let cli = Cli::parse_from(["colstats"]);
        let settings = cli.settings();

        assert_eq!(settings.selector.path, PathBuf::from("data/data.xls"));
        assert_eq!(settings.selector.sheet, 5);
        assert_eq!(settings.selector.column, 0);
        assert_eq!(settings.selector.header_rows, 1);
        assert_eq!(settings.runs.critical_value, 1.96);
        assert_eq!(settings.mann_whitney.critical_value, 2.57);
        assert_eq!(settings.goodness.alpha, 0.05);
        assert_eq!(cli.log_file, PathBuf::from("app.log"));
        assert_eq!(cli.log_level, tracing::Level::INFO);
        assert!(settings.json.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "colstats",
            "other.xlsx",
            "--sheet",
            "0",
            "--column",
            "2",
            "--header-rows",
            "0",
            "--json",
            "out.json",
        ]);
        let settings = cli.settings();

        assert_eq!(settings.selector.path, PathBuf::from("other.xlsx"));
        assert_eq!(settings.selector.sheet, 0);
        assert_eq!(settings.selector.column, 2);
        assert_eq!(settings.selector.header_rows, 0);
        assert_eq!(settings.json, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
