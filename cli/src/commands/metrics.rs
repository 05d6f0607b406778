//! Metrics command implementation.

use clap::Parser;
use symbpe_metrics::FREQUENCY_COLUMN;

/// Metrics command arguments.
#[derive(Parser, Debug)]
pub struct MetricsCommand {
    /// Empirical rank-frequency file (frequency in the third column)
    #[arg(short, long)]
    pub empirical: String,

    /// Fit log holding the estimated parameters (`a`, `b`, `c`)
    #[arg(short = 'f', long = "estimated")]
    pub estimated: String,

    /// Zero-based column of the frequency in the empirical file
    #[arg(long, default_value_t = FREQUENCY_COLUMN)]
    pub column: usize,
}

use anyhow::{Context, Result as AnyhowResult};
use std::path::Path;
use symbpe_metrics::{ks_statistic, parse_empirical, r_squared, FitParams};

/// Goodness-of-fit figures for one empirical file.
#[derive(Debug, Clone, Copy)]
pub struct FitReport {
    pub params: FitParams,
    pub r_squared: f64,
    pub ks: f64,
}

pub fn evaluate(empirical: &Path, estimated: &Path, column: usize) -> AnyhowResult<FitReport> {
    let content = std::fs::read_to_string(empirical)
        .with_context(|| format!("Failed to read empirical data {}", empirical.display()))?;
    let values = parse_empirical(&content, column)
        .with_context(|| format!("Malformed empirical data {}", empirical.display()))?;
    let params = FitParams::from_file(estimated)
        .with_context(|| format!("Failed to read fit parameters {}", estimated.display()))?;

    Ok(FitReport {
        params,
        r_squared: r_squared(&params, &values)?,
        ks: ks_statistic(&params, &values)?,
    })
}

pub fn run(cmd: MetricsCommand) -> AnyhowResult<()> {
    let empirical = Path::new(&cmd.empirical);
    let report = evaluate(empirical, Path::new(&cmd.estimated), cmd.column)?;

    let name = empirical
        .file_name()
        .map_or_else(|| cmd.empirical.clone(), |n| n.to_string_lossy().into_owned());

    println!("For file: {}", name);
    println!(
        "c = {} q = {} z = {}",
        report.params.c, report.params.q, report.params.z
    );
    println!("R2 = {}", report.r_squared);
    println!("KS = {}", report.ks);
    println!();

    Ok(())
}
