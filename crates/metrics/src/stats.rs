//! Goodness-of-fit statistics between a fitted model and empirical frequencies.

use crate::fit::FitParams;
use std::path::Path;
use symbpe_core::{BpeError, Result};

/// Column holding the frequency in an empirical rank-frequency file.
pub const FREQUENCY_COLUMN: usize = 2;

/// Read empirical frequencies, one per non-blank line, from `column`.
pub fn parse_empirical(content: &str, column: usize) -> Result<Vec<f64>> {
    let mut values = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let field = line.split_whitespace().nth(column).ok_or_else(|| BpeError::Parse {
            line: line_num + 1,
            message: format!("expected at least {} columns", column + 1),
        })?;
        let value = field.parse::<f64>().map_err(|e| BpeError::Parse {
            line: line_num + 1,
            message: format!("invalid frequency '{}': {}", field, e),
        })?;
        values.push(value);
    }

    Ok(values)
}

/// Load empirical frequencies from the standard frequency column of `path`.
pub fn load_empirical(path: &Path) -> Result<Vec<f64>> {
    let content = std::fs::read_to_string(path).map_err(|e| BpeError::io(path, e))?;
    parse_empirical(&content, FREQUENCY_COLUMN)
}

fn ensure_non_empty(empirical: &[f64]) -> Result<()> {
    if empirical.is_empty() {
        return Err(BpeError::InvalidConfig(
            "empirical frequencies are empty".to_string(),
        ));
    }
    Ok(())
}

/// Coefficient of determination of the model against `empirical`.
///
/// Rank `i + 1` of the model is compared with `empirical[i]`. A constant
/// empirical series has zero variance and yields a non-finite value.
pub fn r_squared(params: &FitParams, empirical: &[f64]) -> Result<f64> {
    ensure_non_empty(empirical)?;

    let mean = empirical.iter().sum::<f64>() / empirical.len() as f64;
    let (residual, total) = empirical
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(residual, total), (i, &e)| {
            let diff = params.frequency(i + 1) - e;
            (residual + diff * diff, total + (mean - e) * (mean - e))
        });

    Ok(1.0 - residual / total)
}

/// Kolmogorov-Smirnov statistic between the model and empirical CDFs.
///
/// Both distributions are normalised over the first `empirical.len()` ranks.
pub fn ks_statistic(params: &FitParams, empirical: &[f64]) -> Result<f64> {
    ensure_non_empty(empirical)?;

    let model_total: f64 = (1..=empirical.len()).map(|r| params.frequency(r)).sum();
    let empirical_total: f64 = empirical.iter().sum();

    let mut model_cdf = 0.0;
    let mut empirical_cdf = 0.0;
    let mut max_diff = 0.0f64;

    for (i, &e) in empirical.iter().enumerate() {
        model_cdf += params.frequency(i + 1);
        empirical_cdf += e;
        let diff = (model_cdf / model_total - empirical_cdf / empirical_total).abs();
        max_diff = max_diff.max(diff);
    }

    Ok(max_diff)
}
