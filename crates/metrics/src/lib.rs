//! symbpe-metrics - Rank-frequency fit statistics
//!
//! Compares an empirical rank-frequency curve (for example a learned
//! vocabulary sorted by count) with a fitted Zipf-Mandelbrot model, reporting
//! the coefficient of determination and the Kolmogorov-Smirnov statistic.

pub use symbpe_core::{BpeError, Result};

pub mod fit;
pub mod stats;

pub use fit::FitParams;
pub use stats::{ks_statistic, load_empirical, parse_empirical, r_squared, FREQUENCY_COLUMN};
