//! CLI commands for the symbpe tool.

pub mod metrics;
pub mod train;

pub use metrics::MetricsCommand;
pub use train::TrainCommand;
