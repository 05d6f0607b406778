//! symbpe CLI - Command-line interface for symbol-sequence BPE.
//!
//! This is the main entry point for the `symbpe` command-line tool.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use commands::{MetricsCommand, TrainCommand};

#[derive(Parser)]
#[command(name = "symbpe")]
#[command(about = "Learn BPE merges over transcription symbol sequences", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train BPE merges on a ground-truth file
    Train(TrainCommand),
    /// Compare a vocabulary's rank-frequency curve with a fitted model
    Metrics(MetricsCommand),
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Train(cmd) => commands::train::run(cmd)?,
        Commands::Metrics(cmd) => commands::metrics::run(cmd)?,
    }

    Ok(())
}
