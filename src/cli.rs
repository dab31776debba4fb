//! Command-line surface

use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Batch prompt generation with Google TTS services
#[derive(Debug, Clone, Parser)]
#[command(name = "promptgen", version, about)]
pub struct Cli {
    /// Amount of rows in the CSV file to process at the same time.
    /// Suggested max value is 100
    #[arg(short, long, default_value = "10")]
    pub batch: NonZeroUsize,

    /// Cap on concurrent requests inside one batch (defaults to the batch width)
    #[arg(long)]
    pub max_in_flight: Option<NonZeroUsize>,

    /// Override the log level from the configuration file
    #[arg(long)]
    pub log_level: Option<String>,

    /// YAML file with operation settings
    #[arg(value_name = "configurationYAML")]
    pub config: PathBuf,
}
