use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorChoice, LogLevel};

/// Replays a YAML script of file-system operations against an in-memory tree
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Path to the script to replay
    pub script: PathBuf,
    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Stop at the first operation that fails
    #[clap(long)]
    pub fail_fast: bool,

    /// When to colorize output
    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorChoice,
}
