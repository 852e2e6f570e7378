//! Command-line interface for the board app

use clap::Parser;
use std::path::PathBuf;

/// Terminal kanban board for tracking projects
#[derive(Debug, Parser)]
#[command(name = "driftboard", version, about)]
pub struct Cli {
    /// Write tracing output to this file (the UI owns the terminal)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "driftboard=trace")
    #[arg(long, default_value = "info", value_name = "FILTER")]
    pub log_level: String,
}
