use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Timeline layout for project plans.
/// Reads ./timeline.json or the task file passed via --db.
#[derive(Parser)]
#[command(name = "ptl", version, about = "Gantt timeline layout for project plans")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true, default_value = "timeline.json")]
    pub db: PathBuf,

    /// Log debug details to stderr.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}
