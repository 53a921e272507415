//! # PTL - Project Timeline CLI
//!
//! Lays out a project plan as a Gantt timeline from the command line.
//!
//! ## Quick Start
//!
//! ```bash
//! # Weekly layout of ./timeline.json
//! ptl layout
//!
//! # Day columns, only my open work, as JSON
//! ptl layout --unit days --filter mine --user u1 --format json
//!
//! # Stage swimlanes with "N of M complete"
//! ptl stages --db site.json
//! ```
//!
//! ## Task file
//!
//! A JSON document with `tasks`, optional `members` and optional `settings`
//! (`week_start`, `time_unit`, `task_filter`, `current_user`). Flags override settings.
//! Set `PTL_LOG=debug` to trace how a layout was derived.

use chrono::Local;
use clap::Parser;

use project_timeline::cli::Cli;
use project_timeline::cmd::*;
use project_timeline::db::Database;
use project_timeline::error::Result;
use project_timeline::logging::init_tracing;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let clock_today = Local::now().date_naive();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Completions { shell } => cmd_completions(shell),
        Commands::Layout { view, format } => {
            let db = Database::load(&cli.db)?;
            cmd_layout(&mut out, &db, &resolve_view(&view, &db.settings, clock_today)?, format)?
        }
        Commands::Headers { view } => {
            let db = Database::load(&cli.db)?;
            cmd_headers(&mut out, &db, &resolve_view(&view, &db.settings, clock_today)?)?
        }
        Commands::Bars { view } => {
            let db = Database::load(&cli.db)?;
            cmd_bars(&mut out, &db, &resolve_view(&view, &db.settings, clock_today)?)?
        }
        Commands::Stages { view } => {
            let db = Database::load(&cli.db)?;
            cmd_stages(&mut out, &db, &resolve_view(&view, &db.settings, clock_today)?)?
        }
    }
    Ok(())
}
