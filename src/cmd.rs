//! Command implementations for the CLI interface.
//!
//! Each handler loads nothing itself: it receives the task file and a resolved view, runs
//! the layout engine and writes the result as a table or JSON to the given writer.

use std::io::{self, Write};

use clap::{Args, Subcommand};
use clap_complete::{generate, Shell};

use chrono::NaiveDate;

use crate::colors::{color_hex, stage_status_color, status_color};
use crate::db::*;
use crate::error::Result;
use crate::fields::*;
use crate::task::Task;
use crate::timeline::{build_layout, position_task, subtasks_of, TaskBar, TimelineLayout, ViewConfig};

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the full timeline layout.
    Layout {
        #[command(flatten)]
        view: ViewArgs,
        /// Output format: table | json.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show the period header row (and month row for days/weeks).
    Headers {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show task bar positions.
    Bars {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Show stage swimlanes with completion counts.
    Stages {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// View flags shared by the layout commands. Unset flags fall back to the task file settings.
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Header granularity: days | weeks | months | quarters.
    #[arg(long, value_enum)]
    pub unit: Option<TimeUnit>,
    /// Task filter: all | incomplete | complete | mine.
    #[arg(long, value_enum)]
    pub filter: Option<TaskFilter>,
    /// Current user id, used by the `mine` filter.
    #[arg(long)]
    pub user: Option<String>,
    /// Date to treat as today: YYYY-MM-DD, "today", "tomorrow", "in Nd" or a weekday.
    #[arg(long)]
    pub today: Option<String>,
    /// First day of the week: sunday | monday | saturday.
    #[arg(long, value_enum)]
    pub week_start: Option<WeekStart>,
}

/// Merge CLI flags over file settings. `clock_today` is the system date.
pub fn resolve_view(args: &ViewArgs, settings: &Settings, clock_today: NaiveDate) -> Result<ViewConfig> {
    let today = match args.today.as_deref() {
        Some(s) => parse_date_input(s, clock_today)?,
        None => clock_today,
    };
    let week_start = args.week_start.unwrap_or(settings.week_start);
    Ok(ViewConfig::new(today)
        .with_time_unit(args.unit.unwrap_or(settings.time_unit))
        .with_filter(args.filter.unwrap_or(settings.task_filter))
        .with_current_user(args.user.clone().or_else(|| settings.current_user.clone()))
        .with_week_start(week_start.into()))
}

/// Print the full layout.
pub fn cmd_layout(out: &mut impl Write, db: &Database, view: &ViewConfig, format: OutputFormat) -> Result<()> {
    let layout = build_layout(&db.tasks, view);
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&layout)?)?,
        OutputFormat::Table => {
            print_range(out, &layout)?;
            writeln!(out)?;
            print_headers(out, &layout)?;
            writeln!(out)?;
            print_bars(out, db, &layout)?;
            writeln!(out)?;
            print_stages(out, db, &layout)?;
        }
    }
    Ok(())
}

/// Print the header rows only.
pub fn cmd_headers(out: &mut impl Write, db: &Database, view: &ViewConfig) -> Result<()> {
    let layout = build_layout(&db.tasks, view);
    print_range(out, &layout)?;
    print_headers(out, &layout)?;
    Ok(())
}

/// Print task bars only.
pub fn cmd_bars(out: &mut impl Write, db: &Database, view: &ViewConfig) -> Result<()> {
    let layout = build_layout(&db.tasks, view);
    print_range(out, &layout)?;
    print_bars(out, db, &layout)?;
    Ok(())
}

/// Print stage groups only.
pub fn cmd_stages(out: &mut impl Write, db: &Database, view: &ViewConfig) -> Result<()> {
    let layout = build_layout(&db.tasks, view);
    print_stages(out, db, &layout)?;
    Ok(())
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

fn print_range(out: &mut impl Write, layout: &TimelineLayout<'_>) -> io::Result<()> {
    let today = layout
        .today_fraction
        .map(|f| format!(", today at {}", format_percent(f)))
        .unwrap_or_default();
    writeln!(
        out,
        "{} to {} ({} days, {:?}){}",
        layout.range.start, layout.range.end, layout.total_days, layout.time_unit, today
    )
}

fn print_headers(out: &mut impl Write, layout: &TimelineLayout<'_>) -> io::Result<()> {
    if !layout.month_headers.is_empty() {
        writeln!(out, "{:<16} {:>6} {:>6} {:>8}", "Month", "Index", "Days", "Width")?;
        for m in &layout.month_headers {
            writeln!(
                out,
                "{:<16} {:>6} {:>6} {:>8}",
                format!("{} {}", m.month, m.year),
                m.start_idx,
                m.span_days,
                format_percent(m.width_fraction)
            )?;
        }
        writeln!(out)?;
    }
    writeln!(out, "{:<16} {:<10} {:>6} {:>6} {:>8}", "Period", "Span", "Offset", "Days", "Width")?;
    for h in &layout.headers {
        writeln!(
            out,
            "{:<16} {:<10} {:>6} {:>6} {:>8}",
            h.label,
            h.sub_label.as_deref().unwrap_or("-"),
            h.start_offset_days,
            h.span_days,
            format_percent(h.width_fraction)
        )?;
    }
    Ok(())
}

// Sub-task rows sit under their parent, positioned against the same range.
fn print_bars(out: &mut impl Write, db: &Database, layout: &TimelineLayout<'_>) -> io::Result<()> {
    writeln!(
        out,
        "{:<10} {:<14} {:<13} {:<8} {:<14} {:<10} {:<10} {:>5} {:>7} {:>7} {}",
        "ID", "Stage", "Status", "Colour", "Assignee", "Start", "End", "Days", "Left", "Width", "Title"
    )?;
    for bar in &layout.bars {
        let Some(task) = db.get(&bar.task_id) else { continue };
        print_bar_row(out, db, task, bar, "")?;
        for sub in subtasks_of(&db.tasks, &task.id) {
            if let Some(sub_bar) = position_task(sub, &layout.range) {
                print_bar_row(out, db, sub, &sub_bar, "  - ")?;
            }
        }
    }
    Ok(())
}

fn print_bar_row(
    out: &mut impl Write,
    db: &Database,
    task: &Task,
    bar: &TaskBar,
    indent: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "{:<10} {:<14} {:<13} {:<8} {:<14} {:<10} {:<10} {:>5} {:>7} {:>7} {}{}",
        truncate(&task.id, 10),
        truncate(&task.stage, 14),
        format_status(task.status),
        color_hex(status_color(task.status)),
        truncate(&db.assignee_label(task), 14),
        task.start_date.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
        task.end_date.map(|d| d.to_string()).unwrap_or_else(|| "-".into()),
        bar.duration_days,
        format_percent(bar.left_fraction),
        format_percent(bar.width_fraction),
        indent,
        task.display_title()
    )
}

fn print_stages(out: &mut impl Write, db: &Database, layout: &TimelineLayout<'_>) -> io::Result<()> {
    if layout.stages.is_empty() {
        return writeln!(out, "No tasks to show.");
    }
    for (group, summary) in layout.stages.iter().zip(&layout.summaries) {
        writeln!(
            out,
            "{}  {} of {} complete  [{} {}]",
            group.stage,
            summary.completed,
            summary.total,
            format_stage_status(summary.status),
            color_hex(stage_status_color(summary.status))
        )?;
        for task in &group.tasks {
            let mark = if task.completed { "x" } else { " " };
            writeln!(out, "  [{mark}] {} ({})", task.display_title(), db.assignee_label(task))?;
            for sub in subtasks_of(&db.tasks, &task.id) {
                let mark = if sub.completed { "x" } else { " " };
                writeln!(out, "      [{mark}] {}", sub.display_title())?;
            }
        }
    }
    Ok(())
}
