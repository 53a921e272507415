//! Task file loading and utility functions.
//!
//! This module provides the `Database` document read from a JSON task file, the
//! per-file view `Settings`, and helpers for date input parsing and display formatting.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};
use crate::fields::*;
use crate::task::{Member, Task};
use crate::timeline::{add_days, last_of_month};

/// View defaults stored alongside the tasks. CLI flags override them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub week_start: WeekStart,
    pub time_unit: TimeUnit,
    pub task_filter: TaskFilter,
    pub current_user: Option<String>,
}

/// A project plan: tasks, the members they can be assigned to, and view settings.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub settings: Settings,
}

impl Database {
    /// Load a task file. A missing file is an empty plan.
    pub fn load(path: &Path) -> Result<Self> {
        let buf = match fs::read_to_string(path) {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "task file not found, using an empty plan");
                return Ok(Database::default());
            }
            Err(source) => {
                return Err(TimelineError::Io { path: path.to_path_buf(), source });
            }
        };
        let db: Database = serde_json::from_str(&buf)
            .map_err(|source| TimelineError::Parse { path: path.to_path_buf(), source })?;
        tracing::debug!(
            path = %path.display(),
            tasks = db.tasks.len(),
            members = db.members.len(),
            "loaded task file"
        );
        Ok(db)
    }

    /// Get a task by ID.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Resolve a member id to a display name.
    pub fn member_name(&self, id: &str) -> Option<&str> {
        self.members.iter().find(|m| m.id == id).map(|m| m.name.as_str())
    }

    /// Display name for a task's assignee, "-" when unassigned, the raw id when unknown.
    pub fn assignee_label(&self, task: &Task) -> String {
        match task.assigned_to.as_deref() {
            None => "-".into(),
            Some(id) => self.member_name(id).unwrap_or(id).to_string(),
        }
    }
}

/// Parse a human-readable date relative to `today`.
///
/// Supports:
/// - "today", "tomorrow", "yesterday"
/// - "next monday", "this friday", bare weekday names
/// - "end of month" / "eom"
/// - "in 3d", "in 2w", "in 1m"
/// - "YYYY-MM-DD"
pub fn parse_date_input(s: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = s.trim().to_lowercase();

    match input.as_str() {
        "today" => return Ok(today),
        "tomorrow" => return Ok(add_days(today, 1)),
        "yesterday" => return Ok(add_days(today, -1)),
        "end of month" | "eom" => return Ok(last_of_month(today)),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix("in ") {
        let shifted = if let Some(nd) = rest.strip_suffix('d') {
            nd.trim()
                .parse::<i64>()
                .ok()
                .and_then(Duration::try_days)
                .and_then(|delta| today.checked_add_signed(delta))
        } else if let Some(nw) = rest.strip_suffix('w') {
            nw.trim()
                .parse::<i64>()
                .ok()
                .and_then(Duration::try_weeks)
                .and_then(|delta| today.checked_add_signed(delta))
        } else if let Some(nm) = rest.strip_suffix('m') {
            nm.trim()
                .parse::<u32>()
                .ok()
                .and_then(|months| today.checked_add_months(chrono::Months::new(months)))
        } else {
            None
        };
        return shifted.ok_or_else(|| TimelineError::InvalidDate(s.to_string()));
    }

    let weekdays = [
        ("monday", 0), ("tuesday", 1), ("wednesday", 2), ("thursday", 3),
        ("friday", 4), ("saturday", 5), ("sunday", 6),
        ("mon", 0), ("tue", 1), ("wed", 2), ("thu", 3),
        ("fri", 4), ("sat", 5), ("sun", 6),
    ];
    let current_day = today.weekday().num_days_from_monday() as i64;

    for (day_name, target_day) in weekdays {
        let days_ahead = (target_day + 7 - current_day) % 7;
        if input == day_name || input == format!("this {day_name}") {
            return Ok(add_days(today, days_ahead));
        }
        if input == format!("next {day_name}") {
            let days_to_add = if days_ahead == 0 { 7 } else { days_ahead + 7 };
            return Ok(add_days(today, days_to_add));
        }
    }

    NaiveDate::parse_from_str(&input, "%Y-%m-%d")
        .map_err(|_| TimelineError::InvalidDate(s.to_string()))
}

/// Format a task status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Required => "Required",
        Status::NotRequired => "Not Required",
        Status::Pending => "Pending",
        Status::Complete => "Complete",
        Status::NeedsAction => "Needs Action",
    }
}

/// Format a stage roll-up for display.
pub fn format_stage_status(s: StageStatus) -> &'static str {
    match s {
        StageStatus::Required => "Required",
        StageStatus::InProgress => "In Progress",
        StageStatus::Complete => "Complete",
    }
}

/// Format a fraction as a percentage with one decimal.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}
