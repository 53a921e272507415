//! Enumerations and field types for timeline planning.
//!
//! This module defines the closed sets used to describe tasks and to configure a timeline
//! view: task status, time-unit granularity, task filters, week start and stage status.

use chrono::Weekday;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Task status as tracked on the planning board. Only used for colouring.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    #[serde(alias = "Required")]
    Required,
    #[serde(alias = "Not Required", alias = "NotRequired")]
    NotRequired,
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "Complete")]
    Complete,
    #[serde(alias = "Needs Action", alias = "NeedsAction")]
    NeedsAction,
}

/// Granularity of the header columns.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TimeUnit {
    Days,
    #[default]
    Weeks,
    Months,
    Quarters,
}

impl TimeUnit {
    /// Whether this granularity renders a month super-header row above its columns.
    pub fn has_month_row(self) -> bool {
        matches!(self, TimeUnit::Days | TimeUnit::Weeks)
    }
}

/// Which tasks a timeline view shows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskFilter {
    #[default]
    All,
    Incomplete,
    Complete,
    Mine,
}

/// First day of a calendar week.
///
/// Week-aligned ranges and week headers both use this value, so they always agree.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum WeekStart {
    #[default]
    #[serde(alias = "sun")]
    Sunday,
    #[serde(alias = "mon")]
    Monday,
    #[serde(alias = "sat")]
    Saturday,
}

impl From<WeekStart> for Weekday {
    fn from(w: WeekStart) -> Self {
        match w {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Saturday => Weekday::Sat,
        }
    }
}

/// Roll-up status for a whole stage (parents plus their sub-tasks).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StageStatus {
    Required,
    InProgress,
    Complete,
}

/// Output rendering for CLI commands.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
