//! Horizontal bar geometry for scheduled tasks.

use serde::Serialize;

use super::range::{days_between, DateRange};
use crate::task::Task;

/// Position of a task bar as dimensionless fractions of the range.
///
/// Values are not clamped: a task starting before the range has a negative
/// `left_fraction`, an inverted task a non-positive `width_fraction`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskBar {
    pub task_id: String,
    pub start_offset_days: i64,
    pub duration_days: i64,
    pub left_fraction: f64,
    pub width_fraction: f64,
}

impl TaskBar {
    /// Right edge of the bar.
    pub fn right_fraction(&self) -> f64 {
        self.left_fraction + self.width_fraction
    }

    /// Width to draw, never narrower than `min_fraction`.
    pub fn display_width(&self, min_fraction: f64) -> f64 {
        self.width_fraction.max(min_fraction)
    }
}

/// Place `task` on `range`, or `None` when it lacks a start or end date.
///
/// Duration counts both endpoints, so a single-day task is one day wide.
pub fn position_task(task: &Task, range: &DateRange) -> Option<TaskBar> {
    let (start, end) = task.dates()?;
    let start_offset_days = range.offset_of(start);
    let duration_days = days_between(start, end) + 1;
    Some(TaskBar {
        task_id: task.id.clone(),
        start_offset_days,
        duration_days,
        left_fraction: range.fraction(start_offset_days),
        width_fraction: range.fraction(duration_days),
    })
}
