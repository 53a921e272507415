//! Gantt timeline layout engine.
//!
//! This module maps a task list and a view configuration onto timeline geometry:
//! - the visible date range, padded per time unit
//! - period headers (days, weeks, months, quarters) plus a month row for fine units
//! - per-task bars as fractions of the range
//! - stage swimlanes in first-seen order with completion roll-ups
//!
//! Everything here is a pure function of its inputs. The current date is passed in
//! through [`ViewConfig::today`] rather than read from the clock.

mod bars;
mod filter;
mod headers;
mod range;
mod stages;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::fields::{TaskFilter, TimeUnit};
use crate::task::Task;

pub use bars::{position_task, TaskBar};
pub use filter::filter_tasks;
pub use headers::{build_headers, build_month_headers, MonthHeader, PeriodHeader};
pub use range::{
    add_days, add_months, clamp_range, clamp_range_to_unit, days_between, derive_range,
    end_of_week, first_of_month, first_of_quarter, last_of_month, last_of_quarter, quarter_of,
    start_of_week, DateRange, DEFAULT_WEEK_START, MAX_RANGE_DAYS,
};
pub use stages::{
    group_by_stage, stage_members, stage_status, stage_summary, subtasks_of, top_level_tasks,
    StageGroup, StageSummary,
};

/// How a timeline is viewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub time_unit: TimeUnit,
    pub task_filter: TaskFilter,
    pub current_user: Option<String>,
    pub week_start: Weekday,
    pub today: NaiveDate,
}

impl ViewConfig {
    /// Weeks, all tasks, Sunday weeks, no current user.
    pub fn new(today: NaiveDate) -> Self {
        ViewConfig {
            time_unit: TimeUnit::default(),
            task_filter: TaskFilter::default(),
            current_user: None,
            week_start: DEFAULT_WEEK_START,
            today,
        }
    }

    pub fn with_time_unit(mut self, unit: TimeUnit) -> Self {
        self.time_unit = unit;
        self
    }

    pub fn with_filter(mut self, filter: TaskFilter) -> Self {
        self.task_filter = filter;
        self
    }

    pub fn with_current_user(mut self, user: Option<String>) -> Self {
        self.current_user = user;
        self
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }
}

/// Complete geometry for one timeline view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout<'a> {
    pub time_unit: TimeUnit,
    pub range: DateRange,
    pub total_days: i64,
    pub headers: Vec<PeriodHeader>,
    /// Empty for months and quarters.
    pub month_headers: Vec<MonthHeader>,
    /// One bar per visible top-level task with both dates. Sub-task bars are positioned by
    /// the renderer against `range`.
    pub bars: Vec<TaskBar>,
    pub stages: Vec<StageGroup<'a>>,
    pub summaries: Vec<StageSummary>,
    /// Position of the "today" marker, when today falls inside the range.
    pub today_fraction: Option<f64>,
}

impl TimelineLayout<'_> {
    pub fn bar_for(&self, task_id: &str) -> Option<&TaskBar> {
        self.bars.iter().find(|b| b.task_id == task_id)
    }

    pub fn summary_for(&self, stage: &str) -> Option<&StageSummary> {
        self.summaries.iter().find(|s| s.stage == stage)
    }
}

/// Lay out `tasks` for `view`.
pub fn build_layout<'a>(tasks: &'a [Task], view: &ViewConfig) -> TimelineLayout<'a> {
    let visible = filter_tasks(tasks, view.task_filter, view.current_user.as_deref());

    let range = derive_range(visible.iter().copied(), view.time_unit, view.today, view.week_start);
    let headers = build_headers(&range, view.time_unit);
    let month_headers = if view.time_unit.has_month_row() {
        build_month_headers(&range)
    } else {
        Vec::new()
    };

    let bars: Vec<TaskBar> = visible
        .iter()
        .filter(|t| t.is_top_level())
        .filter_map(|t| position_task(t, &range))
        .collect();

    let stages = group_by_stage(visible.iter().copied());
    let summaries = stages
        .iter()
        .map(|g| stage_summary(visible.iter().copied(), g))
        .collect();

    let today_fraction = range
        .contains(view.today)
        .then(|| range.fraction(range.offset_of(view.today)));

    tracing::debug!(
        unit = ?view.time_unit,
        filter = ?view.task_filter,
        start = %range.start,
        end = %range.end,
        tasks = tasks.len(),
        visible = visible.len(),
        bars = bars.len(),
        stages = stages.len(),
        "built timeline layout"
    );

    TimelineLayout {
        time_unit: view.time_unit,
        range,
        total_days: range.total_days(),
        headers,
        month_headers,
        bars,
        stages,
        summaries,
        today_fraction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::StageStatus;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn plan() -> Vec<Task> {
        vec![
            Task::new("site", "Groundworks")
                .with_dates(d(2024, 1, 10), d(2024, 1, 12))
                .completed(true),
            Task::new("survey", "Groundworks")
                .with_parent("site")
                .with_dates(d(2024, 1, 10), d(2024, 1, 10)),
            Task::new("frame", "Structure")
                .with_dates(d(2024, 1, 15), d(2024, 1, 20))
                .with_assignee("u1"),
            Task::new("permit", "Structure"),
        ]
    }

    #[test]
    fn layout_combines_all_parts() {
        let tasks = plan();
        let view = ViewConfig::new(d(2024, 1, 11)).with_time_unit(TimeUnit::Days);
        let layout = build_layout(&tasks, &view);

        assert_eq!(layout.range, DateRange::new(d(2024, 1, 10), d(2024, 1, 27)));
        assert_eq!(layout.total_days, 18);
        assert_eq!(layout.headers.len(), 18);
        assert_eq!(layout.month_headers.len(), 1);
        assert_eq!(layout.bars.len(), 2);
        assert!(layout.bar_for("permit").is_none());
        assert_eq!(layout.bar_for("frame").map(|b| b.start_offset_days), Some(5));

        let stages: Vec<_> = layout.stages.iter().map(|g| g.stage.as_str()).collect();
        assert_eq!(stages, ["Groundworks", "Structure"]);
        assert_eq!(layout.stages[1].tasks.len(), 2);

        let ground = layout.summary_for("Groundworks").unwrap();
        assert_eq!((ground.completed, ground.total), (1, 2));
        assert_eq!(ground.status, StageStatus::InProgress);

        let today = layout.today_fraction.unwrap();
        assert!((today - 1.0 / 18.0).abs() < 1e-9);
    }

    #[test]
    fn sub_tasks_get_no_bar() {
        let tasks = plan();
        let layout = build_layout(&tasks, &ViewConfig::new(d(2024, 1, 11)));
        assert!(layout.bar_for("site").is_some());
        assert!(layout.bar_for("survey").is_none());
        // Still inside the range, so a renderer can place it under its parent.
        let survey = position_task(&tasks[1], &layout.range).unwrap();
        assert!(survey.left_fraction >= 0.0 && survey.right_fraction() <= 1.0);
    }

    #[test]
    fn filtered_out_stages_disappear() {
        let tasks = plan();
        let view = ViewConfig::new(d(2024, 1, 11)).with_filter(TaskFilter::Complete);
        let layout = build_layout(&tasks, &view);
        let stages: Vec<_> = layout.stages.iter().map(|g| g.stage.as_str()).collect();
        assert_eq!(stages, ["Groundworks"]);
    }

    #[test]
    fn mine_filter_uses_current_user() {
        let tasks = plan();
        let view = ViewConfig::new(d(2024, 1, 11))
            .with_filter(TaskFilter::Mine)
            .with_current_user(Some("u1".into()));
        let layout = build_layout(&tasks, &view);
        assert_eq!(layout.bars.len(), 1);
        assert_eq!(layout.stages.len(), 1);
        assert_eq!(layout.stages[0].stage, "Structure");
    }

    #[test]
    fn empty_plan_uses_current_month() {
        let view = ViewConfig::new(d(2024, 3, 15)).with_time_unit(TimeUnit::Months);
        let layout = build_layout(&[], &view);
        assert_eq!(layout.range, DateRange::new(d(2024, 3, 1), d(2024, 3, 31)));
        assert_eq!(layout.headers.len(), 1);
        assert!(layout.month_headers.is_empty());
        assert!(layout.stages.is_empty());
        assert!(layout.bars.is_empty());
    }

    #[test]
    fn today_outside_range_has_no_marker() {
        let tasks = plan();
        let view = ViewConfig::new(d(2025, 6, 1)).with_time_unit(TimeUnit::Days);
        assert!(build_layout(&tasks, &view).today_fraction.is_none());
    }
}
