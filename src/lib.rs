//! # project_timeline
//!
//! Gantt timeline layout for construction project plans.
//!
//! Given a list of tasks with optional start and end dates, the [`timeline`] engine
//! computes a shared time axis at day, week, month or quarter granularity, positions
//! each task as a proportionally sized bar against that axis, and groups rows into stage
//! swimlanes with completion roll-ups. The engine is pure: it never reads the clock, and
//! it returns dimensionless fractions for any renderer to scale.
//!
//! ```
//! use chrono::NaiveDate;
//! use project_timeline::fields::TimeUnit;
//! use project_timeline::task::Task;
//! use project_timeline::timeline::{build_layout, ViewConfig};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//! let tasks = vec![Task::new("slab", "Groundworks").with_dates(day(10), day(12))];
//! let view = ViewConfig::new(day(11)).with_time_unit(TimeUnit::Days);
//!
//! let layout = build_layout(&tasks, &view);
//! assert_eq!(layout.range.end, day(19));
//! assert_eq!(layout.bars[0].duration_days, 3);
//! ```
//!
//! The `ptl` binary reads a JSON task file and prints layouts as tables or JSON.

pub mod cli;
pub mod cmd;
pub mod colors;
pub mod db;
pub mod error;
pub mod fields;
pub mod logging;
pub mod task;
pub mod timeline;
