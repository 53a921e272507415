//! Loading task files from disk and laying them out.

use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use project_timeline::cmd::{resolve_view, ViewArgs};
use project_timeline::db::Database;
use project_timeline::error::TimelineError;
use project_timeline::fields::{Status, TaskFilter, TimeUnit, WeekStart};
use project_timeline::timeline::build_layout;

const PLAN: &str = r#"{
  "tasks": [
    {"id": "t1", "title": "Strip out", "stage": "Demolition", "status": "Complete",
     "completed": true, "start_date": "2024-04-01", "end_date": "2024-04-05"},
    {"id": "t2", "title": "Piling", "stage": "Groundworks", "status": "Needs Action",
     "assigned_to": "u1", "start_date": "2024-04-08", "end_date": "2024-04-19"},
    {"id": "t2a", "title": "Pile tests", "stage": "Groundworks", "parent_id": "t2",
     "start_date": "2024-04-15", "end_date": "2024-04-16"},
    {"id": "t3", "title": "Planning sign-off", "stage": "Consents"}
  ],
  "members": [{"id": "u1", "name": "Priya"}],
  "settings": {"week_start": "monday", "time_unit": "days", "current_user": "u1"}
}"#;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn loads_a_full_task_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("timeline.json");
    fs::write(&path, PLAN).unwrap();

    let db = Database::load(&path).unwrap();
    assert_eq!(db.tasks.len(), 4);
    assert_eq!(db.tasks[1].status, Status::NeedsAction);
    assert_eq!(db.tasks[3].status, Status::Required);
    assert_eq!(db.member_name("u1"), Some("Priya"));
    assert_eq!(db.settings.week_start, WeekStart::Monday);
    assert_eq!(db.settings.time_unit, TimeUnit::Days);
    assert_eq!(db.settings.task_filter, TaskFilter::All);
}

#[test]
fn settings_drive_the_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("timeline.json");
    fs::write(&path, PLAN).unwrap();
    let db = Database::load(&path).unwrap();

    let args = ViewArgs { filter: Some(TaskFilter::Mine), ..ViewArgs::default() };
    let view = resolve_view(&args, &db.settings, d(2024, 4, 10)).unwrap();
    let layout = build_layout(&db.tasks, &view);

    assert_eq!(layout.range.start, d(2024, 4, 8));
    assert_eq!(layout.range.end, d(2024, 4, 26));
    assert_eq!(layout.bars.len(), 1);
    assert_eq!(layout.stages.len(), 1);
    assert_eq!(layout.stages[0].stage, "Groundworks");
}

#[test]
fn missing_file_is_an_empty_plan() {
    let dir = TempDir::new().unwrap();
    let db = Database::load(&dir.path().join("absent.json")).unwrap();
    assert!(db.tasks.is_empty());
    assert!(db.members.is_empty());
}

#[test]
fn minimal_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("timeline.json");
    fs::write(&path, r#"{"tasks": [{"id": "a", "stage": "Fitout"}]}"#).unwrap();
    let db = Database::load(&path).unwrap();
    assert_eq!(db.settings.time_unit, TimeUnit::Weeks);
    assert_eq!(db.settings.week_start, WeekStart::Sunday);
    assert!(db.tasks[0].start_date.is_none());
    assert!(!db.tasks[0].completed);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("timeline.json");
    fs::write(&path, "{ not json").unwrap();
    match Database::load(&path) {
        Err(TimelineError::Parse { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}
