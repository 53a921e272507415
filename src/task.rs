//! Task data structure and related functionality.
//!
//! This module defines the `Task` struct laid out on the timeline and the `Member`
//! records that assignees resolve to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fields::Status;

/// A scheduled piece of work on the project plan.
///
/// Tasks are grouped into stages (swimlanes). A task with a `parent_id` is a sub-task:
/// it is not a row of its own but counts towards its parent's stage completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub stage: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Task {
    /// Create an undated, incomplete top-level task.
    pub fn new(id: impl Into<String>, stage: impl Into<String>) -> Self {
        Task {
            id: id.into(),
            title: String::new(),
            stage: stage.into(),
            parent_id: None,
            status: Status::default(),
            completed: false,
            assigned_to: None,
            start_date: None,
            end_date: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_assignee(mut self, user_id: impl Into<String>) -> Self {
        self.assigned_to = Some(user_id.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Both dates, when the task is fully scheduled.
    pub fn dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start_date?, self.end_date?))
    }

    /// True for rows of the timeline (tasks without a parent).
    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Label shown for the task: its title, or its id when untitled.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

/// A project member that tasks can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
}
