//! Stage swimlanes and their completion roll-ups.
//!
//! Two separate queries live here. `top_level_tasks` / `group_by_stage` decide which rows
//! the timeline shows; `stage_members` / `stage_summary` decide what a stage's progress
//! counts, which also includes the sub-tasks of those rows.

use std::collections::HashSet;

use serde::Serialize;

use crate::fields::StageStatus;
use crate::task::Task;

/// Top-level tasks of one stage, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageGroup<'a> {
    pub stage: String,
    pub tasks: Vec<&'a Task>,
}

/// "N of M complete" for a stage, counting parents and their sub-tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageSummary {
    pub stage: String,
    pub completed: usize,
    pub total: usize,
    pub status: StageStatus,
}

/// Tasks that are rows of their own (no parent), in input order.
pub fn top_level_tasks<'a, I>(tasks: I) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks.into_iter().filter(|t| t.is_top_level()).collect()
}

/// Sub-tasks of `parent_id`, in input order.
pub fn subtasks_of<'a, I>(tasks: I, parent_id: &str) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .filter(|t| t.parent_id.as_deref() == Some(parent_id))
        .collect()
}

/// Group top-level tasks by stage in first-seen stage order.
///
/// Stages with no top-level task produce no group.
pub fn group_by_stage<'a, I>(tasks: I) -> Vec<StageGroup<'a>>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut groups: Vec<StageGroup<'a>> = Vec::new();
    for task in top_level_tasks(tasks) {
        match groups.iter_mut().find(|g| g.stage == task.stage) {
            Some(group) => group.tasks.push(task),
            None => groups.push(StageGroup {
                stage: task.stage.clone(),
                tasks: vec![task],
            }),
        }
    }
    groups
}

/// Every task counted for `group`: its rows plus any task whose parent is one of them.
pub fn stage_members<'a, I>(all_tasks: I, group: &StageGroup<'_>) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let parents: HashSet<&str> = group.tasks.iter().map(|t| t.id.as_str()).collect();
    all_tasks
        .into_iter()
        .filter(|t| {
            parents.contains(t.id.as_str())
                || t.parent_id.as_deref().is_some_and(|p| parents.contains(p))
        })
        .collect()
}

/// Roll completion up over a set of tasks.
pub fn stage_status(tasks: &[&Task]) -> StageStatus {
    let done = tasks.iter().filter(|t| t.completed).count();
    if !tasks.is_empty() && done == tasks.len() {
        StageStatus::Complete
    } else if done > 0 {
        StageStatus::InProgress
    } else {
        StageStatus::Required
    }
}

pub fn stage_summary<'a, I>(all_tasks: I, group: &StageGroup<'_>) -> StageSummary
where
    I: IntoIterator<Item = &'a Task>,
{
    let members = stage_members(all_tasks, group);
    StageSummary {
        stage: group.stage.clone(),
        completed: members.iter().filter(|t| t.completed).count(),
        total: members.len(),
        status: stage_status(&members),
    }
}
