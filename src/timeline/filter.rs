//! Task filtering ahead of layout.

use crate::fields::TaskFilter;
use crate::task::Task;

/// Select the tasks a view shows, preserving input order.
///
/// `Mine` without a current user shows everything.
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    filter: TaskFilter,
    current_user: Option<&str>,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| match filter {
            TaskFilter::All => true,
            TaskFilter::Incomplete => !t.completed,
            TaskFilter::Complete => t.completed,
            TaskFilter::Mine => match current_user {
                Some(user) => t.assigned_to.as_deref() == Some(user),
                None => true,
            },
        })
        .collect()
}
