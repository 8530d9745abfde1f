//! Route path literals and generation helpers.
//!
//! Both the route table and the rendered templates go through these
//! helpers, so links and routes cannot drift apart.

use crate::task::domain::TaskId;

/// Path of the task collection (list and create).
pub const TASKS_PATH: &str = "/tasks";

/// Path of the new-task form.
pub const NEW_TASK_PATH: &str = "/tasks/new";

/// Returns the show path for a task.
#[must_use]
pub fn task_path(id: TaskId) -> String {
    format!("{TASKS_PATH}/{id}")
}

/// Returns the finish-action path for a task.
#[must_use]
pub fn finish_task_path(id: TaskId) -> String {
    format!("{TASKS_PATH}/{id}/finish")
}
