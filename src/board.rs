//! Board Utilities
//!
//! Splitting a project's tasks into kanban columns.

use crate::models::{Task, TaskStatus};

/// One kanban column
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    pub status: TaskStatus,
    pub tasks: Vec<Task>,
}

/// Group tasks into the three status columns (TODO, IN_PROGRESS, DONE).
///
/// Every column is present even when empty; tasks keep server order.
pub fn group_by_status(tasks: &[Task]) -> Vec<BoardColumn> {
    TaskStatus::ALL
        .into_iter()
        .map(|status| BoardColumn {
            status,
            tasks: tasks.iter().filter(|t| t.status == status).cloned().collect(),
        })
        .collect()
}

impl BoardColumn {
    pub fn task_ids(&self) -> Vec<String> {
        self.tasks.iter().map(|t| t.id.clone()).collect()
    }
}
