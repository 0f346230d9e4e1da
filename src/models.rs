//! Frontend Models
//!
//! Data structures matching the GraphQL schema. Values are snapshots read
//! back out of the entity cache.

use chrono::NaiveDate;
use entity_cache::EntityKey;
use serde::{Deserialize, Serialize};

/// GraphQL typenames, the first half of every cache identity
pub mod typename {
    pub const PROJECT: &str = "ProjectType";
    pub const TASK: &str = "TaskType";
}

pub fn project_key(id: &str) -> EntityKey {
    EntityKey::new(typename::PROJECT, id)
}

pub fn task_key(id: &str) -> EntityKey {
    EntityKey::new(typename::TASK, id)
}

/// Organization data structure (top-level tenant)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [ProjectStatus::Active, ProjectStatus::Completed, ProjectStatus::OnHold];

    pub fn as_wire(self) -> &'static str {
        match self {
            ProjectStatus::Active => "ACTIVE",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::OnHold => "ON_HOLD",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_wire() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
        }
    }

    /// CSS modifier for the status badge
    pub fn badge_class(self) -> &'static str {
        match self {
            ProjectStatus::Active => "badge badge-active",
            ProjectStatus::Completed => "badge badge-completed",
            ProjectStatus::OnHold => "badge badge-on-hold",
        }
    }
}

/// Project data structure
///
/// `task_count` and `completed_task_count` are computed by the server and
/// only selected by the dashboard query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub due_date: Option<NaiveDate>,
    pub task_count: Option<u32>,
    pub completed_task_count: Option<u32>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    /// `round(completed / total * 100)`, zero for a project without tasks
    pub fn progress_percent(&self) -> u32 {
        progress_percent(self.completed_task_count.unwrap_or(0), self.task_count.unwrap_or(0))
    }
}

pub fn progress_percent(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (f64::from(completed) / f64::from(total) * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Board column order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_wire(self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_wire() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

/// Task data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub assignee_email: Option<String>,
    pub due_date: Option<NaiveDate>,
    /// Insertion order, oldest first
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Task {
    /// Assignee if one is set (the server stores "" for none)
    pub fn assignee(&self) -> Option<&str> {
        self.assignee_email.as_deref().filter(|email| !email.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author_email: String,
    /// ISO-8601 timestamp as sent by the server
    pub created_at: String,
}

// ========================
// Mutation Inputs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrganization {
    pub name: String,
    pub email: Option<String>,
}

/// Project fields edited by the project form. `due_date: None` is sent as an
/// explicit null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub due_date: Option<NaiveDate>,
}

/// Task fields edited by the task form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub assignee_email: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(3, 0), 0);
        assert_eq!(progress_percent(0, 4), 0);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(1, 8), 13); // 12.5 rounds up
        assert_eq!(progress_percent(5, 5), 100);
    }

    #[test]
    fn test_project_progress_without_counters() {
        let project: Project = serde_json::from_value(json!({
            "__typename": "ProjectType",
            "id": "1",
            "name": "Launch",
            "description": null,
            "status": "ACTIVE",
            "dueDate": null
        }))
        .unwrap();
        assert_eq!(project.progress_percent(), 0);
        assert!(project.tasks.is_empty());
    }

    #[test]
    fn test_task_deserialize() {
        let task: Task = serde_json::from_value(json!({
            "__typename": "TaskType",
            "id": "7",
            "title": "Write spec",
            "description": "",
            "status": "IN_PROGRESS",
            "assigneeEmail": "",
            "dueDate": "2024-06-30",
            "comments": [{
                "__typename": "TaskCommentType",
                "id": "c1",
                "content": "hi",
                "authorEmail": "a@b.c",
                "createdAt": "2024-06-01T09:30:00+00:00"
            }]
        }))
        .unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 6, 30));
        assert_eq!(task.assignee(), None);
        assert_eq!(task.comments.len(), 1);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_value::<TaskStatus>(json!("BLOCKED"));
        assert!(result.is_err());
        assert_eq!(TaskStatus::from_wire("BLOCKED"), None);
        assert_eq!(ProjectStatus::from_wire("ON_HOLD"), Some(ProjectStatus::OnHold));
    }

    #[test]
    fn test_absent_due_date_serializes_as_null() {
        let input = ProjectInput {
            name: "Launch".to_string(),
            description: String::new(),
            status: ProjectStatus::Active,
            due_date: None,
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["dueDate"], serde_json::Value::Null);
        assert!(value.as_object().unwrap().contains_key("dueDate"));
        assert_eq!(value["status"], "ACTIVE");
    }
}
