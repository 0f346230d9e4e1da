//! Task Mutations

use serde::Serialize;
use serde_json::Value;

use super::{confirm_ok, documents, take_payload, ApiError, GraphqlClient};
use crate::models::{TaskInput, TaskStatus};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTaskVars<'a> {
    project_id: &'a str,
    #[serde(flatten)]
    input: &'a TaskInput,
}

#[derive(Serialize)]
struct UpdateTaskVars<'a> {
    id: &'a str,
    #[serde(flatten)]
    input: &'a TaskInput,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTaskStatusVars<'a> {
    task_id: &'a str,
    status: TaskStatus,
}

#[derive(Serialize)]
struct IdVars<'a> {
    id: &'a str,
}

// ========================
// Mutations
// ========================

pub async fn create_task(client: &GraphqlClient, project_id: &str, input: &TaskInput) -> Result<Value, ApiError> {
    let data = client.execute(documents::CREATE_TASK, CreateTaskVars { project_id, input }).await?;
    take_payload(data, "createTask", "task")
}

pub async fn update_task(client: &GraphqlClient, id: &str, input: &TaskInput) -> Result<Value, ApiError> {
    let data = client.execute(documents::UPDATE_TASK, UpdateTaskVars { id, input }).await?;
    take_payload(data, "updateTask", "task")
}

pub async fn update_task_status(client: &GraphqlClient, task_id: &str, status: TaskStatus) -> Result<Value, ApiError> {
    let data = client
        .execute(documents::UPDATE_TASK_STATUS, UpdateTaskStatusVars { task_id, status })
        .await?;
    take_payload(data, "updateTaskStatus", "task")
}

pub async fn delete_task(client: &GraphqlClient, id: &str) -> Result<(), ApiError> {
    let data = client.execute(documents::DELETE_TASK, IdVars { id }).await?;
    confirm_ok(&data, "deleteTask")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_vars() {
        let input = TaskInput {
            title: "Write spec".to_string(),
            description: String::new(),
            assignee_email: Some("dev@acme.io".to_string()),
            due_date: chrono::NaiveDate::from_ymd_opt(2024, 7, 1),
        };
        let vars = serde_json::to_value(CreateTaskVars { project_id: "p1", input: &input }).unwrap();
        assert_eq!(
            vars,
            json!({
                "projectId": "p1",
                "title": "Write spec",
                "description": "",
                "assigneeEmail": "dev@acme.io",
                "dueDate": "2024-07-01"
            })
        );
    }

    #[test]
    fn test_status_vars_use_wire_names() {
        let vars = serde_json::to_value(UpdateTaskStatusVars { task_id: "t1", status: TaskStatus::InProgress }).unwrap();
        assert_eq!(vars, json!({ "taskId": "t1", "status": "IN_PROGRESS" }));
    }
}
