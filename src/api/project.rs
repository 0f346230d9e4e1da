//! Project Mutations

use serde::Serialize;
use serde_json::Value;

use super::{confirm_ok, documents, take_payload, ApiError, GraphqlClient};
use crate::models::ProjectInput;

// ========================
// Argument Structs
// ========================

/// New projects always start ACTIVE on the server, so no status is sent
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateProjectVars<'a> {
    name: &'a str,
    description: &'a str,
    organization_slug: &'a str,
    due_date: Option<chrono::NaiveDate>,
}

#[derive(Serialize)]
struct UpdateProjectVars<'a> {
    id: &'a str,
    #[serde(flatten)]
    input: &'a ProjectInput,
}

#[derive(Serialize)]
struct IdVars<'a> {
    id: &'a str,
}

// ========================
// Mutations
// ========================

pub async fn create_project(client: &GraphqlClient, org_slug: &str, input: &ProjectInput) -> Result<Value, ApiError> {
    let vars = CreateProjectVars {
        name: &input.name,
        description: &input.description,
        organization_slug: org_slug,
        due_date: input.due_date,
    };
    let data = client.execute(documents::CREATE_PROJECT, vars).await?;
    take_payload(data, "createProject", "project")
}

pub async fn update_project(client: &GraphqlClient, id: &str, input: &ProjectInput) -> Result<Value, ApiError> {
    let data = client.execute(documents::UPDATE_PROJECT, UpdateProjectVars { id, input }).await?;
    take_payload(data, "updateProject", "project")
}

pub async fn delete_project(client: &GraphqlClient, id: &str) -> Result<(), ApiError> {
    let data = client.execute(documents::DELETE_PROJECT, IdVars { id }).await?;
    confirm_ok(&data, "deleteProject")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectStatus;
    use serde_json::json;

    #[test]
    fn test_update_vars_flatten_input() {
        let input = ProjectInput {
            name: "Launch".to_string(),
            description: "v1".to_string(),
            status: ProjectStatus::OnHold,
            due_date: None,
        };
        let vars = serde_json::to_value(UpdateProjectVars { id: "3", input: &input }).unwrap();
        assert_eq!(
            vars,
            json!({ "id": "3", "name": "Launch", "description": "v1", "status": "ON_HOLD", "dueDate": null })
        );
    }
}
