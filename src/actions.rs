//! User Actions
//!
//! Queries and mutations as invoked by the screens. A mutation only touches
//! the cache after the server confirmed it; on failure the error message is
//! returned to the calling form and nothing local changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::api::{self, ApiError};
use crate::context::{AppContext, Route};
use crate::effects::MutationKind;
use crate::models::{NewOrganization, Organization, ProjectInput, TaskInput, TaskStatus};
use crate::query::QueryKey;
use crate::store::{store_apply_patch, store_begin_query, store_finish_query};

/// Issue `key` against the server and write the result into the store
pub fn run_query(ctx: AppContext, key: QueryKey) {
    let generation = store_begin_query(&ctx.store, &key);
    let client = ctx.client();
    spawn_local(async move {
        let result = api::fetch_query(&client, &key).await;
        store_finish_query(&ctx.store, &key, generation, result);
    });
}

/// Patch the cache for a confirmed mutation, then re-run its refetch set
fn commit(ctx: AppContext, kind: MutationKind, returned: Option<&Value>) -> Result<(), ApiError> {
    store_apply_patch(&ctx.store, &kind.patch(), returned)?;
    let org_slug = ctx.org.current_slug.get_untracked();
    for key in kind.refetch_queries(&org_slug) {
        run_query(ctx, key);
    }
    Ok(())
}

fn report(action: &str, err: ApiError) -> String {
    log::warn!("{} failed: {}", action, err);
    err.to_string()
}

// ========================
// Organizations
// ========================

/// Create an organization and select it.
///
/// Once the server confirmed, the call succeeds even if the new slug cannot
/// be read back; a retry would create a second organization.
pub async fn create_organization(ctx: AppContext, input: NewOrganization) -> Result<(), String> {
    let client = ctx.client();
    let returned = api::create_organization(&client, &input)
        .await
        .map_err(|e| report("createOrganization", e))?;
    commit(ctx, MutationKind::CreateOrganization, Some(&returned)).map_err(|e| report("createOrganization", e))?;
    match created_slug(&returned) {
        Some(slug) => ctx.org.set_slug(slug),
        None => log::warn!("createOrganization returned no usable slug, selection unchanged"),
    }
    Ok(())
}

fn created_slug(returned: &Value) -> Option<String> {
    serde_json::from_value::<Organization>(returned.clone())
        .ok()
        .map(|org| org.slug)
        .filter(|slug| !slug.is_empty())
}

// ========================
// Projects
// ========================

pub async fn create_project(ctx: AppContext, input: ProjectInput) -> Result<(), String> {
    let client = ctx.client();
    let org_slug = ctx.org.current_slug.get_untracked();
    let returned = api::create_project(&client, &org_slug, &input)
        .await
        .map_err(|e| report("createProject", e))?;
    commit(ctx, MutationKind::CreateProject, Some(&returned)).map_err(|e| report("createProject", e))
}

pub async fn update_project(ctx: AppContext, project_id: String, input: ProjectInput) -> Result<(), String> {
    let client = ctx.client();
    let returned = api::update_project(&client, &project_id, &input)
        .await
        .map_err(|e| report("updateProject", e))?;
    commit(ctx, MutationKind::UpdateProject { project_id }, Some(&returned)).map_err(|e| report("updateProject", e))
}

/// Delete a project; leaves its detail screen if that is where we are
pub async fn delete_project(ctx: AppContext, project_id: String) -> Result<(), String> {
    let client = ctx.client();
    api::delete_project(&client, &project_id)
        .await
        .map_err(|e| report("deleteProject", e))?;
    if ctx.route.get_untracked() == Route::Project(project_id.clone()) {
        ctx.navigate(Route::Dashboard);
    }
    commit(ctx, MutationKind::DeleteProject { project_id }, None).map_err(|e| report("deleteProject", e))
}

// ========================
// Tasks
// ========================

pub async fn create_task(ctx: AppContext, project_id: String, input: TaskInput) -> Result<(), String> {
    let client = ctx.client();
    let returned = api::create_task(&client, &project_id, &input)
        .await
        .map_err(|e| report("createTask", e))?;
    commit(ctx, MutationKind::CreateTask { project_id }, Some(&returned)).map_err(|e| report("createTask", e))
}

pub async fn update_task(ctx: AppContext, project_id: String, task_id: String, input: TaskInput) -> Result<(), String> {
    let client = ctx.client();
    let returned = api::update_task(&client, &task_id, &input)
        .await
        .map_err(|e| report("updateTask", e))?;
    commit(ctx, MutationKind::UpdateTask { project_id }, Some(&returned)).map_err(|e| report("updateTask", e))
}

pub async fn update_task_status(ctx: AppContext, task_id: String, status: TaskStatus) -> Result<(), String> {
    let client = ctx.client();
    let returned = api::update_task_status(&client, &task_id, status)
        .await
        .map_err(|e| report("updateTaskStatus", e))?;
    commit(ctx, MutationKind::UpdateTaskStatus, Some(&returned)).map_err(|e| report("updateTaskStatus", e))
}

pub async fn delete_task(ctx: AppContext, task_id: String) -> Result<(), String> {
    let client = ctx.client();
    api::delete_task(&client, &task_id)
        .await
        .map_err(|e| report("deleteTask", e))?;
    commit(ctx, MutationKind::DeleteTask { task_id }, None).map_err(|e| report("deleteTask", e))
}

// ========================
// Comments
// ========================

/// Post a comment as the current viewer and append it to the cached task
pub async fn add_comment(ctx: AppContext, task_id: String, content: String) -> Result<(), String> {
    let client = ctx.client();
    let author = ctx.viewer().email;
    let returned = api::add_comment(&client, &task_id, &content, &author)
        .await
        .map_err(|e| report("addComment", e))?;
    commit(ctx, MutationKind::AddComment { task_id }, Some(&returned)).map_err(|e| report("addComment", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_slug() {
        let returned = json!({ "__typename": "OrganizationType", "id": "7", "name": "Acme", "slug": "acme" });
        assert_eq!(created_slug(&returned).as_deref(), Some("acme"));
    }

    #[test]
    fn test_created_slug_tolerates_partial_payload() {
        assert_eq!(created_slug(&json!({ "__typename": "OrganizationType", "id": "7" })), None);
        assert_eq!(
            created_slug(&json!({ "__typename": "OrganizationType", "id": "7", "name": "Acme", "slug": "" })),
            None
        );
    }
}
