//! Mutation Effects
//!
//! What each successful mutation does to the local cache and which queries it
//! re-runs afterwards. Every mutation goes through the same two steps: a pure
//! patch over the entity cache, then a fixed refetch set.

use entity_cache::{CacheResult, EntityCache, EntityKey};
use serde_json::Value;

use crate::models::{project_key, task_key};
use crate::query::QueryKey;

#[derive(Debug, Clone, PartialEq)]
pub enum MutationKind {
    CreateOrganization,
    CreateProject,
    UpdateProject { project_id: String },
    DeleteProject { project_id: String },
    CreateTask { project_id: String },
    UpdateTask { project_id: String },
    UpdateTaskStatus,
    DeleteTask { task_id: String },
    AddComment { task_id: String },
}

/// Local cache change applied after a mutation succeeded
#[derive(Debug, Clone, PartialEq)]
pub enum CachePatch {
    /// Normalize the returned entity, merging into any cached copy
    Merge,
    /// Write the returned entity and append it to `parent.field`
    Append { parent: EntityKey, field: &'static str },
    /// Remove the entity, then collect what became unreachable
    Evict(EntityKey),
}

impl MutationKind {
    pub fn patch(&self) -> CachePatch {
        match self {
            MutationKind::DeleteProject { project_id } => CachePatch::Evict(project_key(project_id)),
            MutationKind::DeleteTask { task_id } => CachePatch::Evict(task_key(task_id)),
            MutationKind::AddComment { task_id } => CachePatch::Append {
                parent: task_key(task_id),
                field: "comments",
            },
            _ => CachePatch::Merge,
        }
    }

    /// Queries re-run once the patch is applied. `org_slug` is the
    /// organization selected when the mutation completed.
    pub fn refetch_queries(&self, org_slug: &str) -> Vec<QueryKey> {
        let projects = || QueryKey::organization_projects(org_slug);
        match self {
            MutationKind::CreateOrganization => vec![QueryKey::AllOrganizations],
            MutationKind::CreateProject => vec![projects()],
            MutationKind::UpdateProject { project_id } => vec![projects(), QueryKey::project(project_id.as_str())],
            MutationKind::CreateTask { project_id } => vec![QueryKey::project(project_id.as_str()), projects()],
            MutationKind::UpdateTask { project_id } => vec![QueryKey::project(project_id.as_str())],
            // Status moves are merged locally; list counters come from the server
            MutationKind::UpdateTaskStatus => vec![projects()],
            MutationKind::DeleteProject { .. } | MutationKind::DeleteTask { .. } | MutationKind::AddComment { .. } => {
                Vec::new()
            }
        }
    }
}

/// Apply `patch` for a mutation that returned `returned` (`None` for deletes).
pub fn apply_patch(cache: &mut EntityCache, patch: &CachePatch, returned: Option<&Value>) -> CacheResult<()> {
    match (patch, returned) {
        (CachePatch::Merge, Some(entity)) => {
            cache.write_entity(entity)?;
        }
        (CachePatch::Append { parent, field }, Some(entity)) => {
            if cache.append_entity(parent, field, entity)?.is_none() {
                log::debug!("{} no longer cached, comment not appended", parent);
            }
        }
        (CachePatch::Evict(key), _) => {
            cache.evict(key);
            let collected = cache.gc();
            log::debug!("evicted {} and {} unreachable entities", key, collected.len());
        }
        (_, None) => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;
    use serde_json::json;

    fn cache_with_project() -> EntityCache {
        let mut cache = EntityCache::new();
        cache.write_query(
            &QueryKey::project("p1").store_field_name(),
            &json!({
                "__typename": "ProjectType",
                "id": "p1",
                "name": "Launch",
                "description": "",
                "status": "ACTIVE",
                "dueDate": null,
                "tasks": [{
                    "__typename": "TaskType",
                    "id": "t1",
                    "title": "Write spec",
                    "description": "",
                    "status": "TODO",
                    "assigneeEmail": "",
                    "dueDate": null,
                    "comments": []
                }]
            }),
        );
        cache
    }

    fn read_task(cache: &EntityCache, id: &str) -> Option<Task> {
        cache
            .read_entity(&task_key(id))
            .map(|value| serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_add_comment_patch() {
        let mut cache = cache_with_project();
        let kind = MutationKind::AddComment { task_id: "t1".into() };
        let comment = json!({
            "__typename": "TaskCommentType",
            "id": "c1",
            "content": "looks good",
            "authorEmail": "user@techcorp.com",
            "createdAt": "2024-05-01T10:00:00+00:00"
        });

        apply_patch(&mut cache, &kind.patch(), Some(&comment)).unwrap();

        let task = read_task(&cache, "t1").unwrap();
        assert_eq!(task.comments.len(), 1);
        assert_eq!(task.comments[0].content, "looks good");
        assert!(kind.refetch_queries("acme").is_empty());
    }

    #[test]
    fn test_add_comment_to_missing_task_writes_nothing() {
        let mut cache = cache_with_project();
        let before = cache.len();
        let kind = MutationKind::AddComment { task_id: "t9".into() };
        let comment = json!({ "__typename": "TaskCommentType", "id": "c1", "content": "late" });

        apply_patch(&mut cache, &kind.patch(), Some(&comment)).unwrap();

        assert_eq!(cache.len(), before);
        assert!(read_task(&cache, "t9").is_none());
    }

    #[test]
    fn test_status_merge_moves_task() {
        let mut cache = cache_with_project();
        let returned = json!({ "__typename": "TaskType", "id": "t1", "status": "DONE" });

        apply_patch(&mut cache, &MutationKind::UpdateTaskStatus.patch(), Some(&returned)).unwrap();

        let task = read_task(&cache, "t1").unwrap();
        assert_eq!(task.status, crate::models::TaskStatus::Done);
        assert_eq!(task.title, "Write spec");
    }

    #[test]
    fn test_delete_task_evicts() {
        let mut cache = cache_with_project();
        let kind = MutationKind::DeleteTask { task_id: "t1".into() };

        apply_patch(&mut cache, &kind.patch(), None).unwrap();

        assert!(read_task(&cache, "t1").is_none());
        let project = cache.read_query(&QueryKey::project("p1").store_field_name()).unwrap();
        assert_eq!(project["tasks"], json!([]));
    }

    #[test]
    fn test_refetch_sets_follow_current_org() {
        let create_task = MutationKind::CreateTask { project_id: "p1".into() };
        assert_eq!(
            create_task.refetch_queries("acme"),
            vec![QueryKey::project("p1"), QueryKey::organization_projects("acme")]
        );
        assert_eq!(
            MutationKind::CreateProject.refetch_queries("acme"),
            vec![QueryKey::organization_projects("acme")]
        );
        assert_eq!(
            MutationKind::CreateOrganization.refetch_queries("acme"),
            vec![QueryKey::AllOrganizations]
        );
        assert!(MutationKind::DeleteProject { project_id: "p1".into() }
            .refetch_queries("acme")
            .is_empty());
    }
}
