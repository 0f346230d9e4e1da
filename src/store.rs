//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The normalized
//! entity cache is the single source of entity data; views read typed
//! snapshots out of it.

use entity_cache::{CacheError, EntityCache, EntityKey};
use leptos::prelude::*;
use reactive_stores::Store;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::ApiError;
use crate::effects::{apply_patch, CachePatch};
use crate::query::{QueryKey, QueryStatus, QueryTracker};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Normalized entities and root query fields
    pub cache: EntityCache,
    /// Request generation and status per query
    pub queries: QueryTracker,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Typed view of a root query, `None` until it was first written
pub fn decode_query<T: DeserializeOwned>(cache: &EntityCache, key: &QueryKey) -> Option<Result<T, String>> {
    cache
        .read_query(&key.store_field_name())
        .map(|value| serde_json::from_value(value).map_err(|err| err.to_string()))
}

/// Typed view of one cached entity
pub fn decode_entity<T: DeserializeOwned>(cache: &EntityCache, key: &EntityKey) -> Option<T> {
    let value = cache.read_entity(key)?;
    match serde_json::from_value(value) {
        Ok(entity) => Some(entity),
        Err(err) => {
            log::warn!("cached {} does not decode: {}", key, err);
            None
        }
    }
}

/// What a screen may show for one query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryView<T> {
    Loading,
    /// The latest request failed; cached data for the key is hidden
    Failed(String),
    Ready(T),
}

/// Combine a query's status with its decoded cache contents
pub fn query_view<T>(status: QueryStatus, decoded: Option<Result<T, String>>) -> QueryView<T> {
    match (status, decoded) {
        (QueryStatus::Failed(msg), _) | (_, Some(Err(msg))) => QueryView::Failed(msg),
        (_, None) => QueryView::Loading,
        (_, Some(Ok(value))) => QueryView::Ready(value),
    }
}

// ========================
// Store Helper Functions
// ========================

/// Register a request for `key`, returning its generation
pub fn store_begin_query(store: &AppStore, key: &QueryKey) -> u64 {
    store.queries().write().begin(key)
}

/// Record a query response. Responses superseded by a newer request for the
/// same key are dropped.
pub fn store_finish_query(store: &AppStore, key: &QueryKey, generation: u64, result: Result<Value, ApiError>) {
    if !store.queries().read_untracked().is_current(key, generation) {
        log::debug!("dropping stale response for {}", key.store_field_name());
        return;
    }
    let status = match result {
        Ok(data) => {
            store.cache().write().write_query(&key.store_field_name(), &data);
            QueryStatus::Ready
        }
        Err(err) => {
            log::warn!("query {} failed: {}", key.store_field_name(), err);
            QueryStatus::Failed(err.to_string())
        }
    };
    store.queries().write().finish(key, generation, status);
}

/// Apply a mutation's cache patch
pub fn store_apply_patch(store: &AppStore, patch: &CachePatch, returned: Option<&Value>) -> Result<(), CacheError> {
    apply_patch(&mut store.cache().write(), patch, returned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{project_key, Project};
    use serde_json::json;

    #[test]
    fn test_decode_query_states() {
        let mut cache = EntityCache::new();
        let key = QueryKey::project("p1");
        assert!(decode_query::<Option<Project>>(&cache, &key).is_none());

        // Server answered, project does not exist
        cache.write_query(&key.store_field_name(), &Value::Null);
        assert_eq!(decode_query::<Option<Project>>(&cache, &key), Some(Ok(None)));

        cache.write_query(
            &key.store_field_name(),
            &json!({
                "__typename": "ProjectType",
                "id": "p1",
                "name": "Launch",
                "description": null,
                "status": "ACTIVE",
                "dueDate": null,
                "tasks": []
            }),
        );
        let project = decode_query::<Option<Project>>(&cache, &key).unwrap().unwrap().unwrap();
        assert_eq!(project.name, "Launch");
        assert!(project.tasks.is_empty());
    }

    #[test]
    fn test_failed_refetch_hides_cached_project() {
        let mut cache = EntityCache::new();
        let key = QueryKey::project("p1");
        cache.write_query(
            &key.store_field_name(),
            &json!({ "__typename": "ProjectType", "id": "p1", "name": "Launch", "status": "ACTIVE", "tasks": [] }),
        );
        let cached = decode_query::<Option<Project>>(&cache, &key);
        assert!(matches!(query_view(QueryStatus::Ready, cached.clone()), QueryView::Ready(Some(_))));
        // Still shown while a refetch is in flight
        assert!(matches!(query_view(QueryStatus::Loading, cached.clone()), QueryView::Ready(Some(_))));
        assert_eq!(
            query_view(QueryStatus::Failed("Network error".to_string()), cached),
            QueryView::Failed("Network error".to_string())
        );
    }

    #[test]
    fn test_query_view_before_first_response() {
        assert_eq!(query_view::<Vec<Project>>(QueryStatus::Loading, None), QueryView::Loading);
        assert_eq!(
            query_view::<Vec<Project>>(QueryStatus::Ready, Some(Err("bad shape".to_string()))),
            QueryView::Failed("bad shape".to_string())
        );
    }

    #[test]
    fn test_decode_entity_after_evict() {
        let mut cache = EntityCache::new();
        cache
            .write_entity(&json!({ "__typename": "ProjectType", "id": "p1", "name": "Launch", "status": "ON_HOLD" }))
            .unwrap();
        let project: Project = decode_entity(&cache, &project_key("p1")).unwrap();
        assert_eq!(project.name, "Launch");

        cache.evict(&project_key("p1"));
        assert!(decode_entity::<Project>(&cache, &project_key("p1")).is_none());
    }
}
