//! Entity Cache
//!
//! Normalized client-side store for GraphQL responses. Objects carrying a
//! `__typename` and an `id` are stored once under their [`EntityKey`] and
//! referenced from every query that selected them, so a patch to one record
//! is visible through every view.
//!
//! ```
//! use entity_cache::{EntityCache, EntityKey};
//! use serde_json::json;
//!
//! let mut cache = EntityCache::new();
//! cache.write_query("tasks", &json!([{ "__typename": "TaskType", "id": "1", "comments": [] }]));
//!
//! let task = EntityKey::new("TaskType", "1");
//! let comment = json!({ "__typename": "TaskCommentType", "id": "9", "content": "hi" });
//! cache.append_entity(&task, "comments", &comment).unwrap();
//!
//! let tasks = cache.read_query("tasks").unwrap();
//! assert_eq!(tasks[0]["comments"][0]["content"], "hi");
//! ```

mod cache;
mod error;
mod key;
mod value;

pub use cache::EntityCache;
pub use error::{CacheError, CacheResult};
pub use key::{identify, EntityKey, ID_FIELD, TYPENAME_FIELD};
pub use value::{FieldValue, Record};

/// Store field name of a root field called with `args`,
/// e.g. `organizationProjects({"orgSlug":"acme"})`.
///
/// Arguments are serialized with sorted keys so equal argument sets map to
/// the same root.
pub fn store_field_name(field: &str, args: &serde_json::Value) -> String {
    match args {
        serde_json::Value::Null => field.to_string(),
        serde_json::Value::Object(map) if map.is_empty() => field.to_string(),
        _ => format!("{}({})", field, sorted_json(args)),
    }
}

fn sorted_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let body: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| format!("{}:{}", serde_json::Value::String(k.clone()), sorted_json(v)))
                .collect();
            format!("{{{}}}", body.join(","))
        }
        serde_json::Value::Array(items) => {
            let body: Vec<String> = items.iter().map(sorted_json).collect();
            format!("[{}]", body.join(","))
        }
        other => other.to_string(),
    }
}
