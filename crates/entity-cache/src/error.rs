use thiserror::Error;

/// Errors raised while normalizing data into the cache
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CacheError {
    /// Value is an object but has no `__typename`/`id` pair
    #[error("object has no cache identity (missing __typename or id)")]
    NotAnEntity,
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}

pub type CacheResult<T> = Result<T, CacheError>;

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
