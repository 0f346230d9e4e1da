//! Entity Identity
//!
//! Cache identity of an entity is its GraphQL typename plus its id.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field carrying the GraphQL typename
pub const TYPENAME_FIELD: &str = "__typename";
/// Field carrying the entity id
pub const ID_FIELD: &str = "id";

/// Normalized identity of a cached entity, displayed as `Typename:id`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityKey {
    pub typename: String,
    pub id: String,
}

impl EntityKey {
    pub fn new(typename: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            typename: typename.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.typename, self.id)
    }
}

/// Derive the identity of a JSON object.
///
/// Returns `None` for non-objects and for objects lacking a string
/// `__typename` or a string/number `id`.
pub fn identify(value: &Value) -> Option<EntityKey> {
    let obj = value.as_object()?;
    let typename = obj.get(TYPENAME_FIELD)?.as_str()?;
    let id = match obj.get(ID_FIELD)? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    Some(EntityKey::new(typename, id))
}
