//! Normalized field values

use std::collections::BTreeMap;

use serde_json::Value;

use crate::key::EntityKey;

/// Cached fields of one entity, keyed by field name
pub type Record = BTreeMap<String, FieldValue>;

/// A field value after normalization.
///
/// Identifiable objects never appear inline: they live in their own record
/// and are pointed to with `Ref`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// null, bool, number or string
    Scalar(Value),
    Ref(EntityKey),
    List(Vec<FieldValue>),
    /// Object without identity, stored inline
    Object(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    pub fn as_ref_key(&self) -> Option<&EntityKey> {
        match self {
            FieldValue::Ref(key) => Some(key),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Push every entity key referenced from this value (recursively) onto `out`
    pub(crate) fn collect_refs<'a>(&'a self, out: &mut Vec<&'a EntityKey>) {
        match self {
            FieldValue::Scalar(_) => {}
            FieldValue::Ref(key) => out.push(key),
            FieldValue::List(items) => items.iter().for_each(|item| item.collect_refs(out)),
            FieldValue::Object(fields) => fields.values().for_each(|field| field.collect_refs(out)),
        }
    }
}
