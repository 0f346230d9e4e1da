//! Entity Cache
//!
//! Records keyed by entity identity plus root query fields pointing into them.
//! Every mutation-driven patch is a plain method over this map; nothing here
//! performs I/O.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{json_kind, CacheError, CacheResult};
use crate::key::{identify, EntityKey};
use crate::value::{FieldValue, Record};

/// Normalized client-side cache
#[derive(Debug, Clone, Default)]
pub struct EntityCache {
    records: HashMap<EntityKey, Record>,
    roots: BTreeMap<String, FieldValue>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entity records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, key: &EntityKey) -> bool {
        self.records.contains_key(key)
    }

    pub fn record(&self, key: &EntityKey) -> Option<&Record> {
        self.records.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &EntityKey> {
        self.records.keys()
    }

    pub fn root(&self, root_field: &str) -> Option<&FieldValue> {
        self.roots.get(root_field)
    }

    // ========================
    // Writes
    // ========================

    /// Store the response of a root query field.
    ///
    /// Identifiable objects anywhere in `data` are merged into their own
    /// records; the root keeps references to them.
    pub fn write_query(&mut self, root_field: &str, data: &Value) {
        let normalized = self.normalize(data);
        debug!(root_field, records = self.records.len(), "cache: wrote query");
        self.roots.insert(root_field.to_string(), normalized);
    }

    /// Store a single identifiable object and return its key.
    pub fn write_entity(&mut self, data: &Value) -> CacheResult<EntityKey> {
        if !data.is_object() {
            return Err(CacheError::NotAnObject(json_kind(data)));
        }
        let key = identify(data).ok_or(CacheError::NotAnEntity)?;
        self.normalize(data);
        trace!(%key, "cache: wrote entity");
        Ok(key)
    }

    fn normalize(&mut self, value: &Value) -> FieldValue {
        match value {
            Value::Array(items) => {
                FieldValue::List(items.iter().map(|item| self.normalize(item)).collect())
            }
            Value::Object(obj) => {
                let fields: Record = obj
                    .iter()
                    .map(|(name, field)| (name.clone(), self.normalize(field)))
                    .collect();
                match identify(value) {
                    Some(key) => {
                        // Incoming fields win, fields not selected this time are kept
                        self.records.entry(key.clone()).or_default().extend(fields);
                        FieldValue::Ref(key)
                    }
                    None => FieldValue::Object(fields),
                }
            }
            scalar => FieldValue::Scalar(scalar.clone()),
        }
    }

    /// Replace one field of one record with `f(current)`.
    ///
    /// Returns `false` without touching anything when the record is absent.
    pub fn modify_field<F>(&mut self, key: &EntityKey, field: &str, f: F) -> bool
    where
        F: FnOnce(Option<&FieldValue>) -> FieldValue,
    {
        let Some(record) = self.records.get_mut(key) else {
            debug!(%key, field, "cache: modify skipped, entity not cached");
            return false;
        };
        let next = f(record.get(field));
        record.insert(field.to_string(), next);
        true
    }

    /// Write `child` as its own record and append a reference to it at the
    /// tail of `parent.field`.
    ///
    /// When `parent` is not cached nothing is written and `Ok(None)` is
    /// returned. An absent or non-list field starts as an empty list. A
    /// reference already present in the list is not appended twice.
    pub fn append_entity(
        &mut self,
        parent: &EntityKey,
        field: &str,
        child: &Value,
    ) -> CacheResult<Option<EntityKey>> {
        if !self.records.contains_key(parent) {
            debug!(%parent, field, "cache: append skipped, parent not cached");
            return Ok(None);
        }
        let child_key = self.write_entity(child)?;
        let appended = child_key.clone();
        self.modify_field(parent, field, move |existing| {
            let mut items = existing
                .and_then(FieldValue::as_list)
                .map(<[FieldValue]>::to_vec)
                .unwrap_or_default();
            if !items.iter().any(|item| item.as_ref_key() == Some(&appended)) {
                items.push(FieldValue::Ref(appended));
            }
            FieldValue::List(items)
        });
        debug!(%parent, field, child = %child_key, "cache: appended entity");
        Ok(Some(child_key))
    }

    // ========================
    // Eviction
    // ========================

    /// Remove one record entirely. References to it become dangling and are
    /// skipped by reads.
    pub fn evict(&mut self, key: &EntityKey) -> bool {
        let removed = self.records.remove(key).is_some();
        debug!(%key, removed, "cache: evict");
        removed
    }

    /// Drop every record not reachable from a root field. Returns the removed
    /// keys in sorted order.
    pub fn gc(&mut self) -> Vec<EntityKey> {
        let mut reachable: HashSet<EntityKey> = HashSet::new();
        let mut stack: Vec<&EntityKey> = Vec::new();
        for root in self.roots.values() {
            root.collect_refs(&mut stack);
        }
        while let Some(key) = stack.pop() {
            if !reachable.insert(key.clone()) {
                continue;
            }
            if let Some(record) = self.records.get(key) {
                record.values().for_each(|field| field.collect_refs(&mut stack));
            }
        }

        let mut removed: Vec<EntityKey> = self
            .records
            .keys()
            .filter(|key| !reachable.contains(*key))
            .cloned()
            .collect();
        removed.sort();
        for key in &removed {
            self.records.remove(key);
        }
        debug!(removed = removed.len(), "cache: gc");
        removed
    }

    // ========================
    // Reads
    // ========================

    /// Denormalized view of a root field, `None` if it was never written.
    pub fn read_query(&self, root_field: &str) -> Option<Value> {
        let root = self.roots.get(root_field)?;
        let mut visiting = HashSet::new();
        Some(self.denormalize(root, &mut visiting))
    }

    /// Denormalized view of one entity, `None` if not cached.
    pub fn read_entity(&self, key: &EntityKey) -> Option<Value> {
        let mut visiting = HashSet::new();
        self.resolve(key, &mut visiting)
    }

    fn resolve(&self, key: &EntityKey, visiting: &mut HashSet<EntityKey>) -> Option<Value> {
        let record = self.records.get(key)?;
        // Cycle: the entity is already being expanded further up
        if !visiting.insert(key.clone()) {
            return None;
        }
        let obj = record
            .iter()
            .map(|(name, field)| (name.clone(), self.denormalize(field, visiting)))
            .collect();
        visiting.remove(key);
        Some(Value::Object(obj))
    }

    fn denormalize(&self, value: &FieldValue, visiting: &mut HashSet<EntityKey>) -> Value {
        match value {
            FieldValue::Scalar(v) => v.clone(),
            FieldValue::Ref(key) => self.resolve(key, visiting).unwrap_or(Value::Null),
            FieldValue::List(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        // Dangling references (evicted entities) are skipped
                        FieldValue::Ref(key) => out.extend(self.resolve(key, visiting)),
                        other => out.push(self.denormalize(other, visiting)),
                    }
                }
                Value::Array(out)
            }
            FieldValue::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(name, field)| (name.clone(), self.denormalize(field, visiting)))
                    .collect(),
            ),
        }
    }
}
