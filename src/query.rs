//! Query Keys and Request Tracking
//!
//! A `QueryKey` names one root query plus its variables and maps to the root
//! field it is stored under in the entity cache. `QueryTracker` keeps the
//! latest request generation per key so an older response can never
//! overwrite a newer one.

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::api::documents;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    AllOrganizations,
    OrganizationProjects { org_slug: String },
    Project { id: String },
}

impl QueryKey {
    pub fn organization_projects(org_slug: impl Into<String>) -> Self {
        QueryKey::OrganizationProjects { org_slug: org_slug.into() }
    }

    pub fn project(id: impl Into<String>) -> Self {
        QueryKey::Project { id: id.into() }
    }

    /// Root field selected by the document
    pub fn root_field(&self) -> &'static str {
        match self {
            QueryKey::AllOrganizations => "allOrganizations",
            QueryKey::OrganizationProjects { .. } => "organizationProjects",
            QueryKey::Project { .. } => "project",
        }
    }

    pub fn document(&self) -> &'static str {
        match self {
            QueryKey::AllOrganizations => documents::ALL_ORGANIZATIONS,
            QueryKey::OrganizationProjects { .. } => documents::ORGANIZATION_PROJECTS,
            QueryKey::Project { .. } => documents::PROJECT_DETAILS,
        }
    }

    pub fn variables(&self) -> Value {
        match self {
            QueryKey::AllOrganizations => json!({}),
            QueryKey::OrganizationProjects { org_slug } => json!({ "orgSlug": org_slug }),
            QueryKey::Project { id } => json!({ "id": id }),
        }
    }

    /// Root key in the entity cache
    pub fn store_field_name(&self) -> String {
        entity_cache::store_field_name(self.root_field(), &self.variables())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
struct QueryEntry {
    generation: u64,
    status: QueryStatus,
}

/// Latest request generation and status per query
#[derive(Debug, Clone, Default)]
pub struct QueryTracker {
    entries: HashMap<QueryKey, QueryEntry>,
}

impl QueryTracker {
    /// Register a new request for `key` and return its generation
    pub fn begin(&mut self, key: &QueryKey) -> u64 {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.generation += 1;
        entry.status = QueryStatus::Loading;
        entry.generation
    }

    pub fn is_current(&self, key: &QueryKey, generation: u64) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.generation == generation)
    }

    /// Record the outcome of request `generation`. Returns `false` (and
    /// records nothing) when a newer request for the same key was issued.
    pub fn finish(&mut self, key: &QueryKey, generation: u64, status: QueryStatus) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) if entry.generation == generation => {
                entry.status = status;
                true
            }
            _ => false,
        }
    }

    pub fn status(&self, key: &QueryKey) -> QueryStatus {
        self.entries.get(key).map(|entry| entry.status.clone()).unwrap_or_default()
    }
}
