//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::GraphqlClient;
use crate::query::QueryKey;
use crate::storage::OrgSelection;
use crate::store::AppStore;

/// Screen currently shown
#[derive(Clone, Debug, PartialEq)]
pub enum Route {
    Dashboard,
    Project(String),
}

/// Identity attached to comments written by this client
#[derive(Clone, Debug, PartialEq)]
pub struct Viewer {
    pub email: String,
}

/// Currently selected organization, persisted on every change
#[derive(Clone, Copy)]
pub struct OrgContext {
    /// Selected organization slug - read
    pub current_slug: ReadSignal<String>,
    /// Selected organization slug - write
    set_current_slug: WriteSignal<String>,
    selection: StoredValue<OrgSelection>,
}

impl OrgContext {
    pub fn new(selection: OrgSelection) -> Self {
        let (current_slug, set_current_slug) = signal(selection.initial_slug());
        Self {
            current_slug,
            set_current_slug,
            selection: StoredValue::new(selection),
        }
    }

    /// Project list query for the selected organization (tracked)
    pub fn projects_query(&self) -> QueryKey {
        QueryKey::organization_projects(self.current_slug.get())
    }

    /// Persist, then switch. Dependent queries re-run through the signal.
    pub fn set_slug(&self, slug: String) {
        self.selection.with_value(|selection| selection.persist(&slug));
        log::info!("organization selected: {}", slug);
        self.set_current_slug.set(slug);
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub org: OrgContext,
    /// Current screen - read
    pub route: ReadSignal<Route>,
    /// Current screen - write
    set_route: WriteSignal<Route>,
    client: StoredValue<GraphqlClient>,
    viewer: StoredValue<Viewer>,
}

impl AppContext {
    pub fn new(store: AppStore, org: OrgContext, client: GraphqlClient, viewer: Viewer) -> Self {
        let (route, set_route) = signal(Route::Dashboard);
        Self {
            store,
            org,
            route,
            set_route,
            client: StoredValue::new(client),
            viewer: StoredValue::new(viewer),
        }
    }

    pub fn client(&self) -> GraphqlClient {
        self.client.get_value()
    }

    pub fn viewer(&self) -> Viewer {
        self.viewer.get_value()
    }

    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::{MemoryStorage, SelectionStorage};

    #[test]
    fn test_switching_org_rekeys_project_list() {
        let owner = Owner::new();
        owner.set();

        let storage = MemoryStorage::default();
        let org = OrgContext::new(OrgSelection::new("currentOrgSlug", "tech-corp", Arc::new(storage.clone())));
        let projects_key = Memo::new(move |_| org.projects_query());
        assert_eq!(projects_key.get_untracked(), QueryKey::organization_projects("tech-corp"));

        org.set_slug("acme".to_string());
        assert_eq!(projects_key.get_untracked(), QueryKey::organization_projects("acme"));
        assert_eq!(storage.load("currentOrgSlug").as_deref(), Some("acme"));

        org.set_slug("globex".to_string());
        assert_eq!(projects_key.get_untracked(), QueryKey::organization_projects("globex"));
    }

    #[test]
    fn test_saved_org_is_selected_on_start() {
        let owner = Owner::new();
        owner.set();

        let storage = MemoryStorage::default();
        storage.save("currentOrgSlug", "acme").unwrap();
        let org = OrgContext::new(OrgSelection::new("currentOrgSlug", "tech-corp", Arc::new(storage)));
        assert_eq!(org.current_slug.get_untracked(), "acme");
        assert_eq!(org.projects_query(), QueryKey::organization_projects("acme"));
    }
}
