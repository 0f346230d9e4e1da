//! PM Board Frontend App
//!
//! Root component: wires the store, organization selection, GraphQL client
//! and board drag-and-drop, then switches between the two screens.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals};
use reactive_stores::Store;

use crate::actions;
use crate::api::GraphqlClient;
use crate::components::{Dashboard, OrgSwitcher, ProjectDetail};
use crate::config::AppConfig;
use crate::context::{AppContext, OrgContext, Route, Viewer};
use crate::models::{task_key, Task, TaskStatus};
use crate::storage::{browser_storage, OrgSelection};
use crate::store::{decode_entity, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());

    let selection = OrgSelection::new(
        config.selection_storage_key.clone(),
        config.default_org_slug.clone(),
        browser_storage(),
    );
    let org = OrgContext::new(selection);
    let ctx = AppContext::new(
        store,
        org,
        GraphqlClient::new(config.graphql_endpoint.clone()),
        Viewer { email: config.author_email.clone() },
    );
    provide_context(ctx);

    // Board-level failures with no form to report into
    let (notice, set_notice) = signal(None::<String>);

    // Dropping a card on a column moves the task to that column's status
    let dnd = create_dnd_signals();
    provide_context(dnd);
    bind_global_mouseup(dnd, move |task_id, column| {
        let Some(status) = TaskStatus::from_wire(&column) else {
            return;
        };
        let current = decode_entity::<Task>(&store.cache().read_untracked(), &task_key(&task_id)).map(|t| t.status);
        if current == Some(status) {
            return;
        }
        log::debug!("drop {} on {}", task_id, column);
        spawn_local(async move {
            if let Err(msg) = actions::update_task_status(ctx, task_id, status).await {
                set_notice.set(Some(msg));
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="top-bar">
                <span class="brand" on:click=move |_| ctx.navigate(Route::Dashboard)>"PM Board"</span>
                <OrgSwitcher />
            </header>

            {move || notice.get().map(|msg| view! {
                <div class="notice" on:click=move |_| set_notice.set(None)>{msg}</div>
            })}

            <main class="main-content">
                {move || match ctx.route.get() {
                    Route::Dashboard => view! { <Dashboard /> }.into_any(),
                    Route::Project(id) => view! { <ProjectDetail project_id=id /> }.into_any(),
                }}
            </main>
        </div>
    }
}
