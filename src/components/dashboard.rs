//! Dashboard Component
//!
//! Project grid for the selected organization.

use leptos::prelude::*;

use crate::actions::run_query;
use crate::components::{ProjectCard, ProjectForm};
use crate::context::use_app_context;
use crate::models::Project;
use crate::store::{decode_query, query_view, AppStateStoreFields, QueryView};

/// Dashboard screen
#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (creating, set_creating) = signal(false);

    let projects_key = Memo::new(move |_| ctx.org.projects_query());

    // Re-issue the list query whenever the organization changes
    Effect::new(move |_| run_query(ctx, projects_key.get()));

    let projects = Memo::new(move |_| decode_query::<Vec<Project>>(&store.cache().read(), &projects_key.get()));
    let status = Memo::new(move |_| store.queries().read().status(&projects_key.get()));
    let view_state = Memo::new(move |_| query_view(status.get(), projects.get()));

    // An error replaces the grid entirely
    let project_ids = Memo::new(move |_| match view_state.get() {
        QueryView::Ready(list) => list.into_iter().map(|p| p.id).collect::<Vec<_>>(),
        _ => Vec::new(),
    });

    let notice = move || match view_state.get() {
        QueryView::Failed(msg) => Some(view! { <div class="query-error">"Error: " {msg}</div> }.into_any()),
        QueryView::Loading => Some(view! { <div class="query-loading">"Loading projects..."</div> }.into_any()),
        QueryView::Ready(list) if list.is_empty() => Some(
            view! {
                <div class="empty-state">
                    <h3>"No projects yet"</h3>
                    <p>"Create your first project to get started."</p>
                </div>
            }
            .into_any(),
        ),
        QueryView::Ready(_) => None,
    };

    view! {
        <section class="dashboard">
            <div class="dashboard-header">
                <h1>"Projects"</h1>
                <button class="primary-btn" on:click=move |_| set_creating.set(true)>
                    "+ New Project"
                </button>
            </div>
            <Show when=move || creating.get()>
                <ProjectForm project=None on_done=move |_: ()| set_creating.set(false) />
            </Show>
            {notice}
            <div class="project-grid">
                <For
                    each=move || project_ids.get()
                    key=|id| id.clone()
                    children=move |id| view! { <ProjectCard project_id=id /> }
                />
            </div>
        </section>
    }
}
