//! Project Card Component
//!
//! Dashboard tile: status badge, description, task progress and deadline.

use leptos::prelude::*;

use crate::context::{use_app_context, Route};
use crate::format::due_date_label;
use crate::models::{project_key, Project};
use crate::store::{decode_entity, AppStateStoreFields};

/// Card for one cached project; clicking opens its board
#[component]
pub fn ProjectCard(project_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let key = project_key(&project_id);
    let project = Memo::new(move |_| decode_entity::<Project>(&store.cache().read(), &key));

    move || {
        project.get().map(|p| {
            let id = p.id.clone();
            let progress = p.progress_percent();
            let completed = p.completed_task_count.unwrap_or(0);
            let total = p.task_count.unwrap_or(0);
            let description = p
                .description
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "No description provided.".to_string());

            view! {
                <div class="project-card" on:click=move |_| ctx.navigate(Route::Project(id.clone()))>
                    <div class="project-card-header">
                        <h3 class="project-name">{p.name.clone()}</h3>
                        <span class=format!("status-badge {}", p.status.badge_class())>{p.status.label()}</span>
                    </div>
                    <p class="project-description">{description}</p>
                    <div class="project-progress">
                        <div class="progress-label">
                            <span>{format!("{}/{} Tasks", completed, total)}</span>
                            <span>{format!("{}%", progress)}</span>
                        </div>
                        <div class="progress-track">
                            <div class="progress-bar" style=format!("width: {}%;", progress)></div>
                        </div>
                    </div>
                    <div class="project-card-footer">
                        <span class="due-date">{due_date_label(p.due_date)}</span>
                    </div>
                </div>
            }
        })
    }
}
