//! Project Detail Component
//!
//! Project header with edit/delete, the add-task form and the kanban board.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, run_query};
use crate::board::group_by_status;
use crate::components::{DeleteConfirmButton, KanbanColumn, ProjectForm, TaskForm};
use crate::context::{use_app_context, Route};
use crate::format::due_date_label;
use crate::models::{Project, Task, TaskStatus};
use crate::query::QueryKey;
use crate::store::{decode_query, query_view, AppStateStoreFields, QueryView};

/// Detail screen for one project
#[component]
pub fn ProjectDetail(project_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let key = QueryKey::project(project_id.clone());

    Effect::new({
        let key = key.clone();
        move |_| run_query(ctx, key.clone())
    });

    // `Ready(None)`: the server answered but has no such project
    let project = Memo::new({
        let key = key.clone();
        move |_| decode_query::<Option<Project>>(&store.cache().read(), &key)
    });
    let status = Memo::new(move |_| store.queries().read().status(&key));
    let view_state = Memo::new(move |_| query_view(status.get(), project.get()));
    let tasks = Memo::new(move |_| match view_state.get() {
        QueryView::Ready(Some(p)) => p.tasks,
        _ => Vec::new(),
    });

    let (editing, set_editing) = signal(None::<Project>);
    let (adding_task, set_adding_task) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let delete_project = {
        let project_id = project_id.clone();
        move |_: ()| {
            let project_id = project_id.clone();
            spawn_local(async move {
                if let Err(msg) = actions::delete_project(ctx, project_id).await {
                    set_error.set(Some(msg));
                }
            });
        }
    };

    let header = move || match view_state.get() {
        QueryView::Failed(msg) => view! { <div class="query-error">"Error: " {msg}</div> }.into_any(),
        QueryView::Loading => view! { <div class="query-loading">"Loading project..."</div> }.into_any(),
        QueryView::Ready(None) => view! { <div class="empty-state">"Project not found."</div> }.into_any(),
        QueryView::Ready(Some(p)) => {
            let snapshot = p.clone();
            let delete_project = delete_project.clone();
            view! {
                <div class="project-header">
                    <div class="project-header-main">
                        <h1>{p.name.clone()}</h1>
                        <span class=format!("status-badge {}", p.status.badge_class())>{p.status.label()}</span>
                    </div>
                    <p class="project-description">
                        {p.description.clone().filter(|d| !d.trim().is_empty()).unwrap_or_default()}
                    </p>
                    <div class="project-header-meta">
                        <span class="due-date">{due_date_label(p.due_date)}</span>
                    </div>
                    <div class="project-header-actions">
                        <button class="secondary-btn" on:click=move |_| set_editing.set(Some(snapshot.clone()))>
                            "Edit Project"
                        </button>
                        <DeleteConfirmButton
                            button_class="danger-btn"
                            label="Delete Project"
                            on_confirm=delete_project
                        />
                    </div>
                </div>
            }
            .into_any()
        }
    };

    // A failed query hides the board along with the header
    let has_project = move || matches!(view_state.get(), QueryView::Ready(Some(_)));
    let project_id = StoredValue::new(project_id);

    view! {
        <section class="project-detail">
            <button class="back-link" on:click=move |_| ctx.navigate(Route::Dashboard)>
                "← Back to Projects"
            </button>
            {header}
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            {move || editing.get().map(|p| view! {
                <ProjectForm project=Some(p) on_done=move |_: ()| set_editing.set(None) />
            })}
            <Show when=has_project>
                <div class="board-toolbar">
                    <h2>"Tasks"</h2>
                    <button class="primary-btn" on:click=move |_| set_adding_task.set(true)>"+ Add Task"</button>
                </div>
                <Show when=move || adding_task.get()>
                    <TaskForm
                        project_id=project_id.get_value()
                        task=None
                        on_done=move |_: ()| set_adding_task.set(false)
                    />
                </Show>
                <KanbanBoard tasks=tasks project_id=project_id.get_value() />
            </Show>
        </section>
    }
}

/// One column per task status, always in board order
#[component]
fn KanbanBoard(tasks: Memo<Vec<Task>>, project_id: String) -> impl IntoView {
    let columns = Memo::new(move |_| group_by_status(&tasks.get()));

    view! {
        <div class="kanban-board">
            {TaskStatus::ALL
                .into_iter()
                .enumerate()
                .map(|(index, status)| {
                    let task_ids = Signal::derive(move || {
                        columns.with(|cols| cols.get(index).map(|c| c.task_ids()).unwrap_or_default())
                    });
                    view! { <KanbanColumn status=status task_ids=task_ids project_id=project_id.clone() /> }
                })
                .collect_view()}
        </div>
    }
}
