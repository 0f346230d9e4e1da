//! Task Card Component
//!
//! Board card: status select, assignee, deadline, edit/delete and the
//! collapsible comment thread.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::actions;
use crate::components::{CommentThread, DeleteConfirmButton, TaskForm};
use crate::context::use_app_context;
use crate::format::due_date_label;
use crate::models::{task_key, Task, TaskStatus};
use crate::store::{decode_entity, AppStateStoreFields};

/// Card for one cached task
#[component]
pub fn TaskCard(task_id: String, project_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let dnd = expect_context::<DndSignals>();

    let key = task_key(&task_id);
    let task = Memo::new(move |_| decode_entity::<Task>(&store.cache().read(), &key));
    let comment_count = Memo::new(move |_| task.with(|t| t.as_ref().map(|t| t.comments.len()).unwrap_or(0)));

    let (show_comments, set_show_comments) = signal(false);
    let (editing, set_editing) = signal(None::<Task>);
    let (error, set_error) = signal(None::<String>);

    let on_status_change = {
        let task_id = task_id.clone();
        move |ev: web_sys::Event| {
            let Some(status) = TaskStatus::from_wire(&event_target_value(&ev)) else {
                return;
            };
            let task_id = task_id.clone();
            spawn_local(async move {
                match actions::update_task_status(ctx, task_id, status).await {
                    Ok(()) => set_error.set(None),
                    Err(msg) => set_error.set(Some(msg)),
                }
            });
        }
    };

    let delete_task = {
        let task_id = task_id.clone();
        move |_: ()| {
            let task_id = task_id.clone();
            spawn_local(async move {
                if let Err(msg) = actions::delete_task(ctx, task_id).await {
                    set_error.set(Some(msg));
                }
            });
        }
    };

    let is_dragging = {
        let task_id = task_id.clone();
        move || dnd.dragging_id.get().as_deref() == Some(task_id.as_str())
    };

    let summary = move || {
        task.get().map(|t| {
            let on_status_change = on_status_change.clone();
            let delete_task = delete_task.clone();
            let snapshot = t.clone();
            let status = t.status;
            view! {
                <div class="task-card-header">
                    <h4 class="task-title">{t.title.clone()}</h4>
                    <select class="task-status-select" prop:value=status.as_wire() on:change=on_status_change>
                        {TaskStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_wire() selected={s == status}>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                {t.description.clone().filter(|d| !d.trim().is_empty()).map(|d| view! {
                    <p class="task-description">{d}</p>
                })}
                <div class="task-meta">
                    <span class="task-assignee">{t.assignee().unwrap_or("Unassigned").to_string()}</span>
                    <span class="due-date">{due_date_label(t.due_date)}</span>
                </div>
                <div class="task-actions">
                    <button class="edit-btn" on:click=move |_| set_editing.set(Some(snapshot.clone()))>"Edit"</button>
                    <DeleteConfirmButton button_class="delete-btn" on_confirm=delete_task />
                </div>
            }
        })
    };

    let project_id = StoredValue::new(project_id);
    let on_mousedown = make_on_mousedown(dnd, task_id.clone());

    view! {
        <div
            class=move || if is_dragging() { "task-card dragging" } else { "task-card" }
            on:mousedown=on_mousedown
        >
            {summary}
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            {move || editing.get().map(|t| view! {
                <TaskForm
                    project_id=project_id.get_value()
                    task=Some(t)
                    on_done=move |_: ()| set_editing.set(None)
                />
            })}
            <div class="task-comments">
                <button class="comments-toggle" on:click=move |_| set_show_comments.update(|v| *v = !*v)>
                    {move || {
                        if show_comments.get() {
                            "Hide Comments".to_string()
                        } else {
                            format!("Show Comments ({})", comment_count.get())
                        }
                    }}
                </button>
                <Show when=move || show_comments.get()>
                    <CommentThread task_id=task_id.clone() />
                </Show>
            </div>
        </div>
    }
}
