//! Task Form Component
//!
//! Add a task to a project, or edit an existing one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::format::{date_input_value, optional_text, parse_date_input};
use crate::models::{Task, TaskInput};

/// Task form; `task` set means edit mode
#[component]
pub fn TaskForm(project_id: String, task: Option<Task>, #[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let editing_id = task.as_ref().map(|t| t.id.clone());
    let is_edit = editing_id.is_some();

    let (title, set_title) = signal(task.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        task.as_ref()
            .and_then(|t| t.description.clone())
            .unwrap_or_default(),
    );
    let (assignee, set_assignee) = signal(
        task.as_ref()
            .and_then(|t| t.assignee().map(str::to_string))
            .unwrap_or_default(),
    );
    let (due_date, set_due_date) = signal(date_input_value(task.as_ref().and_then(|t| t.due_date)));
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = TaskInput {
            title: title.get_untracked().trim().to_string(),
            description: description.get_untracked(),
            assignee_email: optional_text(&assignee.get_untracked()),
            due_date: parse_date_input(&due_date.get_untracked()),
        };
        if input.title.is_empty() {
            return;
        }
        let project_id = project_id.clone();
        let editing_id = editing_id.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = match editing_id {
                Some(task_id) => actions::update_task(ctx, project_id, task_id, input).await,
                None => actions::create_task(ctx, project_id, input).await,
            };
            set_saving.set(false);
            match result {
                Ok(()) => {
                    set_error.set(None);
                    on_done.run(());
                }
                Err(msg) => set_error.set(Some(msg)),
            }
        });
    };

    view! {
        <form class="modal-form task-form" on:submit=submit>
            <h3>{if is_edit { "Edit Task" } else { "New Task" }}</h3>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <label>
                "Title"
                <input
                    type="text"
                    required
                    placeholder="What needs to be done?"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <textarea
                    rows="2"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <div class="form-row">
                <label>
                    "Assignee Email"
                    <input
                        type="email"
                        placeholder="someone@company.com"
                        prop:value=move || assignee.get()
                        on:input=move |ev| set_assignee.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Due Date"
                    <input
                        type="date"
                        prop:value=move || due_date.get()
                        on:input=move |ev| set_due_date.set(event_target_value(&ev))
                    />
                </label>
            </div>
            <div class="form-actions">
                <button type="button" on:click=move |_| on_done.run(())>"Cancel"</button>
                <button type="submit" disabled=move || saving.get()>
                    {move || match (saving.get(), is_edit) {
                        (true, _) => "Saving...",
                        (false, true) => "Save Task",
                        (false, false) => "Add Task",
                    }}
                </button>
            </div>
        </form>
    }
}
