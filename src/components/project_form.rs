//! Project Form Component
//!
//! Create or edit a project. On failure the entered values stay in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::format::{date_input_value, parse_date_input};
use crate::models::{Project, ProjectInput, ProjectStatus};

/// Project form; `project` set means edit mode
#[component]
pub fn ProjectForm(project: Option<Project>, #[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let editing_id = project.as_ref().map(|p| p.id.clone());
    let is_edit = editing_id.is_some();

    let (name, set_name) = signal(project.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        project
            .as_ref()
            .and_then(|p| p.description.clone())
            .unwrap_or_default(),
    );
    let (status, set_status) = signal(project.as_ref().map(|p| p.status).unwrap_or_default());
    let (due_date, set_due_date) = signal(date_input_value(project.as_ref().and_then(|p| p.due_date)));
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = ProjectInput {
            name: name.get_untracked().trim().to_string(),
            description: description.get_untracked(),
            status: status.get_untracked(),
            due_date: parse_date_input(&due_date.get_untracked()),
        };
        if input.name.is_empty() {
            return;
        }
        let editing_id = editing_id.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => actions::update_project(ctx, id, input).await,
                None => actions::create_project(ctx, input).await,
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
        <form class="modal-form project-form" on:submit=submit>
            <h2>{if is_edit { "Edit Project" } else { "Create New Project" }}</h2>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <label>
                "Project Name"
                <input
                    type="text"
                    required
                    placeholder="e.g. Website Redesign"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Description"
                <textarea
                    rows="3"
                    placeholder="What is this project about?"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <div class="form-row">
                <Show when=move || is_edit>
                    <label>
                        "Status"
                        <select
                            prop:value=move || status.get().as_wire()
                            on:change=move |ev| {
                                if let Some(s) = ProjectStatus::from_wire(&event_target_value(&ev)) {
                                    set_status.set(s);
                                }
                            }
                        >
                            {ProjectStatus::ALL
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <option value=s.as_wire() selected=move || { status.get() == s }>
                                            {s.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                </Show>
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
                        (false, true) => "Save Changes",
                        (false, false) => "Create Project",
                    }}
                </button>
            </div>
        </form>
    }
}
