//! Kanban Column Component
//!
//! One status column of the project board. Doubles as a drop target: a card
//! released over the column takes that column's status.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_target_mouseenter, DndSignals};

use crate::components::TaskCard;
use crate::models::TaskStatus;

#[component]
pub fn KanbanColumn(status: TaskStatus, task_ids: Signal<Vec<String>>, project_id: String) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();
    let on_enter = make_on_target_mouseenter(dnd, status.as_wire().to_string());
    let on_leave = make_on_mouseleave(dnd);

    let column_class = move || {
        let hovered = dnd.dragging_id.get().is_some() && dnd.drop_target.get().as_deref() == Some(status.as_wire());
        let base = format!("kanban-column column-{}", status.as_wire().to_lowercase().replace('_', "-"));
        if hovered {
            format!("{} drop-target", base)
        } else {
            base
        }
    };

    view! {
        <div class=column_class on:mouseenter=on_enter on:mouseleave=on_leave>
            <div class="kanban-column-header">
                <h3>{status.label()}</h3>
                <span class="task-count">{move || task_ids.get().len()}</span>
            </div>
            <div class="kanban-column-body">
                <For
                    each=move || task_ids.get()
                    key=|id| id.clone()
                    children=move |id| view! { <TaskCard task_id=id project_id=project_id.clone() /> }
                />
            </div>
        </div>
    }
}
