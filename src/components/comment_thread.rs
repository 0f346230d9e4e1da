//! Comment Thread Component
//!
//! Comments of one task plus the form to add another.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_app_context;
use crate::format::timestamp_label;
use crate::models::{task_key, Task};
use crate::store::{decode_entity, AppStateStoreFields};

#[component]
pub fn CommentThread(task_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let key = task_key(&task_id);
    let comments = Memo::new(move |_| {
        decode_entity::<Task>(&store.cache().read(), &key)
            .map(|t| t.comments)
            .unwrap_or_default()
    });

    let (draft, set_draft) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (posting, set_posting) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = draft.get_untracked();
        if content.trim().is_empty() {
            return;
        }
        let task_id = task_id.clone();
        set_posting.set(true);
        spawn_local(async move {
            let result = actions::add_comment(ctx, task_id, content).await;
            set_posting.set(false);
            match result {
                Ok(()) => {
                    set_draft.set(String::new());
                    set_error.set(None);
                }
                // Draft stays so the comment can be resent
                Err(msg) => set_error.set(Some(msg)),
            }
        });
    };

    view! {
        <div class="comment-thread">
            <Show
                when=move || !comments.with(Vec::is_empty)
                fallback=|| view! { <p class="comment-empty">"No comments yet."</p> }
            >
                <ul class="comment-list">
                    <For
                        each=move || comments.get()
                        key=|comment| comment.id.clone()
                        children=move |comment| view! {
                            <li class="comment">
                                <div class="comment-meta">
                                    <span class="comment-author">{comment.author_email.clone()}</span>
                                    <span class="comment-time">{timestamp_label(&comment.created_at)}</span>
                                </div>
                                <p class="comment-content">{comment.content.clone()}</p>
                            </li>
                        }
                    />
                </ul>
            </Show>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <form class="comment-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Write a comment..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || posting.get()>"Post"</button>
            </form>
        </div>
    }
}
