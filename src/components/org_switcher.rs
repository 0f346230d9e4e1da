//! Organization Switcher Component
//!
//! Dropdown of all organizations plus an inline "create organization" form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, run_query};
use crate::context::use_app_context;
use crate::format::optional_text;
use crate::models::{NewOrganization, Organization};
use crate::query::{QueryKey, QueryStatus};
use crate::store::{decode_query, AppStateStoreFields};

/// Organization dropdown in the top bar
#[component]
pub fn OrgSwitcher() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (creating, set_creating) = signal(false);

    // Load organizations on mount
    Effect::new(move |_| run_query(ctx, QueryKey::AllOrganizations));

    let organizations = Memo::new(move |_| {
        decode_query::<Vec<Organization>>(&store.cache().read(), &QueryKey::AllOrganizations)
            .and_then(Result::ok)
            .unwrap_or_default()
    });
    let load_error = Memo::new(move |_| match store.queries().read().status(&QueryKey::AllOrganizations) {
        QueryStatus::Failed(msg) => Some(msg),
        _ => None,
    });

    // (slug, name) pairs; a selected slug the server does not list is still shown
    let options = move || {
        let current = ctx.org.current_slug.get();
        let mut options: Vec<(String, String)> = organizations
            .get()
            .into_iter()
            .map(|org| (org.slug, org.name))
            .collect();
        if !options.iter().any(|(slug, _)| *slug == current) {
            options.insert(0, (current.clone(), current));
        }
        options
    };

    view! {
        <div class="org-switcher">
            <label for="org-select">"Organization"</label>
            <select
                id="org-select"
                prop:value=move || ctx.org.current_slug.get()
                on:change=move |ev| ctx.org.set_slug(event_target_value(&ev))
            >
                {move || {
                    let current = ctx.org.current_slug.get();
                    options()
                        .into_iter()
                        .map(|(slug, name)| {
                            let selected = slug == current;
                            view! { <option value=slug selected=selected>{name}</option> }
                        })
                        .collect_view()
                }}
            </select>
            {move || load_error.get().map(|msg| view! { <span class="inline-error">{msg}</span> })}
            <button class="org-add-btn" on:click=move |_| set_creating.update(|v| *v = !*v)>
                "+ New"
            </button>
            <Show when=move || creating.get()>
                <CreateOrgForm on_done=move |_: ()| set_creating.set(false) />
            </Show>
        </div>
    }
}

/// Create-organization form; the new organization becomes the selected one
#[component]
fn CreateOrgForm(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = NewOrganization {
            name: name.get_untracked().trim().to_string(),
            email: optional_text(&email.get_untracked()),
        };
        if input.name.is_empty() {
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            let result = actions::create_organization(ctx, input).await;
            set_saving.set(false);
            match result {
                Ok(_) => {
                    set_error.set(None);
                    on_done.run(());
                }
                // Fields keep their values for a retry
                Err(msg) => set_error.set(Some(msg)),
            }
        });
    };

    view! {
        <form class="modal-form org-form" on:submit=submit>
            <h2>"Create Workspace"</h2>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <label>
                "Organization Name"
                <input
                    type="text"
                    required
                    placeholder="e.g. Design Team"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Contact Email (Optional)"
                <input
                    type="email"
                    placeholder="admin@company.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <div class="form-actions">
                <button type="button" on:click=move |_| on_done.run(())>"Cancel"</button>
                <button type="submit" disabled=move || saving.get()>
                    {move || if saving.get() { "Creating..." } else { "Create" }}
                </button>
            </div>
        </form>
    }
}
