//! Delete-by-alias form.

use leptos::prelude::*;

use crate::net::api::{HttpApi, ShortenerApi};
use crate::state::shortener::{PendingAction, ShortenerState};

/// Form that removes an alias from the service.
#[component]
pub fn DeleteForm() -> impl IntoView {
    let state = expect_context::<RwSignal<ShortenerState>>();

    let on_delete = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((alias, credentials)) = state.try_update(ShortenerState::begin_delete).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = HttpApi::from_config().delete_url(&alias, &credentials).await;
            state.update(|s| s.finish_delete(&alias, result));
        });
    };

    let loading = move || state.with(ShortenerState::is_loading);
    let button_label = move || {
        if state.with(|s| s.pending) == Some(PendingAction::Delete) { "Deleting..." } else { "Delete" }
    };

    view! {
        <div class="delete-section">
            <h4>"Delete a link:"</h4>
            <form class="delete-form" on:submit=on_delete>
                <div class="form-group">
                    <label for="delete-alias">"Alias to delete:"</label>
                    <input
                        type="text"
                        id="delete-alias"
                        placeholder="alias-to-delete"
                        prop:value=move || state.with(|s| s.delete_alias.clone())
                        on:input=move |ev| state.update(|s| s.delete_alias = event_target_value(&ev))
                        disabled=loading
                    />
                </div>
                <button type="submit" class="delete-btn" disabled=loading>
                    {button_label}
                </button>
            </form>
        </div>
    }
}
