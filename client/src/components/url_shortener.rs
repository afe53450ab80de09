//! Create-link form: URL, optional alias, and the result/notice area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads and writes the page's `RwSignal<ShortenerState>` from context. The
//! submit handler validates synchronously through `begin_create`; only a
//! validated request is handed to the API on a local task.

use leptos::prelude::*;

use crate::components::auth_settings::AuthSettings;
use crate::components::delete_form::DeleteForm;
use crate::components::short_link::ShortLinkPanel;
use crate::net::api::{HttpApi, ShortenerApi};
use crate::state::shortener::{PendingAction, ShortenerState};
use crate::util::location::page_origin;

fn submit_label(pending: Option<PendingAction>) -> &'static str {
    if pending == Some(PendingAction::Create) {
        "Creating..."
    } else {
        "Create short link"
    }
}

/// The whole shortener surface.
#[component]
pub fn UrlShortener() -> impl IntoView {
    let state = expect_context::<RwSignal<ShortenerState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((request, credentials)) = state.try_update(ShortenerState::begin_create).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = HttpApi::from_config().create_short_url(&request, &credentials).await;
            let origin = page_origin();
            state.update(|s| s.finish_create(result, &origin));
        });
    };

    let on_generate = move |_| state.update(ShortenerState::regenerate_alias);
    let loading = move || state.with(ShortenerState::is_loading);

    view! {
        <div class="container">
            <h1 class="title">"URL Shortener"</h1>

            <form on:submit=on_submit>
                <div class="form-group">
                    <label for="url">"URL to shorten:"</label>
                    <input
                        type="url"
                        id="url"
                        placeholder="https://example.com"
                        prop:value=move || state.with(|s| s.url.clone())
                        on:input=move |ev| state.update(|s| s.url = event_target_value(&ev))
                        disabled=loading
                    />
                </div>

                <div class="form-group">
                    <label for="alias">
                        "Alias (optional):"
                        <button type="button" class="btn btn--small" on:click=on_generate>
                            "Generate"
                        </button>
                    </label>
                    <input
                        type="text"
                        id="alias"
                        placeholder="my-custom-alias"
                        prop:value=move || state.with(|s| s.alias.clone())
                        on:input=move |ev| state.update(|s| s.alias = event_target_value(&ev))
                        disabled=loading
                    />
                </div>

                <button type="submit" class="btn" disabled=loading>
                    {move || submit_label(state.with(|s| s.pending))}
                </button>
            </form>

            <ShortLinkPanel/>

            <Show when=move || state.with(|s| s.error_message().is_some())>
                <div class="error">{move || state.with(|s| s.error_message().unwrap_or_default().to_owned())}</div>
            </Show>
            <Show when=move || state.with(|s| s.success_message().is_some())>
                <div class="success-message">
                    {move || state.with(|s| s.success_message().unwrap_or_default().to_owned())}
                </div>
            </Show>

            <AuthSettings/>
            <DeleteForm/>
        </div>
    }
}
