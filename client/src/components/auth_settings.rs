//! Basic-auth credential inputs.
//!
//! Values live only in the page's `ShortenerState`; nothing is stored.

use leptos::prelude::*;

use crate::state::shortener::ShortenerState;

/// Username/password fields used for every authenticated request.
#[component]
pub fn AuthSettings() -> impl IntoView {
    let state = expect_context::<RwSignal<ShortenerState>>();

    view! {
        <div class="auth-section">
            <h4>"Authorization:"</h4>
            <div class="auth-inputs">
                <div class="form-group">
                    <label for="username">"Username:"</label>
                    <input
                        type="text"
                        id="username"
                        autocomplete="username"
                        prop:value=move || state.with(|s| s.credentials.username.clone())
                        on:input=move |ev| state.update(|s| s.credentials.username = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Password:"</label>
                    <input
                        type="password"
                        id="password"
                        autocomplete="current-password"
                        prop:value=move || state.with(|s| s.credentials.password.clone())
                        on:input=move |ev| state.update(|s| s.credentials.password = event_target_value(&ev))
                    />
                </div>
            </div>
        </div>
    }
}
