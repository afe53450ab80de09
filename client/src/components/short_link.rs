//! Read-only display of the created short link with a copy button.

use leptos::prelude::*;

use crate::state::shortener::ShortenerState;
use crate::util::clipboard::copy_text;

/// Result panel, rendered only while a short link is on display.
#[component]
pub fn ShortLinkPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<ShortenerState>>();
    let link_url = move || state.with(|s| s.short_link.as_ref().map(|l| l.url.clone()).unwrap_or_default());

    let on_copy = move |_| {
        let text = link_url();
        if text.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            let copied = copy_text(&text).await;
            let Some(seq) = state.try_update(|s| s.finish_copy(copied)).flatten() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                gloo_timers::future::sleep(crate::config::NOTICE_DISMISS_AFTER).await;
                state.update(|s| s.dismiss_notice(seq));
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = seq;
        });
    };

    view! {
        <Show when=move || state.with(|s| s.short_link.is_some())>
            <div class="result">
                <h3>"Your short link:"</h3>
                <div class="short-url">
                    <input type="text" readonly prop:value=link_url />
                    <button class="copy-btn" on:click=on_copy>
                        "Copy"
                    </button>
                </div>
            </div>
        </Show>
    }
}
