//! Landing page hosting the shortener form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the page-scoped `ShortenerState` so its lifetime matches the route;
//! leaving the page drops credentials and any displayed link.

use leptos::prelude::*;

use crate::components::url_shortener::UrlShortener;
use crate::state::shortener::ShortenerState;

/// Home route (`/`).
#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(ShortenerState::default());
    provide_context(state);

    view! {
        <main class="main-content">
            <UrlShortener/>
        </main>
    }
}
