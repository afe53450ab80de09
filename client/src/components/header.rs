//! Top bar with the product name, navigation, and service liveness.
//!
//! SYSTEM CONTEXT
//! ==============
//! Probes `/health` once on mount so users see when the shortening service
//! is unreachable before they submit anything.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::net::api::HttpApi;

/// CSS modifier and label for the liveness badge. `None` means the probe has
/// not answered yet.
fn health_indicator(healthy: Option<bool>) -> (&'static str, &'static str) {
    match healthy {
        None => ("header__status--checking", "checking"),
        Some(true) => ("header__status--online", "online"),
        Some(false) => ("header__status--offline", "offline"),
    }
}

/// Page header.
#[component]
pub fn Header() -> impl IntoView {
    let healthy = RwSignal::new(None::<bool>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let up = crate::net::api::ShortenerApi::check_api_health(&HttpApi::from_config()).await;
        log::debug!("shortening service health: {up}");
        healthy.set(Some(up));
    });

    let status_class = move || format!("header__status {}", health_indicator(healthy.get()).0);
    let status_label = move || health_indicator(healthy.get()).1;
    let service_title = HttpApi::from_config().base_url().to_owned();

    view! {
        <header class="header">
            <div class="header__content">
                <div class="header__logo">"URL Shortener"</div>
                <nav class="header__nav">
                    <a href="/">"Home"</a>
                    <a href="#about">"About"</a>
                </nav>
                <span class=status_class title=service_title>
                    "API: "
                    {status_label}
                </span>
            </div>
        </header>
    }
}
