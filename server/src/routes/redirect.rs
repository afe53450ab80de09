//! Forwarding of short links to the shortening service.
//!
//! Displayed short links point at this host (`<origin>/<alias>`), while the
//! alias table lives in the shortening service. Any single-segment path the
//! router does not otherwise claim is treated as an alias and redirected to
//! the service, which performs the final redirect.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};

/// State for the fallback handler.
#[derive(Debug, Clone)]
pub struct RedirectState {
    pub api_base_url: Arc<str>,
}

/// Extract the alias from a request path of the form `/{alias}`.
///
/// The alias is returned still percent-encoded.
pub fn alias_from_path(path: &str) -> Option<&str> {
    let alias = path.strip_prefix('/')?;
    if alias.is_empty() || alias.contains('/') {
        return None;
    }
    Some(alias)
}

/// Service URL an alias resolves through.
pub fn redirect_target(api_base_url: &str, alias: &str) -> String {
    format!("{}/{alias}", api_base_url.trim_end_matches('/'))
}

pub async fn forward_alias(State(state): State<RedirectState>, uri: Uri) -> Response {
    match alias_from_path(uri.path()) {
        Some(alias) => {
            let target = redirect_target(&state.api_base_url, alias);
            tracing::debug!(%alias, %target, "forwarding short link");
            Redirect::temporary(&target).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
