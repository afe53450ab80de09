use super::*;
use axum::http::header::LOCATION;

fn state() -> RedirectState {
    RedirectState { api_base_url: Arc::from("http://localhost:8010") }
}

#[test]
fn alias_from_path_accepts_single_segment() {
    assert_eq!(alias_from_path("/abc123"), Some("abc123"));
}

#[test]
fn alias_from_path_keeps_percent_encoding() {
    assert_eq!(alias_from_path("/a%20b"), Some("a%20b"));
}

#[test]
fn alias_from_path_rejects_root_and_nested_paths() {
    assert_eq!(alias_from_path("/"), None);
    assert_eq!(alias_from_path(""), None);
    assert_eq!(alias_from_path("/pkg/app.wasm"), None);
    assert_eq!(alias_from_path("/abc/"), None);
}

#[test]
fn redirect_target_joins_base_and_alias() {
    assert_eq!(redirect_target("http://localhost:8010", "abc"), "http://localhost:8010/abc");
    assert_eq!(redirect_target("https://api.sho.rt/", "abc"), "https://api.sho.rt/abc");
}

#[tokio::test]
async fn forward_alias_redirects_single_segment() {
    let resp = forward_alias(State(state()), Uri::from_static("/abc")).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "http://localhost:8010/abc");
}

#[tokio::test]
async fn forward_alias_ignores_query_string() {
    let resp = forward_alias(State(state()), Uri::from_static("/abc?utm=x")).await;
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "http://localhost:8010/abc");
}

#[tokio::test]
async fn forward_alias_404s_nested_path() {
    let resp = forward_alias(State(state()), Uri::from_static("/a/b")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
