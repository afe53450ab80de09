use super::*;

#[test]
fn resolve_api_base_url_defaults_when_unset() {
    assert_eq!(resolve_api_base_url(None), DEFAULT_API_BASE_URL);
}

#[test]
fn resolve_api_base_url_defaults_when_blank() {
    assert_eq!(resolve_api_base_url(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn resolve_api_base_url_trims_whitespace_and_trailing_slashes() {
    assert_eq!(
        resolve_api_base_url(Some(" https://sho.rt/api// ")),
        "https://sho.rt/api"
    );
}

#[test]
fn timeouts_match_documented_values() {
    assert_eq!(REQUEST_TIMEOUT, Duration::from_secs(10));
    assert_eq!(NOTICE_DISMISS_AFTER, Duration::from_secs(3));
}
