use super::*;

// =============================================================
// UrlRequest
// =============================================================

#[test]
fn url_request_omits_missing_alias() {
    let req = UrlRequest { url: "https://example.com".to_owned(), alias: None };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "url": "https://example.com" }));
}

#[test]
fn url_request_includes_alias_when_set() {
    let req = UrlRequest { url: "https://example.com".to_owned(), alias: Some("abc".to_owned()) };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "url": "https://example.com", "alias": "abc" }));
}

// =============================================================
// UrlResponse
// =============================================================

#[test]
fn url_response_created_alias_on_ok() {
    let resp: UrlResponse = serde_json::from_str(r#"{"status":"OK","alias":"abc"}"#).unwrap();
    assert!(resp.is_ok());
    assert_eq!(resp.created_alias(), Some("abc"));
    assert!(resp.error.is_none());
}

#[test]
fn url_response_ignores_alias_on_error_status() {
    let resp: UrlResponse =
        serde_json::from_str(r#"{"status":"Error","alias":"abc","error":"url already exists"}"#).unwrap();
    assert!(!resp.is_ok());
    assert_eq!(resp.created_alias(), None);
    assert_eq!(resp.error.as_deref(), Some("url already exists"));
}

#[test]
fn url_response_ok_with_empty_alias_has_no_created_alias() {
    let resp: UrlResponse = serde_json::from_str(r#"{"status":"OK","alias":""}"#).unwrap();
    assert_eq!(resp.created_alias(), None);
}

#[test]
fn delete_response_parses_bare_status() {
    let resp: DeleteResponse = serde_json::from_str(r#"{"status":"OK"}"#).unwrap();
    assert!(resp.is_ok());
    assert!(resp.error.is_none());
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn api_error_network_shape() {
    let err = ApiError::network();
    assert_eq!(err.status, "ERROR");
    assert_eq!(err.error, "Network error");
    assert_eq!(err.to_string(), "Network error");
}

#[test]
fn api_error_from_structured_body_is_verbatim() {
    let err = ApiError::from_failure_body(r#"{"status":"Error","error":"url already exists"}"#);
    assert_eq!(err, ApiError { status: "Error".to_owned(), error: "url already exists".to_owned() });
}

#[test]
fn api_error_from_body_without_status_defaults_to_error() {
    let err = ApiError::from_failure_body(r#"{"error":"unauthorized"}"#);
    assert_eq!(err.status, "ERROR");
    assert_eq!(err.error, "unauthorized");
}

#[test]
fn api_error_from_plain_text_body_is_network_error() {
    assert_eq!(ApiError::from_failure_body("Unauthorized\n"), ApiError::network());
}

#[test]
fn api_error_from_empty_body_is_network_error() {
    assert_eq!(ApiError::from_failure_body(""), ApiError::network());
}

#[test]
fn api_error_from_body_with_blank_error_is_network_error() {
    assert_eq!(ApiError::from_failure_body(r#"{"status":"Error","error":""}"#), ApiError::network());
}
