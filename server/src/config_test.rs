use std::collections::HashMap;

use super::*;

fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let env: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = load(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = load(&[("PORT", "8080"), ("SHORT_URL_API_BASE_URL", "https://api.sho.rt/")]).unwrap();
    assert_eq!(cfg, ServerConfig { port: 8080, api_base_url: "https://api.sho.rt".to_owned() });
}

#[test]
fn from_lookup_blank_base_url_falls_back_to_default() {
    let cfg = load(&[("SHORT_URL_API_BASE_URL", "  ")]).unwrap();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_lookup_rejects_bad_port() {
    assert_eq!(load(&[("PORT", "http")]), Err(ConfigError::InvalidPort("http".to_owned())));
    assert!(matches!(load(&[("PORT", "70000")]), Err(ConfigError::InvalidPort(_))));
}

#[test]
fn from_lookup_rejects_relative_base_url() {
    assert_eq!(
        load(&[("SHORT_URL_API_BASE_URL", "localhost:8010")]).map_err(|e| e.to_string()),
        Err("invalid SHORT_URL_API_BASE_URL: localhost:8010".to_owned())
    );
}

#[test]
fn from_lookup_rejects_non_http_base_url() {
    assert!(matches!(
        load(&[("SHORT_URL_API_BASE_URL", "ftp://files.example.com")]),
        Err(ConfigError::InvalidApiBaseUrl(_))
    ));
}
