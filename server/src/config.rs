//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8010";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid SHORT_URL_API_BASE_URL: {0}")]
    InvalidApiBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Shortening service that `/{alias}` requests are forwarded to, without
    /// a trailing slash.
    pub api_base_url: String,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SHORT_URL_API_BASE_URL`: default `http://localhost:8010`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a port number or the base URL is
    /// not an absolute `http(s)` URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_base_url = lookup("SHORT_URL_API_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let api_base_url = api_base_url.trim().trim_end_matches('/').to_owned();
        let is_http = url::Url::parse(&api_base_url)
            .is_ok_and(|u| matches!(u.scheme(), "http" | "https") && u.has_host());
        if !is_http {
            return Err(ConfigError::InvalidApiBaseUrl(api_base_url));
        }

        Ok(Self { port, api_base_url })
    }
}
