//! REST client for the shortening service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! [`REQUEST_TIMEOUT`](crate::config::REQUEST_TIMEOUT).
//! Server-side (SSR) and native tests: stubs that report the network error,
//! since these calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes an [`ApiError`]. A non-2xx response with a
//! structured `{status, error}` body is surfaced verbatim; transport
//! failures, timeouts, and undecodable bodies all collapse to
//! [`ApiError::network`], so callers never branch on the failure kind.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::de::DeserializeOwned;
use url::Url;

use super::types::{ApiError, AuthCredentials, DeleteResponse, UrlRequest, UrlResponse};

/// Operations the page needs from the shortening service.
///
/// The page talks to [`HttpApi`]; tests substitute a recording double.
#[allow(async_fn_in_trait)]
pub trait ShortenerApi {
    /// Create a short link via `POST /url`.
    ///
    /// # Errors
    ///
    /// Returns the service's structured error, or the network error.
    async fn create_short_url(
        &self,
        request: &UrlRequest,
        credentials: &AuthCredentials,
    ) -> Result<UrlResponse, ApiError>;

    /// Delete an alias via `DELETE /url/{alias}`.
    ///
    /// # Errors
    ///
    /// Returns the service's structured error, or the network error.
    async fn delete_url(&self, alias: &str, credentials: &AuthCredentials) -> Result<DeleteResponse, ApiError>;

    /// Best-effort liveness probe via `GET /health`.
    async fn check_api_health(&self) -> bool;
}

/// HTTP implementation of [`ShortenerApi`] rooted at a base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Client for the base URL baked in at build time.
    pub fn from_config() -> Self {
        Self::new(crate::config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ShortenerApi for HttpApi {
    async fn create_short_url(
        &self,
        request: &UrlRequest,
        credentials: &AuthCredentials,
    ) -> Result<UrlResponse, ApiError> {
        let url = endpoint(&self.base_url, &["url"])?;
        #[cfg(feature = "hydrate")]
        {
            let built = gloo_net::http::Request::post(&url)
                .header("Authorization", &basic_auth_header(credentials))
                .json(request);
            let (ok, body) = transport::execute(built).await?;
            decode_response(ok, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, request, credentials);
            Err(ApiError::network())
        }
    }

    async fn delete_url(&self, alias: &str, credentials: &AuthCredentials) -> Result<DeleteResponse, ApiError> {
        let url = endpoint(&self.base_url, &["url", alias])?;
        #[cfg(feature = "hydrate")]
        {
            let built = gloo_net::http::Request::delete(&url)
                .header("Authorization", &basic_auth_header(credentials))
                .build();
            let (ok, body) = transport::execute(built).await?;
            decode_response(ok, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, credentials);
            Err(ApiError::network())
        }
    }

    async fn check_api_health(&self) -> bool {
        let Ok(url) = endpoint(&self.base_url, &["health"]) else {
            return false;
        };
        #[cfg(feature = "hydrate")]
        {
            let built = gloo_net::http::Request::get(&url).build();
            matches!(transport::execute(built).await, Ok((true, _)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            false
        }
    }
}

/// Join `segments` onto `base`, percent-encoding each one as a single path
/// segment.
///
/// # Errors
///
/// Returns the network error if `base` is not an absolute hierarchical URL.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<String, ApiError> {
    let mut url = Url::parse(base).map_err(|_| ApiError::network())?;
    url.path_segments_mut()
        .map_err(|()| ApiError::network())?
        .pop_if_empty()
        .extend(segments);
    Ok(url.into())
}

/// `Authorization` header value for HTTP Basic auth.
pub fn basic_auth_header(credentials: &AuthCredentials) -> String {
    let raw = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", STANDARD.encode(raw))
}

/// Decode a response body according to the error policy.
///
/// # Errors
///
/// 2xx bodies that do not decode as `T` become the network error; non-2xx
/// bodies go through [`ApiError::from_failure_body`].
pub fn decode_response<T: DeserializeOwned>(ok: bool, body: &str) -> Result<T, ApiError> {
    if !ok {
        return Err(ApiError::from_failure_body(body));
    }
    serde_json::from_str(body).map_err(|_| ApiError::network())
}

#[cfg(feature = "hydrate")]
mod transport {
    use futures::future::{Either, select};

    use crate::config::REQUEST_TIMEOUT;
    use crate::net::types::ApiError;

    /// Send a built request and read its body, bounded by the request timeout.
    ///
    /// Returns whether the status was 2xx together with the raw body text.
    pub(super) async fn execute(
        built: Result<gloo_net::http::Request, gloo_net::Error>,
    ) -> Result<(bool, String), ApiError> {
        let request = built.map_err(|e| {
            log::warn!("failed to build request: {e}");
            ApiError::network()
        })?;
        let exchange = Box::pin(async move {
            let response = request.send().await?;
            let ok = response.ok();
            let body = response.text().await?;
            Ok::<_, gloo_net::Error>((ok, body))
        });
        let timeout = Box::pin(gloo_timers::future::sleep(REQUEST_TIMEOUT));

        match select(exchange, timeout).await {
            Either::Left((Ok(result), _)) => Ok(result),
            Either::Left((Err(e), _)) => {
                log::warn!("request failed: {e}");
                Err(ApiError::network())
            }
            Either::Right(((), _)) => {
                log::warn!("request timed out after {}s", REQUEST_TIMEOUT.as_secs());
                Err(ApiError::network())
            }
        }
    }
}
