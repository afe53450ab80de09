//! Wire DTOs exchanged with the shortening service.
//!
//! DESIGN
//! ======
//! Field names mirror the service's JSON exactly. `status == "OK"` is the
//! only success marker; every other status string is a failure whose
//! explanation travels in `error`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Status string the service uses for successful responses.
pub const STATUS_OK: &str = "OK";

/// Status assigned to failures that carry no status of their own.
pub const STATUS_ERROR: &str = "ERROR";

/// Message shown for transport failures and unusable responses.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Body of `POST /url`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRequest {
    /// Absolute URL to shorten.
    pub url: String,
    /// Requested alias; the service generates one when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

/// Response of `POST /url`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlResponse {
    pub status: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UrlResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// The created alias, present only on a successful response.
    pub fn created_alias(&self) -> Option<&str> {
        if !self.is_ok() {
            return None;
        }
        self.alias.as_deref().filter(|alias| !alias.is_empty())
    }
}

/// Response of `DELETE /url/{alias}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl DeleteResponse {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// HTTP Basic credentials sent with every authenticated call.
///
/// Lives only in page state; never written to storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthCredentials {
    pub username: String,
    pub password: String,
}

/// Failure returned by every API call.
///
/// Either the service's own `{status, error}` body, or the generic
/// network error when no usable body exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub status: String,
    pub error: String,
}

impl ApiError {
    /// The normalized transport failure.
    pub fn network() -> Self {
        Self {
            status: STATUS_ERROR.to_owned(),
            error: NETWORK_ERROR_MESSAGE.to_owned(),
        }
    }

    /// Interpret a non-2xx response body.
    ///
    /// A JSON body with a non-empty `error` is surfaced verbatim; anything
    /// else collapses to [`ApiError::network`].
    pub fn from_failure_body(body: &str) -> Self {
        #[derive(Deserialize)]
        struct FailureBody {
            status: Option<String>,
            error: Option<String>,
        }

        let Ok(parsed) = serde_json::from_str::<FailureBody>(body) else {
            return Self::network();
        };
        match parsed.error.filter(|error| !error.is_empty()) {
            Some(error) => Self {
                status: parsed
                    .status
                    .filter(|status| !status.is_empty())
                    .unwrap_or_else(|| STATUS_ERROR.to_owned()),
                error,
            },
            None => Self::network(),
        }
    }
}
