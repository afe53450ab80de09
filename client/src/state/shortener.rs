//! Form state for the shortener page.
//!
//! DESIGN
//! ======
//! Every user action is split into a synchronous `begin_*` step that
//! validates input and yields the request to send (or nothing), and a
//! `finish_*` step that folds the API result back in. Components own the
//! async glue; everything here is plain data so transitions can be tested
//! without a browser.
//!
//! Success and error banners share one [`Notice`] slot, so they can never be
//! shown together. Each new notice bumps `notice_seq`; delayed dismissals
//! carry the sequence they were scheduled for and leave newer notices alone.

#[cfg(test)]
#[path = "shortener_test.rs"]
mod shortener_test;

use crate::net::types::{ApiError, AuthCredentials, DeleteResponse, UrlRequest, UrlResponse};
use crate::util::alias::generate_alias;

pub const MSG_URL_REQUIRED: &str = "Please enter a URL";
pub const MSG_URL_INVALID: &str = "Please enter a valid URL";
pub const MSG_CREATED: &str = "Short link created!";
pub const MSG_CREATE_FAILED: &str = "Failed to create the short link";
pub const MSG_COPIED: &str = "Link copied to clipboard!";
pub const MSG_COPY_FAILED: &str = "Could not copy the link";
pub const MSG_DELETE_ALIAS_REQUIRED: &str = "Please enter an alias to delete";
pub const MSG_DELETED: &str = "Link deleted!";
pub const MSG_DELETE_FAILED: &str = "Failed to delete the link";

/// Coarse phase of the form, derived from [`ShortenerState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    Success,
    Error,
}

/// Transient banner under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Which request is in flight, for button labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingAction {
    Create,
    Delete,
}

/// The short link currently on display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortLink {
    pub alias: String,
    pub url: String,
}

/// All state behind the shortener form.
#[derive(Clone, Debug, Default)]
pub struct ShortenerState {
    pub url: String,
    pub alias: String,
    pub delete_alias: String,
    pub credentials: AuthCredentials,
    pub short_link: Option<ShortLink>,
    pub pending: Option<PendingAction>,
    pub notice: Option<Notice>,
    pub notice_seq: u64,
}

impl ShortenerState {
    pub fn phase(&self) -> FormPhase {
        if self.pending.is_some() {
            return FormPhase::Submitting;
        }
        match self.notice {
            None => FormPhase::Idle,
            Some(Notice::Success(_)) => FormPhase::Success,
            Some(Notice::Error(_)) => FormPhase::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.notice {
            Some(Notice::Error(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.notice {
            Some(Notice::Success(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Start a create action.
    ///
    /// Returns the request and credentials to send, or `None` when a request
    /// is already in flight or the input failed validation (the error is
    /// then shown inline).
    pub fn begin_create(&mut self) -> Option<(UrlRequest, AuthCredentials)> {
        if self.is_loading() {
            return None;
        }
        self.notice = None;
        match validate_create_input(&self.url, &self.alias) {
            Ok(request) => {
                self.pending = Some(PendingAction::Create);
                Some((request, self.credentials.clone()))
            }
            Err(msg) => {
                self.show_error(msg);
                None
            }
        }
    }

    /// Fold the create result back in. `origin` is the page origin the short
    /// link is built on.
    pub fn finish_create(&mut self, result: Result<UrlResponse, ApiError>, origin: &str) {
        self.pending = None;
        match result {
            Ok(response) => {
                if let Some(alias) = response.created_alias() {
                    self.short_link = Some(ShortLink {
                        alias: alias.to_owned(),
                        url: short_url_for(origin, alias),
                    });
                    self.url.clear();
                    self.alias.clear();
                    self.show_success(MSG_CREATED);
                } else {
                    let msg = response
                        .error
                        .filter(|e| !e.is_empty())
                        .unwrap_or_else(|| MSG_CREATE_FAILED.to_owned());
                    self.show_error(msg);
                }
            }
            Err(e) => self.show_api_error(e, MSG_CREATE_FAILED),
        }
    }

    /// Start a delete action. Returns the trimmed alias and credentials, or
    /// `None` when busy or the alias is blank.
    pub fn begin_delete(&mut self) -> Option<(String, AuthCredentials)> {
        if self.is_loading() {
            return None;
        }
        self.notice = None;
        match validate_delete_alias(&self.delete_alias) {
            Ok(alias) => {
                self.pending = Some(PendingAction::Delete);
                Some((alias, self.credentials.clone()))
            }
            Err(msg) => {
                self.show_error(msg);
                None
            }
        }
    }

    /// Fold the delete result back in. Clears the displayed link when it
    /// points at the deleted alias.
    pub fn finish_delete(&mut self, alias: &str, result: Result<DeleteResponse, ApiError>) {
        self.pending = None;
        match result {
            Ok(response) if response.is_ok() => {
                self.delete_alias.clear();
                if self.short_link.as_ref().is_some_and(|link| link.alias == alias) {
                    self.short_link = None;
                }
                self.show_success(MSG_DELETED);
            }
            Ok(response) => {
                let msg = response
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| MSG_DELETE_FAILED.to_owned());
                self.show_error(msg);
            }
            Err(e) => self.show_api_error(e, MSG_DELETE_FAILED),
        }
    }

    /// Replace the alias field with a random suggestion.
    pub fn regenerate_alias(&mut self) {
        self.alias = generate_alias();
    }

    /// Record the outcome of a clipboard write.
    ///
    /// Returns the notice sequence to dismiss later when the copy succeeded.
    pub fn finish_copy(&mut self, copied: bool) -> Option<u64> {
        if copied {
            self.show_success(MSG_COPIED);
            Some(self.notice_seq)
        } else {
            self.show_error(MSG_COPY_FAILED);
            None
        }
    }

    /// Clear the notice if it is still the one numbered `seq`.
    pub fn dismiss_notice(&mut self, seq: u64) {
        if self.notice_seq == seq {
            self.notice = None;
        }
    }

    fn show_api_error(&mut self, err: ApiError, fallback: &str) {
        if err.error.is_empty() {
            self.show_error(fallback);
        } else {
            self.show_error(err.error);
        }
    }

    fn show_success(&mut self, msg: impl Into<String>) {
        self.notice_seq += 1;
        self.notice = Some(Notice::Success(msg.into()));
    }

    fn show_error(&mut self, msg: impl Into<String>) {
        self.notice_seq += 1;
        self.notice = Some(Notice::Error(msg.into()));
    }
}

/// Validate the create form and build the request.
///
/// # Errors
///
/// Returns the inline message for an empty or non-absolute URL.
pub fn validate_create_input(url: &str, alias: &str) -> Result<UrlRequest, &'static str> {
    let url = url.trim();
    if url.is_empty() {
        return Err(MSG_URL_REQUIRED);
    }
    if !is_valid_url(url) {
        return Err(MSG_URL_INVALID);
    }
    let alias = alias.trim();
    Ok(UrlRequest {
        url: url.to_owned(),
        alias: (!alias.is_empty()).then(|| alias.to_owned()),
    })
}

/// Validate the delete form.
///
/// # Errors
///
/// Returns the inline message for a blank alias.
pub fn validate_delete_alias(alias: &str) -> Result<String, &'static str> {
    let alias = alias.trim();
    if alias.is_empty() {
        return Err(MSG_DELETE_ALIAS_REQUIRED);
    }
    Ok(alias.to_owned())
}

/// Whether `raw` parses as an absolute URL.
pub fn is_valid_url(raw: &str) -> bool {
    url::Url::parse(raw).is_ok()
}

/// The user-facing short link: page origin, `/`, alias.
pub fn short_url_for(origin: &str, alias: &str) -> String {
    format!("{}/{alias}", origin.trim_end_matches('/'))
}
