//! Networking modules for the shortening service's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and normalizes failures; `types` defines the
//! wire schema shared by requests, responses, and errors.

pub mod api;
pub mod types;
