//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and the shortener form, reading and
//! writing shared state from Leptos context providers.

pub mod auth_settings;
pub mod delete_form;
pub mod header;
pub mod short_link;
pub mod url_shortener;
