//! Client-side UI state.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data wrapped in `RwSignal` and shared through
//! Leptos context, so transitions stay testable off the browser.

pub mod shortener;
