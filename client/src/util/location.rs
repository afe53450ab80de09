//! Page location helpers.

/// Origin of the current page (`scheme://host[:port]`), or an empty string
/// outside the browser.
pub fn page_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
