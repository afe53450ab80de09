//! Clipboard writes through the async Clipboard API.
//!
//! Requires a browser environment; SSR and native builds report failure.

/// Copy `text` to the system clipboard. Returns whether the write succeeded.
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let promise = window.navigator().clipboard().write_text(text);
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => true,
            Err(e) => {
                log::warn!("clipboard write rejected: {e:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}
