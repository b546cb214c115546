//! Page title service.

/// Set the browser document title. Outside the browser this only leaves a
/// trace-level log line.
pub fn set_page_title(title: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::trace!(title, "page title");
    }
}
