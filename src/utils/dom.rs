//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use fsbrowse_core::Location;
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// How a navigation affects the history stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavMode {
    /// Add a new history entry.
    Push,
    /// Overwrite the current entry (redirects, search-box updates).
    Replace,
}

/// Decoded pathname of the current URL.
///
/// Falls back to the raw pathname when it is not valid percent-encoding.
pub fn pathname() -> String {
    let raw = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());

    js_sys::decode_uri_component(&raw)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or(raw)
}

/// Raw search string of the current URL, including the leading `?`.
pub fn search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Location parsed from the address bar.
pub fn current_location() -> Location {
    Location::parse(&pathname(), &search())
}

/// Update the address bar without reloading. Does not fire `popstate`.
pub fn set_url(url: &str, mode: NavMode) {
    let Some(history) = window().and_then(|w| w.history().ok()) else {
        return;
    };

    let result = match mode {
        NavMode::Push => history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url)),
        NavMode::Replace => {
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url))
        }
    };

    if let Err(err) = result {
        log::error!("Failed to update history for {}: {:?}", url, err);
    }
}

/// Reload the page.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}
