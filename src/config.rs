//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Query-parameter names and backend error strings live in `fsbrowse-core`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the navigation bar and login page.
pub const APP_NAME: &str = "fsbrowse";

// =============================================================================
// Network Configuration
// =============================================================================

/// Backend base URL, overridable at build time with `FSBROWSE_API_URL`.
pub const API_URL: &str = match option_env!("FSBROWSE_API_URL") {
    Some(url) => url,
    None => "https://localhost:8081/api/v1",
};

/// Absolute URL of an API endpoint.
pub fn api_url(endpoint: &str) -> String {
    format!("{}/{}", API_URL.trim_end_matches('/'), endpoint)
}

// =============================================================================
// Timing
// =============================================================================

/// Delay between the last keystroke in the search box and the URL update.
pub const FILTER_DEBOUNCE_MS: u32 = 300;

/// How long a listing must be loading before the indicator appears.
pub const LOADING_INDICATOR_DELAY_MS: u32 = 200;

// =============================================================================
// Logging
// =============================================================================

#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Debug;

#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;

// =============================================================================
// Icon Theme
// =============================================================================

/// Available icon themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(dead_code)]
pub enum IconTheme {
    /// Lucide icons (clean, consistent line icons)
    Lucide,
    /// Bootstrap icons (filled style)
    Bootstrap,
}

/// Current icon theme. Change this to switch all icons.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
