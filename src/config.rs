//! Client Configuration
//!
//! Base URL of the backend API, overridable per browser via localStorage.

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const BASE_URL_KEY: &str = "api_base_url";

/// Backend base URL. Reads the `api_base_url` localStorage override first so
/// a deployment can point the client at another API host without a rebuild.
pub fn base_url() -> String {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(BASE_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
