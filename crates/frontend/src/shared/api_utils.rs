//! API utilities for frontend-backend communication
//!
//! Provides the base URL and the timezone hint used by the API client.

use web_sys::window;

const API_BASE_OVERRIDE_KEY: &str = "admin_portal_api_base";

/// Get the base URL for API requests
///
/// A value saved under `admin_portal_api_base` in localStorage wins (used to
/// point a local build at a staging API). Otherwise the URL is built from the
/// current window location, using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match window() {
        Some(w) => w,
        None => return String::new(),
    };

    let saved = window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(API_BASE_OVERRIDE_KEY).ok().flatten())
        .filter(|v| !v.trim().is_empty());
    if let Some(base) = saved {
        return base.trim_end_matches('/').to_string();
    }

    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// IANA timezone of the browser (e.g. "Asia/Riyadh"), sent as `X-Timezone`
pub fn browser_timezone() -> Option<String> {
    let options = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new())
        .resolved_options();
    js_sys::Reflect::get(&options, &"timeZone".into())
        .ok()
        .and_then(|v| v.as_string())
}

/// Path with a percent-encoded id segment appended
pub fn with_id(path: &str, id: impl std::fmt::Display) -> String {
    format!("{}/{}", path, urlencoding::encode(&id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_id() {
        assert_eq!(with_id("/api/departments", 7), "/api/departments/7");
        assert_eq!(with_id("/api/files", "a b"), "/api/files/a%20b");
    }
}
