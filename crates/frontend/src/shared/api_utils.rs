//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port of the gateway serving `/api/*`
pub const API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Built from the current window location with the gateway port,
/// e.g. "http://localhost:3000". Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    build_api_base(&protocol, &hostname, API_PORT)
}

/// `protocol` comes from `Location::protocol()` and keeps its trailing colon
pub fn build_api_base(protocol: &str, hostname: &str, port: u16) -> String {
    let hostname = if hostname.is_empty() { "127.0.0.1" } else { hostname };
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/api/analyze");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
