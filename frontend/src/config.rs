use web_sys::window;

/// Base URL for the tabulated-function service. The service serves the
/// compiled bundle itself in production, so relative URLs work there; during
/// local development the frontend dev server and the service run on
/// different ports.
pub fn get_api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            if !host.starts_with("localhost") && !host.starts_with("127.0.0.1") {
                // Same origin as the page.
                return String::new();
            }
        }
    }

    // Default for local development: the service listens on 8080.
    "http://127.0.0.1:8080".to_string()
}
