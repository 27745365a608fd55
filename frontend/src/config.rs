use web_sys::window;

pub fn get_api_base_url() -> String {
    // Served by the backend itself: relative URLs. The trunk dev server on
    // port 8080 is the only case that needs an absolute backend address.
    if let Some(window) = window() {
        if let Ok(location) = window.location().host() {
            if !location.ends_with(":8080") {
                return "".to_string();
            }
        }
    }

    // Default to the local backend for development
    "http://127.0.0.1:3000".to_string()
}

pub fn proxy_url(path: &str) -> String {
    format!(
        "{}/api/proxy/{}",
        get_api_base_url(),
        path.trim_start_matches('/')
    )
}
