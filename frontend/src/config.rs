use serde::{Deserialize, Serialize};

/// Backend URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";

/// Port the backend listens on when the app is served from a loopback host.
pub const LOOPBACK_API_PORT: u16 = 8001;

// Baked in at build time: `HRMS_API_URL=https://api.example.com trunk build`.
const BUILD_TIME_API_URL: Option<&str> = option_env!("HRMS_API_URL");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let raw = api_base_url.into();
        Self {
            api_base_url: raw.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Resolves the configuration for the running page.
    pub fn from_environment() -> Self {
        let explicit = BUILD_TIME_API_URL
            .map(str::to_string)
            .or_else(base_url_from_env_js);
        Self::resolve(explicit.as_deref(), page_origin().as_ref())
    }

    /// Explicit value, then the page origin, then [`DEFAULT_API_BASE_URL`].
    pub fn resolve(explicit: Option<&str>, origin: Option<&PageOrigin>) -> Self {
        if let Some(url) = explicit.filter(|url| !url.trim().is_empty()) {
            return Self::new(url);
        }
        if let Some(origin) = origin.filter(|origin| !origin.hostname.is_empty()) {
            return Self::new(origin.api_base_url());
        }
        Self::default()
    }
}

/// The parts of `window.location` that decide where the backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOrigin {
    /// Scheme including the trailing colon, as `Location.protocol` reports it.
    pub protocol: String,
    pub hostname: String,
}

impl PageOrigin {
    pub fn new(protocol: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            hostname: hostname.into(),
        }
    }

    pub fn is_loopback(&self) -> bool {
        self.hostname.contains("localhost")
            || self.hostname == "127.0.0.1"
            || self.hostname == "[::1]"
    }

    fn api_base_url(&self) -> String {
        let protocol = if self.protocol.ends_with(':') {
            self.protocol.clone()
        } else {
            format!("{}:", self.protocol)
        };
        if self.is_loopback() {
            format!("{}//{}:{}", protocol, self.hostname, LOOPBACK_API_PORT)
        } else {
            format!("{}//{}", protocol, self.hostname)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<PageOrigin> {
    let location = web_sys::window()?.location();
    Some(PageOrigin::new(
        location.protocol().ok()?,
        location.hostname().ok()?,
    ))
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<PageOrigin> {
    None
}

#[cfg(target_arch = "wasm32")]
fn base_url_from_env_js() -> Option<String> {
    // Optional global injected by the hosting page: window.__HRMS_ENV = { API_BASE_URL: "..." }
    let window = web_sys::window()?;
    let env = js_sys::Reflect::get(&window, &"__HRMS_ENV".into()).ok()?;
    if env.is_undefined() || env.is_null() {
        return None;
    }
    js_sys::Reflect::get(&env, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&env, &"api_base_url".into()).ok())
        .and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn base_url_from_env_js() -> Option<String> {
    None
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn reads_origin_from_window_location() {
        let origin = page_origin().expect("browser location");
        assert!(origin.protocol.ends_with(':'));
        assert!(!AppConfig::from_environment().api_base_url().is_empty());
    }
}
