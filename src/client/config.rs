/**
 * Client Configuration
 *
 * Holds the backend base URL and builds full endpoint URLs. The auth
 * endpoints live under a configurable base path so the client can track
 * a backend that mounts them elsewhere.
 */

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Default base path for the auth endpoints
const DEFAULT_API_BASE: &str = "/api/auth";

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
    api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        let server_url = std::env::var("CLIENT_API_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self {
            server_url,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pointing at an explicit server URL
    pub fn with_server_url(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Override the auth endpoint base path
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Full URL for an auth endpoint, e.g. `api_url("/login")`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.server_url, self.api_base, path)
    }
}
