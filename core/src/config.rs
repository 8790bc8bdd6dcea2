//! Client configuration.

use std::time::Duration;

/// Production API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.short.io";

/// Path of the public link creation endpoint, relative to the base URL.
pub const LINKS_PUBLIC_PATH: &str = "/links/public";

/// Settings shared by every request a `ShortIoClient` makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    /// Overall deadline per request. `None` keeps the transport's defaults.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// API origin, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the link creation endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, LINKS_PUBLIC_PATH)
    }
}
