use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Connection details of the authorization server the pipeline talks to
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthServerConfig {
    /// Base URL of the authorization server, e.g. `https://auth.example.com`
    pub url: Url,

    /// Client identifier of this service
    pub client_id: String,

    /// Client secret of this service
    #[serde(default)]
    pub client_secret: String,

    /// Request timeout for authorization server calls in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_timeout() -> u64 {
    10
}

impl AuthServerConfig {
    pub fn new(url: Url, client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            url,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout: default_timeout(),
        }
    }

    /// Returns the URL of an endpoint below the configured base URL.
    ///
    /// A base URL that carries a path (`https://host/tenant`) keeps it, and a
    /// trailing slash on the base does not produce a double slash.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        let base = self.url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Url::parse(&format!("{}/{}", base, path))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
