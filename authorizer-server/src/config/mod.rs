use authorizer::AuthServerConfig;
use config::{Config as ConfigCrate, ConfigError, Environment};
use serde::Deserialize;

/// Main configuration structure for the authorizer server
#[derive(Debug, Deserialize, Clone)]
pub struct AuthorizerConfig {
    /// The port the authorizer server will listen to (default: 7766)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Authorization server the decisions are delegated to
    pub auth_server: AuthServerConfig,
}

fn default_port() -> u16 {
    7766
}

fn environment() -> Environment {
    Environment::with_prefix("AUTHORIZER")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl AuthorizerConfig {
    /// Creates a new Config instance from environment variables
    ///
    /// Nested keys use a double underscore, e.g. `AUTHORIZER_AUTH_SERVER__CLIENT_ID`.
    pub fn new() -> Result<Self, String> {
        Self::from_environment(environment())
    }

    fn from_environment(source: Environment) -> Result<Self, String> {
        let config: Self = ConfigCrate::builder()
            .add_source(source)
            .build()
            .map_err(|e: ConfigError| e.to_string())?
            .try_deserialize()
            .map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.auth_server.client_id.is_empty() {
            return Err("AUTHORIZER_AUTH_SERVER__CLIENT_ID must not be empty".to_string());
        }
        if self.auth_server.url.cannot_be_a_base() {
            return Err(format!(
                "AUTHORIZER_AUTH_SERVER__URL is not a valid base URL: {}",
                self.auth_server.url
            ));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn for_test_with_mock(auth_server_mock: &wiremock::MockServer) -> Self {
        Self {
            port: 0, // Let the OS choose a port
            auth_server: AuthServerConfig {
                url: auth_server_mock
                    .uri()
                    .parse()
                    .expect("Invalid mock server URL"),
                client_id: "test-client".to_string(),
                client_secret: "test-secret".to_string(),
                timeout: 5,
            },
        }
    }
}
