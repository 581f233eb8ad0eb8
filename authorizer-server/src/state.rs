use crate::config::AuthorizerConfig;
use authorizer::{Authorizer, HttpAuthServer};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AuthorizerConfig>,
    pub authorizer: Arc<Authorizer<HttpAuthServer>>,
}

impl AppState {
    pub fn new(config: &AuthorizerConfig) -> Result<Self, std::io::Error> {
        let auth_server = HttpAuthServer::new(config.auth_server.clone()).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to create authorization server client: {}", e),
            )
        })?;

        Ok(Self {
            config: Arc::new(config.clone()),
            authorizer: Arc::new(Authorizer::new(auth_server)),
        })
    }
}
