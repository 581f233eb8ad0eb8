use crate::config::AuthServerConfig;
use crate::credential::BearerCredential;
use crate::error::ExchangeError;
use async_trait::async_trait;
use log::debug;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const TOKEN_ENDPOINT: &str = "/oauth/token";
pub const INTROSPECTION_ENDPOINT: &str = "/oauth/token/introspect";

/// Trait defining the calls the decision pipeline makes to the authorization server
#[async_trait]
pub trait AuthServer: Send + Sync {
    /// Exchanges the service's client credentials for an access token (client-credentials grant)
    async fn acquire_service_token(&self) -> Result<ServiceAccessToken, ExchangeError>;

    /// Asks the authorization server whether the caller's credential is active
    async fn introspect(
        &self,
        service_token: &ServiceAccessToken,
        credential: &BearerCredential,
    ) -> Result<IntrospectionVerdict, ExchangeError>;
}

/// Access token authorizing this service to call the introspection endpoint.
/// Obtained fresh for every decision and dropped with it.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceAccessToken(String);

impl ServiceAccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ServiceAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ServiceAccessToken(<redacted>)")
    }
}

/// Result of introspecting the caller's credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntrospectionVerdict {
    /// Whether the credential is currently active
    pub active: bool,
    /// Client the credential was issued to
    pub client_identity: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(rename = "accessToken", default)]
    access_token: Option<String>,
}

#[derive(Debug, Serialize)]
struct IntrospectionRequest<'a> {
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct IntrospectionResponse {
    #[serde(default)]
    active: Option<bool>,
    #[serde(default)]
    client_id: Option<String>,
}

/// [`AuthServer`] backed by HTTP calls to the configured authorization server
#[derive(Clone, Debug)]
pub struct HttpAuthServer {
    client: Client,
    config: AuthServerConfig,
}

impl HttpAuthServer {
    /// Creates a client with pooled connections and the configured request timeout
    pub fn new(config: AuthServerConfig) -> Result<Self, ExchangeError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(Duration::from_secs(2))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: AuthServerConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &AuthServerConfig {
        &self.config
    }

    async fn parse_response<R: DeserializeOwned>(response: Response) -> Result<R, ExchangeError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ExchangeError::Status(status));
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl AuthServer for HttpAuthServer {
    async fn acquire_service_token(&self) -> Result<ServiceAccessToken, ExchangeError> {
        let url = self.config.endpoint(TOKEN_ENDPOINT)?;
        debug!("Requesting service token from {}", url);

        let response = self
            .client
            .post(url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let token: TokenResponse = Self::parse_response(response).await?;
        match token.access_token {
            Some(access_token) if !access_token.is_empty() => {
                debug!("Service token acquired");
                Ok(ServiceAccessToken(access_token))
            }
            _ => Err(ExchangeError::MissingField("accessToken")),
        }
    }

    async fn introspect(
        &self,
        service_token: &ServiceAccessToken,
        credential: &BearerCredential,
    ) -> Result<IntrospectionVerdict, ExchangeError> {
        let url = self.config.endpoint(INTROSPECTION_ENDPOINT)?;
        debug!("Introspecting caller token at {}", url);

        let response = self
            .client
            .post(url)
            .bearer_auth(service_token.as_str())
            .json(&IntrospectionRequest {
                token: credential.as_str(),
            })
            .send()
            .await?;

        let introspection: IntrospectionResponse = Self::parse_response(response).await?;
        let active = introspection
            .active
            .ok_or(ExchangeError::MissingField("active"))?;
        // Inactive tokens are commonly answered with `{"active": false}` alone
        let client_identity = match introspection.client_id {
            Some(client_id) => client_id,
            None if !active => String::new(),
            None => return Err(ExchangeError::MissingField("client_id")),
        };

        debug!(
            "Introspection result: client_id={}, active={}",
            client_identity, active
        );
        Ok(IntrospectionVerdict {
            active,
            client_identity,
        })
    }
}
