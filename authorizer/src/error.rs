use reqwest::StatusCode;
use thiserror::Error;

/// Why a single call to the authorization server did not produce a usable response
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request failed with status: {0}")]
    Status(StatusCode),

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response is missing field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Failures of the decision pipeline.
///
/// Both variants surface to the gateway as the same internal error signal,
/// the distinction only exists for logging.
#[derive(Error, Debug)]
pub enum AuthorizerError {
    #[error("Service token acquisition failed: {0}")]
    TokenAcquisition(#[source] ExchangeError),

    #[error("Token introspection failed: {0}")]
    Introspection(#[source] ExchangeError),
}
