use crate::client::AuthServer;
use crate::credential::BearerCredential;
use crate::error::AuthorizerError;
use crate::policy::{AuthorizationDecision, Effect};
use crate::resource::ParsedResource;
use log::{debug, error, info, warn};
use serde::Deserialize;
use utoipa::ToSchema;

/// The gateway's request to authorize one invocation
#[derive(Debug, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    /// Identifier of the invoked operation, echoed back in the policy
    #[serde(rename = "methodArn", default)]
    pub method_arn: String,
    /// Raw authorization value supplied by the caller, expected as `Bearer <token>`
    #[serde(rename = "authorizationToken", default)]
    pub authorization_token: Option<String>,
}

impl InvocationRequest {
    pub fn new(method_arn: impl Into<String>, authorization_token: Option<&str>) -> Self {
        Self {
            method_arn: method_arn.into(),
            authorization_token: authorization_token.map(str::to_string),
        }
    }
}

/// Terminal state of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The introspection completed, the policy allows or denies the invocation
    Decision(AuthorizationDecision),
    /// No bearer credential was presented, the gateway answers 401
    Unauthorized,
    /// The authorization server could not be consulted, the gateway answers 5xx
    InternalError,
}

/// Runs the authorization decision pipeline against an [`AuthServer`].
///
/// Holds no per-decision state, every call to [`Authorizer::authorize`]
/// acquires its own service token and discards it afterwards.
#[derive(Debug, Clone)]
pub struct Authorizer<S> {
    auth_server: S,
}

impl<S: AuthServer> Authorizer<S> {
    pub fn new(auth_server: S) -> Self {
        Self { auth_server }
    }

    pub fn auth_server(&self) -> &S {
        &self.auth_server
    }

    /// Decides whether the caller may invoke the requested resource
    pub async fn authorize(&self, request: &InvocationRequest) -> Outcome {
        let resource = ParsedResource::parse(Some(request.method_arn.as_str()));
        let method = resource.method_or_dash();
        let path = resource.path_or_dash();

        let Some(credential) = BearerCredential::extract(request.authorization_token.as_deref())
        else {
            warn!("[{}] {} -> No access token.", method, path);
            return Outcome::Unauthorized;
        };

        match self.decide(&request.method_arn, &credential).await {
            Ok(decision) => {
                info!(
                    "[{}] {} -> {} for principal '{}'",
                    method,
                    path,
                    decision.effect().map_or("-", Effect::as_str),
                    decision.principal_id
                );
                Outcome::Decision(decision)
            }
            Err(err) => {
                error!("[{}] {} -> {}", method, path, err);
                Outcome::InternalError
            }
        }
    }

    async fn decide(
        &self,
        method_arn: &str,
        credential: &BearerCredential,
    ) -> Result<AuthorizationDecision, AuthorizerError> {
        let service_token = self
            .auth_server
            .acquire_service_token()
            .await
            .map_err(AuthorizerError::TokenAcquisition)?;
        debug!("Service token acquired, introspecting caller credential");

        let verdict = self
            .auth_server
            .introspect(&service_token, credential)
            .await
            .map_err(AuthorizerError::Introspection)?;

        Ok(AuthorizationDecision::from_verdict(verdict, method_arn))
    }
}
