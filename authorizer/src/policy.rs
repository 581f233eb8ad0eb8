use crate::client::IntrospectionVerdict;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const POLICY_VERSION: &str = "2012-10-17";
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Allow,
    Deny,
}

impl Effect {
    pub fn as_str(self) -> &'static str {
        match self {
            Effect::Allow => "Allow",
            Effect::Deny => "Deny",
        }
    }
}

/// Allow/Deny decision bound to the resource the gateway asked about.
///
/// Serializes to the policy document the gateway consumes:
///
/// ```json
/// {
///   "principalId": "client-42",
///   "policyDocument": {
///     "Version": "2012-10-17",
///     "Statement": [
///       { "Action": "execute-api:Invoke", "Effect": "Allow", "Resource": "arn:aws:execute-api:..." }
///     ]
///   }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct AuthorizationDecision {
    #[serde(rename = "principalId")]
    pub principal_id: String,
    #[serde(rename = "policyDocument")]
    pub policy_document: PolicyDocument,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub action: String,
    pub effect: Effect,
    pub resource: String,
}

impl AuthorizationDecision {
    /// Builds a single-statement invoke policy for `resource`
    pub fn new(principal_id: impl Into<String>, effect: Effect, resource: impl Into<String>) -> Self {
        Self {
            principal_id: principal_id.into(),
            policy_document: PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![Statement {
                    action: INVOKE_ACTION.to_string(),
                    effect,
                    resource: resource.into(),
                }],
            },
        }
    }

    /// Active credentials are allowed, inactive ones denied
    pub fn from_verdict(verdict: IntrospectionVerdict, resource: impl Into<String>) -> Self {
        let effect = if verdict.active {
            Effect::Allow
        } else {
            Effect::Deny
        };
        Self::new(verdict.client_identity, effect, resource)
    }

    pub fn effect(&self) -> Option<Effect> {
        self.policy_document.statement.first().map(|s| s.effect)
    }

    pub fn resource(&self) -> Option<&str> {
        self.policy_document
            .statement
            .first()
            .map(|s| s.resource.as_str())
    }
}
