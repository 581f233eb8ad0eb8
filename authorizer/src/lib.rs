//! # authorizer
//!
//! The decision pipeline behind the gateway request authorizer.
//!
//! ## Components
//!
//! - **Resource:** Parses the invoked resource identifier (`methodArn`) into method and path.
//! - **Credential:** Extracts the caller's bearer credential from the authorization value.
//! - **Client:** Talks to the authorization server (client-credentials grant and introspection).
//! - **Policy:** Translates an introspection verdict into a gateway policy document.
//! - **Pipeline:** Chains the above into a single, stateless authorization decision.

pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod pipeline;
pub mod policy;
pub mod resource;

pub use crate::client::{AuthServer, HttpAuthServer, IntrospectionVerdict, ServiceAccessToken};
pub use crate::config::AuthServerConfig;
pub use crate::credential::BearerCredential;
pub use crate::error::{AuthorizerError, ExchangeError};
pub use crate::pipeline::{Authorizer, InvocationRequest, Outcome};
pub use crate::policy::{AuthorizationDecision, Effect, PolicyDocument, Statement};
pub use crate::resource::ParsedResource;
