use crate::errors::ApiError;
use crate::openapi::AUTHZ_TAG;
use crate::state::AppState;
use authorizer::{AuthorizationDecision, InvocationRequest, Outcome};
use axum::extract::{Json, State};
use log::debug;
use utoipa_axum::{router::OpenApiRouter, routes};

/// Decide whether the caller may invoke the requested gateway resource
#[utoipa::path(
    post,
    path = "/authorize",
    tag = AUTHZ_TAG,
    request_body = InvocationRequest,
    responses(
        (status = 200, description = "Allow or Deny policy for the requested resource", body = AuthorizationDecision),
        (status = 401, description = "No bearer token was presented"),
        (status = 422, description = "Invalid request payload"),
        (status = 500, description = "The authorization server could not be consulted")
    )
)]
pub(crate) async fn authorize_handler(
    State(state): State<AppState>,
    Json(request): Json<InvocationRequest>,
) -> Result<Json<AuthorizationDecision>, ApiError> {
    debug!(
        "Authorization request for {} (token present: {})",
        request.method_arn,
        request.authorization_token.is_some()
    );

    match state.authorizer.authorize(&request).await {
        Outcome::Decision(decision) => Ok(Json(decision)),
        Outcome::Unauthorized => Err(ApiError::unauthorized()),
        Outcome::InternalError => Err(ApiError::internal()),
    }
}

pub(super) fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(authorize_handler))
}
