use utoipa::OpenApi;

pub(crate) const HEALTH_TAG: &str = "Health API";
pub(crate) const AUTHZ_TAG: &str = "Authorization API";

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = AUTHZ_TAG, description = "Gateway authorization endpoints"),
    ),
    info(
        title = "Gateway Authorizer API",
        description = "Token introspection based request authorizer for API gateways",
        version = "0.1.0"
    )
)]
pub(crate) struct ApiDoc;
