use crate::config::AuthorizerConfig;
use crate::create_app;
use crate::state::AppState;
use authorizer::client::{INTROSPECTION_ENDPOINT, TOKEN_ENDPOINT};
use axum::body::Body;
use axum::Router;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use log::LevelFilter;
use serde::Serialize;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

/// Test fixture for setting up a complete test environment with a mocked authorization server.
///
/// # Examples
///
/// ```rust
/// #[tokio::test]
/// async fn test_endpoint() {
///     let fixture = TestFixture::new().await;
///
///     fixture
///         .add_token_mock(json!({ "accessToken": "t" }), StatusCode::OK, 1)
///         .await;
///     fixture
///         .add_introspection_mock(json!({ "active": true, "client_id": "c" }), StatusCode::OK, 1)
///         .await;
///
///     let response = fixture.post("/authorize", &event).await;
///     response.assert_ok();
/// }
/// ```
pub struct TestFixture {
    /// The application router
    pub app: Router,
    /// Mock server standing in for the authorization server
    pub auth_server_mock: MockServer,
}

impl TestFixture {
    /// Creates a new test fixture with the authorizer pointed at a fresh mock server
    pub async fn new() -> Self {
        Self::setup_logger(LevelFilter::Debug);

        let auth_server_mock = MockServer::start().await;
        let config = AuthorizerConfig::for_test_with_mock(&auth_server_mock);

        let state = AppState::new(&config).expect("Failed to create app state");
        let app = create_app(state).await;

        Self {
            app,
            auth_server_mock,
        }
    }

    /// Initializes the test logger with the given level
    pub fn setup_logger(level: LevelFilter) {
        let _ = env_logger::builder()
            .filter_level(level)
            .is_test(true)
            .try_init();
    }

    /// Sends a GET request to the specified URI.
    pub async fn get(&self, uri: impl AsRef<str>) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri.as_ref())
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Sends a POST request with a JSON body to the specified URI.
    pub async fn post<T: Serialize>(&self, uri: impl AsRef<str>, body: &T) -> TestResponse {
        let json_body = serde_json::to_vec(body).expect("Failed to serialize body to JSON");
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri.as_ref())
            .header("Content-Type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.send(request).await
    }

    /// Sends a request and returns a TestResponse.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        // Try to parse as JSON, defaulting to empty object if parsing fails or empty body
        let json = if !body.is_empty() {
            serde_json::from_slice(&body).unwrap_or_else(|_| serde_json::json!({}))
        } else {
            serde_json::json!({})
        };

        TestResponse { status, json }
    }

    /// Mocks the client-credentials token endpoint
    pub async fn add_token_mock(
        &self,
        response_body: impl Serialize,
        status_code: StatusCode,
        expected_calls: u64,
    ) {
        self.add_auth_server_mock(TOKEN_ENDPOINT, response_body, status_code, expected_calls)
            .await;
    }

    /// Mocks the token introspection endpoint
    pub async fn add_introspection_mock(
        &self,
        response_body: impl Serialize,
        status_code: StatusCode,
        expected_calls: u64,
    ) {
        self.add_auth_server_mock(
            INTROSPECTION_ENDPOINT,
            response_body,
            status_code,
            expected_calls,
        )
        .await;
    }

    async fn add_auth_server_mock(
        &self,
        path: &str,
        response_body: impl Serialize,
        status_code: StatusCode,
        expected_calls: u64,
    ) {
        Mock::given(matchers::method("POST"))
            .and(matchers::path(path))
            .respond_with(ResponseTemplate::new(status_code.as_u16()).set_body_json(response_body))
            .expect(expected_calls)
            .mount(&self.auth_server_mock)
            .await;
    }
}

/// Response from a test request that provides convenient access to status and JSON body.
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body as JSON (if present and valid JSON)
    pub json: Value,
}

impl TestResponse {
    /// Asserts that the response has the expected status code.
    ///
    /// # Panics
    ///
    /// Panics if the status code doesn't match the expected value.
    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {} but got {} with body: {}",
            expected,
            self.status,
            serde_json::to_string_pretty(&self.json).unwrap_or_default()
        );
        self
    }

    /// Asserts that the response status is OK (200).
    pub fn assert_ok(&self) -> &Self {
        self.assert_status(StatusCode::OK)
    }
}
