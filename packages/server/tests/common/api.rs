//! HTTP client for integration testing.
//!
//! Drives the real router with `oneshot` so requests go through the auth
//! middleware, extractors and error mapping without binding a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use studycards_core::common::AuthenticatedUser;
use studycards_core::domains::auth::JwtService;
use studycards_core::kernel::{MockCompletionService, TestDependencies};
use studycards_core::server::build_app;
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "test_secret_key";
pub const TEST_JWT_ISSUER: &str = "test_issuer";

/// Result of one request.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    /// Error message from a `{"message": ...}` body.
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}

/// Router plus the fakes behind it.
pub struct ApiClient {
    app: Router,
    jwt_service: Arc<JwtService>,
    pub deps: TestDependencies,
}

impl ApiClient {
    pub fn new(completion: MockCompletionService) -> Self {
        Self::with_dependencies(TestDependencies::new(completion))
    }

    pub fn with_dependencies(deps: TestDependencies) -> Self {
        let jwt_service = Arc::new(JwtService::new(
            TEST_JWT_SECRET,
            TEST_JWT_ISSUER.to_string(),
        ));
        let app = build_app(deps.server_deps(), jwt_service.clone(), &[]);

        Self {
            app,
            jwt_service,
            deps,
        }
    }

    /// Bearer token for a user with the given subject.
    pub fn token_for(&self, user_id: &str) -> String {
        let user = AuthenticatedUser {
            id: user_id.to_string(),
            name: Some("Test User".to_string()),
            email: Some(format!("{}@example.com", user_id)),
            image: None,
        };
        self.jwt_service
            .issue_token(&user, chrono::Duration::hours(1))
            .expect("Failed to issue test token")
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> ApiResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Router returned an error");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body was not JSON")
        };

        ApiResponse { status, body }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> ApiResponse {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> ApiResponse {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> ApiResponse {
        self.request(Method::DELETE, uri, token, None).await
    }

    /// Register a valid document and return its id.
    pub async fn create_document(&self, token: &str, title: &str) -> String {
        let response = self
            .post(
                "/documents",
                Some(token),
                serde_json::json!({
                    "title": title,
                    "fileUrl": "https://files.example.com/notes.pdf",
                    "fileType": "application/pdf",
                }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["id"]
            .as_str()
            .expect("Document id missing")
            .to_string()
    }
}
