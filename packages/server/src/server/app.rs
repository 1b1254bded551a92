//! Application setup and server configuration.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::kernel::ServerDeps;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    create_document, delete_document, delete_flashcards, generate_flashcards, get_document,
    health_handler, list_documents, list_flashcards,
};

/// Headroom on top of the completion timeout for database work.
const REQUEST_TIMEOUT_HEADROOM: Duration = Duration::from_secs(30);

/// Build the Axum application router
pub fn build_app(
    deps: ServerDeps,
    jwt_service: Arc<JwtService>,
    allowed_origins: &[String],
) -> Router {
    let request_timeout = deps.completion_timeout + REQUEST_TIMEOUT_HEADROOM;

    let cors = CorsLayer::new()
        .allow_origin(cors_origins(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/documents", post(create_document).get(list_documents))
        .route(
            "/documents/:document_id",
            get(get_document).delete(delete_document),
        )
        .route("/flashcards", get(list_flashcards).delete(delete_flashcards))
        .route("/flashcards/generate", post(generate_flashcards))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }))
        .layer(Extension(deps))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured (development), otherwise the list.
fn cors_origins(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.is_empty() {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    AllowOrigin::list(origins)
}
