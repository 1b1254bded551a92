use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::common::{AuthenticatedUser, Viewer};
use crate::domains::auth::JwtService;

/// JWT authentication middleware
///
/// Extracts the bearer token from the Authorization header, verifies it, and
/// stores a [`Viewer`] in request extensions. Missing or invalid tokens yield
/// `Viewer::Unauthenticated`; handlers decide whether that is acceptable.
pub async fn jwt_auth_middleware(
    jwt_service: Arc<JwtService>,
    mut request: Request,
    next: Next,
) -> Response {
    let viewer = match extract_auth_user(&request, &jwt_service) {
        Some(user) => {
            debug!(user_id = %user.id, "Authenticated user");
            Viewer::Authenticated(user)
        }
        None => {
            debug!("No valid authentication token");
            Viewer::Unauthenticated
        }
    };

    request.extensions_mut().insert(viewer);
    next.run(request).await
}

/// Extract and verify JWT token from request
fn extract_auth_user(request: &Request, jwt_service: &JwtService) -> Option<AuthenticatedUser> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Handle both "Bearer <token>" and raw token
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    let claims = jwt_service.verify_token(token).ok()?;
    Some(claims.into())
}

#[async_trait]
impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Viewer>().cloned().unwrap_or_default())
    }
}
