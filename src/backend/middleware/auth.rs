/**
 * Bearer-Token Verification Middleware
 *
 * Every request through this middleware ends in exactly one of two
 * outcomes:
 *
 * - the token verifies and its subject resolves to a stored user, in
 *   which case the user's identity (without the password hash) is
 *   attached to the request extensions and the next handler runs once;
 * - a 401 rejection with one of two fixed JSON bodies.
 *
 * There is no third path. Verification failures are logged with detail
 * for operators; the response body never carries it.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use uuid::Uuid;

use crate::backend::auth::tokens::verify_token;
use crate::backend::auth::users::Identity;
use crate::backend::server::state::AppState;

/// Rejection body when the Authorization header is absent or does not
/// carry the bearer scheme
pub const MSG_NO_TOKEN: &str = "Not authorized, no token";

/// Rejection body when a bearer token is present but fails verification
/// or its subject cannot be resolved
pub const MSG_TOKEN_FAILED: &str = "Not authorized, token failed";

/// Literal scheme prefix, including the separating space
const BEARER_PREFIX: &str = "Bearer ";

fn reject(message: &'static str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": message }))).into_response()
}

/// Authentication middleware
///
/// 1. Reads the `Authorization` header. Absent, unreadable, or not
///    prefixed with `"Bearer "` - rejected as "no token" without
///    attempting verification.
/// 2. Verifies the remainder as a JWT against the injected secret. An
///    empty remainder simply fails verification, so a bare `"Bearer "`
///    header fails closed.
/// 3. Resolves the `sub` claim against the user store, fresh on every
///    request.
/// 4. Attaches the resolved [`Identity`] to the request extensions and
///    runs the next stage exactly once.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header.and_then(|h| h.strip_prefix(BEARER_PREFIX)) {
        Some(token) => token,
        None => {
            tracing::warn!("missing or non-bearer Authorization header");
            return reject(MSG_NO_TOKEN);
        }
    };

    let claims = match verify_token(&state.auth.token_secret, token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!("token verification failed: {:?}", e);
            return reject(MSG_TOKEN_FAILED);
        }
    };

    let user_id = match Uuid::parse_str(&claims.sub) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("token subject is not a valid user ID: {:?}", e);
            return reject(MSG_TOKEN_FAILED);
        }
    };

    let identity = match state.users.find_by_id(user_id).await {
        Some(user) => user.identity(),
        None => {
            tracing::warn!("token subject does not resolve to a user: {}", user_id);
            return reject(MSG_TOKEN_FAILED);
        }
    };

    request.extensions_mut().insert(identity);
    next.run(request).await
}

/// Axum extractor for the identity attached by [`auth_middleware`]
///
/// Handlers behind the middleware take this as a parameter to get the
/// resolved identity. Requests that somehow reach such a handler
/// without the middleware having run are rejected.
#[derive(Clone, Debug)]
pub struct AuthIdentity(pub Identity);

impl<S: Send + Sync> axum::extract::FromRequestParts<S> for AuthIdentity {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let identity = parts
            .extensions
            .get::<Identity>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("Identity not found in request extensions");
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthIdentity(identity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    #[test]
    fn test_reject_shape() {
        let response = reject(MSG_NO_TOKEN);
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_bearer_prefix_is_exact() {
        // Lowercase scheme and missing space both fall through to the
        // no-token path
        assert!("bearer abc".strip_prefix(BEARER_PREFIX).is_none());
        assert!("Bearerabc".strip_prefix(BEARER_PREFIX).is_none());
        assert_eq!("Bearer abc".strip_prefix(BEARER_PREFIX), Some("abc"));
        assert_eq!("Bearer ".strip_prefix(BEARER_PREFIX), Some(""));
    }

    #[tokio::test]
    async fn test_extractor_without_identity_rejects() {
        let request = HttpRequest::builder()
            .uri("http://example.com")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result =
            <AuthIdentity as axum::extract::FromRequestParts<()>>::from_request_parts(
                &mut parts,
                &(),
            )
            .await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_extractor_returns_attached_identity() {
        let identity = Identity {
            id: Uuid::new_v4(),
            name: "test".to_string(),
            email: "test@example.com".to_string(),
        };

        let request = HttpRequest::builder()
            .uri("http://example.com")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        parts.extensions.insert(identity.clone());

        let extracted =
            <AuthIdentity as axum::extract::FromRequestParts<()>>::from_request_parts(
                &mut parts,
                &(),
            )
            .await
            .unwrap();
        assert_eq!(extracted.0, identity);
    }
}
