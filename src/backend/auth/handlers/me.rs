/**
 * Current User Handler
 *
 * Implements GET /api/auth/me. The route sits behind the verification
 * middleware, so by the time this handler runs the request already
 * carries a resolved identity - the handler only echoes it back.
 */

use axum::response::Json;

use crate::backend::middleware::auth::AuthIdentity;
use crate::shared::types::UserResponse;

/// Get current user handler
///
/// Returns the identity attached by the auth middleware. Never touches
/// the user store itself; resolution already happened upstream.
pub async fn get_me(AuthIdentity(identity): AuthIdentity) -> Json<UserResponse> {
    Json(UserResponse {
        id: identity.id.to_string(),
        name: identity.name,
        email: identity.email,
    })
}
