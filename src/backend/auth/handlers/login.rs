/**
 * Login Handler
 *
 * Implements POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password against the bcrypt hash
 * 3. Issue a token and return it with the user info
 *
 * # Security
 *
 * - Unknown email and wrong password return the same 401 body, so
 *   callers cannot enumerate accounts
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::backend::auth::tokens::create_token;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::types::{AuthResponse, LoginRequest, UserResponse};

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - hash verification or token issuance
///   failed (detail logged, not returned)
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("login request for: {}", request.email);

    let user = state
        .users
        .find_by_email(&request.email)
        .await
        .ok_or_else(|| {
            tracing::warn!("login for unknown email: {}", request.email);
            ApiError::unauthorized("Invalid email or password")
        })?;

    let valid = verify(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("password verification error: {:?}", e);
        ApiError::Internal
    })?;

    if !valid {
        tracing::warn!("invalid password for: {}", request.email);
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    let token = create_token(
        &state.auth.token_secret,
        user.id,
        user.email.clone(),
        state.auth.token_ttl,
    )
    .map_err(|e| {
        tracing::error!("failed to create token: {:?}", e);
        ApiError::Internal
    })?;

    tracing::info!("user logged in: {} ({})", user.name, user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
        },
    }))
}
