/**
 * Registration Handler
 *
 * Implements POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate name, email and password
 * 2. Hash the password with bcrypt
 * 3. Insert the user (rejecting duplicate emails)
 * 4. Issue a token and return it with the user info
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt DEFAULT_COST and never returned
 * - Responses carry the identity fields only, never the hash
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::backend::auth::tokens::create_token;
use crate::backend::auth::users::User;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::types::{AuthResponse, RegisterRequest, UserResponse};

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - empty name, email without '@', or password
///   shorter than 6 characters
/// * `409 Conflict` - email already registered
/// * `500 Internal Server Error` - password hashing or token issuance
///   failed (detail logged, not returned)
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("registration request for: {}", request.email);

    if request.name.trim().is_empty() {
        return Err(ApiError::bad_request("Name is required"));
    }
    if !request.email.contains('@') {
        tracing::warn!("invalid email format: {}", request.email);
        return Err(ApiError::bad_request("Invalid email format"));
    }
    if request.password.len() < 6 {
        tracing::warn!("password too short for: {}", request.email);
        return Err(ApiError::bad_request(
            "Password must be at least 6 characters",
        ));
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("failed to hash password: {:?}", e);
        ApiError::Internal
    })?;

    let user = User::new(request.name, request.email.clone(), password_hash);
    let user = state.users.insert(user).await.ok_or_else(|| {
        tracing::warn!("email already registered: {}", request.email);
        ApiError::conflict("Email already registered")
    })?;

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

    tracing::info!("user registered: {} ({})", user.name, user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::AuthConfig;

    fn test_state() -> AppState {
        AppState::new(AuthConfig::new("test-secret"))
    }

    fn test_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "test".to_string(),
            email: email.to_string(),
            password: "Pass!123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let state = test_state();
        let result = register(State(state.clone()), Json(test_request("test@example.com"))).await;

        let response = result.unwrap();
        assert!(!response.token.is_empty());
        assert_eq!(response.user.email, "test@example.com");
        assert!(state.users.find_by_email("test@example.com").await.is_some());
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let state = test_state();
        register(State(state.clone()), Json(test_request("test@example.com")))
            .await
            .unwrap();

        let result = register(State(state), Json(test_request("test@example.com"))).await;
        assert!(matches!(result.unwrap_err(), ApiError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_register_invalid_email() {
        let state = test_state();
        let result = register(State(state), Json(test_request("not-an-email"))).await;
        assert!(matches!(result.unwrap_err(), ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_register_short_password() {
        let state = test_state();
        let mut request = test_request("test@example.com");
        request.password = "ab!".to_string();

        let result = register(State(state), Json(request)).await;
        assert!(matches!(result.unwrap_err(), ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_password() {
        let state = test_state();
        register(State(state.clone()), Json(test_request("test@example.com")))
            .await
            .unwrap();

        let stored = state.users.find_by_email("test@example.com").await.unwrap();
        assert_ne!(stored.password_hash, "Pass!123");
        assert!(bcrypt::verify("Pass!123", &stored.password_hash).unwrap());
    }
}
