/**
 * Shared Wire Types
 *
 * This module defines the request and response types used by the
 * authentication endpoints. They are shared between the backend handlers
 * and the client API layer so both sides agree on the JSON shape.
 */

use serde::{Deserialize, Serialize};

/// Registration request
///
/// Contains the name, email and password for account creation.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RegisterRequest {
    /// Display name for the new account
    pub name: String,
    /// User's email address (unique)
    pub email: String,
    /// User's password (hashed before storage, never stored raw)
    pub password: String,
}

/// Login request
///
/// Contains the email and password for authentication.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Auth response
///
/// Returned by the register and login handlers. Contains the signed
/// token and the user record it was issued for.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    /// Signed bearer token
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
///
/// User information that is safe to return to clients. Never includes
/// the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// Display name
    pub name: String,
    /// User's email address
    pub email: String,
}
