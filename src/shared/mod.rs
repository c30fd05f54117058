//! Shared Module
//!
//! Types used by both the backend handlers and the client API layer.

pub mod types;

pub use types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
