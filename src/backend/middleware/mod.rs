//! Middleware Module
//!
//! HTTP middleware applied to protected routes.
//!
//! - **`auth`** - Bearer-token verification middleware

pub mod auth;

pub use auth::{auth_middleware, AuthIdentity, MSG_NO_TOKEN, MSG_TOKEN_FAILED};
