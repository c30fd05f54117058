//! Backend Module
//!
//! The Axum HTTP server side of the application:
//!
//! - **`auth`** - Token issuance, the in-memory user store, and the
//!   register/login/me handlers
//! - **`middleware`** - Bearer-token verification middleware
//! - **`server`** - Configuration, application state, router setup
//! - **`error`** - Handler error type mapped to JSON responses

pub mod auth;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
