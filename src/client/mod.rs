//! Client Module
//!
//! The application's client side, minus any rendering:
//!
//! - **`form`** - Login/registration form state machine
//! - **`api`** - HTTP client for the auth endpoints
//! - **`storage`** - Client-side token persistence
//! - **`config`** - Server URL and endpoint configuration

pub mod api;
pub mod config;
pub mod form;
pub mod storage;

pub use api::{AuthApi, ClientError, HttpAuthApi};
pub use config::Config;
pub use form::{FormMode, LoginForm};
pub use storage::TokenStore;
