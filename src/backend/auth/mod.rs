//! Authentication Module
//!
//! Token issuance and verification, the user store, and the HTTP
//! handlers for registration, login, and the current-user endpoint.

pub mod handlers;
pub mod tokens;
pub mod users;

pub use handlers::{get_me, login, register};
pub use tokens::{create_token, verify_token, Claims};
pub use users::{Identity, User, UserStore};
