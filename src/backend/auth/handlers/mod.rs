//! Authentication Handlers
//!
//! HTTP handlers for the auth endpoints:
//!
//! - `POST /api/auth/register` - account creation
//! - `POST /api/auth/login` - credential verification and token issuance
//! - `GET /api/auth/me` - current user (behind the auth middleware)

pub mod login;
pub mod me;
pub mod register;

pub use login::login;
pub use me::get_me;
pub use register::register;
