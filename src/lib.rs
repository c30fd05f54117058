/**
 * Authgate
 *
 * Bearer-token authentication for a small web application, split the same
 * way the application itself is split:
 *
 * - `backend` - Axum HTTP server: token verification middleware, token
 *   issuance, and the register/login/me endpoints.
 * - `client` - Headless login/registration form state machine, the HTTP
 *   API client it delegates to, and client-side token storage.
 * - `shared` - Request/response types used on both sides of the wire.
 */

pub mod backend;
pub mod client;
pub mod shared;
