/**
 * Application State
 *
 * Central state container for the Axum application. Holds the injected
 * token configuration and the user store. Both are cheap to clone and
 * thread-safe; no cross-request state is mutated outside the store's
 * own lock.
 *
 * The `FromRef` implementations let handlers extract just the part of
 * the state they need, following Axum's recommended pattern.
 */

use axum::extract::FromRef;

use crate::backend::auth::users::UserStore;
use crate::backend::server::config::AuthConfig;

/// Application state shared across all request handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Token signing/verification configuration (injected, never read
    /// from the environment past startup)
    pub auth: AuthConfig,

    /// In-memory user store the middleware resolves identities against
    pub users: UserStore,
}

impl AppState {
    pub fn new(auth: AuthConfig) -> Self {
        Self {
            auth,
            users: UserStore::new(),
        }
    }
}

impl FromRef<AppState> for AuthConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for UserStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}
