/**
 * Route Configuration
 *
 * Combines the auth endpoints into the application router.
 *
 * # Routes
 *
 * - `POST /api/auth/register` - public, account creation
 * - `POST /api/auth/login` - public, returns a bearer token
 * - `GET /api/auth/me` - protected by the verification middleware
 *
 * The middleware is layered only on the protected route; register and
 * login must stay reachable without a token.
 */

use axum::{middleware, routing, Router};

use crate::backend::auth::{get_me, login, register};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;

/// Build the application router
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = Router::new()
        .route("/api/auth/me", routing::get(get_me))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/api/auth/register", routing::post(register))
        .route("/api/auth/login", routing::post(login))
        .merge(protected)
        .with_state(app_state)
}
