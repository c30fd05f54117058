/**
 * Server Initialization
 *
 * Builds the Axum application from a loaded configuration: state
 * creation, route configuration, and request tracing.
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::routes::create_router;
use crate::backend::server::config::AuthConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// The token configuration is the only input; everything else (the user
/// store, routes, tracing layer) is constructed here. Tests call this
/// directly with a throwaway secret.
pub fn create_app(auth: AuthConfig) -> Router<()> {
    tracing::info!("initializing authgate backend");

    let app_state = AppState::new(auth);

    create_router(app_state).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
