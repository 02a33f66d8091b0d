use crate::handlers;
use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the full route table. CORS is layered on by the binary so tests can
/// drive the router directly.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::root::router())
        .merge(handlers::risks::router())
        .merge(handlers::compliance::router())
        .merge(handlers::reports::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
