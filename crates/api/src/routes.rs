use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

/// Builds the dashboard API router, mounted under `/api`. There is no
/// authentication, so CORS is left permissive rather than locked to an
/// origin list.
pub fn create_api_routes(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/stats", get(handlers::get_stats))
        .route("/logs", get(handlers::get_logs))
        .route("/allowlist", post(handlers::update_allowlist))
        .route("/denylist", post(handlers::update_denylist));

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
