//! Palisade DNS Dashboard API
//!
//! Thin axum handlers over the application layer's dashboard use cases.
//! No authentication; the dashboard is assumed bound to a trusted
//! interface.
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_api_routes;
pub use state::AppState;
