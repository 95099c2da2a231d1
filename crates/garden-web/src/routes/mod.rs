//! HTTP and WebSocket routes.

mod api;
mod ws;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Board
        .route("/api/board", get(api::get_board))
        .route("/api/plants", get(api::get_plants))
        .route("/api/cells/:row/:col", get(api::get_cell))
        .route("/api/layout", post(api::load_layout))
        // Placement
        .route("/api/place", post(api::place))
        .route("/api/remove", post(api::remove))
        .route("/api/tags/place", post(api::place_tag))
        // Evaluation
        .route("/api/evaluate/:plant", get(api::evaluate))
        .route("/api/evaluations", get(api::evaluations))
        .route("/api/mode", get(api::get_mode))
        .route("/api/mode/cycle", post(api::cycle_mode))
        // WebSocket for live events
        .route("/ws/events", get(ws::events_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
