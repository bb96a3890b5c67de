//! Axum router construction for the API.
//!
//! Assembles all routes into a single [`Router`] with CORS, request
//! tracing, and panic recovery.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- service banner
/// - `GET /api/rooms` -- distinct room codes
/// - `GET /api/occupants/{room}` -- occupants of a room code
/// - `GET /api/room/{room_name}` -- fuzzy room-name match
/// - `GET /health` -- health check
///
/// Unmatched paths answer `404 {"error": "Endpoint not found"}`, other
/// methods on a known path answer `405 {"error": "Method not allowed"}`,
/// and a panicking handler answers `500 {"error": "Internal server error"}`.
/// CORS allows any origin, method, and header.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Banner
        .route("/", get(handlers::index))
        // Queries
        .route("/api/rooms", get(handlers::list_rooms))
        .route("/api/occupants/{room}", get(handlers::get_room_occupants))
        .route("/api/room/{room_name}", get(handlers::get_room_data))
        // Health
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
