//! REST API endpoint handlers.
//!
//! All handlers read the shared [`AppState`] and delegate the scan to
//! [`wisma_core::query`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Service banner and endpoint list |
//! | `GET` | `/api/rooms` | Distinct room codes |
//! | `GET` | `/api/occupants/{room}` | Occupants of a room code |
//! | `GET` | `/api/room/{room_name}` | Records matching a room name |
//! | `GET` | `/health` | Liveness and data-loaded flag |

use std::any::Any;
use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;
use wisma_core::query;

use crate::error::{ApiError, ENDPOINT_NOT_FOUND, INTERNAL_SERVER_ERROR};
use crate::state::AppState;

/// Endpoint descriptions listed by the banner.
const ENDPOINTS: [&str; 4] = [
    "/api/rooms - Get all rooms",
    "/api/occupants/<room> - Get occupants by room",
    "/api/room/<room_name> - Get room data by fuzzy room name",
    "/health - Health check",
];

// ---------------------------------------------------------------------------
// GET / -- service banner
// ---------------------------------------------------------------------------

/// Service banner with the list of available endpoints.
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Wisma occupancy API is running!",
        "status": "success",
        "endpoints": ENDPOINTS,
    }))
}

// ---------------------------------------------------------------------------
// GET /api/rooms -- distinct room codes
// ---------------------------------------------------------------------------

/// List every distinct room code in the configured snapshot, sorted.
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let result = query::list_rooms(&state.dataset, &state.date_key)?;
    debug!(total = result.total, "rooms listed");

    Ok(Json(serde_json::json!({
        "status": "success",
        "rooms": result.rooms,
        "total_rooms": result.total,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/occupants/{room} -- occupants of one room
// ---------------------------------------------------------------------------

/// List the occupants whose location contains `" - " + room`.
///
/// `pidana` is reduced to its leading code.
pub async fn get_room_occupants(
    State(state): State<Arc<AppState>>,
    room: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(room) = room.map_err(bad_path)?;
    let result = query::occupants_by_room(&state.dataset, &state.date_key, &room)?;
    debug!(room = %room, total = result.total, "occupants listed");

    Ok(Json(serde_json::json!({
        "status": "success",
        "room": room,
        "occupants": result.occupants,
        "total_occupants": result.total,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/room/{room_name} -- fuzzy room-name match
// ---------------------------------------------------------------------------

/// List the records whose location matches `room_name`, ignoring case and
/// spaces.
///
/// `pidana` is returned as stored.
pub async fn get_room_data(
    State(state): State<Arc<AppState>>,
    room_name: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(room_name) = room_name.map_err(bad_path)?;
    let result = query::records_by_room_name(&state.dataset, &state.date_key, &room_name)?;
    debug!(room_name = %room_name, total = result.total, "room records listed");

    Ok(Json(serde_json::json!({
        "status": "success",
        "room_name": room_name,
        "data": result.data,
        "total_records": result.total,
    })))
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness check. `data_loaded` is `false` when the dataset file could
/// not be loaded at startup.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "message": "Wisma occupancy API is running",
        "data_loaded": state.data_loaded(),
    }))
}

// ---------------------------------------------------------------------------
// Fallbacks
// ---------------------------------------------------------------------------

/// Answer requests that match no route.
pub async fn not_found() -> ApiError {
    ApiError::NotFound(String::from(ENDPOINT_NOT_FOUND))
}

/// Answer a known path requested with a method other than `GET`.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Map a path segment that cannot be decoded (e.g. `%FF`) to a JSON 400.
#[allow(clippy::needless_pass_by_value)]
fn bad_path(rejection: PathRejection) -> ApiError {
    ApiError::BadRequest(rejection.body_text())
}

/// Turn a handler panic into a generic JSON 500.
///
/// The panic payload is logged, never returned to the client.
#[allow(clippy::needless_pass_by_value)]
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(detail, "request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": INTERNAL_SERVER_ERROR })),
    )
        .into_response()
}
