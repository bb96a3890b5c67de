//! Read-only HTTP API for the Wisma occupancy dataset.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Query endpoints** for listing rooms, the occupants of a room, and
//!   records matching a room name
//! - **Service endpoints**: a JSON banner at `GET /` and `GET /health`
//! - **JSON error bodies** for unknown routes (404) and panics (500)
//!
//! # Architecture
//!
//! The dataset is loaded once before the server starts and shared
//! read-only through [`AppState`]. Handlers never take locks; every
//! request runs an independent linear scan in `wisma-core`.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
