//! Dataset loading and occupancy queries for the Wisma API.
//!
//! This crate owns everything below the HTTP layer: reading the JSON
//! dataset once at startup, normalizing loosely-shaped records into typed
//! ones, and the three read-only scans the API exposes.
//!
//! # Modules
//!
//! - [`composite`] -- Parsing of `"<left> - <right>"` composite fields and
//!   room-name normalization.
//! - [`config`] -- Service configuration loaded from environment variables.
//! - [`dataset`] -- The immutable [`Dataset`] and its file loader.
//! - [`query`] -- Room listing, occupants-by-room, and records-by-room-name.
//! - [`record`] -- Typed [`Record`] and load-time normalization.
//!
//! [`Dataset`]: dataset::Dataset
//! [`Record`]: record::Record

pub mod composite;
pub mod config;
pub mod dataset;
pub mod query;
pub mod record;

pub use config::{ConfigError, ServiceConfig};
pub use dataset::{Dataset, LoadError, Snapshot};
pub use query::{Occupant, OccupantList, QueryError, RoomList, RoomRecords};
pub use record::{Entry, Record};
