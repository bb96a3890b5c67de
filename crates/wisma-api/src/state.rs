//! Shared application state for the API server.

use std::sync::Arc;

use wisma_core::Dataset;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. Built
/// once at startup and never written afterwards, so it needs no lock.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The dataset loaded at startup.
    pub dataset: Arc<Dataset>,
    /// Snapshot key every query reads from.
    pub date_key: String,
}

impl AppState {
    /// Create the application state.
    pub fn new(dataset: Dataset, date_key: impl Into<String>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            date_key: date_key.into(),
        }
    }

    /// `true` when the dataset holds at least one snapshot.
    pub fn data_loaded(&self) -> bool {
        !self.dataset.is_empty()
    }
}
