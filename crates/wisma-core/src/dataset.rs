//! The in-memory occupancy dataset and its loader.
//!
//! The dataset file is a JSON object mapping a snapshot date key (for
//! example `"05_03_2025"`) to an array of record objects. It is read once
//! at startup; a missing or unparseable file degrades to an empty dataset
//! so the server still comes up and answers every query with "no data".

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::record::{json_kind, Entry};

/// Errors that can occur when loading the dataset file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The dataset file does not exist.
    #[error("dataset file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The dataset file exists but could not be read.
    #[error("failed to read dataset file {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file content is not a JSON object.
    #[error("invalid dataset JSON: {source}")]
    Json {
        /// The underlying parse error.
        #[from]
        source: serde_json::Error,
    },
}

/// The ordered entries stored under one date key.
///
/// The first entry is a header row and is never treated as a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snapshot {
    /// The normalized array elements, header included.
    Entries(Vec<Entry>),
    /// The date key mapped to something other than an array.
    Malformed {
        /// JSON type that was found instead.
        found: &'static str,
    },
}

impl Snapshot {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self::Entries(items.iter().map(Entry::from_value).collect()),
            other => Self::Malformed {
                found: json_kind(other),
            },
        }
    }
}

/// Immutable occupancy dataset keyed by snapshot date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    snapshots: BTreeMap<String, Snapshot>,
}

impl Dataset {
    /// Load the dataset at `path`, falling back to an empty dataset.
    ///
    /// The outcome is logged: a success line with the snapshot count, or
    /// an error line whose wording distinguishes a missing file from a
    /// malformed one. Never retried.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(dataset) => {
                info!(
                    path = %path.display(),
                    snapshots = dataset.len(),
                    "dataset loaded"
                );
                if dataset.is_empty() {
                    warn!(path = %path.display(), "dataset file contains no snapshots");
                }
                dataset
            }
            Err(LoadError::NotFound { path }) => {
                error!(path = %path.display(), "dataset file not found, serving empty dataset");
                Self::default()
            }
            Err(e @ LoadError::Json { .. }) => {
                error!(
                    path = %path.display(),
                    error = %e,
                    "dataset file is not valid JSON, serving empty dataset"
                );
                Self::default()
            }
            Err(e @ LoadError::Io { .. }) => {
                error!(error = %e, "dataset file unreadable, serving empty dataset");
                Self::default()
            }
        }
    }

    /// Read and parse the dataset at `path`.
    pub fn try_load(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        Self::from_json_str(&contents)
    }

    /// Parse a dataset from JSON text.
    ///
    /// The top level must be an object. Its values are normalized but not
    /// validated: a non-array value or a malformed element is kept and
    /// reported later by the query that reaches it.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let top: Map<String, Value> = serde_json::from_str(json)?;
        let snapshots = top
            .iter()
            .map(|(key, value)| (key.clone(), Snapshot::from_value(value)))
            .collect();
        Ok(Self { snapshots })
    }

    /// Look up the snapshot stored under `date_key`.
    pub fn snapshot(&self, date_key: &str) -> Option<&Snapshot> {
        self.snapshots.get(date_key)
    }

    /// Snapshot date keys in ascending order.
    pub fn date_keys(&self) -> impl Iterator<Item = &str> {
        self.snapshots.keys().map(String::as_str)
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// `true` when no snapshot was loaded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
