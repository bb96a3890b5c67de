//! Service configuration loaded from environment variables.
//!
//! Every setting has a default, so the server starts with no environment
//! at all: it binds `0.0.0.0:5000` and reads `wbp.json` from the working
//! directory.

use std::path::PathBuf;

/// Default TCP port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default dataset file path.
pub const DEFAULT_DATA_PATH: &str = "wbp.json";

/// Default snapshot key served by the queries.
pub const DEFAULT_DATE_KEY: &str = "05_03_2025";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid {name}: {reason}")]
    Invalid {
        /// The environment variable.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Host address to bind (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port to listen on.
    pub port: u16,
    /// Verbose mode: raises the default log level to `debug`.
    pub debug: bool,
    /// Path of the JSON dataset file.
    pub data_path: PathBuf,
    /// Snapshot key the queries read from.
    pub date_key: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: DEFAULT_PORT,
            debug: false,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            date_key: String::from(DEFAULT_DATE_KEY),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `HOST` -- bind address (default `0.0.0.0`)
    /// - `PORT` -- TCP port (default 5000)
    /// - `APP_DEBUG` -- `true` enables verbose logging (default `false`)
    /// - `DATA_PATH` -- dataset file (default `wbp.json`)
    /// - `DATE_KEY` -- snapshot key (default `05_03_2025`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset and empty variables both fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: format!("{raw:?}: {e}"),
            })?,
            None => defaults.port,
        };

        // Anything other than "true" (any case) leaves debug off.
        let debug = get("APP_DEBUG").is_some_and(|raw| raw.trim().eq_ignore_ascii_case("true"));

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            debug,
            data_path: get("DATA_PATH").map_or(defaults.data_path, PathBuf::from),
            date_key: get("DATE_KEY").unwrap_or(defaults.date_key),
        })
    }
}
