// File: crates/fx-chart-core/src/error.rs
// Summary: Error types for data fetching and settings loading.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The single failure a data fetch reports. Carries a message meant for display.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DataFetchError {
    pub message: String,
}

impl DataFetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn not_found(path: &Path) -> Self {
        Self::new(format!("data file not found: {}", path.display()))
    }

    pub fn no_data(path: &Path) -> Self {
        Self::new(format!("no usable rows in {}", path.display()))
    }
}

impl From<std::io::Error> for DataFetchError {
    fn from(e: std::io::Error) -> Self { Self::new(e.to_string()) }
}

impl From<csv::Error> for DataFetchError {
    fn from(e: csv::Error) -> Self {
        match e.kind() {
            csv::ErrorKind::Io(_) => Self::new(e.to_string()),
            _ => Self::new(format!("malformed CSV: {e}")),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read { path: PathBuf, #[source] source: std::io::Error },
    #[error("invalid settings file {path}: {source}")]
    Parse { path: PathBuf, #[source] source: toml::de::Error },
    #[error("invalid value for {var}: {source}")]
    Env { var: &'static str, #[source] source: crate::timeframe::ParseTimeframeError },
}
