// File: crates/fx-chart-core/src/load_state.rs
// Summary: Three-way fetch status that decides which view is rendered.

use crate::error::DataFetchError;
use crate::series::Series;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Error(DataFetchError),
    Ready(Series),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&DataFetchError> {
        match self {
            LoadState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn series(&self) -> Option<&Series> {
        match self {
            LoadState::Ready(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Result<Series, DataFetchError>> for LoadState {
    fn from(r: Result<Series, DataFetchError>) -> Self {
        match r {
            Ok(s) => LoadState::Ready(s),
            Err(e) => LoadState::Error(e),
        }
    }
}
