// File: crates/fx-chart-core/src/lib.rs
// Summary: Core library entry point; exports the timeframe model, chart config builder and page state.

pub mod timeframe;
pub mod series;
pub mod config;
pub mod format;
pub mod load_state;
pub mod selector;
pub mod page;
pub mod view;
pub mod provider;
pub mod settings;
pub mod error;

pub use timeframe::{Timeframe, ParseTimeframeError};
pub use series::{DataPoint, Series};
pub use config::{build_config, ChartConfig};
pub use load_state::LoadState;
pub use selector::{TimeframeSelector, SubscriptionId};
pub use page::{ChartPage, FetchTicket};
pub use view::{render, ButtonVariant, ChartArea, PageView, TimeframeButton};
pub use provider::{CsvDataProvider, DataProvider, InMemoryProvider};
pub use settings::ChartSettings;
pub use error::{DataFetchError, SettingsError};
