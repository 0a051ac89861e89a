// File: crates/fx-chart-core/src/settings.rs
// Summary: Page settings loaded from TOML with environment overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::timeframe::Timeframe;

pub const ENV_DATA_DIR: &str = "USDKRW_DATA_DIR";
pub const ENV_TIMEFRAME: &str = "USDKRW_TIMEFRAME";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Directory holding `usd_krw_*.csv`.
    pub data_dir: PathBuf,
    pub initial_timeframe: Timeframe,
    /// When set, responsive rules are resolved for this width before output.
    pub viewport_width: Option<u32>,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("data"), initial_timeframe: Timeframe::OneYear, viewport_width: None }
    }
}

impl ChartSettings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| SettingsError::Read { path: path.to_path_buf(), source })?;
        Self::from_toml(&text).map_err(|source| SettingsError::Parse { path: path.to_path_buf(), source })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Override fields from `USDKRW_DATA_DIR` / `USDKRW_TIMEFRAME` when set.
    pub fn apply_env(self) -> Result<Self, SettingsError> {
        self.apply_vars(|k| std::env::var(k).ok())
    }

    fn apply_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        if let Some(dir) = var(ENV_DATA_DIR).filter(|d| !d.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(tf) = var(ENV_TIMEFRAME).filter(|t| !t.is_empty()) {
            self.initial_timeframe = tf.parse().map_err(|source| SettingsError::Env { var: ENV_TIMEFRAME, source })?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let s = ChartSettings::from_toml("initial_timeframe = \"100Y\"\n").unwrap();
        assert_eq!(s.initial_timeframe, Timeframe::HundredYears);
        assert_eq!(s.data_dir, PathBuf::from("data"));
        assert_eq!(s.viewport_width, None);
    }

    #[test]
    fn env_overrides_and_rejects_bad_timeframe() {
        let s = ChartSettings::default()
            .apply_vars(|k| match k {
                ENV_DATA_DIR => Some("/srv/fx".to_string()),
                ENV_TIMEFRAME => Some("10y".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(s.data_dir, PathBuf::from("/srv/fx"));
        assert_eq!(s.initial_timeframe, Timeframe::TenYears);

        let err = ChartSettings::default()
            .apply_vars(|k| (k == ENV_TIMEFRAME).then(|| "5Y".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEFRAME));
    }
}
