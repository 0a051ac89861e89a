// File: crates/fx-chart-core/src/timeframe.rs
// Summary: Fixed set of historical windows offered by the selector (1/10/100 years).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "10Y")]
    TenYears,
    #[serde(rename = "100Y")]
    HundredYears,
}

impl Timeframe {
    /// All timeframes in button order.
    pub const ALL: [Timeframe; 3] = [Timeframe::OneYear, Timeframe::TenYears, Timeframe::HundredYears];

    /// Stable identifier ("1Y", "10Y", "100Y").
    pub const fn id(self) -> &'static str {
        match self {
            Timeframe::OneYear => "1Y",
            Timeframe::TenYears => "10Y",
            Timeframe::HundredYears => "100Y",
        }
    }

    /// Human-readable label shown on buttons and in the chart title.
    pub const fn label(self) -> &'static str {
        match self {
            Timeframe::OneYear => "1년",
            Timeframe::TenYears => "10년",
            Timeframe::HundredYears => "100년",
        }
    }

    pub const fn years(self) -> u32 {
        match self {
            Timeframe::OneYear => 1,
            Timeframe::TenYears => 10,
            Timeframe::HundredYears => 100,
        }
    }

    /// Name of the CSV file holding this window's observations.
    pub fn csv_file_name(self) -> String {
        format!("usd_krw_{}y.csv", self.years())
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown timeframe '{0}', expected one of 1Y, 10Y, 100Y")]
pub struct ParseTimeframeError(pub String);

impl FromStr for Timeframe {
    type Err = ParseTimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Timeframe::ALL
            .into_iter()
            .find(|tf| tf.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTimeframeError(s.to_string()))
    }
}
