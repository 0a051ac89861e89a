// File: crates/fx-chart-core/src/view.rs
// Summary: Renderer-agnostic page view tree (error alert / loading overlay / chart + timeframe buttons).

use crate::config::{build_config, ChartConfig};
use crate::load_state::LoadState;
use crate::timeframe::Timeframe;

pub const PAGE_HEADING: &str = "USD/KRW 환율 히스토리";
pub const PAGE_DESCRIPTION: &str = "1년, 10년, 100년치 실제 원/달러 환율 데이터";
pub const ERROR_PREFIX: &str = "Error loading USD/KRW data: ";

/// Visual emphasis of a timeframe button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Contained,
    Outlined,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TimeframeButton {
    pub timeframe: Timeframe,
    pub label: &'static str,
    pub selected: bool,
}

impl TimeframeButton {
    pub fn variant(&self) -> ButtonVariant {
        if self.selected { ButtonVariant::Contained } else { ButtonVariant::Outlined }
    }
}

/// What occupies the chart area.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartArea {
    /// Progress indicator over an empty chart area.
    Loading,
    Chart(Box<ChartConfig>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageView {
    /// Alert only; neither chart nor controls are shown.
    Error { message: String },
    Page {
        heading: &'static str,
        description: &'static str,
        buttons: Vec<TimeframeButton>,
        chart: ChartArea,
    },
}

impl PageView {
    /// Alert text for the error view.
    pub fn alert_text(&self) -> Option<String> {
        match self {
            PageView::Error { message } => Some(format!("{ERROR_PREFIX}{message}")),
            PageView::Page { .. } => None,
        }
    }

    pub fn chart_config(&self) -> Option<&ChartConfig> {
        match self {
            PageView::Page { chart: ChartArea::Chart(cfg), .. } => Some(cfg.as_ref()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageView::Page { chart: ChartArea::Loading, .. })
    }

    pub fn buttons(&self) -> &[TimeframeButton] {
        match self {
            PageView::Page { buttons, .. } => buttons,
            PageView::Error { .. } => &[],
        }
    }
}

/// Buttons for every timeframe in display order, with `selected` marked.
pub fn timeframe_buttons(selected: Timeframe) -> Vec<TimeframeButton> {
    Timeframe::ALL
        .iter()
        .map(|&tf| TimeframeButton { timeframe: tf, label: tf.label(), selected: tf == selected })
        .collect()
}

/// Render the page for the current load state and timeframe.
pub fn render(state: &LoadState, timeframe: Timeframe) -> PageView {
    let chart = match state {
        LoadState::Error(e) => return PageView::Error { message: e.message.clone() },
        LoadState::Loading => ChartArea::Loading,
        LoadState::Ready(series) => ChartArea::Chart(Box::new(build_config(series, timeframe))),
    };
    PageView::Page {
        heading: PAGE_HEADING,
        description: PAGE_DESCRIPTION,
        buttons: timeframe_buttons(timeframe),
        chart,
    }
}
