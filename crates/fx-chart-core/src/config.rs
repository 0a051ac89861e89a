// File: crates/fx-chart-core/src/config.rs
// Summary: Declarative chart configuration (Highcharts options shape) derived from a series + timeframe.
// Notes:
// - `build_config` is the only constructor and is a pure function of its inputs.
// - Serialized keys are camelCase and match what the rendering engine expects;
//   `None` fields are omitted except where an explicit `null` is meaningful
//   (`subtitle.text` inside a responsive override).

use serde::Serialize;

use crate::format::{expand_template, Placeholder};
use crate::series::{DataPoint, Series};
use crate::timeframe::Timeframe;

/// Series with fewer points than this are drawn with point markers.
pub const MARKER_THRESHOLD: usize = 100;
pub const MARKER_RADIUS: u32 = 4;
/// Viewport width (inclusive) at or below which the compact layout applies.
pub const COMPACT_BREAKPOINT: u32 = 500;
pub const COMPACT_HEIGHT: u32 = 300;

pub const SERIES_NAME: &str = "USD/KRW";
pub const SERIES_COLOR: &str = "#1976d2";

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub chart: ChartOptions,
    pub title: TextBlock,
    pub subtitle: TextBlock,
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    pub tooltip: TooltipConfig,
    pub series: Vec<LineSeries>,
    pub plot_options: PlotOptions,
    pub legend: Toggle,
    pub credits: Credits,
    pub responsive: Responsive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub zoom_type: String,
    pub style: TextStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

impl TextStyle {
    fn size(px: u32) -> Self {
        Self { font_size: Some(format!("{px}px")), ..Self::default() }
    }
}

/// Title-like text. `text: None` serializes as `null`, which hides the element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextBlock {
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Datetime,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
    pub style: TextStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisLabels {
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxis {
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    pub title: AxisTitle,
    pub labels: AxisLabels,
    pub grid_line_width: u32,
    pub tickmark_placement: String,
}

impl XAxis {
    /// Label text for a tick at `timestamp_ms`.
    pub fn format_label(&self, timestamp_ms: i64) -> String {
        expand_template(&self.labels.format, |k| (k == "value").then_some(Placeholder::Time(timestamp_ms)))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxis {
    pub title: AxisTitle,
    pub labels: AxisLabels,
    pub grid_line_width: u32,
}

impl YAxis {
    /// Label text for a tick at `value`.
    pub fn format_label(&self, value: f64) -> String {
        expand_template(&self.labels.format, |k| (k == "value").then_some(Placeholder::Number(value)))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    pub header_format: String,
    pub point_format: String,
    pub value_decimals: u32,
    pub shared: bool,
    pub crosshairs: bool,
}

impl TooltipConfig {
    /// Tooltip markup for one hovered point (header followed by point line).
    pub fn render_point(&self, series_name: &str, point: &DataPoint) -> String {
        let lookup = |k: &str| match k {
            "series.name" => Some(Placeholder::Text(series_name)),
            "point.x" => Some(Placeholder::Time(point.timestamp)),
            "point.y" => Some(Placeholder::Number(point.value)),
            _ => None,
        };
        let mut out = expand_template(&self.header_format, lookup);
        out.push_str(&expand_template(&self.point_format, lookup));
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub enabled: bool,
    pub radius: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub name: String,
    pub data: Series,
    pub color: String,
    pub line_width: u32,
    pub marker: Marker,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Animation {
    pub duration: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverState {
    pub line_width: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SeriesStates {
    pub hover: HoverState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SeriesPlotOptions {
    pub animation: Animation,
    pub states: SeriesStates,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlotOptions {
    pub series: SeriesPlotOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credits {
    pub enabled: bool,
    pub text: String,
    pub style: TextStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Responsive {
    pub rules: Vec<ResponsiveRule>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveCondition {
    pub max_width: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ChartHeight {
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResponsiveOverrides {
    pub chart: ChartHeight,
    pub subtitle: TextBlock,
    pub navigator: Toggle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveRule {
    pub condition: ResponsiveCondition,
    pub chart_options: ResponsiveOverrides,
}

impl ResponsiveRule {
    pub fn matches(&self, viewport_width: u32) -> bool {
        viewport_width <= self.condition.max_width
    }
}

/// Build the chart configuration for `series` shown under `timeframe`.
pub fn build_config(series: &Series, timeframe: Timeframe) -> ChartConfig {
    let axis_title = |text: &str| AxisTitle { text: text.to_string(), style: TextStyle::size(14) };

    ChartConfig {
        chart: ChartOptions {
            chart_type: ChartType::Line,
            zoom_type: "x".to_string(),
            style: TextStyle { font_family: Some("Arial, sans-serif".to_string()), ..TextStyle::default() },
            height: None,
        },
        title: TextBlock {
            text: Some(format!("USD/KRW 환율 차트 ({})", timeframe.label())),
            style: Some(TextStyle { font_weight: Some("bold".to_string()), ..TextStyle::size(20) }),
        },
        subtitle: TextBlock {
            text: Some("Source: @data/usd_krw_*.csv".to_string()),
            style: Some(TextStyle::size(12)),
        },
        x_axis: XAxis {
            axis_type: AxisType::Datetime,
            title: axis_title("날짜/연도"),
            labels: AxisLabels {
                format: "{value:%Y-%m-%d}".to_string(),
                rotation: Some(-45),
                align: Some("right".to_string()),
            },
            grid_line_width: 1,
            tickmark_placement: "on".to_string(),
        },
        y_axis: YAxis {
            title: axis_title("USD/KRW 환율"),
            labels: AxisLabels { format: "{value:,.2f}".to_string(), rotation: None, align: None },
            grid_line_width: 1,
        },
        tooltip: TooltipConfig {
            header_format: "<b>{series.name}</b><br>".to_string(),
            point_format: "{point.x:%Y-%m-%d}<br>환율: {point.y:,.2f}".to_string(),
            value_decimals: 2,
            shared: true,
            crosshairs: true,
        },
        series: vec![LineSeries {
            name: SERIES_NAME.to_string(),
            data: series.clone(),
            color: SERIES_COLOR.to_string(),
            line_width: 2,
            marker: Marker { enabled: series.len() < MARKER_THRESHOLD, radius: MARKER_RADIUS },
        }],
        plot_options: PlotOptions {
            series: SeriesPlotOptions {
                animation: Animation { duration: 1500 },
                states: SeriesStates { hover: HoverState { line_width: 3 } },
            },
        },
        legend: Toggle { enabled: false },
        credits: Credits {
            enabled: true,
            text: "Data: usd_krw_*.csv".to_string(),
            style: TextStyle::size(10),
        },
        responsive: Responsive {
            rules: vec![ResponsiveRule {
                condition: ResponsiveCondition { max_width: COMPACT_BREAKPOINT },
                chart_options: ResponsiveOverrides {
                    chart: ChartHeight { height: COMPACT_HEIGHT },
                    subtitle: TextBlock { text: None, style: None },
                    navigator: Toggle { enabled: false },
                },
            }],
        },
    }
}

impl ChartConfig {
    pub fn title_text(&self) -> &str {
        self.title.text.as_deref().unwrap_or_default()
    }

    pub fn markers_enabled(&self) -> bool {
        self.series.iter().any(|s| s.marker.enabled)
    }

    /// Apply every responsive rule matching `viewport_width`, for renderers that
    /// do not evaluate rules themselves.
    pub fn resolve_for_width(&self, viewport_width: u32) -> ChartConfig {
        let mut out = self.clone();
        for rule in self.responsive.rules.iter().filter(|r| r.matches(viewport_width)) {
            let o = &rule.chart_options;
            out.chart.height = Some(o.chart.height);
            if o.subtitle.text.is_none() {
                out.subtitle.text = None;
            }
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
