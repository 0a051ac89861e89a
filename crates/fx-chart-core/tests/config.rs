// File: crates/fx-chart-core/tests/config.rs
// Purpose: Chart config builder properties (title, markers, responsive rule, formats).

use fx_chart_core::config::{COMPACT_BREAKPOINT, COMPACT_HEIGHT, MARKER_RADIUS};
use fx_chart_core::{build_config, DataPoint, Series, Timeframe};

const DAY_MS: i64 = 86_400_000;

fn daily(n: usize) -> Series {
    (0..n)
        .map(|i| DataPoint::new(1_704_067_200_000 + i as i64 * DAY_MS, 1300.0 + i as f64 * 0.5))
        .collect()
}

#[test]
fn title_carries_timeframe_label() {
    for tf in Timeframe::ALL {
        let cfg = build_config(&daily(5), tf);
        assert_eq!(cfg.title_text(), format!("USD/KRW 환율 차트 ({})", tf.label()));
    }
}

#[test]
fn build_is_deterministic() {
    let s = daily(42);
    let a = build_config(&s, Timeframe::HundredYears);
    let b = build_config(&s, Timeframe::HundredYears);
    assert_eq!(a, b);
    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
}

#[test]
fn markers_only_for_sparse_series() {
    let sparse = build_config(&daily(99), Timeframe::OneYear);
    assert!(sparse.series[0].marker.enabled);
    assert_eq!(sparse.series[0].marker.radius, MARKER_RADIUS);

    let dense = build_config(&daily(100), Timeframe::OneYear);
    assert!(!dense.markers_enabled());
    assert_eq!(dense.series[0].marker.radius, 4);

    assert!(build_config(&Series::new(), Timeframe::OneYear).markers_enabled());
}

#[test]
fn series_payload_matches_input() {
    let s = daily(3);
    let cfg = build_config(&s, Timeframe::TenYears);
    assert_eq!(cfg.series.len(), 1);
    assert_eq!(cfg.series[0].name, "USD/KRW");
    assert_eq!(cfg.series[0].data, s);
}

#[test]
fn responsive_rule_compacts_narrow_viewports() {
    let cfg = build_config(&daily(3), Timeframe::OneYear);
    let rule = &cfg.responsive.rules[0];
    assert!(rule.matches(COMPACT_BREAKPOINT));
    assert!(!rule.matches(COMPACT_BREAKPOINT + 1));

    let narrow = cfg.resolve_for_width(360);
    assert_eq!(narrow.chart.height, Some(COMPACT_HEIGHT));
    assert_eq!(narrow.subtitle.text, None);
    assert_eq!(narrow.title, cfg.title);

    let wide = cfg.resolve_for_width(1024);
    assert_eq!(wide, cfg);
}

#[test]
fn axis_and_tooltip_formats_render_natively() {
    let cfg = build_config(&daily(3), Timeframe::OneYear);
    assert_eq!(cfg.x_axis.format_label(1_704_067_200_000), "2024-01-01");
    assert_eq!(cfg.y_axis.format_label(1234567.891), "1,234,567.89");

    let tip = cfg.tooltip.render_point("USD/KRW", &DataPoint::new(1_704_153_600_000, 1300.5));
    assert_eq!(tip, "<b>USD/KRW</b><br>2024-01-02<br>환율: 1,300.50");
}

#[test]
fn json_uses_engine_key_names() {
    let json: serde_json::Value = serde_json::from_str(&build_config(&daily(2), Timeframe::OneYear).to_json().unwrap()).unwrap();
    assert_eq!(json["chart"]["type"], "line");
    assert_eq!(json["xAxis"]["type"], "datetime");
    assert_eq!(json["xAxis"]["labels"]["rotation"], -45);
    assert_eq!(json["yAxis"]["labels"]["format"], "{value:,.2f}");
    assert_eq!(json["legend"]["enabled"], false);
    assert_eq!(json["responsive"]["rules"][0]["condition"]["maxWidth"], 500);
    assert!(json["responsive"]["rules"][0]["chartOptions"]["subtitle"]["text"].is_null());
    assert!(json["chart"].get("height").is_none());
}
