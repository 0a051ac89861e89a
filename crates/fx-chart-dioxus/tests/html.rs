// File: crates/fx-chart-dioxus/tests/html.rs
// Purpose: Static HTML output for error, loading and ready views.

use fx_chart_core::{render, DataFetchError, DataPoint, LoadState, Series, Timeframe};
use fx_chart_dioxus::html::{config_script_json, escape_html, page_file_name, CHART_ELEMENT_ID};
use fx_chart_dioxus::{render_page, HtmlOptions};

fn ten_points() -> Series {
    (0..10).map(|i| DataPoint::new(1_704_067_200_000 + i * 86_400_000, 1300.0 + i as f64)).collect()
}

#[test]
fn error_page_shows_escaped_alert_and_no_chart() {
    let view = render(&LoadState::Error(DataFetchError::new("network down <503>")), Timeframe::OneYear);
    let html = render_page(&view, &HtmlOptions::default()).unwrap();
    assert!(html.contains("role=\"alert\">Error loading USD/KRW data: network down &lt;503&gt;</div>"));
    assert!(!html.contains("Highcharts.chart("));
    assert!(!html.contains("data-timeframe"));
}

#[test]
fn loading_page_shows_progress_and_buttons() {
    let html = render_page(&render(&LoadState::Loading, Timeframe::OneYear), &HtmlOptions::default()).unwrap();
    assert!(html.contains("role=\"progressbar\""));
    assert!(!html.contains(CHART_ELEMENT_ID));
    assert_eq!(html.matches("data-timeframe=").count(), 3);
}

#[test]
fn ready_page_embeds_config_and_marks_selection() {
    let view = render(&LoadState::Ready(ten_points()), Timeframe::TenYears);
    let html = render_page(&view, &HtmlOptions::default()).unwrap();

    assert!(html.contains("<title>USD/KRW 환율 차트 (10년)</title>"));
    assert!(html.contains("class=\"button contained\" data-timeframe=\"10Y\" aria-pressed=\"true\">10년</button>"));
    assert!(html.contains("class=\"button outlined\" data-timeframe=\"1Y\" aria-pressed=\"false\">1년</button>"));
    assert!(html.contains(&format!("Highcharts.chart('{CHART_ELEMENT_ID}', {{")));
    // Tooltip markup must not terminate the inline script.
    let script = html.split("<script>").nth(1).unwrap();
    let script = script.split("</script>").next().unwrap();
    assert!(!script.contains("</"));
}

#[test]
fn viewport_width_resolves_compact_layout() {
    let view = render(&LoadState::Ready(ten_points()), Timeframe::OneYear);
    let opts = HtmlOptions { viewport_width: Some(320), ..HtmlOptions::default() };
    let html = render_page(&view, &opts).unwrap();
    assert!(html.contains("\"fontFamily\":\"Arial, sans-serif\"},\"height\":300"));
    assert!(!html.contains("Source: @data/usd_krw_*.csv"));
}

#[test]
fn linked_buttons_point_at_sibling_pages() {
    let opts = HtmlOptions { link_buttons: true, ..HtmlOptions::default() };
    let html = render_page(&render(&LoadState::Loading, Timeframe::OneYear), &opts).unwrap();
    assert!(html.contains("href=\"usd_krw_100y.html\""));
    assert_eq!(page_file_name(Timeframe::TenYears), "usd_krw_10y.html");
}

#[test]
fn script_json_round_trips() {
    let cfg = fx_chart_core::build_config(&ten_points(), Timeframe::OneYear);
    let json = config_script_json(&cfg).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["tooltip"]["headerFormat"], "<b>{series.name}</b><br>");
    assert_eq!(escape_html("a&\"b'"), "a&amp;&quot;b&#39;");
}
