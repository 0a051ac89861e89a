// File: crates/fx-chart-dioxus/src/html.rs
// Summary: Static HTML rendering of a PageView; the chart area hands the config JSON to Highcharts.

use std::fmt::Write as _;

use fx_chart_core::view::{ButtonVariant, ChartArea, PageView, TimeframeButton};
use fx_chart_core::{ChartConfig, Timeframe};

pub const HIGHCHARTS_SRC: &str = "https://code.highcharts.com/highcharts.js";
pub const CHART_ELEMENT_ID: &str = "usdkrw-chart";

pub const STYLESHEET: &str = "\
body{margin:0;font-family:Roboto,Arial,sans-serif;background:#fafafa;color:rgba(0,0,0,.87)}\
.page{padding:24px}\
.paper{padding:24px;margin-bottom:24px;background:#fff;border-radius:4px;box-shadow:0 3px 3px -2px rgba(0,0,0,.2),0 3px 4px 0 rgba(0,0,0,.14),0 1px 8px 0 rgba(0,0,0,.12)}\
.description{color:rgba(0,0,0,.6)}\
.button-group{display:inline-flex;margin-bottom:24px}\
.button{padding:6px 16px;border:1px solid #1976d2;font:inherit;text-decoration:none;cursor:pointer}\
.button.contained{background:#1976d2;color:#fff}\
.button.outlined{background:transparent;color:#1976d2}\
.chart-area{position:relative;min-height:400px}\
.progress{position:absolute;inset:0;display:flex;justify-content:center;align-items:center}\
.progress::after{content:'';width:40px;height:40px;border:4px solid #1976d2;border-right-color:transparent;border-radius:50%;animation:spin 1s linear infinite}\
@keyframes spin{to{transform:rotate(360deg)}}\
.alert-error{padding:6px 16px;border-radius:4px;background:#fdeded;color:#5f2120}";

#[derive(Clone, Debug)]
pub struct HtmlOptions {
    pub highcharts_src: String,
    /// Resolve responsive rules for this width instead of leaving them to the engine.
    pub viewport_width: Option<u32>,
    /// Render buttons as links to sibling pages (see [`page_file_name`]).
    pub link_buttons: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self { highcharts_src: HIGHCHARTS_SRC.to_string(), viewport_width: None, link_buttons: false }
    }
}

/// File name used for a timeframe's page when pages link to each other.
pub fn page_file_name(timeframe: Timeframe) -> String {
    format!("usd_krw_{}.html", timeframe.id().to_ascii_lowercase())
}

/// Escape text for element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Config JSON safe to inline inside a `<script>` element.
pub fn config_script_json(config: &ChartConfig) -> serde_json::Result<String> {
    // `<\/` is a valid JSON escape and cannot close the script element
    Ok(config.to_json()?.replace("</", "<\\/"))
}

/// Render a complete HTML document for `view`.
pub fn render_page(view: &PageView, opts: &HtmlOptions) -> serde_json::Result<String> {
    let mut body = String::new();
    match view {
        PageView::Error { .. } => {
            let text = view.alert_text().unwrap_or_default();
            let _ = write!(body, "<div class=\"page\"><div class=\"alert-error\" role=\"alert\">{}</div></div>", escape_html(&text));
        }
        PageView::Page { heading, description, buttons, chart } => {
            body.push_str("<div class=\"page\"><div class=\"paper\">");
            let _ = write!(body, "<h1>{}</h1>", escape_html(heading));
            let _ = write!(body, "<p class=\"description\">{}</p>", escape_html(description));
            body.push_str("<div class=\"button-group\" role=\"group\" aria-label=\"timeframe selection\">");
            for b in buttons {
                body.push_str(&render_button(b, opts.link_buttons));
            }
            body.push_str("</div><div class=\"chart-area\">");
            match chart {
                ChartArea::Loading => body.push_str("<div class=\"progress\" role=\"progressbar\"></div>"),
                ChartArea::Chart(cfg) => {
                    let cfg = match opts.viewport_width {
                        Some(w) => cfg.resolve_for_width(w),
                        None => (**cfg).clone(),
                    };
                    let json = config_script_json(&cfg)?;
                    let _ = write!(
                        body,
                        "<div id=\"{CHART_ELEMENT_ID}\"></div><script>Highcharts.chart('{CHART_ELEMENT_ID}', {json});</script>"
                    );
                }
            }
            body.push_str("</div></div></div>");
        }
    }

    let title = match view {
        PageView::Page { chart: ChartArea::Chart(cfg), .. } => cfg.title_text().to_string(),
        PageView::Page { heading, .. } => heading.to_string(),
        PageView::Error { .. } => "USD/KRW".to_string(),
    };

    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLESHEET}</style>\n<script src=\"{}\"></script>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape_html(&title),
        escape_html(&opts.highcharts_src),
    ))
}

fn render_button(b: &TimeframeButton, link: bool) -> String {
    let class = match b.variant() {
        ButtonVariant::Contained => "button contained",
        ButtonVariant::Outlined => "button outlined",
    };
    let pressed = if b.selected { "true" } else { "false" };
    if link {
        format!(
            "<a class=\"{class}\" href=\"{}\" data-timeframe=\"{}\" aria-pressed=\"{pressed}\">{}</a>",
            page_file_name(b.timeframe),
            b.timeframe.id(),
            escape_html(b.label)
        )
    } else {
        format!(
            "<button type=\"button\" class=\"{class}\" data-timeframe=\"{}\" aria-pressed=\"{pressed}\">{}</button>",
            b.timeframe.id(),
            escape_html(b.label)
        )
    }
}
