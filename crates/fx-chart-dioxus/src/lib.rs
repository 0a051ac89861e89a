// File: crates/fx-chart-dioxus/src/lib.rs
// Summary: Front-ends for the USD/KRW page: static HTML (always) and a Dioxus desktop component.
// Notes:
// - This crate keeps UI deps behind the `desktop` feature, so the workspace builds
//   without fetching Dioxus unless explicitly enabled.
// - Both front-ends draw through Highcharts: the core hands over a config object
//   and never rasterizes the chart itself.

pub mod html;

pub use html::{render_page, HtmlOptions};

#[cfg(feature = "desktop")]
pub mod ui {
    use std::sync::OnceLock;

    use dioxus::prelude::*;
    use fx_chart_core::view::{ButtonVariant, ChartArea, PageView};
    use fx_chart_core::{
        ChartPage, ChartSettings, CsvDataProvider, DataFetchError, DataProvider, FetchTicket, Series, Timeframe,
    };

    use crate::html::{CHART_ELEMENT_ID, HIGHCHARTS_SRC, STYLESHEET};

    static SETTINGS: OnceLock<ChartSettings> = OnceLock::new();

    /// Read the CSV on the blocking pool and apply the result when it lands.
    fn spawn_fetch(mut page: Signal<ChartPage>, provider: Signal<CsvDataProvider>, ticket: FetchTicket) {
        let provider = provider.peek().clone();
        spawn(async move {
            let result = fetch_off_thread(provider, ticket.timeframe).await;
            page.write().resolve(ticket, result);
        });
    }

    async fn fetch_off_thread(
        provider: CsvDataProvider,
        timeframe: Timeframe,
    ) -> std::result::Result<Series, DataFetchError> {
        tokio::task::spawn_blocking(move || provider.fetch(timeframe))
            .await
            .unwrap_or_else(|e| Err(DataFetchError::new(format!("fetch task failed: {e}"))))
    }

    /// The exchange-rate page: timeframe buttons, loading overlay, error alert and chart.
    #[component]
    pub fn UsdKrwChart(data_dir: String, #[props(default)] initial: Timeframe) -> Element {
        let mut page = use_signal(|| ChartPage::new(initial).0);
        let provider = use_signal(|| CsvDataProvider::new(data_dir.clone()));

        // Initial fetch
        use_hook(move || spawn_fetch(page, provider, page.peek().current_ticket()));

        // Hand the config to Highcharts whenever data for the selected timeframe is ready.
        use_effect(move || {
            let Some(cfg) = page.read().config() else { return };
            match cfg.to_json() {
                Ok(json) => {
                    let _ = document::eval(&format!("Highcharts.chart('{CHART_ELEMENT_ID}', {json});"));
                }
                Err(e) => log::warn!("failed to serialize chart config: {e}"),
            }
        });

        let view = page.read().view();
        match &view {
            PageView::Error { .. } => {
                let alert = view.alert_text().unwrap_or_default();
                rsx! {
                    div { class: "page",
                        div { class: "alert-error", role: "alert", "{alert}" }
                    }
                }
            }
            PageView::Page { heading, description, buttons, chart } => {
                let loading = matches!(chart, ChartArea::Loading);
                rsx! {
                    div { class: "page",
                        div { class: "paper",
                            h1 { "{heading}" }
                            p { class: "description", "{description}" }
                            div { class: "button-group", role: "group", "aria-label": "timeframe selection",
                                for (tf, label, class) in buttons.iter().map(|b| (b.timeframe, b.label, variant_class(b.variant()))) {
                                    button {
                                        key: "{tf}",
                                        class: "{class}",
                                        onclick: move |_| {
                                            let ticket = page.write().select(tf);
                                            spawn_fetch(page, provider, ticket);
                                        },
                                        "{label}"
                                    }
                                }
                            }
                            div { class: "chart-area",
                                if loading {
                                    div { class: "progress", role: "progressbar" }
                                } else {
                                    div { id: CHART_ELEMENT_ID }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    fn variant_class(v: ButtonVariant) -> &'static str {
        match v {
            ButtonVariant::Contained => "button contained",
            ButtonVariant::Outlined => "button outlined",
        }
    }

    #[component]
    fn App() -> Element {
        let settings = SETTINGS.get().cloned().unwrap_or_default();
        let data_dir = settings.data_dir.to_string_lossy().into_owned();
        rsx! { UsdKrwChart { data_dir, initial: settings.initial_timeframe } }
    }

    /// Launch the desktop window showing the page. Only returns on a setup error;
    /// once launched, the event loop exits the process.
    pub fn run_ui(settings: ChartSettings) -> std::result::Result<std::convert::Infallible, String> {
        SETTINGS.set(settings).map_err(|_| "desktop UI already launched".to_string())?;

        let head = format!("<style>{STYLESHEET}</style><script src=\"{HIGHCHARTS_SRC}\"></script>");
        let cfg = dioxus_desktop::Config::new()
            .with_custom_head(head)
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("USD/KRW 환율 히스토리"));
        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn block_on<F: std::future::Future>(f: F) -> F::Output {
            tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
        }

        #[test]
        fn blocking_fetch_result_reaches_the_task() {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join("usd_krw_1y.csv"), "date,rate\n2024-01-01,1300\n2024-01-02,1310\n").unwrap();

            let series = block_on(fetch_off_thread(CsvDataProvider::new(dir.path()), Timeframe::OneYear)).unwrap();
            assert_eq!(series.len(), 2);

            let err = block_on(fetch_off_thread(CsvDataProvider::new(dir.path()), Timeframe::TenYears)).unwrap_err();
            assert!(err.message.contains("usd_krw_10y.csv"), "{}", err.message);
        }

        #[test]
        fn stale_blocking_fetch_does_not_replace_newer_selection() {
            let dir = tempfile::tempdir().unwrap();
            std::fs::write(dir.path().join("usd_krw_1y.csv"), "2024-01-01,1300\n").unwrap();
            std::fs::write(dir.path().join("usd_krw_10y.csv"), "2015-01-01,1100\n2016-01-01,1150\n").unwrap();

            let (mut page, first) = ChartPage::new(Timeframe::OneYear);
            let second = page.select(Timeframe::TenYears);
            let newer = block_on(fetch_off_thread(CsvDataProvider::new(dir.path()), second.timeframe));
            let older = block_on(fetch_off_thread(CsvDataProvider::new(dir.path()), first.timeframe));

            assert!(page.resolve(second, newer));
            assert!(!page.resolve(first, older));
            assert_eq!(page.state().series().map(Series::len), Some(2));
        }
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_ui(_settings: fx_chart_core::ChartSettings) -> Result<(), &'static str> {
    Err("fx-chart-dioxus built without `desktop` feature; enable features to run the desktop UI")
}
