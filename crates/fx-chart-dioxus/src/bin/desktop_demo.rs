// File: crates/fx-chart-dioxus/src/bin/desktop_demo.rs
// Purpose: Launcher for the desktop USD/KRW page (settings from USDKRW_* env vars).

#[cfg(feature = "desktop")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let settings = match fx_chart_core::ChartSettings::default().apply_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("fx-chart-dioxus settings error: {e}");
            std::process::exit(2);
        }
    };
    log::info!("reading CSV data from {}", settings.data_dir.display());
    if let Err(e) = fx_chart_dioxus::ui::run_ui(settings) {
        eprintln!("fx-chart-dioxus demo error: {e}");
    }
}

#[cfg(not(feature = "desktop"))]
fn main() {
    if let Err(e) = fx_chart_dioxus::run_ui(fx_chart_core::ChartSettings::default()) {
        eprintln!("{e}");
    }
}
