// File: crates/demo/src/main.rs
// Summary: Demo loads the USD/KRW CSV for a timeframe and prints a summary, the chart config JSON,
//          or writes standalone HTML pages.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use fx_chart_core::format::{format_date, format_fixed};
use fx_chart_core::{ChartConfig, ChartPage, ChartSettings, CsvDataProvider, LoadState, PageView, Timeframe};
use fx_chart_dioxus::html::page_file_name;
use fx_chart_dioxus::{render_page, HtmlOptions};

/// USD/KRW exchange-rate chart demo
#[derive(Parser, Debug)]
#[command(name = "fx-chart-demo", version, about, long_about = None)]
struct Cli {
    /// Directory holding usd_krw_1y.csv, usd_krw_10y.csv, usd_krw_100y.csv
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Timeframe to load (1Y, 10Y, 100Y)
    #[arg(short, long)]
    timeframe: Option<Timeframe>,

    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Viewport width used to resolve responsive rules
    #[arg(short, long)]
    width: Option<u32>,

    /// Print the chart configuration as JSON
    #[arg(long)]
    json: bool,

    /// Write a standalone HTML page for the selected timeframe
    #[arg(long, value_name = "FILE")]
    html: Option<PathBuf>,

    /// Write linked HTML pages for every timeframe into this directory
    #[arg(long, value_name = "DIR", conflicts_with = "html")]
    html_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let settings = load_settings(&cli)?;
    let provider = CsvDataProvider::new(&settings.data_dir);
    log::info!("Using data directory: {}", provider.data_dir().display());

    if let Some(dir) = &cli.html_dir {
        return write_linked_pages(dir, &provider, &settings);
    }

    let (mut page, _) = ChartPage::new(settings.initial_timeframe);
    page.load_with(&provider);

    if let Some(out) = &cli.html {
        let opts = HtmlOptions { viewport_width: settings.viewport_width, ..HtmlOptions::default() };
        write_page(out, &page.view(), &opts)?;
    }

    match page.state() {
        LoadState::Error(_) => {
            let alert = page.view().alert_text().unwrap_or_default();
            anyhow::bail!(alert);
        }
        LoadState::Loading => anyhow::bail!("fetch did not complete"),
        LoadState::Ready(_) => {}
    }

    let config = page.config().context("chart config unavailable")?;
    let config = match settings.viewport_width {
        Some(w) => config.resolve_for_width(w),
        None => config,
    };

    if cli.json {
        println!("{}", config.to_json_pretty()?);
    } else if cli.html.is_none() {
        print_summary(&page, &config);
    }
    Ok(())
}

/// Settings file (if any), then USDKRW_* env vars, then CLI flags.
fn load_settings(cli: &Cli) -> Result<ChartSettings> {
    let base = match &cli.config {
        Some(path) => ChartSettings::load(path)?,
        None => ChartSettings::default(),
    };
    let mut settings = base.apply_env()?;
    if let Some(dir) = &cli.data_dir {
        settings.data_dir = dir.clone();
    }
    if let Some(tf) = cli.timeframe {
        settings.initial_timeframe = tf;
    }
    if cli.width.is_some() {
        settings.viewport_width = cli.width;
    }
    log::debug!("settings: {settings:?}");
    Ok(settings)
}

fn write_page(out: &Path, view: &PageView, opts: &HtmlOptions) -> Result<()> {
    let html = render_page(view, opts)?;
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(out, html).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// One page per timeframe, buttons linking between them. Failed loads still get
/// a page showing the error alert.
fn write_linked_pages(dir: &Path, provider: &CsvDataProvider, settings: &ChartSettings) -> Result<()> {
    let opts = HtmlOptions { viewport_width: settings.viewport_width, link_buttons: true, ..HtmlOptions::default() };
    let (mut page, _) = ChartPage::new(settings.initial_timeframe);
    for tf in Timeframe::ALL {
        page.select(tf);
        if let LoadState::Error(e) = page.load_with(provider) {
            log::warn!("{tf}: {e}");
        }
        write_page(&dir.join(page_file_name(tf)), &page.view(), &opts)?;
    }
    Ok(())
}

fn print_summary(page: &ChartPage, config: &ChartConfig) {
    let Some(series) = page.state().series() else { return };
    println!("{}", config.title_text());
    println!("  points:  {}", series.len());
    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        println!("  range:   {} .. {}", format_date(first.timestamp), format_date(last.timestamp));
        println!("  latest:  {}", format_fixed(last.value, 2));
    }
    if let Some((lo, hi)) = series.value_range() {
        println!("  low/high: {} / {}", format_fixed(lo, 2), format_fixed(hi, 2));
    }
    println!("  markers: {}", if config.markers_enabled() { "on" } else { "off" });
    if let Some(h) = config.chart.height {
        println!("  height:  {h}px (compact layout)");
    }
}
