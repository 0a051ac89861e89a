// File: crates/fx-chart-core/src/provider.rs
// Summary: Data provider seam plus CSV-backed and in-memory implementations.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::DataFetchError;
use crate::series::{DataPoint, Series};
use crate::timeframe::Timeframe;

/// Source of exchange-rate series, one per timeframe.
pub trait DataProvider {
    fn fetch(&self, timeframe: Timeframe) -> Result<Series, DataFetchError>;
}

impl<P: DataProvider + ?Sized> DataProvider for &P {
    fn fetch(&self, timeframe: Timeframe) -> Result<Series, DataFetchError> {
        (**self).fetch(timeframe)
    }
}

const TIME_HEADERS: &[&str] = &["date", "time", "timestamp", "datetime"];
const VALUE_HEADERS: &[&str] = &["value", "rate", "close", "usd_krw", "krw", "price"];

/// Reads `usd_krw_<N>y.csv` files from a directory.
#[derive(Clone, Debug)]
pub struct CsvDataProvider {
    data_dir: PathBuf,
}

impl CsvDataProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    pub fn data_dir(&self) -> &Path { &self.data_dir }

    pub fn path_for(&self, timeframe: Timeframe) -> PathBuf {
        self.data_dir.join(timeframe.csv_file_name())
    }
}

impl DataProvider for CsvDataProvider {
    fn fetch(&self, timeframe: Timeframe) -> Result<Series, DataFetchError> {
        let path = self.path_for(timeframe);
        if !path.exists() {
            return Err(DataFetchError::not_found(&path));
        }
        let series = load_rate_csv(&path)?;
        log::debug!("loaded {} points for {timeframe} from {}", series.len(), path.display());
        Ok(series)
    }
}

/// Load a two-column (time, rate) CSV into a series. The header row is optional.
pub fn load_rate_csv(path: &Path) -> Result<Series, DataFetchError> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let series = read_rate_csv(rdr)?;
    if series.is_empty() {
        return Err(DataFetchError::no_data(path));
    }
    Ok(series)
}

/// Parse rate rows from any CSV reader. Rows with unreadable cells are skipped.
///
/// With `has_headers(false)` the first record is sniffed: a row that parses as
/// `(time, rate)` is data, anything else is taken as the header.
pub fn read_rate_csv<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Series, DataFetchError> {
    let mut columns = None;
    if rdr.has_headers() {
        let headers = rdr.byte_headers()?.clone();
        columns = decode_cells(&headers).map(|cells| header_columns(&cells));
    }

    let mut points = Vec::new();
    for (row, rec) in rdr.byte_records().enumerate() {
        let line = row + 1;
        let rec = match rec {
            Ok(rec) => rec,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                log::warn!("skipping CSV record {line}: {e}");
                continue;
            }
        };
        let Some(cells) = decode_cells(&rec) else {
            log::warn!("skipping CSV record {line}: invalid UTF-8");
            continue;
        };

        let (i_time, i_value) = match columns {
            Some(c) => c,
            None if parse_row(&cells, (0, 1)).is_some() => {
                columns = Some((0, 1));
                (0, 1)
            }
            None => {
                columns = Some(header_columns(&cells));
                continue;
            }
        };
        match parse_row(&cells, (i_time, i_value)) {
            Some(point) => points.push(point),
            None => log::warn!("skipping CSV record {line}: {cells:?}"),
        }
    }
    Ok(Series::from_points(points))
}

fn decode_cells(rec: &csv::ByteRecord) -> Option<Vec<&str>> {
    rec.iter()
        .enumerate()
        .map(|(i, cell)| {
            let cell = std::str::from_utf8(cell).ok()?;
            Some(if i == 0 { cell.trim_start_matches('\u{feff}') } else { cell })
        })
        .collect()
}

fn header_columns(cells: &[&str]) -> (usize, usize) {
    let headers: Vec<String> = cells.iter().map(|h| h.to_lowercase()).collect();
    let idx = |names: &[&str]| headers.iter().position(|h| names.iter().any(|n| *n == h.as_str()));
    match (idx(TIME_HEADERS), idx(VALUE_HEADERS)) {
        (Some(t), Some(v)) => (t, v),
        (Some(t), None) => (t, if t == 0 { 1 } else { 0 }),
        (None, Some(v)) => (if v == 0 { 1 } else { 0 }, v),
        (None, None) => {
            log::warn!("no recognised time/value headers in {headers:?}; using columns 0 and 1");
            (0, 1)
        }
    }
}

fn parse_row(cells: &[&str], (i_time, i_value): (usize, usize)) -> Option<DataPoint> {
    let timestamp = cells.get(i_time).copied().and_then(parse_timestamp_ms)?;
    let value = cells.get(i_value).copied().and_then(parse_rate)?;
    Some(DataPoint { timestamp, value })
}

/// Accepts dates, datetimes, RFC 3339, `YYYY-MM`, `YYYY` and integer epochs.
/// Integers above 10^12 are milliseconds; other integers of more than 4 digits
/// are seconds.
pub fn parse_timestamp_ms(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    let n = s.parse::<i64>().ok()?;
    if s.len() == 4 {
        let d = NaiveDate::from_ymd_opt(i32::try_from(n).ok()?, 1, 1)?;
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    if n > 10_i64.pow(12) { Some(n) } else { n.checked_mul(1000) }
}

/// Rate cell; tolerates thousands separators.
pub fn parse_rate(s: &str) -> Option<f64> {
    let cleaned: String = s.trim().chars().filter(|&c| c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Canned per-timeframe results.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProvider {
    results: HashMap<Timeframe, Result<Series, DataFetchError>>,
}

impl InMemoryProvider {
    pub fn new() -> Self { Self::default() }

    pub fn with_series(mut self, timeframe: Timeframe, series: Series) -> Self {
        self.results.insert(timeframe, Ok(series));
        self
    }

    pub fn with_error(mut self, timeframe: Timeframe, message: impl Into<String>) -> Self {
        self.results.insert(timeframe, Err(DataFetchError::new(message)));
        self
    }
}

impl DataProvider for InMemoryProvider {
    fn fetch(&self, timeframe: Timeframe) -> Result<Series, DataFetchError> {
        self.results
            .get(&timeframe)
            .cloned()
            .unwrap_or_else(|| Err(DataFetchError::new(format!("no data registered for {timeframe}"))))
    }
}
