// File: crates/fx-chart-core/src/format.rs
// Summary: Native renditions of the axis/tooltip format strings (dates, fixed-point, `{key:fmt}` templates).

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

/// Date pattern used by the x axis and the tooltip.
pub const DATE_PATTERN: &str = "%Y-%m-%d";

/// `%Y-%m-%d` in UTC. Out-of-range timestamps fall back to the raw number.
pub fn format_date(timestamp_ms: i64) -> String {
    format_date_with(timestamp_ms, DATE_PATTERN)
}

/// Format a millisecond timestamp with a strftime pattern (UTC).
pub fn format_date_with(timestamp_ms: i64, pattern: &str) -> String {
    let Some(dt) = DateTime::<Utc>::from_timestamp_millis(timestamp_ms) else {
        return timestamp_ms.to_string();
    };
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|i| matches!(i, Item::Error)) {
        return timestamp_ms.to_string();
    }
    dt.format_with_items(items.into_iter()).to_string()
}

/// Fixed-point with comma thousands separators, e.g. `1,234.57`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut out = String::with_capacity(raw.len() + raw.len() / 3 + 1);
    // "-0.00" reads oddly; only keep the sign when something non-zero is printed
    if value < 0.0 && raw.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    let n = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Value substituted into a `{key}` / `{key:fmt}` placeholder.
#[derive(Clone, Copy, Debug)]
pub enum Placeholder<'a> {
    Text(&'a str),
    /// Milliseconds since the Unix epoch.
    Time(i64),
    Number(f64),
}

/// Expand `{key}` and `{key:fmt}` placeholders the way the chart engine does for
/// the subset we emit: strftime patterns for times, `,.Nf` / `.Nf` for numbers.
/// Unknown keys are left verbatim.
pub fn expand_template<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<Placeholder<'a>>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let inner = &after[..close];
        let (key, spec) = match inner.split_once(':') {
            Some((k, s)) => (k, Some(s)),
            None => (inner, None),
        };
        match lookup(key) {
            Some(v) => out.push_str(&render_placeholder(v, spec)),
            None => {
                out.push('{');
                out.push_str(inner);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}

fn render_placeholder(value: Placeholder<'_>, spec: Option<&str>) -> String {
    match (value, spec) {
        (Placeholder::Text(s), _) => s.to_string(),
        (Placeholder::Time(ts), Some(spec)) if spec.contains('%') => format_date_with(ts, spec),
        (Placeholder::Time(ts), _) => ts.to_string(),
        (Placeholder::Number(n), Some(spec)) => format_number_spec(n, spec),
        (Placeholder::Number(n), None) => n.to_string(),
    }
}

fn format_number_spec(n: f64, spec: &str) -> String {
    let grouped = spec.starts_with(',');
    let decimals = spec
        .trim_start_matches(',')
        .strip_prefix('.')
        .and_then(|s| s.strip_suffix('f'))
        .and_then(|d| d.parse::<usize>().ok());
    match (grouped, decimals) {
        (true, Some(d)) => format_fixed(n, d),
        (false, Some(d)) if n.is_finite() => format!("{:.*}", d, n),
        (true, None) => format_fixed(n, 0),
        _ => n.to_string(),
    }
}
