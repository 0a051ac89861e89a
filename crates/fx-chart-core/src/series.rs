// File: crates/fx-chart-core/src/series.rs
// Summary: Exchange-rate observations and the time-ordered series rendered on the chart.

use serde::ser::{Serialize, SerializeTuple, Serializer};

/// One observation: milliseconds since the Unix epoch (UTC) and the rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub timestamp: i64,
    pub value: f64,
}

impl DataPoint {
    pub const fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

// Datetime axes take `[x, y]` pairs.
impl Serialize for DataPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.timestamp)?;
        tup.serialize_element(&self.value)?;
        tup.end()
    }
}

/// Observations ordered by timestamp ascending.
/// Contract: a `Series` is never re-ordered or edited after construction; a new
/// timeframe gets a new `Series`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from points in any order. Points are sorted by timestamp;
    /// ties keep their input order.
    pub fn from_points(mut points: Vec<DataPoint>) -> Self {
        if !points.windows(2).all(|w| w[0].timestamp <= w[1].timestamp) {
            points.sort_by_key(|p| p.timestamp);
        }
        Self { points }
    }

    pub fn points(&self) -> &[DataPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn first(&self) -> Option<&DataPoint> { self.points.first() }
    pub fn last(&self) -> Option<&DataPoint> { self.points.last() }

    /// Min and max value, ignoring non-finite entries.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut it = self.points.iter().map(|p| p.value).filter(|v| v.is_finite());
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

impl FromIterator<DataPoint> for Series {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_sorts_stably() {
        let s = Series::from_points(vec![
            DataPoint::new(3, 1.0),
            DataPoint::new(1, 2.0),
            DataPoint::new(3, 3.0),
        ]);
        let ts: Vec<_> = s.points().iter().map(|p| (p.timestamp, p.value)).collect();
        assert_eq!(ts, vec![(1, 2.0), (3, 1.0), (3, 3.0)]);
    }

    #[test]
    fn value_range_skips_nan() {
        let s = Series::from_points(vec![
            DataPoint::new(0, f64::NAN),
            DataPoint::new(1, 1200.0),
            DataPoint::new(2, 1400.5),
        ]);
        assert_eq!(s.value_range(), Some((1200.0, 1400.5)));
        assert_eq!(Series::new().value_range(), None);
    }

    #[test]
    fn points_serialize_as_pairs() {
        let s = Series::from_points(vec![DataPoint::new(1000, 1300.5)]);
        assert_eq!(serde_json::to_string(&s).unwrap(), "[[1000,1300.5]]");
    }
}
