//! Day-bucketed chart series.

use serde::{Deserialize, Serialize};

use super::bucket::DateBucket;

/// One bucket of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: DateBucket,
    pub value: f64,
}

/// Chronological chart points, one per bucket of the requested range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartSeries(Vec<ChartPoint>);

impl ChartSeries {
    /// A zero-valued point for every bucket.
    #[must_use]
    pub fn zeroed(buckets: &[DateBucket]) -> Self {
        buckets
            .iter()
            .map(|&date| ChartPoint { date, value: 0.0 })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &[ChartPoint] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChartPoint> {
        self.0.iter()
    }

    /// Sum of every point's value.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.iter().map(|point| point.value).sum()
    }

    /// Value at `date`, if the bucket is part of this series.
    #[must_use]
    pub fn value_at(&self, date: DateBucket) -> Option<f64> {
        self.0
            .iter()
            .find(|point| point.date == date)
            .map(|point| point.value)
    }
}

impl FromIterator<ChartPoint> for ChartSeries {
    fn from_iter<I: IntoIterator<Item = ChartPoint>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ChartSeries {
    type Item = &'a ChartPoint;
    type IntoIter = std::slice::Iter<'a, ChartPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn zeroed_series_matches_bucket_count() {
        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let buckets: Vec<DateBucket> = start.iter_days().take(4).map(DateBucket::new).collect();
        let series = ChartSeries::zeroed(&buckets);
        assert_eq!(series.len(), 4);
        assert_eq!(series.total(), 0.0);
        assert_eq!(series.value_at(buckets[2]), Some(0.0));
    }

    #[test]
    fn serializes_as_plain_array() {
        let date = DateBucket::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        let series: ChartSeries = std::iter::once(ChartPoint { date, value: 3.0 }).collect();
        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"[{"date":"2024-05-01","value":3.0}]"#);
    }
}
