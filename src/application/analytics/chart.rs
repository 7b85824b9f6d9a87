//! Zero-filled chart series aligned to a date range.

use crate::domain::{ChartPoint, ChartSeries, Charts, DateBucket, DomainError, Entry};

use super::aggregate::{approvals_by_date, signups_by_date, DailyTotals};
use super::wait_time::average_wait_by_date;

/// One point per bucket, `0` where `grouped` has no value.
///
/// Output length always equals `buckets.len()`; totals for days outside
/// `buckets` are not represented.
pub fn format_series(grouped: &DailyTotals, buckets: &[DateBucket]) -> ChartSeries {
    buckets
        .iter()
        .map(|&date| ChartPoint {
            date,
            value: grouped.get(&date).copied().unwrap_or(0.0),
        })
        .collect()
}

/// Per-bucket `approvals / signups * 100`, `0` for buckets without signups.
pub fn conversion_series(
    signups: &DailyTotals,
    approvals: &DailyTotals,
    buckets: &[DateBucket],
) -> ChartSeries {
    buckets
        .iter()
        .map(|date| {
            let signed_up = signups.get(date).copied().unwrap_or(0.0);
            let approved = approvals.get(date).copied().unwrap_or(0.0);
            let value = if signed_up > 0.0 {
                approved / signed_up * 100.0
            } else {
                0.0
            };
            ChartPoint { date: *date, value }
        })
        .collect()
}

/// Rounded per-bucket average wait in minutes, zero-filled.
///
/// # Errors
///
/// Returns [`DomainError::NegativeWaitTime`] for an approved entry updated
/// before it was created.
pub fn wait_time_series<'a, I>(entries: I, buckets: &[DateBucket]) -> Result<ChartSeries, DomainError>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut averages = average_wait_by_date(entries)?;
    for value in averages.values_mut() {
        *value = value.round();
    }
    Ok(format_series(&averages, buckets))
}

/// All four series for `entries` over `buckets`.
///
/// # Errors
///
/// Propagates [`wait_time_series`] failures.
pub fn build_charts(entries: &[&Entry], buckets: &[DateBucket]) -> Result<Charts, DomainError> {
    let signups = signups_by_date(entries.iter().copied());
    let approvals = approvals_by_date(entries.iter().copied());

    Ok(Charts {
        signups: format_series(&signups, buckets),
        approvals: format_series(&approvals, buckets),
        conversion: conversion_series(&signups, &approvals, buckets),
        wait_time: wait_time_series(entries.iter().copied(), buckets)?,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

    use super::*;
    use crate::domain::{date_range, CollectionId, EntryId, EntryStatus};

    fn day(d: u32) -> DateBucket {
        DateBucket::new(NaiveDate::from_ymd_opt(2024, 1, d).unwrap())
    }

    fn at(d: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, hour, minute, 0).unwrap()
    }

    fn entry(created: DateTime<Utc>, updated: DateTime<Utc>, status: EntryStatus) -> Entry {
        Entry::from_parts(EntryId::generate(), CollectionId::new("wl"), created, updated, status)
    }

    #[test]
    fn format_series_fills_gaps_and_conserves_totals() {
        let buckets = date_range(6, at(7, 9, 0)).unwrap();
        let grouped: DailyTotals = [(day(2), 3.0), (day(5), 4.0)].into_iter().collect();

        let series = format_series(&grouped, &buckets);

        assert_eq!(series.len(), buckets.len());
        assert_eq!(series.total(), 7.0);
        assert_eq!(series.value_at(day(1)), Some(0.0));
        assert_eq!(series.value_at(day(5)), Some(4.0));
    }

    #[test]
    fn format_series_over_empty_map_is_full_length() {
        let buckets = date_range(29, at(30, 0, 0)).unwrap();
        let series = format_series(&DailyTotals::new(), &buckets);
        assert_eq!(series.len(), 30);
        assert!(series.iter().all(|point| point.value == 0.0));
    }

    #[test]
    fn conversion_is_zero_without_signups() {
        let buckets = [day(1), day(2)];
        let signups: DailyTotals = [(day(1), 4.0)].into_iter().collect();
        let approvals: DailyTotals = [(day(1), 1.0), (day(2), 3.0)].into_iter().collect();

        let series = conversion_series(&signups, &approvals, &buckets);

        assert_eq!(series.value_at(day(1)), Some(25.0));
        assert_eq!(series.value_at(day(2)), Some(0.0));
    }

    #[test]
    fn wait_time_series_rounds_per_bucket() {
        let buckets = [day(1), day(2)];
        let entries = vec![
            entry(at(1, 0, 0), at(1, 0, 10), EntryStatus::Approved),
            entry(at(1, 1, 0), at(1, 1, 15), EntryStatus::Approved),
        ];
        let series = wait_time_series(&entries, &buckets).unwrap();
        assert_eq!(series.value_at(day(1)), Some(13.0));
        assert_eq!(series.value_at(day(2)), Some(0.0));
    }

    #[test]
    fn two_entry_day_builds_expected_charts() {
        let entries = vec![
            entry(at(1, 0, 0), at(1, 0, 30), EntryStatus::Approved),
            entry(at(1, 12, 0), at(1, 12, 0), EntryStatus::Pending),
        ];
        let refs: Vec<&Entry> = entries.iter().collect();
        let buckets = date_range(1, at(2, 0, 0)).unwrap();

        let charts = build_charts(&refs, &buckets).unwrap();

        let values = |series: &ChartSeries| series.iter().map(|p| p.value).collect::<Vec<_>>();
        assert_eq!(values(&charts.signups), vec![2.0, 0.0]);
        assert_eq!(values(&charts.approvals), vec![1.0, 0.0]);
        assert_eq!(values(&charts.conversion), vec![50.0, 0.0]);
        assert_eq!(charts.wait_time.value_at(day(1)), Some(30.0));
    }

    #[test]
    fn negative_wait_fails_the_wait_series() {
        let entries = vec![entry(
            at(3, 5, 0),
            at(3, 5, 0) - Duration::minutes(1),
            EntryStatus::Approved,
        )];
        assert!(wait_time_series(&entries, &[day(3)]).is_err());
    }
}
