//! Aggregation of entries into sparse per-day totals.
//!
//! Days without matching entries are simply absent; zero-filling against a
//! date range happens when series are built.

use std::collections::BTreeMap;

use crate::domain::{DateBucket, Entry};

/// Sparse per-day totals keyed by UTC creation day.
pub type DailyTotals = BTreeMap<DateBucket, f64>;

/// Sum `value_of(entry)` per creation day.
pub fn group_by_date<'a, I, F>(entries: I, value_of: F) -> DailyTotals
where
    I: IntoIterator<Item = &'a Entry>,
    F: Fn(&Entry) -> f64,
{
    let mut totals = DailyTotals::new();
    for entry in entries {
        *totals.entry(entry.day()).or_insert(0.0) += value_of(entry);
    }
    totals
}

/// Signups per day.
pub fn signups_by_date<'a, I>(entries: I) -> DailyTotals
where
    I: IntoIterator<Item = &'a Entry>,
{
    group_by_date(entries, |_| 1.0)
}

/// Approved entries per day; days with no approvals are absent.
pub fn approvals_by_date<'a, I>(entries: I) -> DailyTotals
where
    I: IntoIterator<Item = &'a Entry>,
{
    group_by_date(entries.into_iter().filter(|entry| entry.is_approved()), |_| 1.0)
}
