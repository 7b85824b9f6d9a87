//! Current-versus-previous partitioning for trend comparison.

use chrono::{DateTime, Utc};

use crate::domain::{DomainError, Entry, Periods};

/// Entries partitioned into the two comparison periods.
///
/// Entries older than the previous period belong to neither side.
#[derive(Debug, Default)]
pub struct PeriodSplit<'a> {
    pub current: Vec<&'a Entry>,
    pub previous: Vec<&'a Entry>,
}

/// Split `entries` around `anchor - days`.
///
/// # Errors
///
/// Returns [`DomainError::InvalidRange`] for negative `days`.
pub fn split(entries: &[Entry], days: i64, anchor: DateTime<Utc>) -> Result<PeriodSplit<'_>, DomainError> {
    let periods = Periods::new(days, anchor)?;
    Ok(split_periods(entries, &periods))
}

/// Split `entries` using already laid out periods.
pub fn split_periods<'a>(entries: &'a [Entry], periods: &Periods) -> PeriodSplit<'a> {
    let mut split = PeriodSplit::default();
    for entry in entries {
        let created = entry.created_at();
        if periods.current.contains(created) {
            split.current.push(entry);
        } else if periods.previous.contains(created) {
            split.previous.push(entry);
        }
    }
    split
}

/// Approved share of `entries` in percent, `0` for an empty slice.
pub fn conversion_rate(entries: &[&Entry]) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    let approved = entries.iter().filter(|entry| entry.is_approved()).count();
    approved as f64 / entries.len() as f64 * 100.0
}
