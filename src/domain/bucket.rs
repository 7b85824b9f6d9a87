//! Calendar-day buckets and contiguous date ranges.
//!
//! Buckets are always UTC calendar days so results are reproducible
//! regardless of the caller's locale.

use std::fmt;

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A UTC calendar day used as a time-series grouping key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateBucket(NaiveDate);

impl DateBucket {
    /// Wrap a calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Truncate a timestamp to its UTC day.
    #[must_use]
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.date_naive())
    }

    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// The following calendar day, if representable.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for DateBucket {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// An inclusive, contiguous run of day buckets ending at an anchor day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    /// First bucket (inclusive).
    pub start: DateBucket,
    /// Last bucket (inclusive), the anchor's day.
    pub end: DateBucket,
    /// Human-readable label for the range.
    pub label: String,
}

impl DateRange {
    /// Range covering `days` days back from `anchor`, inclusive of both ends.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRange`] if `days` is negative or reaches
    /// past the representable calendar.
    pub fn ending_at(days: i64, anchor: DateTime<Utc>) -> Result<Self, DomainError> {
        let span = u64::try_from(days).map_err(|_| DomainError::InvalidRange { days })?;
        let end = anchor.date_naive();
        let start = end
            .checked_sub_days(Days::new(span))
            .ok_or(DomainError::InvalidRange { days })?;
        Ok(Self {
            start: DateBucket(start),
            end: DateBucket(end),
            label: format!("Last {days} Days"),
        })
    }

    /// Number of buckets in the range.
    #[must_use]
    pub fn len(&self) -> usize {
        let span = (self.end.0 - self.start.0).num_days();
        usize::try_from(span).map_or(0, |span| span + 1)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, bucket: DateBucket) -> bool {
        self.start <= bucket && bucket <= self.end
    }

    /// Every bucket in chronological order.
    #[must_use]
    pub fn buckets(&self) -> Vec<DateBucket> {
        self.start
            .0
            .iter_days()
            .take(self.len())
            .map(DateBucket)
            .collect()
    }
}

/// Ordered day buckets spanning `[anchor - days, anchor]`.
///
/// Yields `days + 1` unique, contiguous buckets; `days = 0` is the anchor's
/// day alone.
///
/// # Errors
///
/// Returns [`DomainError::InvalidRange`] for negative `days`.
pub fn date_range(days: i64, anchor: DateTime<Utc>) -> Result<Vec<DateBucket>, DomainError> {
    Ok(DateRange::ending_at(days, anchor)?.buckets())
}
