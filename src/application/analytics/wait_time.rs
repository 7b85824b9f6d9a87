//! Approval latency, averaged overall and per creation day.
//!
//! Only approved entries carry a wait time. A negative delta is corrupt
//! input and surfaces as [`DomainError::NegativeWaitTime`]; callers screen
//! entries with [`super::integrity::screen`] first.

use std::collections::BTreeMap;

use crate::domain::{DateBucket, DomainError, Entry};

use super::aggregate::DailyTotals;

#[derive(Debug, Default, Clone, Copy)]
struct Mean {
    sum: f64,
    count: u32,
}

impl Mean {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn value(self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / f64::from(self.count)
        }
    }
}

/// Mean wait in minutes over all approved entries, `0` if there are none.
///
/// # Errors
///
/// Returns [`DomainError::NegativeWaitTime`] for the first approved entry
/// updated before it was created.
pub fn average_wait_time<'a, I>(entries: I) -> Result<f64, DomainError>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut mean = Mean::default();
    for entry in entries {
        if let Some(minutes) = entry.wait_minutes()? {
            mean.push(minutes);
        }
    }
    Ok(mean.value())
}

/// Mean wait in minutes per creation day.
///
/// Days without approved entries are absent.
///
/// # Errors
///
/// Returns [`DomainError::NegativeWaitTime`] as [`average_wait_time`] does.
pub fn average_wait_by_date<'a, I>(entries: I) -> Result<DailyTotals, DomainError>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut by_day: BTreeMap<DateBucket, Mean> = BTreeMap::new();
    for entry in entries {
        if let Some(minutes) = entry.wait_minutes()? {
            by_day.entry(entry.day()).or_default().push(minutes);
        }
    }
    Ok(by_day
        .into_iter()
        .map(|(day, mean)| (day, mean.value()))
        .collect())
}
