//! Dashboard range codes and trend-comparison periods.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Dashboard window selector.
///
/// The code-to-days mapping is fixed: `7d` → 7, `30d` → 30, `90d` → 90,
/// `12m` → 365. Anything else, including empty input, means seven days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeCode {
    #[default]
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "12m")]
    Year,
}

impl RangeCode {
    /// Every supported code, shortest first.
    pub const ALL: [Self; 4] = [Self::Week, Self::Month, Self::Quarter, Self::Year];

    /// Resolve a code, falling back to [`RangeCode::Week`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        Self::parse(code).unwrap_or_default()
    }

    /// Resolve a code strictly.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.as_str() == code)
    }

    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
            Self::Year => 365,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
            Self::Year => "12m",
        }
    }
}

impl fmt::Display for RangeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open `[start, end)` timestamp window used for trend comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Period {
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

/// The current window and the equally long window right before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Periods {
    /// `[anchor - days, ∞)`: everything at or after the cutoff is current.
    pub current: Period,
    /// `[anchor - 2*days, anchor - days)`.
    pub previous: Period,
}

impl Periods {
    /// Lay out both periods relative to `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRange`] if `days` is negative or the
    /// windows fall outside the representable timeline.
    pub fn new(days: i64, anchor: DateTime<Utc>) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidRange { days };
        if days < 0 {
            return Err(invalid());
        }
        let span = Duration::try_days(days).ok_or_else(invalid)?;
        let cutoff = anchor.checked_sub_signed(span).ok_or_else(invalid)?;
        let floor = cutoff.checked_sub_signed(span).ok_or_else(invalid)?;
        Ok(Self {
            current: Period {
                start: cutoff,
                end: DateTime::<Utc>::MAX_UTC,
            },
            previous: Period {
                start: floor,
                end: cutoff,
            },
        })
    }

    /// Earliest timestamp either period covers.
    #[must_use]
    pub fn window_start(&self) -> DateTime<Utc> {
        self.previous.start
    }
}
