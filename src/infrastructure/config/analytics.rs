//! Analytics defaults for the command line.

use serde::{Deserialize, Serialize};

use crate::domain::RangeCode;

/// Longest custom `--days` window accepted unless configured otherwise.
pub const DEFAULT_MAX_CUSTOM_DAYS: i64 = 730;

/// `[analytics]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Range code used when a command does not name one.
    pub default_range: String,
    /// Upper bound for custom day windows.
    pub max_custom_days: i64,
}

impl AnalyticsConfig {
    /// The configured default range.
    ///
    /// Validation guarantees the code is known; anything else falls back to
    /// the seven-day range.
    #[must_use]
    pub fn default_range(&self) -> RangeCode {
        RangeCode::from_code(&self.default_range)
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_range: RangeCode::default().as_str().to_string(),
            max_custom_days: DEFAULT_MAX_CUSTOM_DAYS,
        }
    }
}
