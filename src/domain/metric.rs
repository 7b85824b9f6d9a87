//! Directional metric values compared against a prior period.

use serde::{Deserialize, Serialize};

/// Direction of a metric versus its previous period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    #[default]
    Up,
    Down,
}

/// One dashboard scalar plus its trend against the previous period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    pub value: f64,
    pub trend: Trend,
    /// Absolute change formatted with one decimal, e.g. `"12.5%"`.
    pub change_percent: String,
}

impl MetricValue {
    /// The no-data metric: `{0, Up, "0%"}`.
    #[must_use]
    pub fn zero() -> Self {
        flat(0.0)
    }
}

impl Default for MetricValue {
    fn default() -> Self {
        Self::zero()
    }
}

fn flat(value: f64) -> MetricValue {
    MetricValue {
        value,
        trend: Trend::Up,
        change_percent: "0%".to_string(),
    }
}

/// Compare `current` against `previous`.
///
/// A zero baseline is reported as a flat upward trend (`"0%"`), whatever
/// `current` is. Otherwise the change is `(current - previous) / previous`,
/// `Up` when non-negative.
#[must_use]
pub fn calculate_metric(current: f64, previous: f64) -> MetricValue {
    if previous == 0.0 {
        return flat(current);
    }

    let change = (current - previous) / previous * 100.0;
    MetricValue {
        value: current,
        trend: if change >= 0.0 { Trend::Up } else { Trend::Down },
        change_percent: format!("{:.1}%", change.abs()),
    }
}
