//! Assembled analytics results handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::bucket::DateBucket;
use super::collection::Collection;
use super::entry::Entry;
use super::metric::MetricValue;
use super::series::ChartSeries;

/// Headline dashboard metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_signups: MetricValue,
    pub conversion_rate: MetricValue,
    pub average_wait_time: MetricValue,
    pub active_collections: MetricValue,
}

/// The four day-bucketed series, all aligned to the same range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charts {
    pub signups: ChartSeries,
    pub approvals: ChartSeries,
    pub conversion: ChartSeries,
    pub wait_time: ChartSeries,
}

/// Result of one analytics computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    pub metrics: Metrics,
    pub charts: Charts,
}

impl AnalyticsResult {
    /// The empty result for a range: every metric `{0, Up, "0%"}` and every
    /// series zero-filled to full length.
    ///
    /// Built fresh on each call; callers own what they get.
    #[must_use]
    pub fn empty(buckets: &[DateBucket]) -> Self {
        Self {
            metrics: Metrics::default(),
            charts: Charts {
                signups: ChartSeries::zeroed(buckets),
                approvals: ChartSeries::zeroed(buckets),
                conversion: ChartSeries::zeroed(buckets),
                wait_time: ChartSeries::zeroed(buckets),
            },
        }
    }
}

/// All-time status breakdown for a single collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub total_signups: u64,
    pub approved_count: u64,
    pub rejected_count: u64,
    pub pending_count: u64,
    /// Approved share of all signups, in percent; `0` without signups.
    pub conversion_rate: f64,
}

/// A signup in the recent-activity feed, labelled with its waitlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    #[serde(flatten)]
    pub entry: Entry,
    pub collection_name: String,
}

/// A collection ranked by how many signups it has drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRanking {
    #[serde(flatten)]
    pub collection: Collection,
    pub entry_count: u64,
    /// Approved share of the collection's entries, in percent.
    pub conversion_rate: f64,
}
