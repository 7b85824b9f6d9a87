//! Analytics use-cases exposed to inbound adapters.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::domain::{
    ActivityItem, AnalyticsResult, CollectionId, CollectionRanking, CollectionSummary, OwnerId,
};
use crate::error::Result;

/// Dashboard analytics queries.
pub trait AnalyticsQuery: Send + Sync {
    /// Analytics for a dashboard range code, anchored at `anchor`.
    ///
    /// Never fails: on any internal error the empty result for the range is
    /// returned and the failure is logged.
    fn analytics(
        &self,
        owner: &OwnerId,
        range_code: &str,
        anchor: DateTime<Utc>,
    ) -> impl Future<Output = AnalyticsResult> + Send;

    /// Analytics over an arbitrary day window, surfacing errors.
    fn analytics_for_days(
        &self,
        owner: &OwnerId,
        days: i64,
        anchor: DateTime<Utc>,
    ) -> impl Future<Output = Result<AnalyticsResult>> + Send;

    /// All-time status breakdown of one collection up to `anchor`.
    fn collection_summary(
        &self,
        collection: &CollectionId,
        anchor: DateTime<Utc>,
    ) -> impl Future<Output = Result<CollectionSummary>> + Send;

    /// Analytics for one collection of `owner` over an arbitrary day window.
    fn collection_analytics_for_days(
        &self,
        owner: &OwnerId,
        collection: &CollectionId,
        days: i64,
        anchor: DateTime<Utc>,
    ) -> impl Future<Output = Result<AnalyticsResult>> + Send;

    /// The newest `limit` signups across `owner`'s collections.
    fn recent_activity(
        &self,
        owner: &OwnerId,
        limit: usize,
        anchor: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<ActivityItem>>> + Send;

    /// `owner`'s collections ranked by signup count.
    fn top_collections(
        &self,
        owner: &OwnerId,
        limit: usize,
        anchor: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<CollectionRanking>>> + Send;
}
