//! Analytics orchestration over an entry store.
//!
//! # Pipeline
//!
//! ```text
//! range code --> days --> Periods + DateRange   (InvalidRange stops here)
//!                               |
//!                 EntryStore::collections_for_owner
//!                               |
//!                 EntryStore::fetch_entries [anchor - 2d, anchor]
//!                               |
//!            split_periods --> screen --> metrics + charts
//!                               |
//!                               v
//!                        AnalyticsResult
//! ```
//!
//! Collection-scoped analytics run the same pipeline with the owner's
//! collections narrowed to one.
//!
//! Every call recomputes from scratch; nothing is shared between calls.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, error};

use crate::domain::{
    calculate_metric, date_range, ActivityItem, AnalyticsResult, Collection, CollectionId,
    CollectionRanking, CollectionSummary, DateRange, DomainError, Entry, Metrics, OwnerId, Periods,
    RangeCode,
};
use crate::error::{Error, Result};
use crate::port::inbound::analytics::AnalyticsQuery;
use crate::port::outbound::store::EntryStore;

use super::chart::build_charts;
use super::integrity::screen;
use super::period::{conversion_rate, split_periods};
use super::summary::{rank_collections, summarize_collection};
use super::wait_time::average_wait_time;

/// Computes dashboard analytics from a store's entries.
#[derive(Debug)]
pub struct AnalyticsService<S> {
    store: S,
}

impl<S: EntryStore> AnalyticsService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Analytics for `range_code` as of now.
    pub async fn get_analytics(&self, owner: &OwnerId, range_code: &str) -> AnalyticsResult {
        self.get_analytics_at(owner, range_code, Utc::now()).await
    }

    /// Analytics for `range_code` as of `anchor`.
    ///
    /// Unknown codes fall back to seven days. Failures are logged and the
    /// empty result for the range is returned in place of an error.
    pub async fn get_analytics_at(
        &self,
        owner: &OwnerId,
        range_code: &str,
        anchor: DateTime<Utc>,
    ) -> AnalyticsResult {
        let days = RangeCode::from_code(range_code).days();
        match self.analytics_for_days(owner, days, anchor).await {
            Ok(result) => result,
            Err(e) => {
                error!(
                    owner = %owner,
                    range = range_code,
                    error = %e,
                    "Analytics computation failed, returning empty result"
                );
                empty_result(days, anchor)
            }
        }
    }

    /// Analytics over the last `days` days before `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRange`] for negative `days` before the
    /// store is touched, and store failures as they are reported.
    pub async fn analytics_for_days(
        &self,
        owner: &OwnerId,
        days: i64,
        anchor: DateTime<Utc>,
    ) -> Result<AnalyticsResult> {
        let periods = Periods::new(days, anchor)?;
        let range = DateRange::ending_at(days, anchor)?;

        let collections = self.store.collections_for_owner(owner).await?;
        if collections.is_empty() {
            debug!(owner = %owner, days, "No collections, returning empty result");
            return Ok(AnalyticsResult::empty(&range.buckets()));
        }
        self.compose(&collections, &periods, &range, anchor).await
    }

    /// Analytics for one of `owner`'s collections over a range code.
    ///
    /// Unknown codes fall back to seven days, as in [`Self::get_analytics_at`].
    ///
    /// # Errors
    ///
    /// See [`Self::collection_analytics_for_days`].
    pub async fn collection_analytics(
        &self,
        owner: &OwnerId,
        collection: &CollectionId,
        range_code: &str,
        anchor: DateTime<Utc>,
    ) -> Result<AnalyticsResult> {
        let days = RangeCode::from_code(range_code).days();
        self.collection_analytics_for_days(owner, collection, days, anchor)
            .await
    }

    /// Analytics for one of `owner`'s collections over the last `days` days.
    ///
    /// Active collections compare the one collection against itself.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRange`] for negative `days`,
    /// [`Error::NotFound`] when `owner` has no such collection, and store
    /// failures as they are reported.
    pub async fn collection_analytics_for_days(
        &self,
        owner: &OwnerId,
        collection: &CollectionId,
        days: i64,
        anchor: DateTime<Utc>,
    ) -> Result<AnalyticsResult> {
        let periods = Periods::new(days, anchor)?;
        let range = DateRange::ending_at(days, anchor)?;

        let scoped: Vec<Collection> = self
            .store
            .collections_for_owner(owner)
            .await?
            .into_iter()
            .filter(|c| &c.id == collection)
            .collect();
        if scoped.is_empty() {
            return Err(Error::NotFound(format!(
                "collection {collection} for owner {owner}"
            )));
        }
        self.compose(&scoped, &periods, &range, anchor).await
    }

    async fn compose(
        &self,
        collections: &[Collection],
        periods: &Periods,
        range: &DateRange,
        anchor: DateTime<Utc>,
    ) -> Result<AnalyticsResult> {
        let ids: Vec<CollectionId> = collections.iter().map(|c| c.id.clone()).collect();
        let entries = self
            .store
            .fetch_entries(&ids, periods.window_start(), anchor)
            .await?;
        debug!(
            collections = collections.len(),
            entries = entries.len(),
            "Fetched entries"
        );

        Ok(build_analytics(collections, &entries, periods, range)?)
    }

    /// The `limit` newest signups across `owner`'s collections up to
    /// `anchor`, each labelled with its collection name.
    ///
    /// # Errors
    ///
    /// Returns store failures as they are reported.
    pub async fn recent_activity(
        &self,
        owner: &OwnerId,
        limit: usize,
        anchor: DateTime<Utc>,
    ) -> Result<Vec<ActivityItem>> {
        let collections = self.store.collections_for_owner(owner).await?;
        if collections.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }
        let ids: Vec<CollectionId> = collections.iter().map(|c| c.id.clone()).collect();
        let entries = self.store.recent_entries(&ids, anchor, limit).await?;
        debug!(owner = %owner, limit, entries = entries.len(), "Fetched recent activity");

        let names: HashMap<&CollectionId, &str> = collections
            .iter()
            .map(|c| (&c.id, c.name.as_str()))
            .collect();
        Ok(entries
            .into_iter()
            .map(|entry| {
                let collection_name = names
                    .get(entry.collection_id())
                    .map_or_else(String::new, |name| (*name).to_string());
                ActivityItem {
                    entry,
                    collection_name,
                }
            })
            .collect())
    }

    /// `owner`'s collections ranked by entries created up to `anchor`,
    /// keeping the top `limit`.
    ///
    /// # Errors
    ///
    /// Returns store failures as they are reported.
    pub async fn top_collections(
        &self,
        owner: &OwnerId,
        limit: usize,
        anchor: DateTime<Utc>,
    ) -> Result<Vec<CollectionRanking>> {
        let collections = self.store.collections_for_owner(owner).await?;
        if collections.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }
        let ids: Vec<CollectionId> = collections.iter().map(|c| c.id.clone()).collect();
        let entries = self
            .store
            .fetch_entries(&ids, DateTime::<Utc>::MIN_UTC, anchor)
            .await?;
        debug!(owner = %owner, entries = entries.len(), "Ranking collections");
        Ok(rank_collections(&collections, &entries, limit))
    }

    /// Status breakdown of `collection` over every entry up to `anchor`.
    ///
    /// # Errors
    ///
    /// Returns store failures as they are reported.
    pub async fn collection_summary(
        &self,
        collection: &CollectionId,
        anchor: DateTime<Utc>,
    ) -> Result<CollectionSummary> {
        let entries = self
            .store
            .fetch_entries(std::slice::from_ref(collection), DateTime::<Utc>::MIN_UTC, anchor)
            .await?;
        debug!(collection = %collection, entries = entries.len(), "Summarizing collection");
        Ok(summarize_collection(&entries))
    }
}

/// Full-length empty result for `days`, or an empty default when the range
/// itself cannot be laid out.
fn empty_result(days: i64, anchor: DateTime<Utc>) -> AnalyticsResult {
    date_range(days, anchor)
        .map(|buckets| AnalyticsResult::empty(&buckets))
        .unwrap_or_default()
}

/// Compose metrics and charts from already fetched data.
///
/// `entries` must lie within `periods`; anything outside both periods is
/// ignored. Entries failing the integrity screen still count toward period
/// totals but are left out of wait times and charts.
///
/// # Errors
///
/// Returns a [`DomainError`] only if a screened entry still reports a
/// negative wait.
pub fn build_analytics(
    collections: &[Collection],
    entries: &[Entry],
    periods: &Periods,
    range: &DateRange,
) -> std::result::Result<AnalyticsResult, DomainError> {
    let buckets = range.buckets();
    if entries.is_empty() {
        return Ok(AnalyticsResult::empty(&buckets));
    }

    let split = split_periods(entries, periods);
    let screened = screen(entries);
    debug!(
        current = split.current.len(),
        previous = split.previous.len(),
        flagged = screened.flagged,
        "Split entries into periods"
    );

    let wait_current = average_wait_time(
        screened
            .valid
            .iter()
            .copied()
            .filter(|e| periods.current.contains(e.created_at())),
    )?;
    let wait_previous = average_wait_time(
        screened
            .valid
            .iter()
            .copied()
            .filter(|e| periods.previous.contains(e.created_at())),
    )?;

    let active = collections.iter().filter(|c| c.is_active()).count();
    let metrics = Metrics {
        total_signups: calculate_metric(split.current.len() as f64, split.previous.len() as f64),
        conversion_rate: calculate_metric(
            conversion_rate(&split.current),
            conversion_rate(&split.previous),
        ),
        average_wait_time: calculate_metric(wait_current.round(), wait_previous.round()),
        active_collections: calculate_metric(active as f64, collections.len() as f64),
    };

    let charted: Vec<&Entry> = screened
        .valid
        .into_iter()
        .filter(|e| range.contains(e.day()))
        .collect();
    let charts = build_charts(&charted, &buckets)?;
    debug!(charted = charted.len(), buckets = buckets.len(), "Built charts");

    Ok(AnalyticsResult { metrics, charts })
}

impl<S: EntryStore> AnalyticsQuery for AnalyticsService<S> {
    async fn analytics(
        &self,
        owner: &OwnerId,
        range_code: &str,
        anchor: DateTime<Utc>,
    ) -> AnalyticsResult {
        self.get_analytics_at(owner, range_code, anchor).await
    }

    async fn analytics_for_days(
        &self,
        owner: &OwnerId,
        days: i64,
        anchor: DateTime<Utc>,
    ) -> Result<AnalyticsResult> {
        AnalyticsService::analytics_for_days(self, owner, days, anchor).await
    }

    async fn collection_summary(
        &self,
        collection: &CollectionId,
        anchor: DateTime<Utc>,
    ) -> Result<CollectionSummary> {
        AnalyticsService::collection_summary(self, collection, anchor).await
    }

    async fn collection_analytics_for_days(
        &self,
        owner: &OwnerId,
        collection: &CollectionId,
        days: i64,
        anchor: DateTime<Utc>,
    ) -> Result<AnalyticsResult> {
        AnalyticsService::collection_analytics_for_days(self, owner, collection, days, anchor).await
    }

    async fn recent_activity(
        &self,
        owner: &OwnerId,
        limit: usize,
        anchor: DateTime<Utc>,
    ) -> Result<Vec<ActivityItem>> {
        AnalyticsService::recent_activity(self, owner, limit, anchor).await
    }

    async fn top_collections(
        &self,
        owner: &OwnerId,
        limit: usize,
        anchor: DateTime<Utc>,
    ) -> Result<Vec<CollectionRanking>> {
        AnalyticsService::top_collections(self, owner, limit, anchor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::MemoryEntryStore;
    use crate::domain::{CollectionStatus, DateBucket, MetricValue, Trend};
    use crate::error::Error;
    use crate::testkit::domain::{approved, at, collection, corrupt, pending, rejected};
    use crate::testkit::store::{CountingStore, FailingStore};

    fn owner() -> OwnerId {
        OwnerId::new("owner-1")
    }

    fn service(entries: Vec<Entry>) -> AnalyticsService<MemoryEntryStore> {
        AnalyticsService::new(MemoryEntryStore::with_data(
            [collection("wl", "owner-1")],
            entries,
        ))
    }

    fn values(series: &crate::domain::ChartSeries) -> Vec<f64> {
        series.iter().map(|p| p.value).collect()
    }

    #[tokio::test]
    async fn single_day_window_matches_expected_charts() {
        let service = service(vec![
            approved("wl", at(2024, 1, 1, 0, 0), 30),
            pending("wl", at(2024, 1, 1, 12, 0)),
        ]);

        let result = service
            .analytics_for_days(&owner(), 1, at(2024, 1, 2, 0, 0))
            .await
            .unwrap();

        assert_eq!(values(&result.charts.signups), vec![2.0, 0.0]);
        assert_eq!(values(&result.charts.conversion), vec![50.0, 0.0]);
        let jan1 = DateBucket::from_timestamp(at(2024, 1, 1, 0, 0));
        assert_eq!(result.charts.wait_time.value_at(jan1), Some(30.0));
        assert_eq!(result.metrics.total_signups.value, 2.0);
        assert_eq!(result.metrics.conversion_rate.value, 50.0);
        assert_eq!(result.metrics.average_wait_time.value, 30.0);
    }

    #[tokio::test]
    async fn no_entries_returns_zeroed_full_length_result() {
        let service = service(vec![]);
        for code in ["7d", "30d", "90d", "12m"] {
            let result = service
                .get_analytics_at(&owner(), code, at(2024, 6, 30, 10, 0))
                .await;
            let expected_len = RangeCode::from_code(code).days() as usize + 1;

            assert_eq!(result.metrics.total_signups, MetricValue::zero());
            assert_eq!(result.metrics.conversion_rate, MetricValue::zero());
            assert_eq!(result.metrics.average_wait_time, MetricValue::zero());
            assert_eq!(result.metrics.active_collections, MetricValue::zero());
            assert_eq!(result.charts.signups.len(), expected_len);
            assert_eq!(result.charts.wait_time.len(), expected_len);
            assert_eq!(result.charts.conversion.total(), 0.0);
        }
    }

    #[tokio::test]
    async fn unknown_range_code_defaults_to_a_week() {
        let service = service(vec![]);
        for code in ["", "1y", "7D"] {
            let result = service
                .get_analytics_at(&owner(), code, at(2024, 6, 30, 10, 0))
                .await;
            assert_eq!(result.charts.approvals.len(), 8);
        }
    }

    #[tokio::test]
    async fn trends_compare_against_previous_period() {
        let anchor = at(2024, 3, 20, 0, 0);
        let service = service(vec![
            // previous week: 4 signups, 2 approved with 60 minute waits
            approved("wl", at(2024, 3, 7, 0, 0), 60),
            approved("wl", at(2024, 3, 8, 0, 0), 60),
            pending("wl", at(2024, 3, 9, 0, 0)),
            rejected("wl", at(2024, 3, 10, 0, 0), 5),
            // current week: 2 signups, 1 approved with a 30 minute wait
            approved("wl", at(2024, 3, 15, 0, 0), 30),
            pending("wl", at(2024, 3, 19, 0, 0)),
        ]);

        let metrics = service
            .analytics_for_days(&owner(), 7, anchor)
            .await
            .unwrap()
            .metrics;

        assert_eq!(metrics.total_signups.value, 2.0);
        assert_eq!(metrics.total_signups.trend, Trend::Down);
        assert_eq!(metrics.total_signups.change_percent, "50.0%");
        assert_eq!(metrics.conversion_rate.value, 50.0);
        assert_eq!(metrics.conversion_rate.change_percent, "0.0%");
        assert_eq!(metrics.average_wait_time.value, 30.0);
        assert_eq!(metrics.average_wait_time.trend, Trend::Down);
    }

    #[tokio::test]
    async fn entries_before_both_periods_are_ignored() {
        let service = service(vec![
            pending("wl", at(2024, 1, 1, 0, 0)),
            pending("wl", at(2024, 3, 19, 0, 0)),
        ]);
        let result = service
            .analytics_for_days(&owner(), 7, at(2024, 3, 20, 0, 0))
            .await
            .unwrap();
        assert_eq!(result.metrics.total_signups.value, 1.0);
        assert_eq!(result.charts.signups.total(), 1.0);
    }

    #[tokio::test]
    async fn active_collections_compare_active_to_total() {
        let store = MemoryEntryStore::with_data(
            [
                collection("a", "owner-1"),
                collection("b", "owner-1").with_status(CollectionStatus::Paused),
                collection("c", "owner-1"),
                collection("d", "owner-1").with_status(CollectionStatus::Closed),
            ],
            [pending("a", at(2024, 3, 19, 0, 0))],
        );
        let result = AnalyticsService::new(store)
            .analytics_for_days(&owner(), 7, at(2024, 3, 20, 0, 0))
            .await
            .unwrap();
        assert_eq!(result.metrics.active_collections.value, 2.0);
        assert_eq!(result.metrics.active_collections.trend, Trend::Down);
        assert_eq!(result.metrics.active_collections.change_percent, "50.0%");
    }

    #[tokio::test]
    async fn corrupt_entries_count_in_totals_but_not_in_charts() {
        let service = service(vec![
            approved("wl", at(2024, 3, 18, 0, 0), 20),
            corrupt("wl", at(2024, 3, 18, 6, 0)),
        ]);
        let result = service
            .analytics_for_days(&owner(), 7, at(2024, 3, 20, 0, 0))
            .await
            .unwrap();

        assert_eq!(result.metrics.total_signups.value, 2.0);
        assert_eq!(result.charts.signups.total(), 1.0);
        assert_eq!(result.metrics.average_wait_time.value, 20.0);
    }

    #[tokio::test]
    async fn negative_days_are_rejected_before_any_store_call() {
        let store = CountingStore::new(MemoryEntryStore::new());
        let service = AnalyticsService::new(store);

        let err = service
            .analytics_for_days(&owner(), -1, at(2024, 3, 20, 0, 0))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Domain(DomainError::InvalidRange { days: -1 })));
        assert_eq!(service.store().lookups(), 0);
        assert_eq!(service.store().fetches(), 0);
    }

    #[tokio::test]
    async fn owner_without_collections_skips_the_fetch() {
        let store = CountingStore::new(MemoryEntryStore::new());
        let service = AnalyticsService::new(store);

        let result = service
            .get_analytics_at(&owner(), "30d", at(2024, 3, 20, 0, 0))
            .await;

        assert_eq!(result.charts.signups.len(), 31);
        assert_eq!(service.store().lookups(), 1);
        assert_eq!(service.store().fetches(), 0);
    }

    #[tokio::test]
    async fn store_failure_degrades_to_empty_result() {
        let service = AnalyticsService::new(FailingStore);

        let result = service
            .get_analytics_at(&owner(), "90d", at(2024, 3, 20, 0, 0))
            .await;

        assert_eq!(result.charts.signups.len(), 91);
        assert_eq!(result.metrics, Metrics::default());

        let err = service
            .analytics_for_days(&owner(), 7, at(2024, 3, 20, 0, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
    }

    #[tokio::test]
    async fn wait_time_is_deterministic_across_calls() {
        let service = service(vec![approved("wl", at(2024, 3, 19, 9, 0), 45)]);
        let anchor = at(2024, 3, 20, 0, 0);
        let first = service.get_analytics_at(&owner(), "7d", anchor).await;
        let second = service.get_analytics_at(&owner(), "7d", anchor).await;
        assert_eq!(first, second);
        assert_eq!(first.metrics.average_wait_time.value, 45.0);
    }

    #[tokio::test]
    async fn collection_summary_covers_all_time() {
        let service = service(vec![
            approved("wl", at(2020, 1, 1, 0, 0), 5),
            rejected("wl", at(2023, 1, 1, 0, 0), 5),
            pending("wl", at(2024, 3, 1, 0, 0)),
            pending("wl", at(2024, 4, 1, 0, 0)),
        ]);
        let summary = service
            .collection_summary(&CollectionId::new("wl"), at(2024, 3, 20, 0, 0))
            .await
            .unwrap();
        assert_eq!(summary.total_signups, 3);
        assert_eq!(summary.approved_count, 1);
        assert_eq!(summary.rejected_count, 1);
        assert_eq!(summary.pending_count, 1);
    }

    #[tokio::test]
    async fn collection_analytics_only_see_that_collection() {
        let store = MemoryEntryStore::with_data(
            [collection("wl", "owner-1"), collection("other", "owner-1")],
            [
                approved("wl", at(2024, 3, 18, 0, 0), 40),
                pending("wl", at(2024, 3, 19, 0, 0)),
                pending("other", at(2024, 3, 19, 0, 0)),
                pending("other", at(2024, 3, 19, 6, 0)),
            ],
        );
        let service = AnalyticsService::new(store);

        let result = service
            .collection_analytics(&owner(), &CollectionId::new("wl"), "7d", at(2024, 3, 20, 0, 0))
            .await
            .unwrap();

        assert_eq!(result.charts.signups.len(), 8);
        assert_eq!(result.metrics.total_signups.value, 2.0);
        assert_eq!(result.metrics.conversion_rate.value, 50.0);
        assert_eq!(result.metrics.average_wait_time.value, 40.0);
        assert_eq!(result.metrics.active_collections.value, 1.0);
        assert_eq!(result.metrics.active_collections.change_percent, "0.0%");
    }

    #[tokio::test]
    async fn collection_analytics_require_ownership() {
        let store = MemoryEntryStore::with_data(
            [collection("wl", "owner-1"), collection("theirs", "owner-2")],
            [pending("theirs", at(2024, 3, 19, 0, 0))],
        );
        let service = AnalyticsService::new(store);

        let err = service
            .collection_analytics(&owner(), &CollectionId::new("theirs"), "7d", at(2024, 3, 20, 0, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let err = service
            .collection_analytics_for_days(&owner(), &CollectionId::new("wl"), -3, at(2024, 3, 20, 0, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::InvalidRange { days: -3 })));
    }

    #[tokio::test]
    async fn recent_activity_is_newest_first_with_names() {
        let store = MemoryEntryStore::with_data(
            [collection("wl", "owner-1"), collection("other", "owner-1"), collection("x", "owner-2")],
            [
                pending("wl", at(2024, 3, 1, 0, 0)),
                pending("other", at(2024, 3, 2, 0, 0)),
                pending("wl", at(2024, 3, 3, 0, 0)),
                pending("x", at(2024, 3, 4, 0, 0)),
                pending("wl", at(2024, 3, 25, 0, 0)),
            ],
        );
        let service = AnalyticsService::new(store);

        let recent = service
            .recent_activity(&owner(), 2, at(2024, 3, 20, 0, 0))
            .await
            .unwrap();

        let seen: Vec<(DateTime<Utc>, &str)> = recent
            .iter()
            .map(|item| (item.entry.created_at(), item.collection_name.as_str()))
            .collect();
        assert_eq!(
            seen,
            vec![
                (at(2024, 3, 3, 0, 0), "wl waitlist"),
                (at(2024, 3, 2, 0, 0), "other waitlist"),
            ]
        );
    }

    #[tokio::test]
    async fn recent_activity_without_collections_skips_the_store() {
        let service = AnalyticsService::new(CountingStore::new(MemoryEntryStore::new()));
        let recent = service
            .recent_activity(&owner(), 5, at(2024, 3, 20, 0, 0))
            .await
            .unwrap();
        assert!(recent.is_empty());
        assert_eq!(service.store().fetches(), 0);
    }

    #[tokio::test]
    async fn top_collections_rank_by_all_time_entries() {
        let store = MemoryEntryStore::with_data(
            [collection("small", "owner-1"), collection("big", "owner-1")],
            [
                approved("big", at(2023, 1, 1, 0, 0), 10),
                pending("big", at(2024, 3, 1, 0, 0)),
                rejected("big", at(2024, 3, 2, 0, 0), 10),
                approved("small", at(2024, 3, 3, 0, 0), 10),
                pending("small", at(2024, 4, 1, 0, 0)),
            ],
        );
        let service = AnalyticsService::new(store);

        let ranked = service
            .top_collections(&owner(), 5, at(2024, 3, 20, 0, 0))
            .await
            .unwrap();

        let ids: Vec<&str> = ranked.iter().map(|r| r.collection.id.as_str()).collect();
        assert_eq!(ids, vec!["big", "small"]);
        assert_eq!(ranked[0].entry_count, 3);
        assert_eq!(ranked[1].entry_count, 1);
        assert_eq!(ranked[1].conversion_rate, 100.0);
    }

    #[tokio::test]
    async fn dashboard_lists_surface_store_failures() {
        let service = AnalyticsService::new(FailingStore);
        let anchor = at(2024, 3, 20, 0, 0);
        assert!(matches!(
            service.recent_activity(&owner(), 5, anchor).await,
            Err(Error::Fetch(_))
        ));
        assert!(matches!(
            service.top_collections(&owner(), 5, anchor).await,
            Err(Error::Fetch(_))
        ));
    }

    #[tokio::test]
    async fn serves_through_the_query_port() {
        async fn via_port<Q: AnalyticsQuery>(query: &Q) -> AnalyticsResult {
            query.analytics(&OwnerId::new("owner-1"), "7d", at(2024, 3, 20, 0, 0)).await
        }
        let service = service(vec![pending("wl", at(2024, 3, 19, 0, 0))]);
        assert_eq!(via_port(&service).await.metrics.total_signups.value, 1.0);
    }
}
