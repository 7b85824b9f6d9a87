//! Waitlens - waitlist analytics.
//!
//! Turns a log of waitlist signups into dashboard metrics and day-bucketed
//! chart series: total signups, conversion rate, average wait time and
//! active collections, each with a trend against the previous period.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Storage-free types and rules: entries, day buckets,
//!   periods, metrics and chart series
//! - [`application`] - The analytics engine and its orchestrating service
//! - [`port`] - Traits between the engine and the outside world
//! - [`adapter`] - SQLite and in-memory entry stores, and the CLI
//! - [`infrastructure`] - Configuration and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use waitlens::adapter::outbound::memory::MemoryEntryStore;
//! use waitlens::application::analytics::AnalyticsService;
//! use waitlens::domain::{Collection, CollectionId, Entry, EntryId, OwnerId};
//!
//! # tokio_test::block_on(async {
//! let created = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
//! let store = MemoryEntryStore::with_data(
//!     [Collection::new("beta", "owner-1", "Beta")],
//!     [Entry::new(EntryId::generate(), CollectionId::new("beta"), created)],
//! );
//! let service = AnalyticsService::new(store);
//!
//! let anchor = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
//! let result = service
//!     .get_analytics_at(&OwnerId::new("owner-1"), "7d", anchor)
//!     .await;
//! assert_eq!(result.metrics.total_signups.value, 1.0);
//! assert_eq!(result.charts.signups.len(), 8);
//! # });
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
