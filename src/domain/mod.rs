//! Storage-free domain model for waitlist analytics.
//!
//! Pure types and rules with no I/O: entries and collections, calendar-day
//! buckets, trend periods, metrics and chart series.

pub mod analytics;
pub mod bucket;
pub mod collection;
pub mod entry;
pub mod error;
pub mod id;
pub mod metric;
pub mod range;
pub mod series;

pub use analytics::{
    ActivityItem, AnalyticsResult, Charts, CollectionRanking, CollectionSummary, Metrics,
};
pub use bucket::{date_range, DateBucket, DateRange};
pub use collection::{Collection, CollectionStatus};
pub use entry::{Entry, EntryStatus};
pub use error::DomainError;
pub use id::{CollectionId, EntryId, OwnerId};
pub use metric::{calculate_metric, MetricValue, Trend};
pub use range::{Period, Periods, RangeCode};
pub use series::{ChartPoint, ChartSeries};
