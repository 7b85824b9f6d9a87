//! Waitlist analytics engine.
//!
//! - [`aggregate`] - sparse per-day totals
//! - [`period`] - current/previous period split
//! - [`wait_time`] - approval latency
//! - [`chart`] - zero-filled series over a date range
//! - [`integrity`] - screening of corrupt entries
//! - [`summary`] - per-collection status breakdown
//! - [`service`] - [`AnalyticsService`], which ties the above to an entry store

pub mod aggregate;
pub mod chart;
pub mod integrity;
pub mod period;
pub mod service;
pub mod summary;
pub mod wait_time;

pub use service::{build_analytics, AnalyticsService};
