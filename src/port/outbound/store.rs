//! Entry-store port.
//!
//! The analytics core reads entries and collections through this contract.
//! Entry order and the recent-activity limit are the store's job; the core
//! never sorts entries or checks ownership itself.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::domain::{Collection, CollectionId, Entry, OwnerId};
use crate::error::Result;

/// Read access to waitlist collections and their entries.
pub trait EntryStore: Send + Sync {
    /// Collections owned by `owner`.
    fn collections_for_owner(
        &self,
        owner: &OwnerId,
    ) -> impl Future<Output = Result<Vec<Collection>>> + Send;

    /// Entries of the given collections with `from <= created_at <= to`,
    /// sorted ascending by `created_at`.
    fn fetch_entries(
        &self,
        collection_ids: &[CollectionId],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<Entry>>> + Send;

    /// At most `limit` entries of the given collections created at or before
    /// `to`, newest first. Ties on `created_at` are broken by entry id.
    fn recent_entries(
        &self,
        collection_ids: &[CollectionId],
        to: DateTime<Utc>,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Entry>>> + Send;
}
