//! Fake entry stores for exercising service error paths.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};

use crate::domain::{Collection, CollectionId, Entry, OwnerId};
use crate::error::{Error, Result};
use crate::port::outbound::store::EntryStore;

/// Store whose every call fails with [`Error::Fetch`].
#[derive(Debug, Default)]
pub struct FailingStore;

impl EntryStore for FailingStore {
    async fn collections_for_owner(&self, _owner: &OwnerId) -> Result<Vec<Collection>> {
        Err(Error::Fetch("store unavailable".into()))
    }

    async fn fetch_entries(
        &self,
        _collection_ids: &[CollectionId],
        _from: DateTime<Utc>,
        _to: DateTime<Utc>,
    ) -> Result<Vec<Entry>> {
        Err(Error::Fetch("store unavailable".into()))
    }

    async fn recent_entries(
        &self,
        _collection_ids: &[CollectionId],
        _to: DateTime<Utc>,
        _limit: usize,
    ) -> Result<Vec<Entry>> {
        Err(Error::Fetch("store unavailable".into()))
    }
}

/// Wraps a store and counts calls that reach it.
#[derive(Debug, Default)]
pub struct CountingStore<S> {
    inner: S,
    lookups: AtomicUsize,
    fetches: AtomicUsize,
}

impl<S> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Number of `collections_for_owner` calls so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    /// Number of `fetch_entries` and `recent_entries` calls so far.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: EntryStore> EntryStore for CountingStore<S> {
    async fn collections_for_owner(&self, owner: &OwnerId) -> Result<Vec<Collection>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.collections_for_owner(owner).await
    }

    async fn fetch_entries(
        &self,
        collection_ids: &[CollectionId],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Entry>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_entries(collection_ids, from, to).await
    }

    async fn recent_entries(
        &self,
        collection_ids: &[CollectionId],
        to: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Entry>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.recent_entries(collection_ids, to, limit).await
    }
}
