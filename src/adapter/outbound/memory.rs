//! In-memory entry store for tests and demos.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::{Collection, CollectionId, Entry, EntryId, EntryStatus, OwnerId};
use crate::error::{Error, Result};
use crate::port::outbound::store::EntryStore;

/// In-memory store keyed by collection and entry id.
#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    collections: RwLock<HashMap<CollectionId, Collection>>,
    entries: RwLock<HashMap<EntryId, Entry>>,
}

impl MemoryEntryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `collections` and `entries`.
    pub fn with_data(
        collections: impl IntoIterator<Item = Collection>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Self {
        let store = Self::new();
        for collection in collections {
            store.insert_collection(collection);
        }
        for entry in entries {
            store.insert_entry(entry);
        }
        store
    }

    /// Insert or replace a collection.
    pub fn insert_collection(&self, collection: Collection) {
        self.collections
            .write()
            .insert(collection.id.clone(), collection);
    }

    /// Insert or replace an entry.
    pub fn insert_entry(&self, entry: Entry) {
        self.entries.write().insert(entry.id().clone(), entry);
    }

    /// Transition an entry's status at `at`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id and [`Error::Domain`] when
    /// the transition is not allowed.
    pub fn set_status(&self, id: &EntryId, status: EntryStatus, at: DateTime<Utc>) -> Result<Entry> {
        let mut entries = self.entries.write();
        let entry = entries
            .get_mut(id)
            .ok_or_else(|| Error::NotFound(format!("entry {id}")))?;
        entry.transition(status, at)?;
        Ok(entry.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl EntryStore for MemoryEntryStore {
    async fn collections_for_owner(&self, owner: &OwnerId) -> Result<Vec<Collection>> {
        let mut owned: Vec<Collection> = self
            .collections
            .read()
            .values()
            .filter(|c| &c.owner_id == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(owned)
    }

    async fn fetch_entries(
        &self,
        collection_ids: &[CollectionId],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Entry>> {
        let mut found: Vec<Entry> = self
            .entries
            .read()
            .values()
            .filter(|e| collection_ids.contains(e.collection_id()))
            .filter(|e| from <= e.created_at() && e.created_at() <= to)
            .cloned()
            .collect();
        found.sort_by_key(Entry::created_at);
        Ok(found)
    }

    async fn recent_entries(
        &self,
        collection_ids: &[CollectionId],
        to: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Entry>> {
        let mut found: Vec<Entry> = self
            .entries
            .read()
            .values()
            .filter(|e| collection_ids.contains(e.collection_id()) && e.created_at() <= to)
            .cloned()
            .collect();
        found.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        found.truncate(limit);
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{approved, at, collection, pending};

    #[tokio::test]
    async fn lists_only_owned_collections() {
        let store = MemoryEntryStore::with_data(
            [collection("b", "alice"), collection("a", "alice"), collection("c", "bob")],
            [],
        );
        let owned = store
            .collections_for_owner(&OwnerId::new("alice"))
            .await
            .unwrap();
        let ids: Vec<&str> = owned.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn fetch_filters_by_collection_and_window_and_sorts() {
        let store = MemoryEntryStore::with_data(
            [],
            [
                pending("wl", at(2024, 1, 3, 0, 0)),
                pending("wl", at(2024, 1, 1, 0, 0)),
                approved("wl", at(2024, 1, 2, 0, 0), 10),
                pending("other", at(2024, 1, 2, 0, 0)),
                pending("wl", at(2024, 1, 9, 0, 0)),
            ],
        );

        let entries = store
            .fetch_entries(
                &[CollectionId::new("wl")],
                at(2024, 1, 1, 0, 0),
                at(2024, 1, 3, 0, 0),
            )
            .await
            .unwrap();

        let days: Vec<u32> = entries
            .iter()
            .map(|e| chrono::Datelike::day(&e.created_at()))
            .collect();
        assert_eq!(days, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn recent_entries_are_newest_first_and_limited() {
        let store = MemoryEntryStore::with_data(
            [],
            [
                pending("wl", at(2024, 1, 1, 0, 0)),
                pending("wl", at(2024, 1, 4, 0, 0)),
                pending("wl", at(2024, 1, 2, 0, 0)),
                pending("wl", at(2024, 1, 3, 0, 0)),
                pending("other", at(2024, 1, 3, 12, 0)),
            ],
        );

        let recent = store
            .recent_entries(&[CollectionId::new("wl")], at(2024, 1, 3, 23, 0), 2)
            .await
            .unwrap();

        let created: Vec<_> = recent.iter().map(Entry::created_at).collect();
        assert_eq!(created, vec![at(2024, 1, 3, 0, 0), at(2024, 1, 2, 0, 0)]);
    }

    #[test]
    fn set_status_applies_transition() {
        let entry = pending("wl", at(2024, 1, 1, 0, 0));
        let id = entry.id().clone();
        let store = MemoryEntryStore::with_data([], [entry]);

        let updated = store
            .set_status(&id, EntryStatus::Approved, at(2024, 1, 1, 1, 0))
            .unwrap();
        assert!(updated.is_approved());

        let err = store
            .set_status(&id, EntryStatus::Rejected, at(2024, 1, 1, 2, 0))
            .unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
    }
}
