//! SQLite entry store implementation.
//!
//! Provides persistent storage for collections and entries using SQLite and
//! Diesel ORM. Rows that no longer parse are logged and skipped on read.

use std::path::Path;

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use diesel::prelude::*;
use tracing::warn;

use crate::adapter::outbound::sqlite::database::connection::{create_pool, run_migrations, DbPool};
use crate::adapter::outbound::sqlite::database::model::{CollectionRow, EntryRow};
use crate::adapter::outbound::sqlite::database::schema::{collections, entries};
use crate::domain::{
    Collection, CollectionId, CollectionStatus, Entry, EntryId, EntryStatus, OwnerId,
};
use crate::error::{Error, Result};
use crate::port::outbound::store::EntryStore;

const FIRST_KEY: &str = "0000-01-01T00:00:00.000000000Z";
const LAST_KEY: &str = "9999-12-31T23:59:59.999999999Z";

/// Text form of a timestamp whose lexical order matches time order.
///
/// Keys keep full nanosecond precision so sub-microsecond ordering between
/// `created_at` and `updated_at` survives storage. Years outside `0..=9999` saturate to the first or last four-digit key.
pub fn timestamp_key(at: DateTime<Utc>) -> String {
    match at.year() {
        year if year < 0 => FIRST_KEY.to_string(),
        year if year > 9999 => LAST_KEY.to_string(),
        _ => at.to_rfc3339_opts(SecondsFormat::Nanos, true),
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| Error::Parse(format!("invalid timestamp {value:?}: {e}")))
}

/// SQLite-backed entry store.
///
/// Implements the [`EntryStore`] trait and the write operations the CLI
/// needs to populate it.
pub struct SqliteEntryStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteEntryStore {
    /// Create a new SQLite entry store with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database at `path` and apply migrations.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be built or migrations fail.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let url = path.as_ref().to_string_lossy();
        let pool = create_pool(&url)?;
        run_migrations(&pool)?;
        Ok(Self::new(pool))
    }

    fn conn(
        &self,
    ) -> Result<diesel::r2d2::PooledConnection<diesel::r2d2::ConnectionManager<SqliteConnection>>> {
        self.pool.get().map_err(|e| Error::Connection(e.to_string()))
    }

    fn collection_to_row(collection: &Collection) -> CollectionRow {
        CollectionRow {
            id: collection.id.to_string(),
            owner_id: collection.owner_id.to_string(),
            name: collection.name.clone(),
            status: collection.status.as_str().to_string(),
        }
    }

    fn collection_from_row(row: CollectionRow) -> Result<Collection> {
        let status: CollectionStatus = row.status.parse()?;
        Ok(Collection::new(row.id, row.owner_id, row.name).with_status(status))
    }

    fn entry_to_row(entry: &Entry) -> EntryRow {
        EntryRow {
            id: entry.id().to_string(),
            collection_id: entry.collection_id().to_string(),
            created_at: timestamp_key(entry.created_at()),
            updated_at: timestamp_key(entry.updated_at()),
            status: entry.status().as_str().to_string(),
        }
    }

    fn entry_from_row(row: EntryRow) -> Result<Entry> {
        let created_at = parse_timestamp(&row.created_at)?;
        let updated_at = parse_timestamp(&row.updated_at)?;
        let status: EntryStatus = row.status.parse()?;
        Ok(Entry::from_parts(
            EntryId::from(row.id),
            CollectionId::from(row.collection_id),
            created_at,
            updated_at,
            status,
        ))
    }

    /// Insert or replace a collection.
    ///
    /// # Errors
    /// Returns an error if the write fails.
    pub fn insert_collection(&self, collection: &Collection) -> Result<()> {
        let mut conn = self.conn()?;
        diesel::replace_into(collections::table)
            .values(&Self::collection_to_row(collection))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }

    /// Insert or replace an entry.
    ///
    /// # Errors
    /// Returns an error if the write fails, including when the entry's
    /// collection does not exist.
    pub fn insert_entry(&self, entry: &Entry) -> Result<()> {
        let mut conn = self.conn()?;
        diesel::replace_into(entries::table)
            .values(&Self::entry_to_row(entry))
            .execute(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(())
    }

    /// Insert many collections and entries in one transaction.
    ///
    /// # Errors
    /// Returns an error and writes nothing if any row fails.
    pub fn import(&self, new_collections: &[Collection], new_entries: &[Entry]) -> Result<()> {
        let mut conn = self.conn()?;
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            for collection in new_collections {
                diesel::replace_into(collections::table)
                    .values(&Self::collection_to_row(collection))
                    .execute(conn)?;
            }
            for entry in new_entries {
                diesel::replace_into(entries::table)
                    .values(&Self::entry_to_row(entry))
                    .execute(conn)?;
            }
            Ok(())
        })
        .map_err(|e| Error::Database(e.to_string()))
    }

    /// Look up a single entry.
    ///
    /// # Errors
    /// Returns an error if the query fails or the stored row is corrupt.
    pub fn get_entry(&self, id: &EntryId) -> Result<Option<Entry>> {
        let mut conn = self.conn()?;
        let row: Option<EntryRow> = entries::table
            .find(id.as_str())
            .select(EntryRow::as_select())
            .first(&mut conn)
            .optional()
            .map_err(|e| Error::Database(e.to_string()))?;
        row.map(Self::entry_from_row).transpose()
    }

    /// Move an entry to `status` at `at` and persist it.
    ///
    /// The write only applies while the stored row is still pending, so two
    /// concurrent callers cannot both settle the same entry. The caller that
    /// loses sees the status the winner stored: the same status is a no-op,
    /// a different one is an invalid transition.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] for an unknown entry and [`Error::Domain`]
    /// for a disallowed transition.
    pub fn set_status(&self, id: &EntryId, status: EntryStatus, at: DateTime<Utc>) -> Result<Entry> {
        let mut entry = self
            .get_entry(id)?
            .ok_or_else(|| Error::NotFound(format!("entry {id}")))?;
        let from = entry.status();
        entry.transition(status, at)?;
        if entry.status() == from {
            return Ok(entry);
        }

        let mut conn = self.conn()?;
        let updated = diesel::update(
            entries::table
                .find(id.as_str())
                .filter(entries::status.eq(EntryStatus::Pending.as_str())),
        )
        .set((
            entries::status.eq(entry.status().as_str()),
            entries::updated_at.eq(timestamp_key(entry.updated_at())),
        ))
        .execute(&mut conn)
        .map_err(|e| Error::Database(e.to_string()))?;
        if updated == 1 {
            return Ok(entry);
        }

        let mut current = self
            .get_entry(id)?
            .ok_or_else(|| Error::NotFound(format!("entry {id}")))?;
        if !current.status().is_terminal() {
            return Err(Error::Database(format!("entry {id} was not updated")));
        }
        warn!(entry_id = %id, stored = %current.status(), requested = %status, "Entry settled concurrently");
        current.transition(status, at)?;
        Ok(current)
    }

    /// All collections, ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn list_collections(&self) -> Result<Vec<Collection>> {
        let mut conn = self.conn()?;
        let rows: Vec<CollectionRow> = collections::table
            .order(collections::id.asc())
            .select(CollectionRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self::parse_collections(rows))
    }

    fn parse_entries(rows: Vec<EntryRow>) -> Vec<Entry> {
        rows.into_iter()
            .filter_map(|row| {
                let id = row.id.clone();
                let created_at = row.created_at.clone();
                Self::entry_from_row(row)
                    .map_err(|e| {
                        warn!(
                            entry_id = %id,
                            created_at = %created_at,
                            error = %e,
                            "Skipping unreadable entry row"
                        );
                    })
                    .ok()
            })
            .collect()
    }

    fn parse_collections(rows: Vec<CollectionRow>) -> Vec<Collection> {
        rows.into_iter()
            .filter_map(|row| {
                let id = row.id.clone();
                Self::collection_from_row(row)
                    .map_err(|e| warn!(collection_id = %id, error = %e, "Skipping unreadable collection row"))
                    .ok()
            })
            .collect()
    }
}

impl EntryStore for SqliteEntryStore {
    async fn collections_for_owner(&self, owner: &OwnerId) -> Result<Vec<Collection>> {
        let mut conn = self.conn()?;
        let rows: Vec<CollectionRow> = collections::table
            .filter(collections::owner_id.eq(owner.as_str()))
            .order(collections::id.asc())
            .select(CollectionRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Fetch(e.to_string()))?;
        Ok(Self::parse_collections(rows))
    }

    async fn fetch_entries(
        &self,
        collection_ids: &[CollectionId],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Entry>> {
        if collection_ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<&str> = collection_ids.iter().map(CollectionId::as_str).collect();

        let mut conn = self.conn()?;
        let rows: Vec<EntryRow> = entries::table
            .filter(entries::collection_id.eq_any(ids))
            .filter(entries::created_at.ge(timestamp_key(from)))
            .filter(entries::created_at.le(timestamp_key(to)))
            .order((entries::created_at.asc(), entries::id.asc()))
            .select(EntryRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Fetch(e.to_string()))?;
        Ok(Self::parse_entries(rows))
    }

    async fn recent_entries(
        &self,
        collection_ids: &[CollectionId],
        to: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Entry>> {
        if collection_ids.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }
        let ids: Vec<&str> = collection_ids.iter().map(CollectionId::as_str).collect();
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let mut conn = self.conn()?;
        let rows: Vec<EntryRow> = entries::table
            .filter(entries::collection_id.eq_any(ids))
            .filter(entries::created_at.le(timestamp_key(to)))
            .order((entries::created_at.desc(), entries::id.asc()))
            .limit(limit)
            .select(EntryRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Fetch(e.to_string()))?;
        Ok(Self::parse_entries(rows))
    }
}
