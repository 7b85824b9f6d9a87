//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::{collections, entries};

/// Database row for a collection.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = collections)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CollectionRow {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub status: String,
}

/// Database row for an entry.
///
/// Timestamps are RFC 3339 text in UTC.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct EntryRow {
    pub id: String,
    pub collection_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub status: String,
}
