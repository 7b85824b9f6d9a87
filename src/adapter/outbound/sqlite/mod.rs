//! SQLite persistence adapter.
//!
//! Stores collections and entries with Diesel ORM and serves them through
//! the [`EntryStore`](crate::port::outbound::store::EntryStore) port.

pub mod database;
pub mod store;

pub use store::SqliteEntryStore;
