//! Builders for domain primitives used across tests.
//!
//! Timestamps are UTC; entry ids are generated unless a test needs to
//! refer to one by name.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::{Collection, CollectionId, Entry, EntryId, EntryStatus};

/// UTC timestamp at `year-month-day hour:minute:00`.
///
/// # Panics
///
/// Panics on an invalid calendar date.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid test timestamp")
}

/// A pending entry created at `created`.
pub fn pending(collection: &str, created: DateTime<Utc>) -> Entry {
    Entry::new(EntryId::generate(), CollectionId::new(collection), created)
}

/// An entry approved `wait_minutes` after `created`.
pub fn approved(collection: &str, created: DateTime<Utc>, wait_minutes: i64) -> Entry {
    Entry::from_parts(
        EntryId::generate(),
        CollectionId::new(collection),
        created,
        created + Duration::minutes(wait_minutes),
        EntryStatus::Approved,
    )
}

/// An entry rejected `wait_minutes` after `created`.
pub fn rejected(collection: &str, created: DateTime<Utc>, wait_minutes: i64) -> Entry {
    Entry::from_parts(
        EntryId::generate(),
        CollectionId::new(collection),
        created,
        created + Duration::minutes(wait_minutes),
        EntryStatus::Rejected,
    )
}

/// An approved entry whose update precedes its creation.
pub fn corrupt(collection: &str, created: DateTime<Utc>) -> Entry {
    Entry::from_parts(
        EntryId::generate(),
        CollectionId::new(collection),
        created,
        created - Duration::minutes(5),
        EntryStatus::Approved,
    )
}

/// An active collection named after its id.
pub fn collection(id: &str, owner: &str) -> Collection {
    Collection::new(id, owner, format!("{id} waitlist"))
}
