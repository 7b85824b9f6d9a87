//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated,
//! either by caller input (a negative day window) or by stored data that
//! breaks the entry lifecycle rules.
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use waitlens::domain::bucket::date_range;
//! use waitlens::domain::error::DomainError;
//!
//! let result = date_range(-1, Utc::now());
//! assert!(matches!(result, Err(DomainError::InvalidRange { days: -1 })));
//! ```

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::entry::EntryStatus;
use super::id::EntryId;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A day window must be zero or positive.
    #[error("invalid range: days must be >= 0, got {days}")]
    InvalidRange {
        /// The rejected number of days.
        days: i64,
    },

    /// An entry was updated before it was created.
    ///
    /// Raised by wait-time calculations; the record is corrupt and must be
    /// flagged rather than clamped to zero.
    #[error("entry {entry_id} has negative wait time: updated {updated_at} before created {created_at}")]
    NegativeWaitTime {
        /// The offending entry.
        entry_id: EntryId,
        /// Creation timestamp.
        created_at: DateTime<Utc>,
        /// Last status change timestamp.
        updated_at: DateTime<Utc>,
    },

    /// Status may only move from pending to a terminal state.
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: EntryStatus,
        /// Requested status.
        to: EntryStatus,
    },

    /// A status change cannot predate the entry itself.
    #[error("entry {entry_id} cannot change status before it was created")]
    UpdateBeforeCreate {
        /// The entry being updated.
        entry_id: EntryId,
    },

    /// Status text that does not name a known status.
    #[error("unknown status '{value}'")]
    UnknownStatus {
        /// The unrecognised input.
        value: String,
    },

    /// Collection status text that does not name a known status.
    #[error("unknown collection status '{value}'")]
    UnknownCollectionStatus {
        /// The unrecognised input.
        value: String,
    },
}
