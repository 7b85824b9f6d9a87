//! Waitlist entries and their status lifecycle.
//!
//! An [`Entry`] is immutable apart from its status, which moves exactly once
//! from [`EntryStatus::Pending`] to a terminal state. The timestamp of that
//! move is `updated_at`, which is what wait-time analytics measure against.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bucket::DateBucket;
use super::error::DomainError;
use super::id::{CollectionId, EntryId};

const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Review status of a waitlist entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Awaiting review.
    #[default]
    Pending,
    /// Let in from the waitlist.
    Approved,
    /// Turned away.
    Rejected,
}

impl EntryStatus {
    /// Lowercase storage/display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether no further transition is allowed.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::UnknownStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// A single waitlist signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    id: EntryId,
    collection_id: CollectionId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    status: EntryStatus,
}

impl Entry {
    /// Create a fresh pending entry.
    pub fn new(id: EntryId, collection_id: CollectionId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            collection_id,
            created_at,
            updated_at: created_at,
            status: EntryStatus::Pending,
        }
    }

    /// Rebuild an entry from stored fields.
    ///
    /// No ordering check is applied: stored data may be corrupt and is
    /// screened later by the analytics pipeline.
    pub fn from_parts(
        id: EntryId,
        collection_id: CollectionId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        status: EntryStatus,
    ) -> Self {
        Self {
            id,
            collection_id,
            created_at,
            updated_at,
            status,
        }
    }

    #[must_use]
    pub fn id(&self) -> &EntryId {
        &self.id
    }

    #[must_use]
    pub fn collection_id(&self) -> &CollectionId {
        &self.collection_id
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[must_use]
    pub fn status(&self) -> EntryStatus {
        self.status
    }

    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status == EntryStatus::Approved
    }

    /// Calendar day (UTC) the entry was created on.
    #[must_use]
    pub fn day(&self) -> DateBucket {
        DateBucket::from_timestamp(self.created_at)
    }

    /// Move the entry to `status` at time `at`.
    ///
    /// Re-applying the current status is a no-op and leaves `updated_at`
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidTransition`] for anything other than
    /// pending to approved/rejected, and [`DomainError::UpdateBeforeCreate`]
    /// when `at` predates the entry.
    pub fn transition(&mut self, status: EntryStatus, at: DateTime<Utc>) -> Result<(), DomainError> {
        if status == self.status {
            return Ok(());
        }
        if self.status.is_terminal() || !status.is_terminal() {
            return Err(DomainError::InvalidTransition {
                from: self.status,
                to: status,
            });
        }
        if at < self.created_at {
            return Err(DomainError::UpdateBeforeCreate {
                entry_id: self.id.clone(),
            });
        }
        self.status = status;
        self.updated_at = at;
        Ok(())
    }

    /// Integrity problem with this record's timestamps, if any.
    #[must_use]
    pub fn integrity_issue(&self) -> Option<DomainError> {
        (self.updated_at < self.created_at).then(|| DomainError::NegativeWaitTime {
            entry_id: self.id.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }

    /// Approval latency in minutes.
    ///
    /// Returns `Ok(None)` for entries that are not approved.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NegativeWaitTime`] when `updated_at` precedes
    /// `created_at`.
    pub fn wait_minutes(&self) -> Result<Option<f64>, DomainError> {
        if !self.is_approved() {
            return Ok(None);
        }
        if let Some(issue) = self.integrity_issue() {
            return Err(issue);
        }
        let millis = (self.updated_at - self.created_at).num_milliseconds();
        Ok(Some(millis as f64 / MILLIS_PER_MINUTE))
    }
}
