//! Waitlist collections owned by an account.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{CollectionId, OwnerId};

/// Publication state of a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionStatus {
    /// Accepting signups.
    #[default]
    Active,
    /// Temporarily not accepting signups.
    Paused,
    /// Permanently closed.
    Closed,
}

impl CollectionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for CollectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "closed" => Ok(Self::Closed),
            _ => Err(DomainError::UnknownCollectionStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// A waitlist: the unit entries are grouped under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: CollectionId,
    pub owner_id: OwnerId,
    pub name: String,
    #[serde(default)]
    pub status: CollectionStatus,
}

impl Collection {
    /// Create an active collection.
    pub fn new(id: impl Into<CollectionId>, owner_id: impl Into<OwnerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner_id: owner_id.into(),
            name: name.into(),
            status: CollectionStatus::Active,
        }
    }

    /// Builder-style status override.
    #[must_use]
    pub fn with_status(mut self, status: CollectionStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == CollectionStatus::Active
    }
}
