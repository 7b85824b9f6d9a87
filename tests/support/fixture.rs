use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

/// Import file with one owner, two collections and a small January history.
///
/// `beta` (active) holds the two-entry Jan-01 day used across tests plus
/// an entry from late December; `alpha` (paused) holds one rejected entry.
pub fn january_import() -> serde_json::Value {
    json!({
        "collections": [
            { "id": "beta", "ownerId": "owner-1", "name": "Beta" },
            { "id": "alpha", "ownerId": "owner-1", "name": "Alpha", "status": "paused" },
            { "id": "other", "ownerId": "owner-2", "name": "Other" }
        ],
        "entries": [
            {
                "id": "e-approved",
                "collectionId": "beta",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:30:00Z",
                "status": "approved"
            },
            {
                "id": "e-pending",
                "collectionId": "beta",
                "createdAt": "2024-01-01T12:00:00Z",
                "updatedAt": "2024-01-01T12:00:00Z",
                "status": "pending"
            },
            {
                "id": "e-december",
                "collectionId": "beta",
                "createdAt": "2023-12-31T08:00:00Z",
                "updatedAt": "2023-12-31T08:00:00Z",
                "status": "pending"
            },
            {
                "id": "e-rejected",
                "collectionId": "alpha",
                "createdAt": "2023-12-20T10:00:00Z",
                "updatedAt": "2023-12-21T10:00:00Z",
                "status": "rejected"
            },
            {
                "id": "e-other",
                "collectionId": "other",
                "createdAt": "2024-01-01T05:00:00Z",
                "updatedAt": "2024-01-01T05:00:00Z",
                "status": "pending"
            }
        ]
    })
}

/// Write `value` as `name` inside `dir`.
pub fn write_json(dir: &Path, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string_pretty(value).expect("serialize fixture"))
        .expect("write fixture");
    path
}

/// Write a config file inside `dir`.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, contents).expect("write config");
    path
}
