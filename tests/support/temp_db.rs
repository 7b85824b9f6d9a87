use std::path::{Path, PathBuf};

use tempfile::TempDir;
use waitlens::adapter::outbound::sqlite::SqliteEntryStore;

/// Migrated SQLite entry store in a temporary directory.
pub struct TempDb {
    dir: TempDir,
    store: SqliteEntryStore,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = SqliteEntryStore::open(dir.path().join("waitlens.db")).expect("open store");
        Self { dir, store }
    }

    pub fn store(&self) -> &SqliteEntryStore {
        &self.store
    }

    pub fn into_store(self) -> (TempDir, SqliteEntryStore) {
        (self.dir, self.store)
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("waitlens.db")
    }
}
