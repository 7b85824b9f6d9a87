//! Handler for `waitlens import`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::context::Context;
use super::output;
use crate::domain::{Collection, Entry};
use crate::error::Result;

/// Contents of an import file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImportFile {
    pub collections: Vec<Collection>,
    pub entries: Vec<Entry>,
}

impl ImportFile {
    /// Read and parse an import file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Entries whose timestamps are out of order; they are still imported.
    pub fn suspicious(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.integrity_issue().is_some())
    }
}

/// Execute `import`.
pub fn execute(ctx: &Context, file: &Path) -> Result<()> {
    let data = ImportFile::read(file)?;
    let store = ctx.open_store()?;
    store.import(&data.collections, &data.entries)?;
    info!(
        collections = data.collections.len(),
        entries = data.entries.len(),
        database = %ctx.database.display(),
        "Imported waitlist data"
    );

    let suspicious = data.suspicious().count();
    if output::is_json() {
        output::json_output(json!({
            "command": "import",
            "collections": data.collections.len(),
            "entries": data.entries.len(),
            "suspicious": suspicious,
        }));
        return Ok(());
    }

    output::success("Import complete");
    output::field("Collections", data.collections.len());
    output::field("Entries", data.entries.len());
    output::field("Database", ctx.database.display());
    if suspicious > 0 {
        output::warning(&format!(
            "{suspicious} entries were updated before they were created and will be left out of charts"
        ));
    }
    Ok(())
}
