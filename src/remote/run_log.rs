//! Append-only record of every item created during a run.
//!
//! Nothing is rolled back when a run fails part-way; the run log is what an
//! operator uses to find and remove the partial tree.
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::model::CreatedResource;

/// One created item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunLogEntry {
    /// Item kind, e.g. `template` or `data folder item`.
    pub kind: String,
    /// Item name as sent.
    pub name: String,
    /// Identifier reported by the store.
    pub id: String,
    /// Path reported by the store.
    pub path: String,
    /// Identifier of the parent the item was created under.
    pub parent: String,
}

/// Thread-safe, append-only list of [`RunLogEntry`] values.
#[derive(Debug, Default)]
pub struct RunLog {
    entries: Mutex<Vec<RunLogEntry>>,
}

impl RunLog {
    /// Empty run log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a created item.
    pub fn record(&self, kind: &str, parent: &str, created: &CreatedResource) {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.push(RunLogEntry {
            kind: kind.to_string(),
            name: created.name.clone(),
            id: created.id.clone(),
            path: created.path.clone(),
            parent: parent.to_string(),
        });
    }

    /// Snapshot of all entries, in creation order.
    #[must_use]
    pub fn entries(&self) -> Vec<RunLogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Number of created items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |g| g.len())
    }

    /// Whether nothing has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write the entries as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries())
            .context("failed to serialize run log")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write run log: {}", path.display()))
    }
}
