//! Task record store backed by `tasks.txt`
//!
//! Unlike the credential store this one holds no in-memory state: every
//! operation opens the file, does its work, and closes it. The durable
//! sequence of lines is the single source of truth.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec::{self, StoreError};

/// One task record, field-for-field as stored on disk.
///
/// Date fields keep their stored text so a record whose dates no longer
/// parse still loads, lists, and round-trips unchanged. Parsing happens at
/// status-computation time, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    pub assignee: String,
    pub title: String,
    pub description: String,
    pub assigned_date: String,
    pub due_date: String,
    pub completed: bool,
}

/// Append-only task record store
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Open the store, creating the file empty if missing
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            fs::write(&path, "").map_err(|e| StoreError::io(&path, e))?;
            debug!(path = %path.display(), "created empty task file");
        }
        Ok(Self { path })
    }

    /// Load every non-blank line in file order.
    ///
    /// Each line decodes independently: a malformed line yields `Err` in
    /// its slot and the rest of the file is still processed.
    pub fn load(&self) -> Result<Vec<Result<TaskRecord, StoreError>>, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;
        let decoded: Vec<_> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(codec::decode_task)
            .collect();

        debug!(path = %self.path.display(), count = decoded.len(), "loaded task records");
        Ok(decoded)
    }

    /// Append one record as a new line
    pub fn append(&self, task: &TaskRecord) -> Result<(), StoreError> {
        crate::append_line(&self.path, &codec::encode_task(task))
    }
}
