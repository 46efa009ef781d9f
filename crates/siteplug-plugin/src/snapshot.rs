//! File snapshots, the version marker attached to every plugin handle.
//!
//! The host compares a stored snapshot with the file on disk to decide
//! whether a plugin source changed, appeared or disappeared since it was
//! last materialized.

use std::fs::Metadata;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time record of a file's identity on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSnapshot {
    /// Whether the file existed when the snapshot was taken.
    pub exists: bool,
    /// Last modification time, when the platform reports one.
    pub last_modified: Option<DateTime<Utc>>,
    /// File size in bytes.
    pub size: u64,
    /// Inode number on Unix; `None` elsewhere.
    pub file_key: Option<u64>,
}

impl FileSnapshot {
    /// Snapshot of a file that does not exist.
    pub fn missing() -> Self {
        Self {
            exists: false,
            last_modified: None,
            size: 0,
            file_key: None,
        }
    }

    /// Records the current state of `path`.
    ///
    /// Any failure to read metadata is recorded as a missing file.
    pub fn save(path: &Path) -> Self {
        match std::fs::metadata(path) {
            Ok(metadata) => Self::from_metadata(&metadata),
            Err(_) => Self::missing(),
        }
    }

    /// Builds a snapshot from metadata the caller already holds.
    pub fn from_metadata(metadata: &Metadata) -> Self {
        Self {
            exists: true,
            last_modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            size: metadata.len(),
            file_key: file_key(metadata),
        }
    }

    /// Whether `path` no longer matches this snapshot.
    pub fn is_modified(&self, path: &Path) -> bool {
        Self::save(path) != *self
    }
}

#[cfg(unix)]
fn file_key(metadata: &Metadata) -> Option<u64> {
    use std::os::unix::fs::MetadataExt;
    Some(metadata.ino())
}

#[cfg(not(unix))]
fn file_key(_metadata: &Metadata) -> Option<u64> {
    None
}
