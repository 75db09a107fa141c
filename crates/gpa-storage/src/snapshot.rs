// snapshot.rs — Read-only store loaded from a JSON Lines export.
//
// The snapshot is produced by whatever component parses and persists
// policy files. Each non-blank line is one JSON-serialized PolicyEntry:
//
//   {"path":"Software\\Policies\\...\\Deny_All","data":1}
//
// The whole file is read once at open time so later lookups see a
// consistent view for the duration of a run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::entry::{PolicyEntry, PolicyPath};
use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::PolicyStorage;

/// [`PolicyStorage`] over a JSONL snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotStorage {
    path: PathBuf,
    entries: Vec<PolicyEntry>,
}

impl SnapshotStorage {
    /// Load every entry from the snapshot at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| StorageError::Io {
                path: path.clone(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let entry: PolicyEntry =
                serde_json::from_str(&line).map_err(|source| StorageError::Parse {
                    path: path.clone(),
                    line: idx + 1,
                    source,
                })?;
            entries.push(entry);
        }

        tracing::debug!(
            "loaded {} policy entries from {}",
            entries.len(),
            path.display()
        );

        Ok(Self { path, entries })
    }

    /// File this snapshot was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PolicyStorage for SnapshotStorage {
    fn lookup(&self, path: &PolicyPath) -> Result<Option<PolicyEntry>, StorageError> {
        Ok(MemoryStorage::first_match(&self.entries, path))
    }
}
