// memory.rs — Ordered in-memory policy store.

use crate::entry::{PolicyEntry, PolicyPath};
use crate::error::StorageError;
use crate::PolicyStorage;

/// In-memory [`PolicyStorage`] backed by an insertion-ordered list.
///
/// Duplicate paths are kept; lookup returns the first one inserted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Vec<PolicyEntry>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = PolicyEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, entry: PolicyEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn first_match(entries: &[PolicyEntry], path: &PolicyPath) -> Option<PolicyEntry> {
        entries.iter().find(|e| &e.path == path).cloned()
    }
}

impl PolicyStorage for MemoryStorage {
    fn lookup(&self, path: &PolicyPath) -> Result<Option<PolicyEntry>, StorageError> {
        Ok(Self::first_match(&self.entries, path))
    }
}
