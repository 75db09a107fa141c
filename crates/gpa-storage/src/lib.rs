//! # gpa-storage
//!
//! Policy entry model and lookup backends for the Group Policy applier.
//!
//! Appliers never parse or persist policy data themselves. They ask a
//! [`PolicyStorage`] for the entry stored under a [`PolicyPath`] and get back
//! either the first matching [`PolicyEntry`] or `None`.
//!
//! ## Key components
//!
//! - [`PolicyStorage`] — trait abstracting the lookup backend. Absence is
//!   `Ok(None)`; only genuine backend faults are errors.
//! - [`MemoryStorage`] — ordered in-memory store, used by tests and callers
//!   that already hold their entries.
//! - [`SnapshotStorage`] — read-only store loaded from a JSON Lines export.

pub mod entry;
pub mod error;
pub mod memory;
pub mod snapshot;

pub use entry::{PolicyEntry, PolicyPath, PolicyValue};
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use snapshot::SnapshotStorage;

/// Read-only lookup capability over stored policy entries.
///
/// Implementations are shared between appliers, so lookups take `&self` and
/// must never mutate the backing data.
pub trait PolicyStorage: Send + Sync {
    /// Return the first entry stored under exactly `path`.
    ///
    /// `Ok(None)` means the setting is not configured. `Err` is reserved for
    /// a backend that cannot answer the query at all.
    fn lookup(&self, path: &PolicyPath) -> Result<Option<PolicyEntry>, StorageError>;
}
