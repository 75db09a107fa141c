// error.rs — Error types for policy appliers.

use gpa_storage::StorageError;
use gpa_template::TemplateError;
use thiserror::Error;

/// Errors that can occur while constructing or applying a policy applier.
#[derive(Debug, Error)]
pub enum ApplierError {
    /// The storage backend could not answer a lookup.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Rendering or activating an enforcement template failed.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// A mapping overrides a variable that has no default.
    #[error("mapping for '{path}' overrides undeclared variable '{key}'")]
    UnresolvedVariable { path: String, key: String },

    /// `apply` was called on an applier whose previous run failed.
    #[error("applier '{name}' already failed; construct a new instance to retry")]
    Failed { name: String },
}
