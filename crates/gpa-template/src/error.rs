// error.rs — Error types for template rendering and activation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating an enforcement artifact.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No template source exists on disk or among the built-in templates.
    #[error("template '{template_id}' not found (searched {})", .searched.display())]
    NotFound {
        template_id: String,
        searched: PathBuf,
    },

    /// The template references a variable the binding does not define.
    #[error("template '{template_id}' references undefined variable '{name}'")]
    MissingVariable { template_id: String, name: String },

    /// Reading the template or writing the generated file failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The placeholder pattern failed to compile.
    #[error("invalid placeholder pattern: {0}")]
    Pattern(#[from] regex::Error),
}
