//! Error types for host operations.
//!
//! Covers loading configuration and catalog files: I/O, serialization,
//! schema construction and catalog validation.

use std::path::PathBuf;

use command_args_core::{SchemaError, ValidationError};
use thiserror::Error;

/// Errors that can occur while setting up a host.
#[derive(Debug, Error)]
pub enum HostError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// An argument or validator definition violates a schema invariant.
    #[error("invalid definition for command `{command}`: {source}")]
    Schema {
        command: String,
        #[source]
        source: SchemaError,
    },

    /// The catalog failed structural validation.
    #[error("invalid catalog: {}", join_errors(.0))]
    InvalidCatalog(Vec<ValidationError>),

    /// Catalog file extension is neither YAML nor JSON.
    #[error("unsupported catalog format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias for results with [`HostError`].
pub type Result<T> = std::result::Result<T, HostError>;
