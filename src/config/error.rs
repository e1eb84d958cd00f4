//! Configuration errors

use crate::domain::ValueKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly named config source does not exist.
    #[error("No valid config file in path {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Config path is not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("Unsupported config extension '.{extension}' for file {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Failed reading config file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config syntax in {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Config file must define a mapping of named values at the top level: {}", path.display())]
    NotAMapping { path: PathBuf },

    #[error("Failed rendering config as {format}: {message}")]
    Render { format: String, message: String },

    #[error("Cannot merge {override_kind} into {base} for '{name}'")]
    MergeTypeConflict { name: String, base: ValueKind, override_kind: ValueKind },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
