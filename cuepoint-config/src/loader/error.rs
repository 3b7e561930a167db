//! Config loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while reading, parsing or validating the overlay config.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The config file could not be read.
    #[error("failed to read overlay config from {path}: {source}")]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid TOML or JSON for the config schema.
    #[error("failed to parse overlay config {origin}: {message}")]
    Parse {
        /// File path or env var the document came from.
        origin: String,
        /// Parser diagnostic.
        message: String,
    },
    /// A color is not `#rrggbb`.
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
    /// A field parsed but holds an unusable value.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Config field name.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}
