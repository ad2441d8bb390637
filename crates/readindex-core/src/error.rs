//! Error types for readindex-core.
//!
//! The indexing engine itself never fails: malformed text degrades to a
//! best-effort tokenization. Errors only arise at the I/O seams, when
//! configuration or resource files are read.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading indexing resources.
#[derive(Error, Debug)]
pub enum IndexError {
    /// A word list or phrase file could not be read.
    #[error("failed to read resource file {path}: {source}")]
    ResourceRead {
        /// The file that failed to load.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Result type alias using [`IndexError`].
pub type IndexResult<T> = Result<T, IndexError>;
