use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uniqseq_types::ConfigError;

/// Boxed cause of an input acquisition failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures of a uniqseq run, one variant per stage.
#[derive(Error, Debug)]
pub enum Error {
    /// Rejected configuration, detected before any input is read.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The word list could not be opened, read or fetched.
    #[error("failed to acquire word list from {origin}")]
    InputAcquisition {
        /// Path or URL of the source.
        origin: String,
        #[source]
        source: BoxError,
    },

    /// An output file could not be created, written or flushed.
    #[error("failed to write {}", path.display())]
    OutputWrite {
        /// File that could not be written.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wraps any failure of an input source.
    pub fn input(origin: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::InputAcquisition {
            origin: origin.into(),
            source: source.into(),
        }
    }

    /// Wraps an I/O failure on an output path.
    pub fn output(path: &Path, source: io::Error) -> Self {
        Error::OutputWrite {
            path: path.to_path_buf(),
            source,
        }
    }
}
