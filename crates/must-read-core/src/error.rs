//! Error types for the must-read server.

use std::io;

use thiserror::Error;

/// Main error type for must-read operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No working directory was passed on the command line
    #[error("No workspace directory provided")]
    NoWorkspace,

    /// The guide file could not be read
    #[error("Failed to read {file_name}: {source}")]
    Read {
        /// Name of the file that was attempted
        file_name: String,
        /// Underlying filesystem error
        #[source]
        source: io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
