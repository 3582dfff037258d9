//! Error types for the store crate.
//!
//! Only write-side failures surface as errors. Read-side corruption is
//! handled where it is found: a malformed record makes its key read as
//! absent (see `user_data`), so a single bad entry cannot take down a
//! system-wide scan.

use thiserror::Error;

/// Errors that can occur while persisting store data
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error while reading or writing the backing file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized for storage
    #[error("failed to serialize value for key {key}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
