//! Unified error types for Rambutan.
//!
//! Classification itself is total: any byte buffer, including an empty one,
//! produces a result. Only the file I/O boundary can fail.
use thiserror::Error;

/// Main error type for Rambutan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Rambutan operations.
pub type Result<T> = std::result::Result<T, Error>;
