//! Error types for savebin
//!
//! Provides a unified error type for all operations. Absence of a key is not
//! an error: lookups report it as `Ok(None)`. Everything that genuinely went
//! wrong gets a distinct [`SaveError`] variant so callers can tell I/O
//! failures and corrupted data apart.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using SaveError
pub type Result<T> = std::result::Result<T, SaveError>;

/// Unified error type for savebin operations
#[derive(Debug, Error)]
pub enum SaveError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("read failed for {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("write failed for {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("store file not found: {}", .0.display())]
    StoreMissing(PathBuf),

    // -------------------------------------------------------------------------
    // Record Stream Errors
    // -------------------------------------------------------------------------
    #[error("store corruption detected: {0}")]
    Corruption(String),

    // -------------------------------------------------------------------------
    // Typed Value Errors
    // -------------------------------------------------------------------------
    #[error("value decode failed: {0}")]
    ValueDecode(String),
}
