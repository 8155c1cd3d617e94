//! Error types for session storage.
//!
//! Note that a missing session is not an error: `get` returns `None` for
//! expired or unknown ids.

use thiserror::Error;

/// Error type for session store operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backing key-value store failed
    #[error("Session store error: {0}")]
    Store(String),

    /// Stored payload could not be (de)serialized
    #[error("Session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
