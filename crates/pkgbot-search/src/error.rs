//! Error types for search operations.

use thiserror::Error;

/// Error type for query parsing and ranking.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The text query looked like a regex but failed to compile.
    /// Aborts the whole search, not a single candidate.
    #[error("Invalid regex pattern '{pattern}': {message}")]
    InvalidRegex { pattern: String, message: String },
}
