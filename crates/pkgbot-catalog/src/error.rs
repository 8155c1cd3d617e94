//! Error types for catalog fetching.

use thiserror::Error;

/// Error type for catalog provider operations.
///
/// None of the variants reach users verbatim: the interaction layer maps
/// them all to a generic "try again later" message.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Catalog fetch returned status {0}")]
    Status(u16),

    /// Body was not a valid catalog document
    #[error("Catalog decode failed: {0}")]
    Decode(String),
}
