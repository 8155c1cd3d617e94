//! Ranked search results.

use serde::{Deserialize, Serialize};

use crate::entry::CatalogEntry;

/// A ranked projection of a catalog entry.
///
/// Created once per search and held only for the lifetime of the session
/// that owns it; round-trips through the session store as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Repository the entry came from
    pub repository: String,

    /// The matched entry, snapshotted at search time
    pub entry: CatalogEntry,

    /// Relevance score; always positive for an included result
    pub score: u32,
}

impl SearchResult {
    /// Entry name. Scoring rejects nameless entries, so results always
    /// carry one.
    pub fn name(&self) -> &str {
        self.entry.name().unwrap_or("(unnamed)")
    }
}
