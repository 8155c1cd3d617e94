//! Session store trait.

use std::time::Duration;

use async_trait::async_trait;

use pkgbot_types::SearchResult;

use crate::error::SessionError;

/// A TTL-bound key-value store holding the result set of an active search.
///
/// Implementations provide their own consistency and availability; the core
/// only fixes the TTL and the id format (ids must survive the component-handle
/// encoding, see [`crate::cursor`]). There is no update-in-place: every `put`
/// replaces the stored results wholesale, and there is no explicit delete —
/// expiry is the only removal path.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store results under `session_id`, replacing any previous value.
    async fn put(
        &self,
        session_id: &str,
        results: &[SearchResult],
        ttl: Duration,
    ) -> Result<(), SessionError>;

    /// Fetch results for `session_id`. `None` means expired or never
    /// existed; callers must treat that as a normal outcome.
    async fn get(&self, session_id: &str) -> Result<Option<Vec<SearchResult>>, SessionError>;
}
