//! In-memory session store.
//!
//! The default implementation behind [`SessionStore`]: a mutex-guarded map
//! with lazy expiry. Values are held as serialized JSON so sessions take the
//! same round trip they would through an external key-value store.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use pkgbot_types::SearchResult;

use crate::error::SessionError;
use crate::store::SessionStore;

struct StoredSession {
    expires_at: DateTime<Utc>,
    payload: String,
}

/// Mutex-guarded in-memory store with per-entry expiry.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn put(
        &self,
        session_id: &str,
        results: &[SearchResult],
        ttl: Duration,
    ) -> Result<(), SessionError> {
        let payload = serde_json::to_string(results)?;
        let expires_at = Utc::now()
            + chrono::Duration::from_std(ttl)
                .map_err(|e| SessionError::Store(format!("ttl out of range: {e}")))?;

        let mut sessions = self.sessions.lock().await;
        sessions.insert(
            session_id.to_string(),
            StoredSession {
                expires_at,
                payload,
            },
        );
        debug!(session_id, results = results.len(), "Stored session");
        Ok(())
    }

    async fn get(&self, session_id: &str) -> Result<Option<Vec<SearchResult>>, SessionError> {
        let mut sessions = self.sessions.lock().await;
        let Some(stored) = sessions.get(session_id) else {
            return Ok(None);
        };
        if stored.expires_at <= Utc::now() {
            sessions.remove(session_id);
            debug!(session_id, "Session expired");
            return Ok(None);
        }
        let results: Vec<SearchResult> = serde_json::from_str(&stored.payload)?;
        Ok(Some(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkgbot_types::{CatalogEntry, Package, SearchResult};

    fn result(name: &str, score: u32) -> SearchResult {
        SearchResult {
            repository: "https://repo.example".to_string(),
            entry: CatalogEntry::Package(Package {
                name: Some(name.to_string()),
                description: Some("a package".to_string()),
                authors: vec![],
                last_modified: None,
                releases: vec![],
                homepage: None,
                issues: None,
                labels: vec![],
                previous_names: vec![],
            }),
            score,
        }
    }

    #[tokio::test]
    async fn test_put_get_round_trip() {
        let store = MemorySessionStore::new();
        let results = vec![result("LSP", 105), result("LSP-json", 65)];

        store
            .put("01H0000000000000000000TEST", &results, Duration::from_secs(900))
            .await
            .unwrap();
        let fetched = store.get("01H0000000000000000000TEST").await.unwrap();
        assert_eq!(fetched, Some(results));
    }

    #[tokio::test]
    async fn test_unknown_id_is_none_not_error() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_session_is_none() {
        let store = MemorySessionStore::new();
        store
            .put("sid", &[result("LSP", 105)], Duration::ZERO)
            .await
            .unwrap();
        assert_eq!(store.get("sid").await.unwrap(), None);
        // The expired entry is dropped, not resurrected.
        assert_eq!(store.get("sid").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_replaces_wholesale() {
        let store = MemorySessionStore::new();
        let ttl = Duration::from_secs(900);
        store.put("sid", &[result("A", 50), result("B", 40)], ttl)
            .await
            .unwrap();
        store.put("sid", &[result("C", 30)], ttl).await.unwrap();

        let fetched = store.get("sid").await.unwrap().unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].name(), "C");
    }
}
