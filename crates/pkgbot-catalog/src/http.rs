//! HTTP catalog provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use pkgbot_types::Catalog;

use crate::error::CatalogError;
use crate::provider::CatalogProvider;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the catalog feed document over HTTP.
pub struct HttpCatalogProvider {
    client: Client,
    url: String,
}

impl HttpCatalogProvider {
    /// Create a provider for the given feed URL with the default timeout.
    pub fn new(url: impl Into<String>) -> Result<Self, CatalogError> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalogProvider {
    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        debug!(url = %self.url, "Fetching catalog");
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = status.as_u16(), "Catalog fetch failed");
            return Err(CatalogError::Status(status.as_u16()));
        }

        let catalog: Catalog = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;
        debug!(entries = catalog.len(), "Catalog fetched");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FEED: &str = r#"{
        "packages_cache": {
            "https://repo.example": [
                {"name": "LSP", "description": "Language Server Protocol client"}
            ]
        },
        "libraries_cache": {
            "https://repo.example": [
                {"name": "bz2", "description": "Compression"}
            ]
        }
    }"#;

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/channel.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(FEED, "application/json"),
            )
            .mount(&server)
            .await;

        let provider =
            HttpCatalogProvider::new(format!("{}/channel.json", server.uri())).unwrap();
        let catalog = provider.fetch().await.unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let provider = HttpCatalogProvider::new(server.uri()).unwrap();
        let err = provider.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Status(503)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
            .mount(&server)
            .await;

        let provider = HttpCatalogProvider::new(server.uri()).unwrap();
        let err = provider.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
