//! Catalog provider trait and the static test implementation.

use async_trait::async_trait;

use pkgbot_types::Catalog;

use crate::error::CatalogError;

/// Supplies the full catalog snapshot for a search.
///
/// Each search fetches a fresh snapshot; redundant network cost is accepted
/// for simplicity and mitigated by the upstream edge cache.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch(&self) -> Result<Catalog, CatalogError>;
}

/// Provider returning a fixed in-memory catalog. Used in tests and anywhere
/// the feed is already materialized.
pub struct StaticCatalogProvider {
    catalog: Catalog,
}

impl StaticCatalogProvider {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalogProvider {
    async fn fetch(&self) -> Result<Catalog, CatalogError> {
        Ok(self.catalog.clone())
    }
}
