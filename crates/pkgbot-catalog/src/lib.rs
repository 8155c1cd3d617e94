//! # pkgbot-catalog
//!
//! Catalog feed providers. The feed itself is an external collaborator:
//! a JSON document of per-repository package and library caches, edge-cached
//! upstream. The core re-fetches it per search and treats any failure as
//! terminal for the current request — no internal retry.

pub mod error;
pub mod http;
pub mod provider;

pub use error::CatalogError;
pub use http::HttpCatalogProvider;
pub use provider::{CatalogProvider, StaticCatalogProvider};
