//! # pkgbot-types
//!
//! Shared domain types for the pkgbot catalog search system:
//! - Catalog entries: packages and libraries from the upstream feed
//! - Catalog: the full feed snapshot with deterministic enumeration
//! - Search results: ranked projections of catalog entries
//! - Configuration

pub mod catalog;
pub mod config;
pub mod entry;
pub mod result;

pub use catalog::Catalog;
pub use config::PkgbotConfig;
pub use entry::{CatalogEntry, EntryKind, Library, Package, Release};
pub use result::SearchResult;
