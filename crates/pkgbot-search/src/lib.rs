//! # pkgbot-search
//!
//! Free-text query parsing and relevance ranking over a catalog snapshot.
//!
//! Ranking is additive and rule-based: exact and prefix name matches dominate,
//! filters gate candidates before scoring, and ties keep catalog enumeration
//! order. The catalog is small and curated, so predictable, regression-testable
//! ranking beats statistical scoring here.

pub mod engine;
pub mod error;
pub mod query;
pub mod score;

pub use engine::search;
pub use error::SearchError;
pub use query::{parse_query, SearchFilters};
