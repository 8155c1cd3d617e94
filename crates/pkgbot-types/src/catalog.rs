//! Catalog snapshot type.
//!
//! The upstream feed is a single JSON document with per-repository caches
//! of packages and libraries. The snapshot is read-only and fully reloaded
//! per search; nothing mutates it after deserialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entry::{CatalogEntry, Library, Package};

/// A full catalog snapshot keyed by repository.
///
/// Enumeration order is deterministic: packages before libraries, repositories
/// in sorted order, entries in feed order within a repository. Search ranking
/// relies on this for stable tie-breaking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub packages_cache: BTreeMap<String, Vec<Package>>,

    #[serde(default)]
    pub libraries_cache: BTreeMap<String, Vec<Library>>,
}

impl Catalog {
    /// Enumerate all entries as `(repository, entry)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, CatalogEntry)> + '_ {
        let packages = self.packages_cache.iter().flat_map(|(repo, packages)| {
            packages
                .iter()
                .map(move |p| (repo.as_str(), CatalogEntry::Package(p.clone())))
        });
        let libraries = self.libraries_cache.iter().flat_map(|(repo, libraries)| {
            libraries
                .iter()
                .map(move |l| (repo.as_str(), CatalogEntry::Library(l.clone())))
        });
        packages.chain(libraries)
    }

    /// Total entry count across both caches.
    pub fn len(&self) -> usize {
        self.packages_cache.values().map(Vec::len).sum::<usize>()
            + self.libraries_cache.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryKind;

    fn fixture() -> Catalog {
        serde_json::from_str(
            r#"{
                "packages_cache": {
                    "https://repo.example/b": [
                        {"name": "Beta", "description": "b"}
                    ],
                    "https://repo.example/a": [
                        {"name": "Alpha", "description": "a"},
                        {"name": "Alpha2", "description": "a2"}
                    ]
                },
                "libraries_cache": {
                    "https://repo.example/a": [
                        {"name": "bz2", "description": "compression"}
                    ]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_entries_packages_before_libraries() {
        let catalog = fixture();
        let kinds: Vec<EntryKind> = catalog.entries().map(|(_, e)| e.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                EntryKind::Package,
                EntryKind::Package,
                EntryKind::Package,
                EntryKind::Library
            ]
        );
    }

    #[test]
    fn test_entries_repo_order_is_sorted() {
        let catalog = fixture();
        let names: Vec<String> = catalog
            .entries()
            .map(|(_, e)| e.name().unwrap().to_string())
            .collect();
        // Repo "a" sorts before repo "b"; feed order preserved within a repo.
        assert_eq!(names, vec!["Alpha", "Alpha2", "Beta", "bz2"]);
    }

    #[test]
    fn test_len() {
        let catalog = fixture();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
        assert!(Catalog::default().is_empty());
    }

    #[test]
    fn test_missing_caches_default_empty() {
        let catalog: Catalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.is_empty());
    }
}
