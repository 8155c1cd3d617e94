//! Catalog entry types.
//!
//! Entries are immutable snapshots taken from the upstream feed. A feed
//! document carries two families of entries: packages (with labels and
//! previous names) and plain libraries. The two are kept as a closed
//! two-case enum with an explicit kind tag set at ingestion, rather than
//! probing for the presence of package-only fields at use sites.

use serde::{Deserialize, Deserializer, Serialize};

/// A published release of a package or library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Version string as published (not necessarily semver)
    pub version: String,

    /// Release date, verbatim from the feed
    #[serde(default)]
    pub date: Option<String>,
}

/// A package entry from the feed.
///
/// Names are unique within a repository, not globally. Entries missing a
/// name or description are kept at ingestion and rejected during search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// One or many authors; the feed emits both a bare string and a list
    #[serde(default, deserialize_with = "one_or_many")]
    pub authors: Vec<String>,

    /// Last-modified timestamp, verbatim from the feed
    #[serde(default)]
    pub last_modified: Option<String>,

    /// Releases, newest first as published
    #[serde(default)]
    pub releases: Vec<Release>,

    #[serde(default)]
    pub homepage: Option<String>,

    #[serde(default)]
    pub issues: Option<String>,

    /// Tags used for label-filtered search
    #[serde(default)]
    pub labels: Vec<String>,

    /// Names this package was previously published under
    #[serde(default)]
    pub previous_names: Vec<String>,
}

/// A library entry from the feed. Carries no labels or previous names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "one_or_many")]
    pub authors: Vec<String>,

    #[serde(default)]
    pub last_modified: Option<String>,

    #[serde(default)]
    pub releases: Vec<Release>,

    #[serde(default)]
    pub homepage: Option<String>,

    #[serde(default)]
    pub issues: Option<String>,
}

/// Kind tag distinguishing the two entry families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Package,
    Library,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Package => write!(f, "package"),
            EntryKind::Library => write!(f, "library"),
        }
    }
}

/// A catalog entry: either a package or a library.
///
/// The tag is assigned when the feed is ingested; downstream code matches
/// on the enum or uses the common accessors below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntry {
    Package(Package),
    Library(Library),
}

impl CatalogEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            CatalogEntry::Package(_) => EntryKind::Package,
            CatalogEntry::Library(_) => EntryKind::Library,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            CatalogEntry::Package(p) => p.name.as_deref(),
            CatalogEntry::Library(l) => l.name.as_deref(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            CatalogEntry::Package(p) => p.description.as_deref(),
            CatalogEntry::Library(l) => l.description.as_deref(),
        }
    }

    pub fn authors(&self) -> &[String] {
        match self {
            CatalogEntry::Package(p) => &p.authors,
            CatalogEntry::Library(l) => &l.authors,
        }
    }

    pub fn last_modified(&self) -> Option<&str> {
        match self {
            CatalogEntry::Package(p) => p.last_modified.as_deref(),
            CatalogEntry::Library(l) => l.last_modified.as_deref(),
        }
    }

    pub fn releases(&self) -> &[Release] {
        match self {
            CatalogEntry::Package(p) => &p.releases,
            CatalogEntry::Library(l) => &l.releases,
        }
    }

    /// Most recent release (the feed lists newest first).
    pub fn latest_release(&self) -> Option<&Release> {
        self.releases().first()
    }

    pub fn homepage(&self) -> Option<&str> {
        match self {
            CatalogEntry::Package(p) => p.homepage.as_deref(),
            CatalogEntry::Library(l) => l.homepage.as_deref(),
        }
    }

    pub fn issues(&self) -> Option<&str> {
        match self {
            CatalogEntry::Package(p) => p.issues.as_deref(),
            CatalogEntry::Library(l) => l.issues.as_deref(),
        }
    }

    /// Labels for packages; libraries have none.
    pub fn labels(&self) -> &[String] {
        match self {
            CatalogEntry::Package(p) => &p.labels,
            CatalogEntry::Library(_) => &[],
        }
    }
}

/// Deserialize either a single string or a list of strings.
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(author) => vec![author],
        OneOrMany::Many(authors) => authors,
    })
}
