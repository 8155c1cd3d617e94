//! Relevance engine: filter gate, scoring, and stable ranking.

use tracing::debug;

use pkgbot_types::{Catalog, CatalogEntry, SearchResult};

use crate::error::SearchError;
use crate::query::SearchFilters;
use crate::score::{TextQuery, SCORE_SPECIFICITY, SHORT_NAME_LEN};

/// Bonus added when an author filter was present and passed.
const AUTHOR_FILTER_BONUS: u32 = 30;
/// Bonus added when a label filter was present and passed.
const LABEL_FILTER_BONUS: u32 = 25;

/// Rank catalog entries against the given filters.
///
/// Returns at most `limit` results, descending by score. The sort is stable,
/// so ties keep catalog enumeration order (packages before libraries, then
/// repository order). An invalid regex in the text query aborts the whole
/// search.
pub fn search(
    filters: &SearchFilters,
    catalog: &Catalog,
    limit: usize,
) -> Result<Vec<SearchResult>, SearchError> {
    let text_query = TextQuery::build(&filters.text_query)?;
    let author_filter = filters.author.as_deref().map(str::to_lowercase);
    let label_filter = filters.label.as_deref().map(str::to_lowercase);

    let mut results: Vec<SearchResult> = Vec::new();
    for (repository, entry) in catalog.entries() {
        // Entries without a name or description are not searchable.
        let (Some(name), Some(description)) = (entry.name(), entry.description()) else {
            continue;
        };

        if !passes_author_filter(&entry, author_filter.as_deref()) {
            continue;
        }
        if !passes_label_filter(&entry, label_filter.as_deref()) {
            continue;
        }

        let text_score = text_query.score(name, description);
        if text_score == 0 {
            continue;
        }

        let mut score = text_score;
        if name.chars().count() < SHORT_NAME_LEN {
            score += SCORE_SPECIFICITY;
        }
        if author_filter.is_some() {
            score += AUTHOR_FILTER_BONUS;
        }
        if label_filter.is_some() {
            score += LABEL_FILTER_BONUS;
        }

        results.push(SearchResult {
            repository: repository.to_string(),
            entry,
            score,
        });
    }

    // Stable: ties keep enumeration order.
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(limit);

    debug!(
        matches = results.len(),
        text_query = %filters.text_query,
        has_author = filters.author.is_some(),
        has_label = filters.label.is_some(),
        "Search complete"
    );
    Ok(results)
}

/// Author gate: some author contains the filter value, case-insensitively.
fn passes_author_filter(entry: &CatalogEntry, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(author) => entry
            .authors()
            .iter()
            .any(|a| a.to_lowercase().contains(author)),
    }
}

/// Label gate: only packages can pass, and some label must contain the
/// filter value, case-insensitively.
fn passes_label_filter(entry: &CatalogEntry, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(label) => entry
            .labels()
            .iter()
            .any(|l| l.to_lowercase().contains(label)),
    }
}
