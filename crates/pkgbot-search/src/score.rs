//! Text relevance scoring.
//!
//! A text query is classified once per search as empty, plain, or regex.
//! Plain queries use case-insensitive equality/prefix/substring tiers;
//! regex queries score by how much of the name the match covers.

use regex::{Regex, RegexBuilder};

use crate::error::SearchError;

/// Exact name match.
pub const SCORE_EXACT: u32 = 100;
/// Name starts with the query.
pub const SCORE_PREFIX: u32 = 50;
/// Name contains the query.
pub const SCORE_CONTAINS: u32 = 25;
/// Description contains/matches the query.
pub const SCORE_DESCRIPTION: u32 = 10;
/// Score for every gated candidate when the text query is empty.
pub const SCORE_EMPTY_QUERY: u32 = 20;
/// Bonus for short names once any text score was added.
pub const SCORE_SPECIFICITY: u32 = 5;
/// Name length threshold for the specificity bonus.
pub const SHORT_NAME_LEN: usize = 20;

/// Characters that mark a query as a regex even without `/.../` wrapping.
const REGEX_CHARS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// A classified text query, compiled once per search.
#[derive(Debug)]
pub enum TextQuery {
    /// No residual text; every gated candidate gets the base score.
    Empty,
    /// Plain query, held lowercased for case-insensitive comparison.
    Plain(String),
    /// Regex query, compiled case-insensitively.
    Pattern(Regex),
}

impl TextQuery {
    /// Classify and (for regex queries) compile a text query.
    ///
    /// A compile failure aborts the whole search; it is a validation error
    /// on the query, not a per-candidate condition.
    pub fn build(text: &str) -> Result<Self, SearchError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(TextQuery::Empty);
        }
        if !is_regex_query(text) {
            return Ok(TextQuery::Plain(text.to_lowercase()));
        }

        let pattern = strip_wrapping_slashes(text);
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| SearchError::InvalidRegex {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
        Ok(TextQuery::Pattern(regex))
    }

    /// Text score for one candidate. Zero excludes the candidate.
    pub fn score(&self, name: &str, description: &str) -> u32 {
        match self {
            TextQuery::Empty => SCORE_EMPTY_QUERY,
            TextQuery::Plain(query) => {
                let name_lower = name.to_lowercase();
                let mut score = if name_lower == *query {
                    SCORE_EXACT
                } else if name_lower.starts_with(query) {
                    SCORE_PREFIX
                } else if name_lower.contains(query) {
                    SCORE_CONTAINS
                } else {
                    0
                };
                if description.to_lowercase().contains(query) {
                    score += SCORE_DESCRIPTION;
                }
                score
            }
            TextQuery::Pattern(regex) => {
                let mut score = match regex.find(name) {
                    Some(m) if m.start() == 0 && m.end() == name.len() => SCORE_EXACT,
                    Some(m)
                        if name
                            .to_lowercase()
                            .starts_with(&m.as_str().to_lowercase()) =>
                    {
                        SCORE_PREFIX
                    }
                    Some(_) => SCORE_CONTAINS,
                    None => 0,
                };
                if regex.is_match(description) {
                    score += SCORE_DESCRIPTION;
                }
                score
            }
        }
    }
}

/// Whether a text query should be treated as a regex: wrapped in `/.../`,
/// or containing any regex metacharacter.
pub fn is_regex_query(text: &str) -> bool {
    (text.len() > 2 && text.starts_with('/') && text.ends_with('/'))
        || text.contains(REGEX_CHARS)
}

/// Strip one wrapping `/` pair, if present.
fn strip_wrapping_slashes(text: &str) -> &str {
    if text.len() > 2 && text.starts_with('/') && text.ends_with('/') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}
