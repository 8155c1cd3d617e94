//! Raw query parsing.
//!
//! A raw query is a whitespace-separated token stream. Tokens of the shape
//! `key:value` with a recognized key (`author`, `label`, case-insensitive)
//! become filters; everything else, including `key:value` tokens with an
//! unrecognized key, stays in the residual text query verbatim.

use serde::{Deserialize, Serialize};

/// Structured filters derived from a raw query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Author filter: case-insensitive substring match against any author
    pub author: Option<String>,

    /// Label filter: case-insensitive substring match against any package
    /// label; libraries never pass it
    pub label: Option<String>,

    /// Residual free text, order-preserving and whitespace-collapsed
    pub text_query: String,
}

impl SearchFilters {
    /// Filters with only a text query, no author/label constraint.
    pub fn text(text_query: impl Into<String>) -> Self {
        Self {
            text_query: text_query.into(),
            ..Default::default()
        }
    }

    pub fn has_filters(&self) -> bool {
        self.author.is_some() || self.label.is_some()
    }
}

/// Parse a raw query string into structured filters plus residual text.
///
/// Repeated occurrences of the same filter key overwrite sequentially, so
/// the last one wins. There is no escaping syntax: a value may itself
/// contain `:` (`author:a:b` filters on `a:b`).
pub fn parse_query(raw: &str) -> SearchFilters {
    let mut filters = SearchFilters::default();
    let mut residual: Vec<&str> = Vec::new();

    for token in raw.split_whitespace() {
        match split_filter_token(token) {
            Some((key, value)) if key.eq_ignore_ascii_case("author") => {
                filters.author = Some(value.to_string());
            }
            Some((key, value)) if key.eq_ignore_ascii_case("label") => {
                filters.label = Some(value.to_string());
            }
            _ => residual.push(token),
        }
    }

    filters.text_query = residual.join(" ");
    filters
}

/// Split a token into `(key, value)` if it has filter-token shape:
/// a non-empty alphanumeric key, a `:`, and a non-empty value.
///
/// A bare `/regex/` can never qualify because `/` is not alphanumeric.
fn split_filter_token(token: &str) -> Option<(&str, &str)> {
    let (key, value) = token.split_once(':')?;
    if key.is_empty() || value.is_empty() {
        return None;
    }
    if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passthrough() {
        let filters = parse_query("language server");
        assert_eq!(filters.author, None);
        assert_eq!(filters.label, None);
        assert_eq!(filters.text_query, "language server");
    }

    #[test]
    fn test_author_and_label_extracted() {
        let filters = parse_query("author:alice label:snippets theme");
        assert_eq!(filters.author.as_deref(), Some("alice"));
        assert_eq!(filters.label.as_deref(), Some("snippets"));
        assert_eq!(filters.text_query, "theme");
        assert!(filters.has_filters());
    }

    #[test]
    fn test_keys_case_insensitive() {
        let filters = parse_query("Author:alice LABEL:color");
        assert_eq!(filters.author.as_deref(), Some("alice"));
        assert_eq!(filters.label.as_deref(), Some("color"));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let filters = parse_query("author:alice author:bob");
        assert_eq!(filters.author.as_deref(), Some("bob"));
    }

    #[test]
    fn test_unknown_key_preserved_in_text() {
        let filters = parse_query("repo:github theme");
        assert_eq!(filters.author, None);
        assert_eq!(filters.text_query, "repo:github theme");
    }

    #[test]
    fn test_value_may_contain_colon() {
        let filters = parse_query("author:a:b");
        assert_eq!(filters.author.as_deref(), Some("a:b"));
    }

    #[test]
    fn test_bare_regex_not_a_filter_token() {
        let filters = parse_query("/^LSP/");
        assert_eq!(filters.text_query, "/^LSP/");
        assert!(!filters.has_filters());
    }

    #[test]
    fn test_whitespace_collapsed() {
        let filters = parse_query("  language   author:alice   server  ");
        assert_eq!(filters.text_query, "language server");
        assert_eq!(filters.author.as_deref(), Some("alice"));
    }

    #[test]
    fn test_empty_key_or_value_stays_text() {
        let filters = parse_query(":value author: x");
        assert_eq!(filters.author, None);
        assert_eq!(filters.text_query, ":value author: x");
    }
}
