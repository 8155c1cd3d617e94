//! Component-handle codec.
//!
//! Interaction components carry their state inside an opaque, length-bounded
//! string: navigation buttons encode `"{prefix}{session_id}_{index}"` and
//! selection-menu options encode `"{name}|{repository}|{index}"`. All
//! encoding and decoding lives here so the splitting rules exist exactly once.
//!
//! Decoding splits at the *last* separator. That is only unambiguous because
//! session ids are ULIDs (Crockford base32), which never contain `_` or `|`;
//! any other id scheme must preserve that property.

use ulid::Ulid;

/// Previous-result button.
pub const PREV_PREFIX: &str = "prev_package_";
/// Next-result button.
pub const NEXT_PREFIX: &str = "next_package_";
/// Back-to-overview button.
pub const LIST_PREFIX: &str = "package_list_";
/// Result selection menu.
pub const SELECT_PREFIX: &str = "package_select_";

/// Generate a fresh session id.
///
/// ULIDs are 26 characters, fit comfortably inside the component-handle
/// length ceiling, and carry enough randomness to be unguessable in practice
/// (sessions are scoped per user by convention, not access control).
pub fn generate_session_id() -> String {
    Ulid::new().to_string()
}

/// Position within an active session, reconstructed each turn from the
/// incoming component handle. Never stored server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationCursor {
    pub session_id: String,
    pub index: usize,
}

impl NavigationCursor {
    pub fn new(session_id: impl Into<String>, index: usize) -> Self {
        Self {
            session_id: session_id.into(),
            index,
        }
    }

    /// Encode as `"{prefix}{session_id}_{index}"`.
    pub fn encode(&self, prefix: &str) -> String {
        format!("{prefix}{}_{}", self.session_id, self.index)
    }
}

/// A decoded component handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentHandle {
    Previous(NavigationCursor),
    Next(NavigationCursor),
    ListOverview(NavigationCursor),
    Select(NavigationCursor),
}

/// Decode a component custom id into a handle.
///
/// Returns `None` for unknown prefixes or malformed suffixes; callers
/// degrade that to the generic unknown-component response.
pub fn decode_handle(custom_id: &str) -> Option<ComponentHandle> {
    if let Some(rest) = custom_id.strip_prefix(PREV_PREFIX) {
        return parse_cursor(rest).map(ComponentHandle::Previous);
    }
    if let Some(rest) = custom_id.strip_prefix(NEXT_PREFIX) {
        return parse_cursor(rest).map(ComponentHandle::Next);
    }
    if let Some(rest) = custom_id.strip_prefix(SELECT_PREFIX) {
        return parse_cursor(rest).map(ComponentHandle::Select);
    }
    if let Some(rest) = custom_id.strip_prefix(LIST_PREFIX) {
        return parse_cursor(rest).map(ComponentHandle::ListOverview);
    }
    None
}

/// Split `"{session_id}_{index}"` at the last underscore.
fn parse_cursor(encoded: &str) -> Option<NavigationCursor> {
    let (session_id, index) = encoded.rsplit_once('_')?;
    if session_id.is_empty() {
        return None;
    }
    let index: usize = index.parse().ok()?;
    Some(NavigationCursor::new(session_id, index))
}

/// A selection-menu option value: which result was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionValue {
    pub name: String,
    pub repository: String,
    pub index: usize,
}

impl SelectionValue {
    /// Encode as `"{name}|{repository}|{index}"`.
    pub fn encode(&self) -> String {
        format!("{}|{}|{}", self.name, self.repository, self.index)
    }
}

/// Decode a selection-menu option value.
///
/// Index and repository come off the tail, so a `|` inside the name
/// does not break decoding.
pub fn decode_selection(value: &str) -> Option<SelectionValue> {
    let (rest, index) = value.rsplit_once('|')?;
    let index: usize = index.parse().ok()?;
    let (name, repository) = rest.rsplit_once('|')?;
    if name.is_empty() || repository.is_empty() {
        return None;
    }
    Some(SelectionValue {
        name: name.to_string(),
        repository: repository.to_string(),
        index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_has_no_separator_chars() {
        let id = generate_session_id();
        assert_eq!(id.len(), 26);
        assert!(!id.contains('_'));
        assert!(!id.contains('|'));
    }

    #[test]
    fn test_nav_round_trip_all_prefixes() {
        let cursor = NavigationCursor::new(generate_session_id(), 3);

        assert_eq!(
            decode_handle(&cursor.encode(PREV_PREFIX)),
            Some(ComponentHandle::Previous(cursor.clone()))
        );
        assert_eq!(
            decode_handle(&cursor.encode(NEXT_PREFIX)),
            Some(ComponentHandle::Next(cursor.clone()))
        );
        assert_eq!(
            decode_handle(&cursor.encode(LIST_PREFIX)),
            Some(ComponentHandle::ListOverview(cursor.clone()))
        );
        assert_eq!(
            decode_handle(&cursor.encode(SELECT_PREFIX)),
            Some(ComponentHandle::Select(cursor))
        );
    }

    #[test]
    fn test_last_underscore_splits_index() {
        // A (non-ULID) id with an underscore: the final "_7" is the index.
        let handle = decode_handle("next_package_weird_id_7").unwrap();
        assert_eq!(
            handle,
            ComponentHandle::Next(NavigationCursor::new("weird_id", 7))
        );
    }

    #[test]
    fn test_unknown_prefix_rejected() {
        assert_eq!(decode_handle("other_button_abc_0"), None);
        assert_eq!(decode_handle(""), None);
    }

    #[test]
    fn test_malformed_suffix_rejected() {
        assert_eq!(decode_handle("prev_package_abc"), None); // no index
        assert_eq!(decode_handle("prev_package_abc_x"), None); // non-numeric
        assert_eq!(decode_handle("prev_package__3"), None); // empty id
    }

    #[test]
    fn test_selection_round_trip() {
        let value = SelectionValue {
            name: "LSP-json".to_string(),
            repository: "https://repo.example".to_string(),
            index: 4,
        };
        assert_eq!(decode_selection(&value.encode()), Some(value));
    }

    #[test]
    fn test_selection_name_may_contain_pipe() {
        let value = SelectionValue {
            name: "odd|name".to_string(),
            repository: "repo".to_string(),
            index: 1,
        };
        assert_eq!(decode_selection(&value.encode()), Some(value));
    }

    #[test]
    fn test_selection_malformed_rejected() {
        assert_eq!(decode_selection("no-separators"), None);
        assert_eq!(decode_selection("name|repo|notanumber"), None);
        assert_eq!(decode_selection("|repo|2"), None);
    }
}
