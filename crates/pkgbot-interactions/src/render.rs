//! View rendering.
//!
//! Pure functions from session state to response payloads. The enabled state
//! of every navigation affordance is decided here and only here: a button is
//! enabled exactly when pressing it keeps the cursor inside the result set.

use pkgbot_session::{
    NavigationCursor, SelectionValue, LIST_PREFIX, NEXT_PREFIX, PREV_PREFIX, SELECT_PREFIX,
};
use pkgbot_types::SearchResult;

use crate::component::{ActionRow, Button, SelectMenu, SelectOption};
use crate::envelope::{Embed, EmbedField, EmbedFooter, ResponseData};

/// Placeholder id for affordances rendered without a session (single-result
/// searches). Such buttons are always disabled; the id is never decoded.
const NO_SESSION_ID: &str = "none";

/// Detail view of one result, with Previous/Next/overview affordances.
///
/// `session_id` is `None` for single-result searches, which have no session
/// to navigate; all affordances render disabled.
pub fn detail_view(
    results: &[SearchResult],
    index: usize,
    session_id: Option<&str>,
) -> ResponseData {
    let result = &results[index];
    let cursor = NavigationCursor::new(session_id.unwrap_or(NO_SESSION_ID), index);

    let prev_disabled = session_id.is_none() || index == 0;
    let next_disabled = session_id.is_none() || index + 1 >= results.len();
    let list_disabled = session_id.is_none();

    let nav_row = ActionRow::new(vec![
        Button::secondary("Previous", cursor.encode(PREV_PREFIX), prev_disabled),
        Button::secondary("Next", cursor.encode(NEXT_PREFIX), next_disabled),
        Button::primary("All Packages", cursor.encode(LIST_PREFIX), list_disabled),
    ]);

    ResponseData {
        embeds: vec![result_embed(result, index, results.len())],
        components: vec![nav_row],
        ..Default::default()
    }
}

/// List overview: a text summary of the top results plus a selection menu.
pub fn overview_view(
    results: &[SearchResult],
    session_id: &str,
    overview_count: usize,
    menu_limit: usize,
) -> ResponseData {
    let summary: String = results
        .iter()
        .take(overview_count)
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{}. **{}** — {}\n",
                i + 1,
                r.name(),
                r.entry.description().unwrap_or_default()
            )
        })
        .collect();

    let options: Vec<SelectOption> = results
        .iter()
        .take(menu_limit)
        .enumerate()
        .map(|(index, r)| SelectOption {
            label: r.name().to_string(),
            value: SelectionValue {
                name: r.name().to_string(),
                repository: r.repository.clone(),
                index,
            }
            .encode(),
            description: r.entry.description().map(truncate_label),
        })
        .collect();

    let menu_cursor = NavigationCursor::new(session_id, 0);
    ResponseData {
        content: Some(format!("Top matches:\n{summary}")),
        components: vec![ActionRow::new(vec![SelectMenu::new(
            menu_cursor.encode(SELECT_PREFIX),
            "View a package",
            options,
        )])],
        ..Default::default()
    }
}

/// Terminal view for a search with no matches. No session is created.
pub fn no_results_view(query: &str) -> ResponseData {
    ResponseData::text(format!("No packages found for `{query}`.")).ephemeral()
}

/// In-place replacement shown when the session is gone. Carries no further
/// affordances; the only way forward is a fresh search.
pub fn expired_view() -> ResponseData {
    ResponseData::text("These search results have expired. Please search again.")
}

fn result_embed(result: &SearchResult, index: usize, total: usize) -> Embed {
    let entry = &result.entry;
    let mut fields = Vec::new();

    if !entry.authors().is_empty() {
        fields.push(EmbedField {
            name: "Authors".to_string(),
            value: entry.authors().join(", "),
            inline: true,
        });
    }
    if let Some(release) = entry.latest_release() {
        let value = match &release.date {
            Some(date) => format!("{} ({date})", release.version),
            None => release.version.clone(),
        };
        fields.push(EmbedField {
            name: "Latest release".to_string(),
            value,
            inline: true,
        });
    }
    if let Some(last_modified) = entry.last_modified() {
        fields.push(EmbedField {
            name: "Last modified".to_string(),
            value: last_modified.to_string(),
            inline: true,
        });
    }
    if !entry.labels().is_empty() {
        fields.push(EmbedField {
            name: "Labels".to_string(),
            value: entry.labels().join(", "),
            inline: false,
        });
    }
    if let Some(issues) = entry.issues() {
        fields.push(EmbedField {
            name: "Issues".to_string(),
            value: issues.to_string(),
            inline: false,
        });
    }
    fields.push(EmbedField {
        name: "Repository".to_string(),
        value: result.repository.clone(),
        inline: false,
    });

    let footer = (total > 1).then(|| EmbedFooter {
        text: format!("Result {} of {total}", index + 1),
    });

    Embed {
        title: Some(result.name().to_string()),
        description: entry.description().map(str::to_string),
        url: entry.homepage().map(str::to_string),
        fields,
        footer,
    }
}

/// Menu option descriptions are length-capped by the outer protocol.
fn truncate_label(text: &str) -> String {
    const MAX: usize = 100;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(MAX - 1).collect();
        format!("{truncated}…")
    }
}
