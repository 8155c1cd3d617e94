//! Error taxonomy for interaction handling.
//!
//! Every variant maps to a user-visible response at the top boundary; none
//! propagate to the transport layer.

use thiserror::Error;

use pkgbot_catalog::CatalogError;
use pkgbot_search::SearchError;
use pkgbot_session::SessionError;

/// Error type for interaction handling.
#[derive(Debug, Error)]
pub enum InteractionError {
    /// Bad user input (empty query); surfaced verbatim, ephemeral
    #[error("{0}")]
    Validation(String),

    /// Invalid regex in the text query; surfaced verbatim, ephemeral
    #[error(transparent)]
    InvalidQuery(#[from] SearchError),

    /// Catalog unreachable or undecodable; surfaced as a generic
    /// try-again-later message, never with upstream detail
    #[error("Catalog fetch failed: {0}")]
    Upstream(#[from] CatalogError),

    /// Session store failure; surfaced as a generic failure message
    #[error("Session store failed: {0}")]
    Store(#[from] SessionError),

    /// Store miss or stale selection during navigation; surfaced as an
    /// in-place "search again" prompt
    #[error("Session expired")]
    SessionExpired,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Unknown component: {0}")]
    UnknownComponent(String),
}
