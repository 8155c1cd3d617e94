//! # pkgbot-session
//!
//! Ephemeral session storage for search results, plus the opaque
//! component-handle codec that threads session state through UI affordances.
//!
//! A session is a ranked result set keyed by a ULID, held in an external
//! key-value store for a fixed TTL (15 minutes). Absence is a normal outcome:
//! callers treat a miss as "session expired, prompt a new search".

pub mod cursor;
pub mod error;
pub mod memory;
pub mod store;

pub use cursor::{
    decode_handle, decode_selection, generate_session_id, ComponentHandle, NavigationCursor,
    SelectionValue, LIST_PREFIX, NEXT_PREFIX, PREV_PREFIX, SELECT_PREFIX,
};
pub use error::SessionError;
pub use memory::MemorySessionStore;
pub use store::SessionStore;
