//! # pkgbot-interactions
//!
//! The interaction layer: wire envelopes for inbound events and outbound
//! responses, message-component models, view rendering, and the stateless
//! state machine that drives paginated search results.
//!
//! Every inbound event is handled as an independent request-response unit.
//! Carry-over state lives exclusively in the session store and in the opaque
//! handles embedded in components; there is no in-process state between
//! requests and no session affinity.

pub mod component;
pub mod envelope;
pub mod error;
pub mod render;
pub mod service;

pub use envelope::{
    Interaction, InteractionResponse, InteractionType, ResponseData, ResponseType, EPHEMERAL,
};
pub use error::InteractionError;
pub use service::InteractionService;
