//! The interaction state machine.
//!
//! One service instance per request, built from its collaborators: a catalog
//! provider and a session store. `handle` is the top boundary — it always
//! returns a well-formed response envelope, mapping every failure to a
//! user-visible view.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use pkgbot_catalog::CatalogProvider;
use pkgbot_search::{parse_query, search};
use pkgbot_session::{
    decode_handle, decode_selection, generate_session_id, ComponentHandle, NavigationCursor,
    SessionStore,
};
use pkgbot_types::PkgbotConfig;

use crate::envelope::{Interaction, InteractionResponse, InteractionType, ResponseData};
use crate::error::InteractionError;
use crate::render;

/// Direction of a Previous/Next step.
#[derive(Debug, Clone, Copy)]
enum NavStep {
    Back,
    Forward,
}

/// Stateless request handler for interaction events.
pub struct InteractionService {
    catalog: Arc<dyn CatalogProvider>,
    sessions: Arc<dyn SessionStore>,
    config: PkgbotConfig,
}

impl InteractionService {
    pub fn new(
        catalog: Arc<dyn CatalogProvider>,
        sessions: Arc<dyn SessionStore>,
        config: PkgbotConfig,
    ) -> Self {
        Self {
            catalog,
            sessions,
            config,
        }
    }

    /// Handle one inbound event. Never fails outward: every error becomes
    /// a response envelope.
    pub async fn handle(&self, interaction: Interaction) -> InteractionResponse {
        debug!(kind = ?interaction.kind, user = ?interaction.user_id(), "Handling interaction");
        match self.dispatch(&interaction).await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "Interaction failed");
                failure_response(&error)
            }
        }
    }

    async fn dispatch(
        &self,
        interaction: &Interaction,
    ) -> Result<InteractionResponse, InteractionError> {
        match interaction.kind {
            InteractionType::Ping => Ok(InteractionResponse::pong()),
            InteractionType::Command => self.handle_command(interaction).await,
            InteractionType::Component => self.handle_component(interaction).await,
        }
    }

    /// Initial search command: parse, rank, and open a session when there
    /// is more than one result to page through.
    async fn handle_command(
        &self,
        interaction: &Interaction,
    ) -> Result<InteractionResponse, InteractionError> {
        let name = interaction
            .data
            .as_ref()
            .and_then(|d| d.name.as_deref())
            .unwrap_or_default();
        if name != self.config.command_name {
            return Err(InteractionError::UnknownCommand(name.to_string()));
        }

        let raw = interaction.option_str("query").unwrap_or_default().trim();
        if raw.is_empty() {
            return Err(InteractionError::Validation(
                "Please provide a search query.".to_string(),
            ));
        }

        let filters = parse_query(raw);
        let catalog = self.catalog.fetch().await?;
        let results = search(&filters, &catalog, self.config.max_results)?;

        match results.len() {
            0 => Ok(InteractionResponse::message(render::no_results_view(raw))),
            1 => Ok(InteractionResponse::message(render::detail_view(
                &results, 0, None,
            ))),
            _ => {
                let session_id = generate_session_id();
                self.sessions
                    .put(
                        &session_id,
                        &results,
                        Duration::from_secs(self.config.session_ttl_secs),
                    )
                    .await?;
                debug!(session_id = %session_id, results = results.len(), "Session opened");
                Ok(InteractionResponse::message(render::detail_view(
                    &results,
                    0,
                    Some(&session_id),
                )))
            }
        }
    }

    async fn handle_component(
        &self,
        interaction: &Interaction,
    ) -> Result<InteractionResponse, InteractionError> {
        let data = interaction
            .data
            .as_ref()
            .ok_or_else(|| InteractionError::UnknownComponent("missing data".to_string()))?;
        let custom_id = data
            .custom_id
            .as_deref()
            .ok_or_else(|| InteractionError::UnknownComponent("missing custom_id".to_string()))?;
        let handle = decode_handle(custom_id)
            .ok_or_else(|| InteractionError::UnknownComponent(custom_id.to_string()))?;

        match handle {
            ComponentHandle::Previous(cursor) => self.navigate(cursor, NavStep::Back).await,
            ComponentHandle::Next(cursor) => self.navigate(cursor, NavStep::Forward).await,
            ComponentHandle::ListOverview(cursor) => {
                self.list_overview(&cursor.session_id).await
            }
            ComponentHandle::Select(cursor) => {
                self.select(&cursor.session_id, &data.values).await
            }
        }
    }

    /// Previous/Next button. The new index is always in bounds when buttons
    /// are rendered correctly; an out-of-range step is a rendering bug or a
    /// forged handle, not a user error.
    async fn navigate(
        &self,
        cursor: NavigationCursor,
        step: NavStep,
    ) -> Result<InteractionResponse, InteractionError> {
        let results = self
            .sessions
            .get(&cursor.session_id)
            .await?
            .ok_or(InteractionError::SessionExpired)?;

        let new_index = match step {
            NavStep::Back => cursor.index.checked_sub(1),
            NavStep::Forward => cursor.index.checked_add(1),
        };
        let new_index = match new_index {
            Some(index) if index < results.len() => index,
            _ => {
                debug_assert!(
                    false,
                    "navigation stepped outside [0, {}): index {} step {step:?}",
                    results.len(),
                    cursor.index
                );
                return Err(InteractionError::SessionExpired);
            }
        };

        Ok(InteractionResponse::update(render::detail_view(
            &results,
            new_index,
            Some(&cursor.session_id),
        )))
    }

    /// "All Packages" button: back to the list overview.
    async fn list_overview(
        &self,
        session_id: &str,
    ) -> Result<InteractionResponse, InteractionError> {
        let results = self
            .sessions
            .get(session_id)
            .await?
            .ok_or(InteractionError::SessionExpired)?;

        Ok(InteractionResponse::update(render::overview_view(
            &results,
            session_id,
            self.config.overview_count,
            self.config.menu_limit,
        )))
    }

    /// Selection-menu choice: jump to the chosen result's detail view.
    async fn select(
        &self,
        session_id: &str,
        values: &[String],
    ) -> Result<InteractionResponse, InteractionError> {
        let value = values
            .first()
            .ok_or_else(|| InteractionError::UnknownComponent("empty selection".to_string()))?;
        let selection = decode_selection(value)
            .ok_or_else(|| InteractionError::UnknownComponent(value.to_string()))?;

        let results = self
            .sessions
            .get(session_id)
            .await?
            .ok_or(InteractionError::SessionExpired)?;
        if selection.index >= results.len() {
            // The menu belongs to an older result set under the same id.
            return Err(InteractionError::SessionExpired);
        }

        Ok(InteractionResponse::update(render::detail_view(
            &results,
            selection.index,
            Some(session_id),
        )))
    }
}

/// Map a failure to its user-visible response envelope.
fn failure_response(error: &InteractionError) -> InteractionResponse {
    match error {
        InteractionError::Validation(message) => {
            InteractionResponse::message(ResponseData::text(message.clone()).ephemeral())
        }
        InteractionError::InvalidQuery(error) => {
            InteractionResponse::message(ResponseData::text(error.to_string()).ephemeral())
        }
        InteractionError::Upstream(_) => InteractionResponse::message(
            ResponseData::text(
                "The package catalog is unavailable right now. Please try again later.",
            )
            .ephemeral(),
        ),
        InteractionError::Store(_) => InteractionResponse::message(
            ResponseData::text("Something went wrong. Please try again later.").ephemeral(),
        ),
        InteractionError::SessionExpired => InteractionResponse::update(render::expired_view()),
        InteractionError::UnknownCommand(_) | InteractionError::UnknownComponent(_) => {
            InteractionResponse::message(
                ResponseData::text("Sorry, I don't know how to handle that.").ephemeral(),
            )
        }
    }
}
