//! Runtime configuration.
//!
//! Loading (files, environment) happens outside the core; this is the
//! validated struct the collaborators hand in.

use serde::{Deserialize, Serialize};

/// Configuration for the search and interaction core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PkgbotConfig {
    /// URL of the catalog feed document
    pub catalog_url: String,

    /// Slash-command name that triggers a search
    #[serde(default = "default_command_name")]
    pub command_name: String,

    /// Session lifetime in seconds
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,

    /// Maximum ranked results retained per search
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Entries shown in the list-overview text summary
    #[serde(default = "default_overview_count")]
    pub overview_count: usize,

    /// Maximum selection-menu entries (the outer protocol caps rows at 25)
    #[serde(default = "default_menu_limit")]
    pub menu_limit: usize,
}

fn default_command_name() -> String {
    "package".to_string()
}

fn default_session_ttl_secs() -> u64 {
    900
}

fn default_max_results() -> usize {
    10
}

fn default_overview_count() -> usize {
    5
}

fn default_menu_limit() -> usize {
    25
}

impl Default for PkgbotConfig {
    fn default() -> Self {
        Self {
            catalog_url: String::new(),
            command_name: default_command_name(),
            session_ttl_secs: default_session_ttl_secs(),
            max_results: default_max_results(),
            overview_count: default_overview_count(),
            menu_limit: default_menu_limit(),
        }
    }
}

impl PkgbotConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.session_ttl_secs == 0 {
            return Err("session_ttl_secs must be > 0".to_string());
        }
        if self.max_results == 0 {
            return Err("max_results must be > 0".to_string());
        }
        if self.menu_limit == 0 || self.menu_limit > 25 {
            return Err(format!(
                "menu_limit must be 1-25, got {}",
                self.menu_limit
            ));
        }
        if self.overview_count > self.max_results {
            return Err(format!(
                "overview_count ({}) must not exceed max_results ({})",
                self.overview_count, self.max_results
            ));
        }
        Ok(())
    }
}
