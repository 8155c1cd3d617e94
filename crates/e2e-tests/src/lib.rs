//! End-to-end test infrastructure for pkgbot.
//!
//! Provides a shared TestHarness and helpers for driving full interaction
//! flows: command in, response envelope out, component handles re-fed as
//! follow-up events.

use std::collections::BTreeMap;
use std::sync::Arc;

use pkgbot_catalog::StaticCatalogProvider;
use pkgbot_interactions::component::Component;
use pkgbot_interactions::{Interaction, InteractionService, ResponseData};
use pkgbot_session::MemorySessionStore;
use pkgbot_types::{Catalog, Library, Package, PkgbotConfig, Release};

/// Shared test harness: a static catalog behind the provider trait, an
/// in-memory session store, and the interaction service under test.
pub struct TestHarness {
    pub sessions: Arc<MemorySessionStore>,
    pub service: InteractionService,
}

impl TestHarness {
    /// Harness over the standard sample catalog.
    pub fn new() -> Self {
        Self::with_catalog(sample_catalog())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::with_catalog_and_config(catalog, PkgbotConfig::default())
    }

    pub fn with_catalog_and_config(catalog: Catalog, config: PkgbotConfig) -> Self {
        init_tracing();
        let sessions = Arc::new(MemorySessionStore::new());
        let service = InteractionService::new(
            Arc::new(StaticCatalogProvider::new(catalog)),
            sessions.clone(),
            config,
        );
        Self { sessions, service }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

/// The catalog most tests run against: five packages and one library.
pub fn sample_catalog() -> Catalog {
    let packages = vec![
        package("LSP", "Language Server Protocol client", &["alice"], &[]),
        package("LSP-json", "JSON support for LSP", &["alice", "bob"], &[]),
        package(
            "ThemePro",
            "A color theme",
            &["Alice B"],
            &["snippets", "color"],
        ),
        package("GitTools", "Git integration", &["carol"], &["vcs"]),
        package("Terminus", "Terminal emulator", &["dave"], &[]),
    ];
    let libraries = vec![Library {
        name: Some("bz2".to_string()),
        description: Some("Compression library".to_string()),
        authors: vec!["eve".to_string()],
        last_modified: None,
        releases: vec![],
        homepage: None,
        issues: None,
    }];

    let mut packages_cache = BTreeMap::new();
    packages_cache.insert("https://repo.example/main".to_string(), packages);
    let mut libraries_cache = BTreeMap::new();
    libraries_cache.insert("https://repo.example/main".to_string(), libraries);
    Catalog {
        packages_cache,
        libraries_cache,
    }
}

pub fn package(name: &str, description: &str, authors: &[&str], labels: &[&str]) -> Package {
    Package {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
        authors: authors.iter().map(|s| s.to_string()).collect(),
        last_modified: Some("2024-01-29 12:00:00".to_string()),
        releases: vec![Release {
            version: "1.0.0".to_string(),
            date: Some("2024-01-29".to_string()),
        }],
        homepage: Some(format!("https://example.test/{name}")),
        issues: None,
        labels: labels.iter().map(|s| s.to_string()).collect(),
        previous_names: vec![],
    }
}

/// Build a search command event.
pub fn command(query: &str) -> Interaction {
    serde_json::from_value(serde_json::json!({
        "type": 2,
        "data": {
            "name": "package",
            "options": [{"name": "query", "type": 3, "value": query}]
        },
        "member": {"user": {"id": "user-1"}}
    }))
    .expect("valid command interaction")
}

/// Build a button-press event from a rendered custom id.
pub fn button_press(custom_id: &str) -> Interaction {
    serde_json::from_value(serde_json::json!({
        "type": 3,
        "data": {"custom_id": custom_id, "values": []},
        "member": {"user": {"id": "user-1"}}
    }))
    .expect("valid component interaction")
}

/// Build a selection-menu event from a menu custom id and chosen value.
pub fn menu_choice(custom_id: &str, value: &str) -> Interaction {
    serde_json::from_value(serde_json::json!({
        "type": 3,
        "data": {"custom_id": custom_id, "values": [value]},
        "member": {"user": {"id": "user-1"}}
    }))
    .expect("valid component interaction")
}

/// A navigation button extracted from a detail view.
#[derive(Debug, Clone)]
pub struct NavButton {
    pub custom_id: String,
    pub disabled: bool,
}

/// Extract `(previous, next, all-packages)` from a detail view.
pub fn nav_buttons(data: &ResponseData) -> (NavButton, NavButton, NavButton) {
    let Component::ActionRow(row) = &data.components[0] else {
        panic!("expected action row, got {:?}", data.components);
    };
    let buttons: Vec<NavButton> = row
        .components
        .iter()
        .map(|c| match c {
            Component::Button(b) => NavButton {
                custom_id: b.custom_id.clone(),
                disabled: b.disabled,
            },
            other => panic!("expected button, got {other:?}"),
        })
        .collect();
    assert_eq!(buttons.len(), 3, "detail view renders three nav buttons");
    (
        buttons[0].clone(),
        buttons[1].clone(),
        buttons[2].clone(),
    )
}

/// Extract the selection menu from an overview view.
pub fn select_menu(data: &ResponseData) -> (String, Vec<(String, String)>) {
    let Component::ActionRow(row) = &data.components[0] else {
        panic!("expected action row, got {:?}", data.components);
    };
    let Component::SelectMenu(menu) = &row.components[0] else {
        panic!("expected select menu, got {:?}", row.components);
    };
    (
        menu.custom_id.clone(),
        menu.options
            .iter()
            .map(|o| (o.label.clone(), o.value.clone()))
            .collect(),
    )
}

/// Title of the embed in a detail view.
pub fn embed_title(data: &ResponseData) -> &str {
    data.embeds[0].title.as_deref().expect("embed has a title")
}
