//! Session lifecycle: expiry, stale handles, and the out-of-bounds guard.

use std::time::Duration;

use pretty_assertions::assert_eq;

use e2e_tests::{button_press, command, menu_choice, nav_buttons, TestHarness};
use pkgbot_interactions::ResponseType;
use pkgbot_session::SessionStore;
use pkgbot_search::{parse_query, search};
use pkgbot_types::PkgbotConfig;

/// Rank the sample catalog directly so results can be seeded into the store
/// without going through a command.
async fn seed_session(harness: &TestHarness, session_id: &str, query: &str, ttl: Duration) {
    let catalog = e2e_tests::sample_catalog();
    let results = search(&parse_query(query), &catalog, 10).unwrap();
    assert!(results.len() > 1, "seed query must yield several results");
    harness
        .sessions
        .put(session_id, &results, ttl)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_expired_session_navigation_prompts_re_search() {
    let harness = TestHarness::new();
    seed_session(&harness, "SEEDED", "LSP", Duration::ZERO).await;

    let response = harness.service.handle(button_press("next_package_SEEDED_0")).await;
    assert_eq!(response.kind, ResponseType::UpdateMessage);
    let data = response.data.unwrap();
    assert!(data.content.unwrap().contains("expired"));
    assert!(data.components.is_empty());
}

#[tokio::test]
async fn test_expired_session_overview_prompts_re_search() {
    let harness = TestHarness::new();
    let response = harness
        .service
        .handle(button_press("package_list_UNKNOWN_0"))
        .await;
    assert_eq!(response.kind, ResponseType::UpdateMessage);
    assert!(response.data.unwrap().content.unwrap().contains("expired"));
}

#[tokio::test]
async fn test_expired_session_selection_prompts_re_search() {
    let harness = TestHarness::new();
    let response = harness
        .service
        .handle(menu_choice("package_select_UNKNOWN_0", "LSP|repo|0"))
        .await;
    assert_eq!(response.kind, ResponseType::UpdateMessage);
    assert!(response.data.unwrap().content.unwrap().contains("expired"));
}

#[tokio::test]
async fn test_stale_selection_index_prompts_re_search() {
    let harness = TestHarness::new();
    seed_session(&harness, "SEEDED", "LSP", Duration::from_secs(900)).await;

    // A menu from an older, larger result set under the same id.
    let response = harness
        .service
        .handle(menu_choice("package_select_SEEDED_0", "Ghost|repo|9"))
        .await;
    assert_eq!(response.kind, ResponseType::UpdateMessage);
    assert!(response.data.unwrap().content.unwrap().contains("expired"));
}

#[tokio::test]
#[should_panic(expected = "navigation stepped outside")]
async fn test_out_of_bounds_navigation_fails_loudly() {
    let harness = TestHarness::new();
    seed_session(&harness, "SEEDED", "LSP", Duration::from_secs(900)).await;

    // "LSP" yields two results; stepping next from index 1 leaves the set.
    harness
        .service
        .handle(button_press("next_package_SEEDED_1"))
        .await;
}

#[tokio::test]
#[should_panic(expected = "navigation stepped outside")]
async fn test_forged_huge_index_fails_loudly() {
    let harness = TestHarness::new();
    seed_session(&harness, "SEEDED", "LSP", Duration::from_secs(900)).await;

    // A hand-crafted handle with a usize::MAX index must not wrap around
    // into the result set.
    harness
        .service
        .handle(button_press("next_package_SEEDED_18446744073709551615"))
        .await;
}

#[tokio::test]
async fn test_session_survives_navigation() {
    let harness = TestHarness::new();
    let data = harness.service.handle(command("LSP")).await.data.unwrap();
    let (_, next, _) = nav_buttons(&data);

    // Navigation does not consume or rewrite the session.
    for _ in 0..3 {
        let response = harness.service.handle(button_press(&next.custom_id)).await;
        assert_eq!(response.kind, ResponseType::UpdateMessage);
        assert!(response.data.unwrap().content.is_none());
    }
}

#[tokio::test]
async fn test_short_ttl_config_expires_sessions() {
    let harness = TestHarness::with_catalog_and_config(
        e2e_tests::sample_catalog(),
        PkgbotConfig {
            session_ttl_secs: 1,
            ..Default::default()
        },
    );
    let data = harness.service.handle(command("LSP")).await.data.unwrap();
    let (_, next, _) = nav_buttons(&data);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    let response = harness.service.handle(button_press(&next.custom_id)).await;
    assert!(response.data.unwrap().content.unwrap().contains("expired"));
}
