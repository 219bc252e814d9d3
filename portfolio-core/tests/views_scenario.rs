//! Rendering the reference content through the page.

use portfolio_core::testing::{assert_active_view, assert_content_contains, TestHarness};
use portfolio_core::{Region, View};

async fn loaded_harness() -> TestHarness {
    let mut harness = TestHarness::new();
    harness.page.start().await.expect("page should load");
    harness
}

#[tokio::test]
async fn test_default_view_shows_resume() {
    let harness = loaded_harness().await;

    assert_active_view(&harness, View::Resume);
    assert_content_contains(&harness, "<h1>Resume</h1>");
    assert_content_contains(&harness, "<strong>Engineer</strong>");
    assert_content_contains(&harness, "<p>Acme</p>");
    assert_content_contains(&harness, "2020-2022");
    assert_content_contains(&harness, "<p>Built things</p>");
    assert_eq!(harness.content().matches("class=\"job\"").count(), 1);
}

#[tokio::test]
async fn test_contacts_view() {
    let mut harness = loaded_harness().await;

    harness.select(View::Contacts);

    assert_active_view(&harness, View::Contacts);
    assert_content_contains(&harness, "a@b.com");
    assert_content_contains(&harness, "555-1234");
}

#[tokio::test]
async fn test_portfolio_view_with_empty_sections() {
    let mut harness = loaded_harness().await;

    let html = harness.select(View::Portfolio);

    assert!(html.contains("<h2>3D Animation</h2>"));
    assert!(html.contains("<h2>Video Editing</h2>"));
    assert!(html.find("3D Animation") < html.find("Video Editing"));
    assert!(!html.contains("portfolio-entry"));
}

#[tokio::test]
async fn test_source_view_links_out() {
    let mut harness = loaded_harness().await;

    let html = harness.select(View::Source);

    assert!(html.contains("id=\"github-content\""));
    assert!(html.contains("target=\"_blank\""));
}

#[tokio::test]
async fn test_reselecting_a_view_is_idempotent() {
    let mut harness = loaded_harness().await;

    for view in View::ALL {
        let first = harness.select(view);
        let second = harness.select(view);
        assert_eq!(first, second, "{view} re-rendered differently");
    }
}

#[tokio::test]
async fn test_switching_views_never_refetches() {
    let source = std::sync::Arc::new(portfolio_core::MockSource::scenario());
    let mut harness = TestHarness::with_source(source.clone());
    harness.page.start().await.unwrap();

    for view in [View::Portfolio, View::Contacts, View::Source, View::Resume] {
        harness
            .page
            .handle_event(portfolio_core::UiEvent::SelectTab(view))
            .await;
        assert_active_view(&harness, view);
    }

    assert_eq!(source.requests().len(), 4);
    assert_eq!(harness.surface.renders(Region::Content).len(), 5);
}
