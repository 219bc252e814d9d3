//! Full load sequence over HTTP against a mock resource server.

use portfolio_core::testing::{fixtures, RecordingSurface};
use portfolio_core::{
    MockAudio, PageConfig, PortfolioPage, ResourceKind, StaticTokenProvider, View,
};
use static_client::TOKEN_HEADER;
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    portfolio_core::logging::init_with_filter("portfolio_core=debug,static_client=debug");
}

async fn mount(server: &MockServer, kind: ResourceKind) {
    Mock::given(method("GET"))
        .and(path(format!("/static/json/{}.json", kind.name())))
        .and(header(TOKEN_HEADER, "site-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixtures::body(kind)))
        .expect(1)
        .mount(server)
        .await;
}

fn page_for(server: &MockServer, surface: &RecordingSurface) -> PortfolioPage {
    let config = PageConfig::new().with_base_url(server.uri());
    PortfolioPage::with_static_client(
        &config,
        Arc::new(StaticTokenProvider::new("site-token")),
        Box::new(MockAudio::new()),
        Box::new(surface.clone()),
    )
}

#[tokio::test]
async fn test_loads_all_resources_over_http() {
    init_logging();
    let server = MockServer::start().await;
    for kind in ResourceKind::ALL {
        mount(&server, kind).await;
    }

    let surface = RecordingSurface::new();
    let mut page = page_for(&server, &surface);
    page.start().await.expect("load should succeed");

    assert!(page.store().failed().is_empty());
    assert!(surface.content().unwrap().contains("Engineer"));

    let contacts = page.select_view(View::Contacts).into_string();
    assert!(contacts.contains("a@b.com"));
}

#[tokio::test]
async fn test_missing_resource_over_http() {
    init_logging();
    let server = MockServer::start().await;
    mount(&server, ResourceKind::Resume).await;
    mount(&server, ResourceKind::Portfolio).await;
    mount(&server, ResourceKind::About).await;

    let surface = RecordingSurface::new();
    let mut page = page_for(&server, &surface);
    page.start().await.unwrap();

    assert_eq!(page.store().failed(), &[ResourceKind::Contacts]);
    assert!(surface.about().unwrap().contains("<p>Hi</p>"));
}
