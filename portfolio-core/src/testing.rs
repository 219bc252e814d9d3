//! Testing utilities for the portfolio page.
//!
//! This module provides deterministic stand-ins for every external collaborator:
//! - `MockVerifier` for the bot-verification provider
//! - `MockSource` and `GatedSource` for the resource server
//! - `MockAudio` for the audio subsystem
//! - `RecordingSurface` for the UI layer
//! - `TestHarness` wiring them into a `PortfolioPage`

use crate::audio::AudioBackend;
use crate::config::{AudioSettings, PageConfig};
use crate::content::ResourceKind;
use crate::error::{PlaybackError, VerificationError};
use crate::fetcher::ResourceSource;
use crate::page::PortfolioPage;
use crate::surface::{MuteIndicator, Region, Surface};
use crate::verification::{VerificationProvider, VerificationToken};
use crate::views::View;
use async_trait::async_trait;
use maud::Markup;
use static_client::Error as ClientError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn not_found(kind: ResourceKind) -> ClientError {
    ClientError::Api {
        status: 404,
        message: format!("{kind} not found"),
    }
}

/// Resource bodies for the reference scenario.
pub mod fixtures {
    pub const RESUME: &str = r#"[{"position":"Engineer","company":"Acme","duration":"2020-2022","responsibilities":"Built things"}]"#;
    pub const PORTFOLIO: &str = r#"{"3dAnimation":[],"videoEditing":[]}"#;
    pub const CONTACTS: &str = r#"{"email":"a@b.com","phone":"555-1234"}"#;
    pub const ABOUT: &str = r#"{"title":"About","content":["Hi"]}"#;

    use crate::content::ResourceKind;

    /// Body of `kind` in the reference scenario.
    pub fn body(kind: ResourceKind) -> &'static str {
        match kind {
            ResourceKind::Resume => RESUME,
            ResourceKind::Portfolio => PORTFOLIO,
            ResourceKind::Contacts => CONTACTS,
            ResourceKind::About => ABOUT,
        }
    }
}

// ============================================================================
// Verification
// ============================================================================

#[derive(Debug, Clone)]
enum VerifierBehavior {
    Issue(String),
    Deny(String),
    NotReady,
}

/// A verification provider with a scripted answer.
#[derive(Debug)]
pub struct MockVerifier {
    behavior: VerifierBehavior,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, String)>>,
}

impl MockVerifier {
    fn with_behavior(behavior: VerifierBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Always issue `token`.
    pub fn issuing(token: impl Into<String>) -> Self {
        Self::with_behavior(VerifierBehavior::Issue(token.into()))
    }

    /// Always refuse with `reason`.
    pub fn denying(reason: impl Into<String>) -> Self {
        Self::with_behavior(VerifierBehavior::Deny(reason.into()))
    }

    /// Report the provider as not initialized.
    pub fn not_ready() -> Self {
        Self::with_behavior(VerifierBehavior::NotReady)
    }

    /// Number of `execute` calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Site key and action of the last `execute` call.
    pub fn last_request(&self) -> Option<(String, String)> {
        lock(&self.last_request).clone()
    }
}

#[async_trait]
impl VerificationProvider for MockVerifier {
    fn is_ready(&self) -> bool {
        !matches!(self.behavior, VerifierBehavior::NotReady)
    }

    async fn execute(&self, site_key: &str, action: &str) -> Result<String, VerificationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *lock(&self.last_request) = Some((site_key.to_string(), action.to_string()));

        match &self.behavior {
            VerifierBehavior::Issue(token) => Ok(token.clone()),
            VerifierBehavior::Deny(reason) => Err(VerificationError::Denied {
                reason: reason.clone(),
            }),
            VerifierBehavior::NotReady => Err(VerificationError::NotReady),
        }
    }
}

// ============================================================================
// Resource sources
// ============================================================================

#[derive(Debug, Clone)]
enum Reply {
    Body(String),
    Status(u16),
    Offline,
}

/// A resource source answering from memory. Unknown resources return 404.
#[derive(Debug, Default)]
pub struct MockSource {
    replies: HashMap<ResourceKind, Reply>,
    requests: Mutex<Vec<(ResourceKind, String)>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve every resource of the reference scenario.
    pub fn scenario() -> Self {
        let mut source = Self::new();
        for kind in ResourceKind::ALL {
            source = source.with_body(kind, fixtures::body(kind));
        }
        source
    }

    /// Serve `body` for `kind`.
    pub fn with_body(mut self, kind: ResourceKind, body: impl Into<String>) -> Self {
        self.replies.insert(kind, Reply::Body(body.into()));
        self
    }

    /// Answer `kind` with a non-success status.
    pub fn with_status(mut self, kind: ResourceKind, status: u16) -> Self {
        self.replies.insert(kind, Reply::Status(status));
        self
    }

    /// Fail `kind` with a network error.
    pub fn offline(mut self, kind: ResourceKind) -> Self {
        self.replies.insert(kind, Reply::Offline);
        self
    }

    /// Every request received, with the token it carried (empty if none).
    pub fn requests(&self) -> Vec<(ResourceKind, String)> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl ResourceSource for MockSource {
    async fn fetch(
        &self,
        kind: ResourceKind,
        token: &VerificationToken,
    ) -> Result<String, ClientError> {
        lock(&self.requests).push((kind, token.as_str().to_string()));

        match self.replies.get(&kind) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::Status(status)) => Err(ClientError::Api {
                status: *status,
                message: String::new(),
            }),
            Some(Reply::Offline) => Err(ClientError::Network("connection refused".to_string())),
            None => Err(not_found(kind)),
        }
    }
}

type GateReply = Result<String, ClientError>;

/// A resource source whose fetches stay pending until released through [`Gates`].
///
/// Lets tests choose the order in which fetches complete.
#[derive(Debug)]
pub struct GatedSource {
    pending: Mutex<HashMap<ResourceKind, oneshot::Receiver<GateReply>>>,
    started: AtomicUsize,
}

/// Release handles for a [`GatedSource`].
#[derive(Debug)]
pub struct Gates {
    senders: HashMap<ResourceKind, oneshot::Sender<GateReply>>,
}

impl GatedSource {
    pub fn new() -> (Self, Gates) {
        let mut pending = HashMap::new();
        let mut senders = HashMap::new();
        for kind in ResourceKind::ALL {
            let (tx, rx) = oneshot::channel();
            senders.insert(kind, tx);
            pending.insert(kind, rx);
        }
        (
            Self {
                pending: Mutex::new(pending),
                started: AtomicUsize::new(0),
            },
            Gates { senders },
        )
    }

    /// Number of fetches issued so far, settled or not.
    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }
}

impl Gates {
    /// Complete `kind` with its scenario body.
    pub fn release(&mut self, kind: ResourceKind) {
        self.send(kind, Ok(fixtures::body(kind).to_string()));
    }

    /// Complete `kind` with a server error.
    pub fn fail(&mut self, kind: ResourceKind) {
        self.send(kind, Err(not_found(kind)));
    }

    fn send(&mut self, kind: ResourceKind, reply: GateReply) {
        if let Some(tx) = self.senders.remove(&kind) {
            let _ = tx.send(reply);
        }
    }
}

#[async_trait]
impl ResourceSource for GatedSource {
    async fn fetch(
        &self,
        kind: ResourceKind,
        _token: &VerificationToken,
    ) -> Result<String, ClientError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        let gate = lock(&self.pending).remove(&kind);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ClientError::Network("gate dropped".to_string()))),
            None => Err(not_found(kind)),
        }
    }
}

// ============================================================================
// Audio
// ============================================================================

#[derive(Debug, Default)]
struct AudioLog {
    settings: Option<AudioSettings>,
    play_calls: usize,
    muted: bool,
    reject: Option<String>,
}

/// An audio backend that records what it was asked to do.
///
/// Clones share state, so a test can keep one clone and hand the other to the page.
#[derive(Debug, Clone, Default)]
pub struct MockAudio {
    log: Arc<Mutex<AudioLog>>,
}

impl MockAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose playback is always refused.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        let audio = Self::new();
        lock(&audio.log).reject = Some(reason.into());
        audio
    }

    pub fn play_calls(&self) -> usize {
        lock(&self.log).play_calls
    }

    pub fn is_muted(&self) -> bool {
        lock(&self.log).muted
    }

    pub fn settings(&self) -> Option<AudioSettings> {
        lock(&self.log).settings.clone()
    }
}

#[async_trait]
impl AudioBackend for MockAudio {
    fn configure(&mut self, settings: &AudioSettings) {
        lock(&self.log).settings = Some(settings.clone());
    }

    async fn play(&mut self) -> Result<(), PlaybackError> {
        let mut log = lock(&self.log);
        log.play_calls += 1;
        match &log.reject {
            Some(reason) => Err(PlaybackError::Rejected {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }

    fn set_muted(&mut self, muted: bool) {
        lock(&self.log).muted = muted;
    }
}

// ============================================================================
// Surface
// ============================================================================

#[derive(Debug, Default)]
struct SurfaceLog {
    renders: Vec<(Region, String)>,
    indicators: Vec<MuteIndicator>,
}

/// A surface that keeps every render. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    log: Arc<Mutex<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every markup string written to `region`, oldest first.
    pub fn renders(&self, region: Region) -> Vec<String> {
        lock(&self.log)
            .renders
            .iter()
            .filter(|(r, _)| *r == region)
            .map(|(_, html)| html.clone())
            .collect()
    }

    /// What the content region currently shows.
    pub fn content(&self) -> Option<String> {
        self.renders(Region::Content).pop()
    }

    /// What the About box currently shows.
    pub fn about(&self) -> Option<String> {
        self.renders(Region::About).pop()
    }

    pub fn indicators(&self) -> Vec<MuteIndicator> {
        lock(&self.log).indicators.clone()
    }
}

impl Surface for RecordingSurface {
    fn render(&mut self, region: Region, markup: &Markup) {
        lock(&self.log)
            .renders
            .push((region, markup.clone().into_string()));
    }

    fn set_mute_indicator(&mut self, indicator: MuteIndicator) {
        lock(&self.log).indicators.push(indicator);
    }
}

// ============================================================================
// Harness
// ============================================================================

/// Token the harness verifier issues.
pub const TEST_TOKEN: &str = "test-token";

/// A page wired to mocks, with handles for inspecting them.
pub struct TestHarness {
    /// The page under test.
    pub page: PortfolioPage,
    /// Everything the page rendered.
    pub surface: RecordingSurface,
    /// The audio backend.
    pub audio: MockAudio,
    /// The verification provider.
    pub verifier: Arc<MockVerifier>,
}

impl TestHarness {
    /// A page serving the reference scenario.
    pub fn new() -> Self {
        Self::with_source(Arc::new(MockSource::scenario()))
    }

    /// A page loading from `source`.
    pub fn with_source(source: Arc<dyn ResourceSource>) -> Self {
        Self::with_parts(
            Arc::new(MockVerifier::issuing(TEST_TOKEN)),
            source,
            MockAudio::new(),
        )
    }

    /// A page with explicit verifier, source and audio backend.
    pub fn with_parts(
        verifier: Arc<MockVerifier>,
        source: Arc<dyn ResourceSource>,
        audio: MockAudio,
    ) -> Self {
        let surface = RecordingSurface::new();
        let page = PortfolioPage::new(
            &PageConfig::default(),
            verifier.clone(),
            source,
            Box::new(audio.clone()),
            Box::new(surface.clone()),
        );

        Self {
            page,
            surface,
            audio,
            verifier,
        }
    }

    /// Select a view and return the rendered HTML.
    pub fn select(&mut self, view: View) -> String {
        self.page.select_view(view).into_string()
    }

    /// Current HTML of the content region, or an empty string.
    pub fn content(&self) -> String {
        self.surface.content().unwrap_or_default()
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert the content region shows `needle`.
#[track_caller]
pub fn assert_content_contains(harness: &TestHarness, needle: &str) {
    let content = harness.content();
    assert!(
        content.contains(needle),
        "Expected content region to contain '{needle}', got: {content}"
    );
}

/// Assert which view is active.
#[track_caller]
pub fn assert_active_view(harness: &TestHarness, expected: View) {
    assert_eq!(
        harness.page.active_view(),
        Some(expected),
        "Expected active view {expected}"
    );
}
