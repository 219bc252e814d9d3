//! PortfolioPage - the primary public API.
//!
//! Wires the verification gate, content loader, views, tab dispatcher and
//! audio controller together:
//! - `start` verifies, loads everything, then activates the default view
//! - `handle_event` reacts to tab selection, mute toggles and document clicks
//!
//! The default view and the page bindings (mute control, first-interaction
//! audio start) are installed once, after every fetch has settled.

use crate::audio::{AudioBackend, AudioController, AudioState};
use crate::config::PageConfig;
use crate::content::ContentStore;
use crate::dispatcher::TabDispatcher;
use crate::error::{PageError, PageResult};
use crate::fetcher::ResourceSource;
use crate::interaction::OneShot;
use crate::loader::ContentLoader;
use crate::surface::{MuteIndicator, Region, Surface, UiEvent};
use crate::verification::{VerificationGate, VerificationProvider};
use crate::views::{self, View};
use maud::Markup;
use static_client::StaticClient;
use std::sync::Arc;

/// Where the page is in its load sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// `start` not called yet.
    Idle,
    /// Waiting for the verification token.
    Verifying,
    /// Token acquired, resources in flight.
    Loading,
    /// Every fetch settled, default view shown.
    Ready,
    /// Verification failed; content will never load.
    Blocked,
}

/// A portfolio page session.
pub struct PortfolioPage {
    gate: VerificationGate,
    loader: ContentLoader,
    store: ContentStore,
    dispatcher: TabDispatcher,
    audio: AudioController,
    surface: Box<dyn Surface>,
    first_interaction: OneShot,
    mute_bound: bool,
    phase: LoadPhase,
}

impl PortfolioPage {
    /// Create a page over explicit collaborators.
    pub fn new(
        config: &PageConfig,
        verifier: Arc<dyn VerificationProvider>,
        source: Arc<dyn ResourceSource>,
        audio: Box<dyn AudioBackend>,
        surface: Box<dyn Surface>,
    ) -> Self {
        Self {
            gate: VerificationGate::new(verifier, &config.site_key, &config.action),
            loader: ContentLoader::new(source),
            store: ContentStore::new(),
            dispatcher: TabDispatcher::new(),
            audio: AudioController::new(audio, &config.audio),
            surface,
            first_interaction: OneShot::default(),
            mute_bound: false,
            phase: LoadPhase::Idle,
        }
    }

    /// Create a page that loads over HTTP from `config.base_url`.
    pub fn with_static_client(
        config: &PageConfig,
        verifier: Arc<dyn VerificationProvider>,
        audio: Box<dyn AudioBackend>,
        surface: Box<dyn Surface>,
    ) -> Self {
        let source = Arc::new(StaticClient::new(config.base_url.clone()));
        Self::new(config, verifier, source, audio, surface)
    }

    /// Run the load sequence: verify, fetch all resources, activate the default view.
    ///
    /// Resolves once every fetch has settled. Fetch failures are contained in
    /// the store; only a verification failure is returned, and in that case
    /// nothing is fetched.
    pub async fn start(&mut self) -> PageResult<()> {
        if self.phase != LoadPhase::Idle {
            return Err(PageError::AlreadyStarted);
        }

        self.phase = LoadPhase::Verifying;
        let token = match self.gate.acquire_token().await {
            Ok(token) => token,
            Err(e) => {
                self.phase = LoadPhase::Blocked;
                return Err(e.into());
            }
        };

        self.phase = LoadPhase::Loading;
        self.store = self.loader.load_all(&token).await;
        self.on_content_loaded();
        Ok(())
    }

    fn on_content_loaded(&mut self) {
        self.phase = LoadPhase::Ready;

        self.mute_bound = true;
        let about = views::render_about(&self.store);
        self.surface.render(Region::About, &about);
        self.first_interaction.arm();

        tracing::info!(failed = ?self.store.failed(), "content ready");
        self.select_view(View::Resume);
    }

    /// Dispatch a UI event.
    pub async fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::SelectTab(view) => {
                self.select_view(view);
            }
            UiEvent::ToggleMute => {
                self.toggle_mute();
            }
            UiEvent::DocumentClick => {
                self.document_click().await;
            }
        }
    }

    /// Show `view` in the content region, re-rendering from the resident store.
    pub fn select_view(&mut self, view: View) -> Markup {
        self.dispatcher
            .select_view(view, &self.store, self.surface.as_mut())
    }

    /// Toggle mute. Returns `None` while the mute control is not bound yet.
    pub fn toggle_mute(&mut self) -> Option<MuteIndicator> {
        if !self.mute_bound {
            tracing::debug!("mute toggled before content loaded, ignoring");
            return None;
        }

        let indicator = self.audio.toggle_mute();
        self.surface.set_mute_indicator(indicator);
        Some(indicator)
    }

    /// Handle a click anywhere on the page.
    ///
    /// The first click after load completion starts audio; the subscription
    /// is spent even if playback is rejected. Returns whether playback was attempted.
    pub async fn document_click(&mut self) -> bool {
        if !self.first_interaction.consume() {
            return false;
        }
        // Failure is already logged by the controller; audio stays idle.
        let _ = self.audio.start().await;
        true
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn active_view(&self) -> Option<View> {
        self.dispatcher.active()
    }

    pub fn audio_state(&self) -> AudioState {
        self.audio.state()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Whether tab controls should be enabled in the UI.
    pub fn tabs_enabled(&self) -> bool {
        self.phase == LoadPhase::Ready
    }
}
