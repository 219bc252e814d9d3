//! Content controller for a single-page portfolio site.
//!
//! This crate provides:
//! - A verification gate in front of all content requests
//! - Concurrent loading of the resume, portfolio, contacts and about resources
//! - Pure, tabbed views rendered into a shared content region
//! - An ambient audio toggle started by the first interaction
//!
//! # Quick Start
//!
//! ```ignore
//! use portfolio_core::{PageConfig, PortfolioPage, UiEvent, View};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     portfolio_core::logging::init();
//!     let config = PageConfig::from_env();
//!
//!     let mut page = PortfolioPage::with_static_client(&config, verifier, audio, surface);
//!     page.start().await?;
//!
//!     page.handle_event(UiEvent::SelectTab(View::Portfolio)).await;
//!     Ok(())
//! }
//! ```

pub mod audio;
pub mod config;
pub mod content;
pub mod dispatcher;
pub mod error;
pub mod fetcher;
pub mod interaction;
pub mod loader;
pub mod logging;
pub mod page;
pub mod surface;
pub mod testing;
pub mod verification;
pub mod views;

// Primary public API
pub use audio::{AudioBackend, AudioPhase, AudioState};
pub use config::{AudioSettings, PageConfig};
pub use content::{ContentStore, ResourceKind};
pub use error::{FetchError, PageError, PlaybackError, VerificationError};
pub use fetcher::ResourceSource;
pub use page::{LoadPhase, PortfolioPage};
pub use surface::{MuteIndicator, Region, Surface, UiEvent};
pub use testing::{MockAudio, MockSource, MockVerifier, RecordingSurface, TestHarness};
pub use verification::{StaticTokenProvider, VerificationProvider, VerificationToken};
pub use views::View;
