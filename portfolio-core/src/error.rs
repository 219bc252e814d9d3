//! Error types for the portfolio page.
//!
//! Each component contains its own failures: only verification is fatal to the
//! load sequence, fetch and playback failures degrade a single feature.

use crate::content::ResourceKind;

/// Failure to obtain a verification token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    /// Provider script absent or not yet initialized
    #[error("Verification provider not ready")]
    NotReady,

    /// Provider refused to issue a token
    #[error("Verification denied: {reason}")]
    Denied { reason: String },

    /// Provider answered with an empty token
    #[error("Verification provider returned an empty token")]
    EmptyToken,

    /// The gate already performed its single acquisition
    #[error("Verification token already acquired for this page")]
    AlreadyAcquired,
}

/// Failure to load one resource.
#[derive(Debug, thiserror::Error)]
#[error("Failed to load {kind}: {source}")]
pub struct FetchError {
    /// Which resource failed
    pub kind: ResourceKind,
    /// Underlying client error
    #[source]
    pub source: static_client::Error,
}

/// Failure to start ambient playback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    /// Autoplay policy or similar refusal by the audio subsystem
    #[error("Playback rejected: {reason}")]
    Rejected { reason: String },

    /// The audio source could not be loaded
    #[error("Audio source unavailable: {url}")]
    SourceUnavailable { url: String },
}

/// Errors from [`PortfolioPage`](crate::page::PortfolioPage) operations.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Verification failed, content was never requested
    #[error("Verification error: {0}")]
    Verification(#[from] VerificationError),

    /// `start` was called more than once
    #[error("Page already started")]
    AlreadyStarted,
}

/// Result type for page operations
pub type PageResult<T> = std::result::Result<T, PageError>;
