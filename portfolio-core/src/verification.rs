//! Verification gate.
//!
//! Content requests are only issued after the bot-verification provider has
//! issued a token for the page's action. The gate asks exactly once per page;
//! there is no retry.

use crate::error::VerificationError;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Opaque proof-of-humanity token attached to resource requests.
///
/// The default token is empty, which means "not verified yet".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct VerificationToken(String);

impl VerificationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Header value to send, or `None` while the token is empty.
    pub fn header_value(&self) -> Option<&str> {
        (!self.0.is_empty()).then_some(self.0.as_str())
    }
}

impl fmt::Debug for VerificationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("VerificationToken(<empty>)")
        } else {
            write!(f, "VerificationToken(<{} chars>)", self.0.len())
        }
    }
}

/// Client side of a bot-verification service.
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Whether the provider has finished initializing.
    fn is_ready(&self) -> bool;

    /// Issue a token for `action` under the given site key.
    async fn execute(&self, site_key: &str, action: &str) -> Result<String, VerificationError>;
}

/// Provider that hands out a token issued elsewhere, e.g. by an embedding page.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl VerificationProvider for StaticTokenProvider {
    fn is_ready(&self) -> bool {
        true
    }

    async fn execute(&self, _site_key: &str, _action: &str) -> Result<String, VerificationError> {
        Ok(self.token.clone())
    }
}

/// Single-use gate in front of content loading.
pub struct VerificationGate {
    provider: Arc<dyn VerificationProvider>,
    site_key: String,
    action: String,
    attempted: bool,
}

impl VerificationGate {
    pub fn new(
        provider: Arc<dyn VerificationProvider>,
        site_key: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            site_key: site_key.into(),
            action: action.into(),
            attempted: false,
        }
    }

    /// Whether the single acquisition has been spent.
    pub fn attempted(&self) -> bool {
        self.attempted
    }

    /// Obtain the page's token.
    ///
    /// Only the first call reaches the provider; later calls fail with
    /// [`VerificationError::AlreadyAcquired`] whatever the first outcome was.
    pub async fn acquire_token(&mut self) -> Result<VerificationToken, VerificationError> {
        if self.attempted {
            return Err(VerificationError::AlreadyAcquired);
        }
        self.attempted = true;

        let result = self.request().await;
        match &result {
            Ok(_) => tracing::debug!(action = %self.action, "verification token issued"),
            Err(e) => tracing::error!(
                action = %self.action,
                error = %e,
                "error generating verification token"
            ),
        }
        result
    }

    async fn request(&self) -> Result<VerificationToken, VerificationError> {
        if !self.provider.is_ready() {
            return Err(VerificationError::NotReady);
        }

        let token = self.provider.execute(&self.site_key, &self.action).await?;
        if token.is_empty() {
            return Err(VerificationError::EmptyToken);
        }
        Ok(VerificationToken::new(token))
    }
}
