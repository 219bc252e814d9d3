//! Resource fetching.
//!
//! [`ResourceSource`] is the seam to whatever serves the JSON documents; the
//! HTTP implementation is [`StaticClient`]. [`ResourceFetcher`] adds typed
//! decoding and failure reporting on top.

use crate::content::ResourceKind;
use crate::error::FetchError;
use crate::verification::VerificationToken;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use static_client::StaticClient;
use std::sync::Arc;

/// Something that can return the raw body of a named resource.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Read `kind`, attaching the token when it is non-empty.
    async fn fetch(
        &self,
        kind: ResourceKind,
        token: &VerificationToken,
    ) -> Result<String, static_client::Error>;
}

#[async_trait]
impl ResourceSource for StaticClient {
    async fn fetch(
        &self,
        kind: ResourceKind,
        token: &VerificationToken,
    ) -> Result<String, static_client::Error> {
        self.fetch_text(kind.name(), token.header_value()).await
    }
}

/// Typed fetches over a [`ResourceSource`].
#[derive(Clone)]
pub struct ResourceFetcher {
    source: Arc<dyn ResourceSource>,
}

impl ResourceFetcher {
    pub fn new(source: Arc<dyn ResourceSource>) -> Self {
        Self { source }
    }

    /// Fetch and decode one resource. Failures are logged here and returned;
    /// nothing is retried and no fallback value is produced.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        token: &VerificationToken,
    ) -> Result<T, FetchError> {
        let result = self
            .source
            .fetch(kind, token)
            .await
            .and_then(|body| static_client::parse_json(&body));

        result.map_err(|source| {
            let err = FetchError { kind, source };
            tracing::warn!(resource = %kind, error = %err.source, "error loading resource");
            err
        })
    }
}
