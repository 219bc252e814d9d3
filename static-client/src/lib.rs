//! Minimal client for the portfolio site's static JSON resources.
//!
//! The resource server exposes every document at `/static/json/{name}.json`.
//! This crate provides:
//! - URL construction for named resources
//! - The verification-token header, attached only when a token exists
//! - Raw text and typed JSON retrieval with a small error taxonomy

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use thiserror::Error;

const RESOURCE_PATH: &str = "static/json";

/// Local development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8090";

/// Environment variable naming the resource server root.
pub const BASE_URL_ENV: &str = "PORTFOLIO_BASE_URL";

/// Header carrying the visitor's verification token.
pub const TOKEN_HEADER: &str = "X-Recaptcha-Token";

/// Errors that can occur when fetching a static resource.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Client for the static resource server.
#[derive(Clone, Debug)]
pub struct StaticClient {
    client: reqwest::Client,
    base_url: String,
}

impl StaticClient {
    /// Create a client rooted at the given base URL (scheme, host and optional prefix).
    ///
    /// No request timeout is configured; a request runs until it completes or fails.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a named resource, e.g. `resume` -> `{base}/static/json/resume.json`.
    pub fn resource_url(&self, name: &str) -> Result<String, Error> {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(Error::Config(format!("Invalid resource name: {name:?}")));
        }
        Ok(format!("{}/{RESOURCE_PATH}/{name}.json", self.base_url))
    }

    /// Fetch a resource body as text.
    ///
    /// An empty or absent token sends no verification header at all.
    pub async fn fetch_text(&self, name: &str, token: Option<&str>) -> Result<String, Error> {
        let url = self.resource_url(name)?;
        let headers = build_headers(token)?;

        tracing::debug!(
            %url,
            with_token = headers.contains_key(TOKEN_HEADER),
            "fetching static resource"
        );

        let response = self
            .client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))
    }

    /// Fetch a resource and decode its JSON body.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        name: &str,
        token: Option<&str>,
    ) -> Result<T, Error> {
        let body = self.fetch_text(name, token).await?;
        parse_json(&body)
    }
}

impl Default for StaticClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Decode a JSON document, mapping failures to [`Error::Parse`].
pub fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|e| Error::Parse(e.to_string()))
}

fn build_headers(token: Option<&str>) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.insert(
            TOKEN_HEADER,
            HeaderValue::from_str(token)
                .map_err(|e| Error::Config(format!("Invalid verification token: {e}")))?,
        );
    }
    Ok(headers)
}
