//! HTTP adapters for the petition backend.
//!
//! All backend ports (document store, CV extractor, generation service) talk
//! to the same REST API with the same bearer auth and timeout handling, so
//! they share one [`ApiClient`].

mod document_client;
mod generation_client;

pub use document_client::{HttpCvExtractor, HttpDocumentStore};
pub use generation_client::HttpGenerationService;

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::ports::{AuthError, AuthSession};

/// Configuration for the backend API client.
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the backend, without trailing slash.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ApiClientConfig {
    /// Creates a configuration with the default 120s timeout. Generation
    /// calls can legitimately run for minutes.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Shared HTTP client for the petition backend.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiClientConfig,
    client: Client,
    auth: Arc<dyn AuthSession>,
}

impl ApiClient {
    /// Builds a client; fails if the underlying TLS/connector setup fails.
    pub fn new(config: ApiClientConfig, auth: Arc<dyn AuthSession>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            config,
            client,
            auth,
        })
    }

    /// Joins a path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Configured request timeout in whole seconds.
    pub fn timeout_secs(&self) -> u32 {
        self.config.timeout.as_secs() as u32
    }

    /// Starts an authorized POST to `path`.
    pub async fn post(&self, path: &str) -> Result<RequestBuilder, AuthError> {
        let token = self.auth.access_token().await?;
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(token.expose()))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}
