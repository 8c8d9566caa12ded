//! Auth session port - bearer token supply for backend calls.
//!
//! Every backend request carries a bearer token. This port abstracts where
//! that token comes from (a static configured token, a refreshing session,
//! a test stub) so HTTP adapters never hold credential state themselves.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

/// An opaque bearer token for the petition backend.
///
/// Wraps [`Secret`] so the token never appears in `Debug` output or logs.
#[derive(Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    /// Wraps a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(Secret::new(token.into()))
    }

    /// Exposes the raw token for constructing an `Authorization` header.
    /// Call sites should not store the returned reference.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Port for obtaining the current access token.
#[async_trait]
pub trait AuthSession: Send + Sync {
    /// Returns a token valid for the next backend call.
    async fn access_token(&self) -> Result<AccessToken, AuthError>;
}

/// Auth session errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No credentials are configured.
    #[error("no credentials configured")]
    MissingCredentials,

    /// The session expired and could not be renewed.
    #[error("session expired")]
    SessionExpired,

    /// Network error while renewing the session.
    #[error("auth network error: {0}")]
    Network(String),
}
