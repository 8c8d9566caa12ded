//! Static token auth session.
//!
//! The simplest [`AuthSession`]: a token configured up front (env or config
//! file) that never expires. Suitable for service-to-service use where the
//! backend issues long-lived API tokens.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

use crate::ports::{AccessToken, AuthError, AuthSession};

/// Auth session backed by one configured token.
pub struct StaticTokenSession {
    token: Secret<String>,
}

impl StaticTokenSession {
    /// Creates a session from a configured token.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MissingCredentials`] if the token is empty
    pub fn new(token: Secret<String>) -> Result<Self, AuthError> {
        if token.expose_secret().trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(Self { token })
    }
}

#[async_trait]
impl AuthSession for StaticTokenSession {
    async fn access_token(&self) -> Result<AccessToken, AuthError> {
        Ok(AccessToken::new(self.token.expose_secret().clone()))
    }
}
