//! Authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration (backend API token)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Long-lived API token issued by the petition backend
    pub api_token: Secret<String>,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_token.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_API_TOKEN"));
        }
        Ok(())
    }

    /// Get the token for constructing an auth session
    pub fn api_token(&self) -> Secret<String> {
        self.api_token.clone()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_token: Secret::new(String::new()),
        }
    }
}
