//! Generation service port - AI-backed suggestion and document generation.
//!
//! The backend fronts an LLM with two shapes of call: a structured endeavor
//! suggestion endpoint, and a general petition document endpoint that takes a
//! fully rendered prompt and returns text plus a generation id. The wizard
//! never talks to the model directly; prompt rendering lives in the domain
//! and this port carries the finished prompt across.

use async_trait::async_trait;

use crate::domain::foundation::{ClientId, GenerationId};
use crate::domain::petition::VisaType;

/// Port for AI-backed generation calls.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Asks the backend for endeavor and national-interest suggestions
    /// tailored to a background summary.
    async fn suggest_endeavors(
        &self,
        professional_background: &str,
        field: &str,
    ) -> Result<EndeavorSuggestions, GenerationError>;

    /// Generates one petition document from a rendered prompt.
    async fn generate_document(
        &self,
        request: GenerationRequest,
    ) -> Result<GeneratedDocument, GenerationError>;
}

/// Structured suggestion output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndeavorSuggestions {
    /// Proposed endeavor statements.
    pub endeavors: Vec<String>,
    /// Proposed national-interest arguments.
    pub national_interest_angles: Vec<String>,
}

/// One generated petition document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    /// Generated text.
    pub text: String,
    /// Backend identifier for this generation.
    pub generation_id: GenerationId,
}

/// Request for one document generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Client the document belongs to.
    pub client_id: ClientId,
    /// Visa classification, always EB2NIW for this wizard.
    pub visa_type: VisaType,
    /// Document label, e.g. "Reference Letter 2". Cover letters carry none.
    pub criterion: Option<String>,
    /// Fully rendered prompt.
    pub prompt: String,
}

impl GenerationRequest {
    /// Creates a request with no criterion label.
    pub fn new(client_id: ClientId, prompt: impl Into<String>) -> Self {
        Self {
            client_id,
            visa_type: VisaType::Eb2Niw,
            criterion: None,
            prompt: prompt.into(),
        }
    }

    /// Sets the criterion label.
    pub fn with_criterion(mut self, criterion: impl Into<String>) -> Self {
        self.criterion = Some(criterion.into());
        self
    }
}

/// Generation service errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Rate limited by the backend.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Backend is unavailable.
    #[error("generation unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the backend response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl GenerationError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GenerationError::RateLimited { .. }
                | GenerationError::Unavailable { .. }
                | GenerationError::Network(_)
                | GenerationError::Timeout { .. }
        )
    }
}
