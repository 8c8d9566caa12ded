//! CV extractor port - structured background extraction.
//!
//! After a CV upload, the backend parses the stored document into the
//! structured background fields. Parsing can lag the upload: the backend
//! answers "not found" until the stored copy is indexed, which callers
//! surface as "still uploading, try again shortly" rather than a failure.

use async_trait::async_trait;

use crate::domain::foundation::ClientId;
use crate::domain::petition::BackgroundExtraction;

/// Port for extracting background data from a client's stored CV.
#[async_trait]
pub trait CvExtractor: Send + Sync {
    /// Parses the most recently uploaded CV for the client.
    ///
    /// Fields the backend could not extract come back as `None`; partial
    /// extraction is a success, not an error.
    async fn parse_cv(&self, client_id: &ClientId) -> Result<BackgroundExtraction, CvExtractionError>;
}

/// CV extraction errors.
#[derive(Debug, thiserror::Error)]
pub enum CvExtractionError {
    /// No stored CV was found for the client. Usually means the upload is
    /// still being processed.
    #[error("no CV on file for client")]
    NotFound,

    /// The stored document could not be parsed.
    #[error("CV parse failed: {0}")]
    Parse(String),

    /// Authentication failed.
    #[error("authentication failed")]
    Unauthorized,

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("extraction timed out")]
    Timeout,

    /// Backend is unavailable.
    #[error("extractor unavailable: {0}")]
    Unavailable(String),
}

impl CvExtractionError {
    /// True when the right user-facing response is "try again shortly".
    pub fn is_still_uploading(&self) -> bool {
        matches!(self, CvExtractionError::NotFound)
    }
}
