//! Document store port - client document upload.
//!
//! The backend stores uploaded client documents (CVs, supporting evidence)
//! and indexes them by client. Upload is fire-and-forget from the wizard's
//! point of view: parsing happens in a separate call against the stored copy.

use async_trait::async_trait;

use crate::domain::foundation::ClientId;

/// What kind of document is being uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Curriculum vitae, eligible for background extraction.
    Cv,
    /// Supporting evidence attached to the petition.
    Evidence,
}

impl DocumentKind {
    /// Wire identifier used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Cv => "cv",
            DocumentKind::Evidence => "evidence",
        }
    }
}

/// An in-memory document ready for upload.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// Original file name, shown back to the user.
    pub file_name: String,
    /// MIME type of the payload.
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// Backend acknowledgement for a stored document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadAck {
    /// Backend identifier for the stored document.
    pub document_id: String,
}

/// Port for uploading client documents to the backend.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores a document for a client.
    async fn upload(
        &self,
        client_id: &ClientId,
        kind: DocumentKind,
        document: DocumentUpload,
    ) -> Result<UploadAck, DocumentStoreError>;
}

/// Document store errors.
#[derive(Debug, thiserror::Error)]
pub enum DocumentStoreError {
    /// The payload was rejected (too large, unsupported type).
    #[error("document rejected: {0}")]
    Rejected(String),

    /// Authentication failed.
    #[error("authentication failed")]
    Unauthorized,

    /// Network error during upload.
    #[error("network error: {0}")]
    Network(String),

    /// Upload timed out.
    #[error("upload timed out")]
    Timeout,

    /// Backend is unavailable.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_kind_wire_identifiers() {
        assert_eq!(DocumentKind::Cv.as_str(), "cv");
        assert_eq!(DocumentKind::Evidence.as_str(), "evidence");
    }
}
