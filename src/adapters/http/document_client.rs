//! Document upload and CV extraction adapters for the petition backend.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ClientId;
use crate::domain::petition::BackgroundExtraction;
use crate::ports::{
    AuthError, CvExtractionError, CvExtractor, DocumentKind, DocumentStore, DocumentStoreError,
    DocumentUpload, UploadAck,
};

use super::ApiClient;

const UPLOAD_PATH: &str = "/api/documents/upload";
const PARSE_PATH: &str = "/api/cv/parse";

/// [`DocumentStore`] backed by the petition backend.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    api: ApiClient,
}

impl HttpDocumentStore {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl From<AuthError> for DocumentStoreError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Network(msg) => DocumentStoreError::Network(msg),
            AuthError::MissingCredentials | AuthError::SessionExpired => {
                DocumentStoreError::Unauthorized
            }
        }
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn upload(
        &self,
        client_id: &ClientId,
        kind: DocumentKind,
        document: DocumentUpload,
    ) -> Result<UploadAck, DocumentStoreError> {
        tracing::debug!(
            client_id = %client_id,
            kind = kind.as_str(),
            file_name = %document.file_name,
            size = document.bytes.len(),
            "uploading document"
        );

        let file_part = Part::bytes(document.bytes)
            .file_name(document.file_name)
            .mime_str(&document.content_type)
            .map_err(|e| DocumentStoreError::Rejected(format!("Bad content type: {}", e)))?;

        let form = Form::new()
            .part("file", file_part)
            .text("client_id", client_id.to_string())
            .text("file_type", kind.as_str());

        let response = self
            .api
            .post(UPLOAD_PATH)
            .await?
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DocumentStoreError::Timeout
                } else {
                    DocumentStoreError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %error_body, "document upload failed");
            return Err(match status.as_u16() {
                401 | 403 => DocumentStoreError::Unauthorized,
                400 | 413 | 415 | 422 => DocumentStoreError::Rejected(error_body),
                500..=599 => DocumentStoreError::Unavailable(error_body),
                _ => DocumentStoreError::Network(format!("Unexpected status {}", status)),
            });
        }

        let ack: UploadResponse = response
            .json()
            .await
            .map_err(|e| DocumentStoreError::Network(format!("Failed to parse ack: {}", e)))?;

        Ok(UploadAck {
            document_id: ack.document_id,
        })
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    document_id: String,
}

/// [`CvExtractor`] backed by the petition backend.
///
/// The backend answers 404 while the uploaded CV is still being indexed;
/// that maps to [`CvExtractionError::NotFound`] so callers can tell the
/// user to retry shortly instead of surfacing a hard failure.
#[derive(Debug, Clone)]
pub struct HttpCvExtractor {
    api: ApiClient,
}

impl HttpCvExtractor {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl From<AuthError> for CvExtractionError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Network(msg) => CvExtractionError::Network(msg),
            AuthError::MissingCredentials | AuthError::SessionExpired => {
                CvExtractionError::Unauthorized
            }
        }
    }
}

#[async_trait]
impl CvExtractor for HttpCvExtractor {
    async fn parse_cv(
        &self,
        client_id: &ClientId,
    ) -> Result<BackgroundExtraction, CvExtractionError> {
        tracing::debug!(client_id = %client_id, "requesting CV extraction");

        let response = self
            .api
            .post(PARSE_PATH)
            .await?
            .json(&ParseRequest {
                client_id: client_id.to_string(),
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CvExtractionError::Timeout
                } else {
                    CvExtractionError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                404 => CvExtractionError::NotFound,
                401 | 403 => CvExtractionError::Unauthorized,
                422 => CvExtractionError::Parse(error_body),
                500..=599 => CvExtractionError::Unavailable(error_body),
                _ => CvExtractionError::Network(format!("Unexpected status {}", status)),
            });
        }

        let extraction: BackgroundExtraction = response
            .json()
            .await
            .map_err(|e| CvExtractionError::Parse(format!("Failed to parse extraction: {}", e)))?;

        Ok(extraction)
    }
}

#[derive(Debug, Serialize)]
struct ParseRequest {
    client_id: String,
}
