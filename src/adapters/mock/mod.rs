//! Mock adapters for testing.
//!
//! These adapters implement the backend ports without any network, scripting
//! responses up front and recording every call so tests can assert on the
//! exact traffic the wizard produced.
//!
//! # Example
//!
//! ```ignore
//! let generation = MockGenerationService::new()
//!     .with_suggestions(vec!["E1".into()], vec!["A1".into()])
//!     .with_document("Dear Officer,", "gen-1");
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{ClientId, GenerationId};
use crate::domain::petition::BackgroundExtraction;
use crate::ports::{
    CvExtractionError, CvExtractor, DocumentKind, DocumentStore, DocumentStoreError,
    DocumentUpload, EndeavorSuggestions, GeneratedDocument, GenerationError, GenerationRequest,
    GenerationService, UploadAck,
};

/// Mock generation service with scripted responses and call recording.
///
/// Suggestion calls always return the configured suggestion set. Document
/// calls consume scripted outcomes in order; when the script runs out, a
/// generic document is produced so open-ended tests keep working.
#[derive(Debug, Default)]
pub struct MockGenerationService {
    suggestions: Mutex<Option<EndeavorSuggestions>>,
    documents: Mutex<VecDeque<Result<GeneratedDocument, GenerationError>>>,
    suggest_calls: Mutex<Vec<(String, String)>>,
    document_calls: Mutex<Vec<GenerationRequest>>,
    fail_suggestions: Mutex<Option<GenerationError>>,
}

impl MockGenerationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the suggestion response.
    pub fn with_suggestions(self, endeavors: Vec<String>, angles: Vec<String>) -> Self {
        *self.suggestions.lock().unwrap() = Some(EndeavorSuggestions {
            endeavors,
            national_interest_angles: angles,
        });
        self
    }

    /// Forces suggestion calls to fail.
    pub fn with_suggestion_error(self, error: GenerationError) -> Self {
        *self.fail_suggestions.lock().unwrap() = Some(error);
        self
    }

    /// Appends one scripted successful document.
    pub fn with_document(self, text: impl Into<String>, generation_id: &str) -> Self {
        self.documents.lock().unwrap().push_back(Ok(GeneratedDocument {
            text: text.into(),
            generation_id: GenerationId::new(generation_id)
                .unwrap_or_else(|_| GenerationId::new("mock-gen").unwrap()),
        }));
        self
    }

    /// Appends one scripted document failure.
    pub fn with_document_error(self, error: GenerationError) -> Self {
        self.documents.lock().unwrap().push_back(Err(error));
        self
    }

    /// All recorded suggestion calls as (professional_background, field).
    pub fn suggest_calls(&self) -> Vec<(String, String)> {
        self.suggest_calls.lock().unwrap().clone()
    }

    /// All recorded document generation requests, in call order.
    pub fn document_calls(&self) -> Vec<GenerationRequest> {
        self.document_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationService for MockGenerationService {
    async fn suggest_endeavors(
        &self,
        professional_background: &str,
        field: &str,
    ) -> Result<EndeavorSuggestions, GenerationError> {
        self.suggest_calls
            .lock()
            .unwrap()
            .push((professional_background.to_string(), field.to_string()));

        if let Some(error) = self.fail_suggestions.lock().unwrap().take() {
            return Err(error);
        }

        Ok(self
            .suggestions
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(EndeavorSuggestions {
                endeavors: vec!["Mock endeavor".to_string()],
                national_interest_angles: vec!["Mock angle".to_string()],
            }))
    }

    async fn generate_document(
        &self,
        request: GenerationRequest,
    ) -> Result<GeneratedDocument, GenerationError> {
        self.document_calls.lock().unwrap().push(request);

        match self.documents.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => Ok(GeneratedDocument {
                text: "Mock document".to_string(),
                generation_id: GenerationId::new("mock-gen").unwrap(),
            }),
        }
    }
}

/// Mock CV extractor returning one scripted outcome per call.
#[derive(Debug, Default)]
pub struct MockCvExtractor {
    outcomes: Mutex<VecDeque<Result<BackgroundExtraction, CvExtractionError>>>,
    calls: Mutex<Vec<ClientId>>,
}

impl MockCvExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a scripted successful extraction.
    pub fn with_extraction(self, extraction: BackgroundExtraction) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(extraction));
        self
    }

    /// Appends a scripted failure.
    pub fn with_error(self, error: CvExtractionError) -> Self {
        self.outcomes.lock().unwrap().push_back(Err(error));
        self
    }

    /// Client ids of every recorded call.
    pub fn calls(&self) -> Vec<ClientId> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CvExtractor for MockCvExtractor {
    async fn parse_cv(
        &self,
        client_id: &ClientId,
    ) -> Result<BackgroundExtraction, CvExtractionError> {
        self.calls.lock().unwrap().push(*client_id);
        match self.outcomes.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => Err(CvExtractionError::NotFound),
        }
    }
}

/// One recorded upload, without the payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpload {
    pub client_id: ClientId,
    pub kind: DocumentKind,
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}

/// Mock document store recording uploads.
#[derive(Debug, Default)]
pub struct MockDocumentStore {
    uploads: Mutex<Vec<RecordedUpload>>,
    force_error: Mutex<Option<DocumentStoreError>>,
    next_id: Mutex<u32>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces the next upload to fail.
    pub fn with_error(self, error: DocumentStoreError) -> Self {
        *self.force_error.lock().unwrap() = Some(error);
        self
    }

    /// Every recorded upload, in call order.
    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn upload(
        &self,
        client_id: &ClientId,
        kind: DocumentKind,
        document: DocumentUpload,
    ) -> Result<UploadAck, DocumentStoreError> {
        if let Some(error) = self.force_error.lock().unwrap().take() {
            return Err(error);
        }

        self.uploads.lock().unwrap().push(RecordedUpload {
            client_id: *client_id,
            kind,
            file_name: document.file_name,
            content_type: document.content_type,
            size: document.bytes.len(),
        });

        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        Ok(UploadAck {
            document_id: format!("doc-{}", *next),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generation_mock_replays_scripted_documents_in_order() {
        let service = MockGenerationService::new()
            .with_document("First", "gen-1")
            .with_document_error(GenerationError::network("down"))
            .with_document("Third", "gen-3");

        let first = service
            .generate_document(GenerationRequest::new(ClientId::new(), "p1"))
            .await
            .unwrap();
        assert_eq!(first.text, "First");

        let second = service
            .generate_document(GenerationRequest::new(ClientId::new(), "p2"))
            .await;
        assert!(second.is_err());

        let third = service
            .generate_document(GenerationRequest::new(ClientId::new(), "p3"))
            .await
            .unwrap();
        assert_eq!(third.generation_id.as_str(), "gen-3");

        assert_eq!(service.document_calls().len(), 3);
    }

    #[tokio::test]
    async fn cv_extractor_mock_defaults_to_not_found() {
        let extractor = MockCvExtractor::new();
        let result = extractor.parse_cv(&ClientId::new()).await;
        assert!(matches!(result, Err(CvExtractionError::NotFound)));
    }

    #[tokio::test]
    async fn document_store_mock_records_upload_metadata() {
        let store = MockDocumentStore::new();
        let client_id = ClientId::new();
        let ack = store
            .upload(
                &client_id,
                DocumentKind::Cv,
                DocumentUpload {
                    file_name: "cv.pdf".to_string(),
                    content_type: "application/pdf".to_string(),
                    bytes: vec![1, 2, 3],
                },
            )
            .await
            .unwrap();

        assert_eq!(ack.document_id, "doc-1");
        let uploads = store.uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].file_name, "cv.pdf");
        assert_eq!(uploads[0].size, 3);
    }
}
