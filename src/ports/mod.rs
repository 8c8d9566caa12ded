//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AuthSession` - supplies bearer tokens for backend calls
//! - `DocumentStore` - uploads client documents (CVs, evidence)
//! - `CvExtractor` - parses a stored CV into background fields
//! - `GenerationService` - AI-backed suggestions and document generation

mod auth_session;
mod cv_extractor;
mod document_store;
mod generation;

pub use auth_session::{AccessToken, AuthError, AuthSession};
pub use cv_extractor::{CvExtractionError, CvExtractor};
pub use document_store::{
    DocumentKind, DocumentStore, DocumentStoreError, DocumentUpload, UploadAck,
};
pub use generation::{
    EndeavorSuggestions, GeneratedDocument, GenerationError, GenerationRequest, GenerationService,
};
