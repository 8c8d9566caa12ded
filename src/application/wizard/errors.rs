//! Wizard operation errors.
//!
//! Display strings are user-facing: the CLI (or any other driver) shows them
//! verbatim, so they read as guidance rather than diagnostics. The underlying
//! port errors stay attached as sources for logging.

use crate::domain::foundation::{DomainError, ValidationError};
use crate::ports::{CvExtractionError, DocumentStoreError, GenerationError};

/// Errors from wizard operations.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// A domain rule rejected the operation.
    #[error("{}", .0.message)]
    Validation(#[from] DomainError),

    /// The CV has not finished uploading yet; retrying shortly should work.
    #[error("CV is still being uploaded. Please try again in a moment.")]
    CvStillUploading,

    /// CV extraction failed for a reason other than "not indexed yet".
    #[error("Failed to parse CV. Please fill in the fields manually.")]
    CvExtractionFailed(#[source] CvExtractionError),

    /// Document upload failed.
    #[error("Failed to upload document. Please try again.")]
    UploadFailed(#[source] DocumentStoreError),

    /// Endeavor suggestion generation failed.
    #[error("Failed to generate suggestions. Please try again.")]
    SuggestionFailed(#[source] GenerationError),

    /// Cover letter or reference letter generation failed.
    #[error("Failed to generate {what}. Please try again.")]
    GenerationFailed {
        /// What was being generated, e.g. "cover letter".
        what: String,
        #[source]
        source: GenerationError,
    },
}

impl WizardError {
    /// Wraps a generation failure with a user-facing label.
    pub fn generation(what: impl Into<String>, source: GenerationError) -> Self {
        Self::GenerationFailed {
            what: what.into(),
            source,
        }
    }
}

impl From<ValidationError> for WizardError {
    fn from(e: ValidationError) -> Self {
        WizardError::Validation(e.into())
    }
}

impl From<CvExtractionError> for WizardError {
    fn from(e: CvExtractionError) -> Self {
        if e.is_still_uploading() {
            WizardError::CvStillUploading
        } else {
            WizardError::CvExtractionFailed(e)
        }
    }
}

impl From<DocumentStoreError> for WizardError {
    fn from(e: DocumentStoreError) -> Self {
        WizardError::UploadFailed(e)
    }
}
