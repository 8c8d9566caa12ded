//! Background step operations: CV autofill and background submission.

use crate::domain::petition::prompts;
use crate::ports::{DocumentKind, DocumentUpload, EndeavorSuggestions};

use super::{WizardController, WizardError};

impl WizardController {
    /// Uploads the client's CV and fills background fields from it.
    ///
    /// The upload is tagged `cv` so the backend indexes it for extraction.
    /// Only fields the extractor returned are overwritten; everything else
    /// keeps its manually entered value. A CV that is still being indexed
    /// surfaces as [`WizardError::CvStillUploading`]; retrying re-runs the
    /// whole operation.
    pub async fn autofill_from_cv(&mut self, document: DocumentUpload) -> Result<(), WizardError> {
        // Check the step before the network calls so a misplaced autofill
        // fails fast instead of after a round trip.
        self.workflow.background_mut()?;

        let ack = self
            .documents
            .upload(self.workflow.client_id(), DocumentKind::Cv, document)
            .await?;
        tracing::debug!(document_id = %ack.document_id, "CV stored");

        let extraction = self
            .cv_extractor
            .parse_cv(self.workflow.client_id())
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "CV extraction failed");
                WizardError::from(e)
            })?;

        self.workflow.apply_extraction(extraction)?;
        tracing::info!(client_id = %self.workflow.client_id(), "background autofilled from CV");
        Ok(())
    }

    /// Submits the background: validates it, asks the backend for endeavor
    /// and argument suggestions, and advances to the selection step.
    ///
    /// On failure the wizard stays on the background step with every
    /// entered field intact.
    pub async fn submit_background(&mut self) -> Result<(), WizardError> {
        // Validate locally first; no point calling the backend with an
        // incomplete background.
        self.workflow.background().validate_for_submission()?;

        let summary = prompts::background_summary(self.workflow.background());
        let field = self.workflow.background().field.clone();

        let EndeavorSuggestions {
            endeavors,
            national_interest_angles,
        } = self
            .generation
            .suggest_endeavors(&summary, &field)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "endeavor suggestion failed");
                WizardError::SuggestionFailed(e)
            })?;

        self.workflow
            .install_suggestions(endeavors, national_interest_angles)?;

        tracing::info!(
            client_id = %self.workflow.client_id(),
            "background submitted, suggestions installed"
        );
        Ok(())
    }
}
