//! Wizard controller - orchestrates the petition workflow against the
//! backend ports.
//!
//! The controller owns the [`PetitionWorkflow`] exclusively and takes
//! `&mut self` on every operation that can mutate it, so collaborator calls
//! for one workflow are naturally serialized. Operations follow one shape:
//! check preconditions on the aggregate, call the port, and only commit the
//! result to the aggregate after the call succeeded.

use std::sync::Arc;

use crate::domain::foundation::ClientId;
use crate::domain::petition::{
    PetitionWorkflow, ProfessionalBackground, RecommenderField, WizardStep,
};
use crate::ports::{
    CvExtractor, DocumentKind, DocumentStore, DocumentUpload, GenerationService, UploadAck,
};

use super::WizardError;

/// Drives one client's petition wizard.
pub struct WizardController {
    pub(super) workflow: PetitionWorkflow,
    pub(super) documents: Arc<dyn DocumentStore>,
    pub(super) cv_extractor: Arc<dyn CvExtractor>,
    pub(super) generation: Arc<dyn GenerationService>,
}

impl WizardController {
    /// Creates a controller with a fresh workflow for the client.
    pub fn new(
        client_id: ClientId,
        client_name: impl Into<String>,
        documents: Arc<dyn DocumentStore>,
        cv_extractor: Arc<dyn CvExtractor>,
        generation: Arc<dyn GenerationService>,
    ) -> Self {
        Self {
            workflow: PetitionWorkflow::new(client_id, client_name),
            documents,
            cv_extractor,
            generation,
        }
    }

    /// Read access to the workflow state.
    pub fn workflow(&self) -> &PetitionWorkflow {
        &self.workflow
    }

    /// Mutable access to the background for manual form entry. Only valid
    /// on the background step.
    pub fn background_mut(&mut self) -> Result<&mut ProfessionalBackground, WizardError> {
        Ok(self.workflow.background_mut()?)
    }

    /// Uploads a supporting document for the client. Valid on any step;
    /// evidence can arrive at any point of the process.
    pub async fn upload_document(
        &self,
        kind: DocumentKind,
        document: DocumentUpload,
    ) -> Result<UploadAck, WizardError> {
        let ack = self
            .documents
            .upload(self.workflow.client_id(), kind, document)
            .await?;
        tracing::debug!(document_id = %ack.document_id, "document stored");
        Ok(ack)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Selection and recommender delegation
    // ─────────────────────────────────────────────────────────────────────────

    /// Toggles the endeavor option at `index`, returning the new state.
    pub fn toggle_endeavor(&mut self, index: usize) -> Result<bool, WizardError> {
        Ok(self.workflow.toggle_endeavor(index)?)
    }

    /// Toggles the argument option at `index`, returning the new state.
    pub fn toggle_argument(&mut self, index: usize) -> Result<bool, WizardError> {
        Ok(self.workflow.toggle_argument(index)?)
    }

    /// Appends a blank recommender record, returning its index.
    pub fn add_recommender(&mut self) -> Result<usize, WizardError> {
        Ok(self.workflow.add_recommender()?)
    }

    /// Updates one field of the recommender at `index`.
    pub fn update_recommender(
        &mut self,
        index: usize,
        field: RecommenderField,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        Ok(self.workflow.update_recommender(index, field, value)?)
    }

    /// Removes the recommender at `index`.
    pub fn remove_recommender(&mut self, index: usize) -> Result<(), WizardError> {
        self.workflow.remove_recommender(index)?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Steps back to the previous wizard step without touching any data.
    pub fn go_back(&mut self) -> Result<WizardStep, WizardError> {
        Ok(self.workflow.go_back()?)
    }

    /// Restarts the wizard for a new petition after completion.
    pub fn restart(&mut self) -> Result<(), WizardError> {
        self.workflow.restart()?;
        tracing::info!(client_id = %self.workflow.client_id(), "wizard restarted");
        Ok(())
    }
}
