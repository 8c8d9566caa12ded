//! Cover letter operations: generation, revision, approval.

use crate::domain::petition::{prompts, CoverLetter};
use crate::ports::GenerationRequest;

use super::{WizardController, WizardError};

impl WizardController {
    /// Generates the cover letter from the background and the selected
    /// endeavors and arguments, then advances to review.
    ///
    /// Rejected locally before any backend call when no endeavor is
    /// selected. On backend failure the wizard stays on the selection step
    /// with all selections intact.
    pub async fn generate_cover_letter(&mut self) -> Result<(), WizardError> {
        let prompt = {
            let suggestions = self.workflow.cover_letter_inputs()?;
            prompts::cover_letter(
                self.workflow.background(),
                &suggestions.selected_endeavors(),
                &suggestions.selected_arguments(),
            )
        };

        // The cover letter is not tied to a criterion; only reference
        // letters carry one.
        let request = GenerationRequest::new(*self.workflow.client_id(), prompt);

        let document = self
            .generation
            .generate_document(request)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "cover letter generation failed");
                WizardError::generation("cover letter", e)
            })?;

        let letter = CoverLetter::new(document.text, document.generation_id)?;
        self.workflow.install_cover_letter(letter)?;

        tracing::info!(client_id = %self.workflow.client_id(), "cover letter generated");
        Ok(())
    }

    /// Revises the current draft from free-text feedback. The backend
    /// regenerates the whole document; the returned text replaces the
    /// draft wholesale.
    ///
    /// On failure the existing draft stays untouched.
    pub async fn revise_cover_letter(&mut self, feedback: &str) -> Result<(), WizardError> {
        if feedback.trim().is_empty() {
            return Err(WizardError::Validation(
                crate::domain::foundation::DomainError::validation(
                    "feedback",
                    "Revision feedback cannot be empty",
                ),
            ));
        }

        let prompt = {
            let draft = self.workflow.current_draft()?;
            prompts::revision(feedback, draft.text())
        };

        let request = GenerationRequest::new(*self.workflow.client_id(), prompt);

        let document = self
            .generation
            .generate_document(request)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "cover letter revision failed");
                WizardError::generation("revised cover letter", e)
            })?;

        let letter = CoverLetter::new(document.text, document.generation_id)?;
        self.workflow.replace_cover_letter(letter)?;

        tracing::info!(client_id = %self.workflow.client_id(), "cover letter revised");
        Ok(())
    }

    /// Approves the draft and advances to reference collection. Pure
    /// navigation, no backend call.
    pub fn approve_cover_letter(&mut self) -> Result<(), WizardError> {
        self.workflow.approve_cover_letter()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::adapters::mock::{MockCvExtractor, MockDocumentStore, MockGenerationService};
    use crate::domain::foundation::ClientId;
    use crate::domain::petition::WizardStep;
    use crate::ports::GenerationError;

    use super::super::{WizardController, WizardError};

    async fn controller_at_selection(
        generation: Arc<MockGenerationService>,
    ) -> WizardController {
        let mut ctrl = WizardController::new(
            ClientId::new(),
            "Jane Doe",
            Arc::new(MockDocumentStore::new()),
            Arc::new(MockCvExtractor::new()),
            generation,
        );
        {
            let bg = ctrl.workflow.background_mut().unwrap();
            bg.field = "AI".to_string();
            bg.degree = "PhD".to_string();
            bg.experience_years = Some(10);
            bg.achievements = "Things".to_string();
            bg.current_position = "Lead".to_string();
            bg.research_focus = "Focus".to_string();
        }
        ctrl.submit_background().await.unwrap();
        ctrl
    }

    fn scripted() -> Arc<MockGenerationService> {
        Arc::new(
            MockGenerationService::new()
                .with_suggestions(
                    vec!["E1".to_string(), "E2".to_string()],
                    vec!["A1".to_string(), "A2".to_string()],
                )
                .with_document("Dear Officer, draft one.", "gen-1"),
        )
    }

    #[tokio::test]
    async fn generation_requires_a_selected_endeavor() {
        let generation = scripted();
        let mut ctrl = controller_at_selection(generation.clone()).await;

        let error = ctrl.generate_cover_letter().await.unwrap_err();
        assert!(matches!(error, WizardError::Validation(_)));
        // The backend never saw a document request.
        assert!(generation.document_calls().is_empty());
    }

    #[tokio::test]
    async fn generation_installs_letter_and_advances() {
        let generation = scripted();
        let mut ctrl = controller_at_selection(generation.clone()).await;
        ctrl.toggle_endeavor(0).unwrap();
        ctrl.toggle_argument(1).unwrap();

        ctrl.generate_cover_letter().await.unwrap();

        assert_eq!(ctrl.workflow().step(), WizardStep::CoverLetterReview);
        let letter = ctrl.workflow().cover_letter().unwrap();
        assert_eq!(letter.text(), "Dear Officer, draft one.");
        assert_eq!(letter.generation_id().as_str(), "gen-1");

        let calls = generation.document_calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].criterion.is_none());
        assert!(calls[0].prompt.contains("Jane Doe"));
        assert!(calls[0].prompt.contains("1. E1"));
        assert!(calls[0].prompt.contains("A2"));
        assert!(!calls[0].prompt.contains("E2\n"));
    }

    #[tokio::test]
    async fn generation_failure_preserves_selections_and_step() {
        let generation = Arc::new(
            MockGenerationService::new()
                .with_suggestions(vec!["E1".to_string()], vec!["A1".to_string()])
                .with_document_error(GenerationError::rate_limited(30)),
        );
        let mut ctrl = controller_at_selection(generation).await;
        ctrl.toggle_endeavor(0).unwrap();

        let error = ctrl.generate_cover_letter().await.unwrap_err();
        assert!(matches!(error, WizardError::GenerationFailed { .. }));
        assert_eq!(ctrl.workflow().step(), WizardStep::EndeavorSelection);
        assert!(ctrl.workflow().suggestions().unwrap().is_endeavor_selected(0));
        assert!(ctrl.workflow().cover_letter().is_none());
    }

    #[tokio::test]
    async fn revision_replaces_the_draft_wholesale() {
        let generation = Arc::new(
            MockGenerationService::new()
                .with_suggestions(vec!["E1".to_string()], vec!["A1".to_string()])
                .with_document("Draft one.", "gen-1")
                .with_document("Draft two, revised.", "gen-2"),
        );
        let mut ctrl = controller_at_selection(generation.clone()).await;
        ctrl.toggle_endeavor(0).unwrap();
        ctrl.generate_cover_letter().await.unwrap();

        ctrl.revise_cover_letter("Make it warmer").await.unwrap();

        let letter = ctrl.workflow().cover_letter().unwrap();
        assert_eq!(letter.text(), "Draft two, revised.");
        assert_eq!(letter.generation_id().as_str(), "gen-2");

        let calls = generation.document_calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[1].criterion.is_none());
        assert!(calls[1].prompt.contains("Make it warmer"));
        assert!(calls[1].prompt.contains("Draft one."));
    }

    #[tokio::test]
    async fn revision_rejects_empty_feedback_locally() {
        let generation = scripted();
        let mut ctrl = controller_at_selection(generation.clone()).await;
        ctrl.toggle_endeavor(0).unwrap();
        ctrl.generate_cover_letter().await.unwrap();

        assert!(ctrl.revise_cover_letter("   ").await.is_err());
        assert_eq!(generation.document_calls().len(), 1);
        assert_eq!(ctrl.workflow().cover_letter().unwrap().text(), "Dear Officer, draft one.");
    }

    #[tokio::test]
    async fn revision_failure_keeps_current_draft() {
        let generation = Arc::new(
            MockGenerationService::new()
                .with_suggestions(vec!["E1".to_string()], vec!["A1".to_string()])
                .with_document("Draft one.", "gen-1")
                .with_document_error(GenerationError::network("down")),
        );
        let mut ctrl = controller_at_selection(generation).await;
        ctrl.toggle_endeavor(0).unwrap();
        ctrl.generate_cover_letter().await.unwrap();

        assert!(ctrl.revise_cover_letter("shorter").await.is_err());
        assert_eq!(ctrl.workflow().cover_letter().unwrap().text(), "Draft one.");
        assert_eq!(ctrl.workflow().step(), WizardStep::CoverLetterReview);
    }

    #[tokio::test]
    async fn approval_advances_to_reference_collection() {
        let generation = scripted();
        let mut ctrl = controller_at_selection(generation).await;
        ctrl.toggle_endeavor(0).unwrap();
        ctrl.generate_cover_letter().await.unwrap();

        ctrl.approve_cover_letter().unwrap();
        assert_eq!(ctrl.workflow().step(), WizardStep::ReferenceCollection);
    }
}
