//! End-to-end wizard flow tests against mock backend adapters.
//!
//! These walk the full petition workflow the way a client session would:
//! background entry (with CV autofill), endeavor selection, cover letter
//! review and revision, reference collection, completion, and restart.

use std::sync::Arc;

use petition_builder::adapters::mock::{
    MockCvExtractor, MockDocumentStore, MockGenerationService,
};
use petition_builder::application::{WizardController, WizardError};
use petition_builder::domain::foundation::ClientId;
use petition_builder::domain::petition::{
    BackgroundExtraction, RecommenderField, WizardStep,
};
use petition_builder::ports::{CvExtractionError, DocumentKind, DocumentUpload, GenerationError};

fn controller(
    cv: Arc<MockCvExtractor>,
    documents: Arc<MockDocumentStore>,
    generation: Arc<MockGenerationService>,
) -> WizardController {
    WizardController::new(ClientId::new(), "Jane Doe", documents, cv, generation)
}

fn full_script() -> MockGenerationService {
    MockGenerationService::new()
        .with_suggestions(
            vec![
                "Advance interpretable medical AI".to_string(),
                "Scale clinical decision support".to_string(),
                "Open benchmark infrastructure".to_string(),
            ],
            vec![
                "Improves healthcare outcomes nationwide".to_string(),
                "Strengthens the research workforce".to_string(),
                "Reduces care costs at scale".to_string(),
            ],
        )
        .with_document("Dear USCIS Officer, first draft.", "gen-cover-1")
}

fn cv_extraction() -> BackgroundExtraction {
    BackgroundExtraction {
        field: Some("Artificial Intelligence".to_string()),
        degree: Some("PhD in Computer Science".to_string()),
        experience_years: Some(10),
        achievements: Some("Led a national diagnostics initiative".to_string()),
        publications_count: Some(25),
        current_position: Some("Principal Research Scientist".to_string()),
        research_focus: Some("Interpretable clinical models".to_string()),
        ..Default::default()
    }
}

fn cv_upload() -> DocumentUpload {
    DocumentUpload {
        file_name: "jane-doe-cv.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        bytes: vec![0u8; 64],
    }
}

fn fill_recommender(ctrl: &mut WizardController, index: usize, name: &str) {
    ctrl.update_recommender(index, RecommenderField::Name, name)
        .unwrap();
    ctrl.update_recommender(index, RecommenderField::Position, "Professor")
        .unwrap();
    ctrl.update_recommender(index, RecommenderField::Institution, "Stanford")
        .unwrap();
    ctrl.update_recommender(index, RecommenderField::Relationship, "PhD advisor")
        .unwrap();
}

#[tokio::test]
async fn full_petition_flow_from_cv_to_reference_letters() {
    let cv = Arc::new(MockCvExtractor::new().with_extraction(cv_extraction()));
    let documents = Arc::new(MockDocumentStore::new());
    let generation = Arc::new(
        full_script()
            .with_document("Reference letter for Dr. Smith.", "gen-ref-1")
            .with_document("Reference letter for Dr. Jones.", "gen-ref-2"),
    );
    let mut ctrl = controller(cv, documents.clone(), generation.clone());

    // Step 1: one action uploads the CV and autofills from it.
    ctrl.autofill_from_cv(cv_upload()).await.unwrap();
    assert_eq!(documents.uploads().len(), 1);
    assert_eq!(documents.uploads()[0].kind, DocumentKind::Cv);
    assert_eq!(ctrl.workflow().background().full_name, "Jane Doe");
    assert_eq!(
        ctrl.workflow().background().field,
        "Artificial Intelligence"
    );

    ctrl.submit_background().await.unwrap();
    assert_eq!(ctrl.workflow().step(), WizardStep::EndeavorSelection);

    // Step 2: select two endeavors and three arguments.
    ctrl.toggle_endeavor(0).unwrap();
    ctrl.toggle_endeavor(2).unwrap();
    ctrl.toggle_argument(0).unwrap();
    ctrl.toggle_argument(1).unwrap();
    ctrl.toggle_argument(2).unwrap();

    // Step 3: generate and approve the cover letter.
    ctrl.generate_cover_letter().await.unwrap();
    assert_eq!(ctrl.workflow().step(), WizardStep::CoverLetterReview);
    assert_eq!(
        ctrl.workflow().cover_letter().unwrap().text(),
        "Dear USCIS Officer, first draft."
    );
    ctrl.approve_cover_letter().unwrap();

    // Step 4: two complete recommenders, one incomplete slot.
    fill_recommender(&mut ctrl, 0, "Dr. Smith");
    fill_recommender(&mut ctrl, 2, "Dr. Jones");

    let count = ctrl.generate_reference_letters().await.unwrap();
    assert_eq!(count, 2);
    assert_eq!(ctrl.workflow().step(), WizardStep::Complete);

    let letters = ctrl.workflow().reference_letters();
    assert_eq!(letters[0].recommender_name, "Dr. Smith");
    assert_eq!(letters[1].recommender_name, "Dr. Jones");

    // The backend saw: cover letter, then a letter per eligible recommender
    // numbered over the eligible subset.
    let calls = generation.document_calls();
    assert_eq!(calls.len(), 3);
    assert!(calls[0].criterion.is_none());
    assert_eq!(calls[1].criterion.as_deref(), Some("Reference Letter 1"));
    assert_eq!(calls[2].criterion.as_deref(), Some("Reference Letter 2"));
}

#[tokio::test]
async fn manual_entry_flow_with_revision() {
    let generation = Arc::new(full_script().with_document("Second draft, tighter.", "gen-cover-2"));
    let mut ctrl = controller(
        Arc::new(MockCvExtractor::new()),
        Arc::new(MockDocumentStore::new()),
        generation.clone(),
    );

    {
        let bg = ctrl.background_mut().unwrap();
        bg.field = "Materials Science".to_string();
        bg.degree = "PhD".to_string();
        bg.experience_years = Some(8);
        bg.achievements = "Patented a battery electrolyte".to_string();
        bg.current_position = "Senior Scientist".to_string();
        bg.research_focus = "Solid-state batteries".to_string();
    }
    ctrl.submit_background().await.unwrap();
    ctrl.toggle_endeavor(1).unwrap();
    ctrl.generate_cover_letter().await.unwrap();

    ctrl.revise_cover_letter("Emphasize the patents").await.unwrap();
    let letter = ctrl.workflow().cover_letter().unwrap();
    assert_eq!(letter.text(), "Second draft, tighter.");
    assert_eq!(letter.generation_id().as_str(), "gen-cover-2");

    // The revision prompt carried the feedback and the prior draft.
    let calls = generation.document_calls();
    assert!(calls[1].prompt.contains("Emphasize the patents"));
    assert!(calls[1].prompt.contains("first draft"));
}

#[tokio::test]
async fn cv_not_indexed_yet_is_a_soft_failure() {
    let cv = Arc::new(MockCvExtractor::new().with_error(CvExtractionError::NotFound));
    let mut ctrl = controller(
        cv,
        Arc::new(MockDocumentStore::new()),
        Arc::new(full_script()),
    );

    let error = ctrl.autofill_from_cv(cv_upload()).await.unwrap_err();
    assert!(matches!(error, WizardError::CvStillUploading));
    assert_eq!(
        error.to_string(),
        "CV is still being uploaded. Please try again in a moment."
    );
    // Manual entry still works afterwards.
    assert!(ctrl.background_mut().is_ok());
}

#[tokio::test]
async fn extraction_failure_leaves_entered_fields_untouched() {
    let cv = Arc::new(
        MockCvExtractor::new().with_error(CvExtractionError::Parse("unreadable PDF".to_string())),
    );
    let mut ctrl = controller(
        cv,
        Arc::new(MockDocumentStore::new()),
        Arc::new(full_script()),
    );
    {
        let bg = ctrl.background_mut().unwrap();
        bg.field = "Materials Science".to_string();
        bg.degree = "PhD".to_string();
    }

    let error = ctrl.autofill_from_cv(cv_upload()).await.unwrap_err();
    assert!(matches!(error, WizardError::CvExtractionFailed(_)));
    assert_eq!(
        error.to_string(),
        "Failed to parse CV. Please fill in the fields manually."
    );

    // Nothing already typed was overwritten, and the wizard can continue.
    assert_eq!(ctrl.workflow().step(), WizardStep::Background);
    assert_eq!(ctrl.workflow().background().field, "Materials Science");
    assert_eq!(ctrl.workflow().background().degree, "PhD");
}

#[tokio::test]
async fn back_navigation_preserves_everything_already_produced() {
    let generation = Arc::new(full_script());
    let mut ctrl = controller(
        Arc::new(MockCvExtractor::new().with_extraction(cv_extraction())),
        Arc::new(MockDocumentStore::new()),
        generation,
    );
    ctrl.autofill_from_cv(cv_upload()).await.unwrap();
    ctrl.submit_background().await.unwrap();
    ctrl.toggle_endeavor(0).unwrap();
    ctrl.generate_cover_letter().await.unwrap();

    ctrl.go_back().unwrap();
    ctrl.go_back().unwrap();
    assert_eq!(ctrl.workflow().step(), WizardStep::Background);

    // Suggestions, selections, and the draft all survived.
    let suggestions = ctrl.workflow().suggestions().unwrap();
    assert!(suggestions.is_endeavor_selected(0));
    assert!(ctrl.workflow().cover_letter().is_some());
    assert_eq!(
        ctrl.workflow().background().field,
        "Artificial Intelligence"
    );
}

#[tokio::test]
async fn mid_batch_failure_leaves_no_partial_letters() {
    let generation = Arc::new(
        full_script()
            .with_document("Reference letter for Dr. Smith.", "gen-ref-1")
            .with_document_error(GenerationError::Timeout { timeout_secs: 120 })
            .with_document("Retry letter one.", "gen-ref-1b")
            .with_document("Retry letter two.", "gen-ref-2b"),
    );
    let mut ctrl = controller(
        Arc::new(MockCvExtractor::new().with_extraction(cv_extraction())),
        Arc::new(MockDocumentStore::new()),
        generation.clone(),
    );
    ctrl.autofill_from_cv(cv_upload()).await.unwrap();
    ctrl.submit_background().await.unwrap();
    ctrl.toggle_endeavor(0).unwrap();
    ctrl.generate_cover_letter().await.unwrap();
    ctrl.approve_cover_letter().unwrap();
    fill_recommender(&mut ctrl, 0, "Dr. Smith");
    fill_recommender(&mut ctrl, 1, "Dr. Jones");

    let error = ctrl.generate_reference_letters().await.unwrap_err();
    assert!(matches!(error, WizardError::GenerationFailed { .. }));
    assert!(ctrl.workflow().reference_letters().is_empty());
    assert_eq!(ctrl.workflow().step(), WizardStep::ReferenceCollection);

    // Retrying regenerates the whole batch, including the letter that had
    // already succeeded.
    let count = ctrl.generate_reference_letters().await.unwrap();
    assert_eq!(count, 2);
    let letters = ctrl.workflow().reference_letters();
    assert_eq!(letters[0].text, "Retry letter one.");
    assert_eq!(letters[1].text, "Retry letter two.");
}

#[tokio::test]
async fn restart_begins_a_clean_petition_for_the_same_client() {
    let generation = Arc::new(
        full_script().with_document("Reference letter for Dr. Smith.", "gen-ref-1"),
    );
    let mut ctrl = controller(
        Arc::new(MockCvExtractor::new().with_extraction(cv_extraction())),
        Arc::new(MockDocumentStore::new()),
        generation,
    );
    ctrl.autofill_from_cv(cv_upload()).await.unwrap();
    ctrl.submit_background().await.unwrap();
    ctrl.toggle_endeavor(0).unwrap();
    ctrl.generate_cover_letter().await.unwrap();
    ctrl.approve_cover_letter().unwrap();
    fill_recommender(&mut ctrl, 0, "Dr. Smith");
    ctrl.generate_reference_letters().await.unwrap();

    let client_id = *ctrl.workflow().client_id();
    ctrl.restart().unwrap();

    assert_eq!(ctrl.workflow().step(), WizardStep::Background);
    assert_eq!(ctrl.workflow().client_id(), &client_id);
    assert_eq!(ctrl.workflow().background().full_name, "Jane Doe");
    assert!(ctrl.workflow().background().field.is_empty());
    assert!(ctrl.workflow().suggestions().is_none());
    assert!(ctrl.workflow().cover_letter().is_none());
    assert!(ctrl.workflow().reference_letters().is_empty());
}
