//! Petition workflow aggregate.
//!
//! One instance per client session, exclusively owned by the wizard
//! controller. All mutations are pure; collaborator IO happens in the
//! application layer, which only commits results here after success. That
//! split is what gives the "no partial mutation on failure" guarantee: a
//! failed call never reaches a mutator.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClientId, DomainError, ErrorCode, Timestamp};

use super::{
    BackgroundExtraction, CoverLetter, ProfessionalBackground, RecommenderField, RecommenderInfo,
    ReferenceLetter, SuggestionSet, WizardStep,
};

/// Number of blank recommender slots a fresh workflow starts with.
pub const DEFAULT_RECOMMENDER_SLOTS: usize = 3;

/// All wizard state for one client's petition run.
///
/// # Invariants
///
/// - `step` advances only through the dedicated install/approve/commit
///   mutators; backward navigation never discards produced data
/// - `suggestions` selections are always valid indices into the options
/// - `cover_letter` is present before `approve_cover_letter`
/// - `reference_letters` is committed atomically, never partially
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetitionWorkflow {
    client_id: ClientId,
    client_name: String,
    step: WizardStep,
    background: ProfessionalBackground,
    suggestions: Option<SuggestionSet>,
    cover_letter: Option<CoverLetter>,
    recommenders: Vec<RecommenderInfo>,
    reference_letters: Vec<ReferenceLetter>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl PetitionWorkflow {
    /// Creates a fresh workflow for a client, seeding the background with
    /// the client's on-file name and three blank recommender slots.
    pub fn new(client_id: ClientId, client_name: impl Into<String>) -> Self {
        let client_name = client_name.into();
        let now = Timestamp::now();
        Self {
            client_id,
            background: ProfessionalBackground::for_client(client_name.clone()),
            client_name,
            step: WizardStep::Background,
            suggestions: None,
            cover_letter: None,
            recommenders: vec![RecommenderInfo::blank(); DEFAULT_RECOMMENDER_SLOTS],
            reference_letters: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// The client this workflow belongs to.
    pub fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// The client's on-file name (the `full_name` fallback).
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// The active wizard step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The professional background record.
    pub fn background(&self) -> &ProfessionalBackground {
        &self.background
    }

    /// Suggestion options and selections, once generated.
    pub fn suggestions(&self) -> Option<&SuggestionSet> {
        self.suggestions.as_ref()
    }

    /// The current cover letter draft, once generated.
    pub fn cover_letter(&self) -> Option<&CoverLetter> {
        self.cover_letter.as_ref()
    }

    /// All recommender records, complete or not.
    pub fn recommenders(&self) -> &[RecommenderInfo] {
        &self.recommenders
    }

    /// Recommender records eligible for letter generation, with their
    /// positions in the full list.
    pub fn eligible_recommenders(&self) -> Vec<(usize, &RecommenderInfo)> {
        self.recommenders
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_complete())
            .collect()
    }

    /// The committed reference letters.
    pub fn reference_letters(&self) -> &[ReferenceLetter] {
        &self.reference_letters
    }

    /// When this workflow was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// When this workflow last changed.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Background step
    // ─────────────────────────────────────────────────────────────────────────

    /// Mutable access to the background for manual form entry.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless on the Background step
    pub fn background_mut(&mut self) -> Result<&mut ProfessionalBackground, DomainError> {
        self.require_step(WizardStep::Background, "edit the background")?;
        self.updated_at = Timestamp::now();
        Ok(&mut self.background)
    }

    /// Overwrites background fields with CV extraction output.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless on the Background step
    pub fn apply_extraction(&mut self, extraction: BackgroundExtraction) -> Result<(), DomainError> {
        self.require_step(WizardStep::Background, "apply CV extraction")?;
        let on_file_name = self.client_name.clone();
        self.background.apply_extraction(extraction, &on_file_name);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Installs freshly generated suggestion options and advances to
    /// EndeavorSelection. Re-submitting the background replaces the whole
    /// set; prior selections do not survive because their indices would
    /// dangle against new options.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless on the Background step
    /// - `ValidationFailed` if the background is not submittable
    pub fn install_suggestions(
        &mut self,
        endeavor_options: Vec<String>,
        argument_options: Vec<String>,
    ) -> Result<(), DomainError> {
        self.require_step(WizardStep::Background, "install suggestions")?;
        self.background.validate_for_submission()?;
        self.suggestions = Some(SuggestionSet::new(endeavor_options, argument_options));
        self.step = WizardStep::EndeavorSelection;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Endeavor selection step
    // ─────────────────────────────────────────────────────────────────────────

    /// Toggles the endeavor option at `index`.
    pub fn toggle_endeavor(&mut self, index: usize) -> Result<bool, DomainError> {
        self.require_step(WizardStep::EndeavorSelection, "toggle an endeavor")?;
        let selected = self.suggestions_mut()?.toggle_endeavor(index)?;
        self.updated_at = Timestamp::now();
        Ok(selected)
    }

    /// Toggles the argument option at `index`.
    pub fn toggle_argument(&mut self, index: usize) -> Result<bool, DomainError> {
        self.require_step(WizardStep::EndeavorSelection, "toggle an argument")?;
        let selected = self.suggestions_mut()?.toggle_argument(index)?;
        self.updated_at = Timestamp::now();
        Ok(selected)
    }

    /// Checks the hard gate for cover-letter generation and returns the
    /// suggestion set on success.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless on the EndeavorSelection step
    /// - `EndeavorSelectionRequired` with no selected endeavor
    pub fn cover_letter_inputs(&self) -> Result<&SuggestionSet, DomainError> {
        self.require_step(WizardStep::EndeavorSelection, "generate the cover letter")?;
        let suggestions = self.suggestions.as_ref().ok_or_else(|| {
            DomainError::new(
                ErrorCode::SuggestionsNotGenerated,
                "Endeavor suggestions have not been generated yet",
            )
        })?;
        if !suggestions.can_generate_cover_letter() {
            return Err(DomainError::new(
                ErrorCode::EndeavorSelectionRequired,
                "Please select at least one endeavor",
            ));
        }
        Ok(suggestions)
    }

    /// Installs the generated cover letter and advances to review.
    pub fn install_cover_letter(&mut self, letter: CoverLetter) -> Result<(), DomainError> {
        // Re-checks the gate so the invariant holds even if the caller
        // skipped `cover_letter_inputs`.
        self.cover_letter_inputs()?;
        self.cover_letter = Some(letter);
        self.step = WizardStep::CoverLetterReview;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cover letter review step
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the current draft, required before revision or approval.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless on the CoverLetterReview step
    /// - `CoverLetterRequired` if no draft exists
    pub fn current_draft(&self) -> Result<&CoverLetter, DomainError> {
        self.require_step(WizardStep::CoverLetterReview, "work with the draft")?;
        self.cover_letter.as_ref().ok_or_else(|| {
            DomainError::new(
                ErrorCode::CoverLetterRequired,
                "No cover letter has been generated yet",
            )
        })
    }

    /// Replaces the draft wholesale after a successful revision. The prior
    /// draft is not retained anywhere.
    pub fn replace_cover_letter(&mut self, letter: CoverLetter) -> Result<(), DomainError> {
        self.current_draft()?;
        self.cover_letter = Some(letter);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Approves the draft and moves to reference collection. Pure
    /// navigation; no collaborator involved.
    pub fn approve_cover_letter(&mut self) -> Result<(), DomainError> {
        self.current_draft()?;
        self.step = WizardStep::ReferenceCollection;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reference collection step
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a blank recommender record, returning its index.
    pub fn add_recommender(&mut self) -> Result<usize, DomainError> {
        self.require_step(WizardStep::ReferenceCollection, "add a recommender")?;
        self.recommenders.push(RecommenderInfo::blank());
        self.updated_at = Timestamp::now();
        Ok(self.recommenders.len() - 1)
    }

    /// Updates one field of the recommender at `index`.
    pub fn update_recommender(
        &mut self,
        index: usize,
        field: RecommenderField,
        value: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.require_step(WizardStep::ReferenceCollection, "edit a recommender")?;
        let len = self.recommenders.len();
        let recommender = self.recommenders.get_mut(index).ok_or_else(|| {
            DomainError::validation(
                "recommender",
                format!("No recommender at index {} (length {})", index, len),
            )
        })?;
        recommender.set(field, value);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Removes the recommender at `index`.
    pub fn remove_recommender(&mut self, index: usize) -> Result<RecommenderInfo, DomainError> {
        self.require_step(WizardStep::ReferenceCollection, "remove a recommender")?;
        if index >= self.recommenders.len() {
            return Err(DomainError::validation(
                "recommender",
                format!(
                    "No recommender at index {} (length {})",
                    index,
                    self.recommenders.len()
                ),
            ));
        }
        self.updated_at = Timestamp::now();
        Ok(self.recommenders.remove(index))
    }

    /// Checks the batch precondition: at least one complete recommender.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` unless on the ReferenceCollection step
    /// - `CompleteRecommenderRequired` with no complete record
    pub fn reference_batch_inputs(&self) -> Result<Vec<&RecommenderInfo>, DomainError> {
        self.require_step(WizardStep::ReferenceCollection, "generate reference letters")?;
        let eligible: Vec<&RecommenderInfo> = self
            .recommenders
            .iter()
            .filter(|r| r.is_complete())
            .collect();
        if eligible.is_empty() {
            return Err(DomainError::new(
                ErrorCode::CompleteRecommenderRequired,
                "Please fill in at least one reference with complete details",
            ));
        }
        Ok(eligible)
    }

    /// Commits a full batch of reference letters and completes the wizard.
    /// All-or-nothing: the application layer calls this only after every
    /// letter in the batch succeeded.
    pub fn commit_reference_letters(
        &mut self,
        letters: Vec<ReferenceLetter>,
    ) -> Result<(), DomainError> {
        self.reference_batch_inputs()?;
        if letters.is_empty() {
            return Err(DomainError::new(
                ErrorCode::CompleteRecommenderRequired,
                "Reference letter batch cannot be empty",
            ));
        }
        self.reference_letters = letters;
        self.step = WizardStep::Complete;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation and lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Steps back to the immediate predecessor. Pure navigation: nothing
    /// already produced is discarded, and unlike the mutators it does not
    /// refresh `updated_at` — the petition content is unchanged.
    pub fn go_back(&mut self) -> Result<WizardStep, DomainError> {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                Ok(previous)
            }
            None => Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                "Already on the first step",
            )),
        }
    }

    /// Starts a new petition for the same client, clearing all derived
    /// state. Only valid from Complete.
    pub fn restart(&mut self) -> Result<(), DomainError> {
        self.require_step(WizardStep::Complete, "restart the wizard")?;
        self.step = WizardStep::Background;
        self.background = ProfessionalBackground::for_client(self.client_name.clone());
        self.suggestions = None;
        self.cover_letter = None;
        self.recommenders = Vec::new();
        self.reference_letters = Vec::new();
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn require_step(&self, expected: WizardStep, action: &str) -> Result<(), DomainError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Cannot {} while on the {} step",
                    action,
                    self.step.label()
                ),
            ))
        }
    }

    fn suggestions_mut(&mut self) -> Result<&mut SuggestionSet, DomainError> {
        self.suggestions.as_mut().ok_or_else(|| {
            DomainError::new(
                ErrorCode::SuggestionsNotGenerated,
                "Endeavor suggestions have not been generated yet",
            )
        })
    }
}
