//! Wizard step state machine.
//!
//! Steps flow strictly forward through successful collaborator calls and
//! freely backward through pure navigation. `Complete` is terminal but
//! re-enterable via restart.

use serde::{Deserialize, Serialize};

/// The active stage of the petition-builder wizard.
///
/// Forward order:
/// `Background → EndeavorSelection → CoverLetterReview → ReferenceCollection → Complete`
///
/// Forward transitions happen only as the result of a successful
/// collaborator call (except `CoverLetterReview → ReferenceCollection`,
/// which is pure approval). Backward transitions are always side-effect
/// free and never discard already-produced data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Collecting the structured professional background.
    Background,

    /// Choosing among AI-suggested endeavors and national-interest angles.
    EndeavorSelection,

    /// Reviewing and revising the drafted cover letter.
    CoverLetterReview,

    /// Entering recommender details for reference letters.
    ReferenceCollection,

    /// All documents generated; petition package assembled.
    Complete,
}

impl WizardStep {
    /// One-based step number, matching the five-stage progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            Self::Background => 1,
            Self::EndeavorSelection => 2,
            Self::CoverLetterReview => 3,
            Self::ReferenceCollection => 4,
            Self::Complete => 5,
        }
    }

    /// Short label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::EndeavorSelection => "Endeavors",
            Self::CoverLetterReview => "Cover Letter",
            Self::ReferenceCollection => "References",
            Self::Complete => "Complete",
        }
    }

    /// The step reached by advancing forward, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Background => Some(Self::EndeavorSelection),
            Self::EndeavorSelection => Some(Self::CoverLetterReview),
            Self::CoverLetterReview => Some(Self::ReferenceCollection),
            Self::ReferenceCollection => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    /// The immediate predecessor for backward navigation, if any.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Background => None,
            Self::EndeavorSelection => Some(Self::Background),
            Self::CoverLetterReview => Some(Self::EndeavorSelection),
            Self::ReferenceCollection => Some(Self::CoverLetterReview),
            Self::Complete => Some(Self::ReferenceCollection),
        }
    }

    /// True for the terminal step.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Background
    }
}
