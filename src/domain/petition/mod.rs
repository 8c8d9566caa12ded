//! Petition domain - the guided EB-2 NIW petition workflow.
//!
//! # Module Organization
//!
//! - `background` - Professional background record and CV extraction merge
//! - `step` - Wizard step state machine
//! - `suggestions` - AI-suggested endeavor/argument options and selections
//! - `cover_letter` - Drafted cover letter value object
//! - `reference` - Recommender records and generated reference letters
//! - `prompts` - Deterministic prompt assembly for the generation service
//! - `workflow` - The workflow aggregate owning all of the above

mod background;
mod cover_letter;
pub mod prompts;
mod reference;
mod step;
mod suggestions;
mod visa_type;
mod workflow;

pub use background::{BackgroundExtraction, ProfessionalBackground};
pub use cover_letter::CoverLetter;
pub use reference::{RecommenderField, RecommenderInfo, ReferenceLetter};
pub use step::WizardStep;
pub use suggestions::{SelectionAdvice, SuggestionSet, ADVISED_ARGUMENTS, ADVISED_ENDEAVORS};
pub use visa_type::VisaType;
pub use workflow::PetitionWorkflow;
