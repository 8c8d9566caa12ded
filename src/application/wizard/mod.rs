//! Wizard orchestration.
//!
//! [`WizardController`] drives one client's petition workflow, coordinating
//! the domain aggregate with the document, CV extraction, and generation
//! ports. Operations are grouped by wizard step:
//!
//! - `background` - CV autofill and background submission
//! - `cover_letter` - generation, revision, approval
//! - `references` - the all-or-nothing reference letter batch

mod background;
mod controller;
mod cover_letter;
mod errors;
mod references;

pub use controller::WizardController;
pub use errors::WizardError;
