//! Application layer - wizard orchestration.
//!
//! This layer coordinates domain operations with the backend ports. The
//! domain stays pure; every network call lives here or in the adapters.

pub mod wizard;

pub use wizard::{WizardController, WizardError};
