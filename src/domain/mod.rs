//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `petition` - Petition workflow aggregate, wizard steps, suggestion
//!   selection, and deterministic prompt assembly

pub mod foundation;
pub mod petition;
