//! AI-suggested endeavor and argument options with user selections.
//!
//! Option lists are produced once per workflow run and are immutable
//! afterwards; only the selections change, by direct user toggling.
//! Selections are index sets so re-display after back-navigation keeps
//! stable numbering.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::domain::foundation::ValidationError;

/// Advisory selection guidance shown next to the checklists.
/// Deliberately not enforced; only the ≥1 endeavor rule is hard.
pub const ADVISED_ENDEAVORS: RangeInclusive<usize> = 1..=3;
/// Advisory range for national-interest argument selections.
pub const ADVISED_ARGUMENTS: RangeInclusive<usize> = 3..=5;

/// Suggested endeavors/arguments plus the user's current selections.
///
/// # Invariants
///
/// - Option lists never change after construction
/// - Selection indices are always valid indices into the option lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionSet {
    endeavor_options: Vec<String>,
    argument_options: Vec<String>,
    selected_endeavors: BTreeSet<usize>,
    selected_arguments: BTreeSet<usize>,
}

impl SuggestionSet {
    /// Creates a suggestion set from the engine's two option lists.
    ///
    /// The engine guarantees no minimum or maximum cardinality, so empty
    /// lists are accepted as-is.
    pub fn new(endeavor_options: Vec<String>, argument_options: Vec<String>) -> Self {
        Self {
            endeavor_options,
            argument_options,
            selected_endeavors: BTreeSet::new(),
            selected_arguments: BTreeSet::new(),
        }
    }

    /// Returns the endeavor option strings in suggestion order.
    pub fn endeavor_options(&self) -> &[String] {
        &self.endeavor_options
    }

    /// Returns the argument option strings in suggestion order.
    pub fn argument_options(&self) -> &[String] {
        &self.argument_options
    }

    /// Toggles the endeavor at `index`, returning the new selected state.
    pub fn toggle_endeavor(&mut self, index: usize) -> Result<bool, ValidationError> {
        Self::toggle(
            &mut self.selected_endeavors,
            index,
            self.endeavor_options.len(),
            "endeavor_options",
        )
    }

    /// Toggles the argument at `index`, returning the new selected state.
    pub fn toggle_argument(&mut self, index: usize) -> Result<bool, ValidationError> {
        Self::toggle(
            &mut self.selected_arguments,
            index,
            self.argument_options.len(),
            "argument_options",
        )
    }

    /// True if the endeavor at `index` is currently selected.
    pub fn is_endeavor_selected(&self, index: usize) -> bool {
        self.selected_endeavors.contains(&index)
    }

    /// True if the argument at `index` is currently selected.
    pub fn is_argument_selected(&self, index: usize) -> bool {
        self.selected_arguments.contains(&index)
    }

    /// Selected endeavor strings, in suggestion order.
    pub fn selected_endeavors(&self) -> Vec<&str> {
        self.selected_endeavors
            .iter()
            .map(|&i| self.endeavor_options[i].as_str())
            .collect()
    }

    /// Selected argument strings, in suggestion order.
    pub fn selected_arguments(&self) -> Vec<&str> {
        self.selected_arguments
            .iter()
            .map(|&i| self.argument_options[i].as_str())
            .collect()
    }

    /// The one hard gate: at least one endeavor must be selected before
    /// the cover letter may be generated.
    pub fn can_generate_cover_letter(&self) -> bool {
        !self.selected_endeavors.is_empty()
    }

    /// Advisory guidance status for UI display. Never blocks generation.
    pub fn advice(&self) -> SelectionAdvice {
        SelectionAdvice {
            endeavors_selected: self.selected_endeavors.len(),
            arguments_selected: self.selected_arguments.len(),
            endeavors_within_guidance: ADVISED_ENDEAVORS.contains(&self.selected_endeavors.len()),
            arguments_within_guidance: ADVISED_ARGUMENTS.contains(&self.selected_arguments.len()),
        }
    }

    fn toggle(
        selected: &mut BTreeSet<usize>,
        index: usize,
        len: usize,
        field: &str,
    ) -> Result<bool, ValidationError> {
        if index >= len {
            return Err(ValidationError::index_out_of_bounds(field, index, len));
        }
        if selected.remove(&index) {
            Ok(false)
        } else {
            selected.insert(index);
            Ok(true)
        }
    }
}

/// Snapshot of how the current selections compare to the advisory ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionAdvice {
    pub endeavors_selected: usize,
    pub arguments_selected: usize,
    pub endeavors_within_guidance: bool,
    pub arguments_within_guidance: bool,
}
