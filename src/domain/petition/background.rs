//! Professional background record.
//!
//! Owned by the workflow and filled either manually or from CV extraction.
//! Extraction results are authoritative: every field the extractor returns
//! overwrites the current value, while omitted fields keep whatever was
//! already entered.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

/// Structured professional background of the petitioner.
///
/// # Invariants
///
/// - Freely editable while the wizard is on the Background step
/// - `validate_for_submission` must pass before endeavor suggestion
/// - `publications_count` and `awards` are optional even at submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalBackground {
    /// Petitioner's full name.
    pub full_name: String,
    /// Field or industry, e.g. "Artificial Intelligence".
    pub field: String,
    /// Highest degree, e.g. "PhD in Computer Science".
    pub degree: String,
    /// Years of professional experience.
    pub experience_years: Option<u32>,
    /// Key achievements, breakthroughs, patents.
    pub achievements: String,
    /// Number of publications, if any.
    pub publications_count: Option<u32>,
    /// Awards, honors, fellowships.
    pub awards: String,
    /// Current position, e.g. "Senior Research Scientist".
    pub current_position: String,
    /// Research areas and specializations.
    pub research_focus: String,
}

impl ProfessionalBackground {
    /// Creates a blank record seeded with the client's on-file name.
    pub fn for_client(on_file_name: impl Into<String>) -> Self {
        Self {
            full_name: on_file_name.into(),
            ..Self::default()
        }
    }

    /// Validates the fields required before endeavor suggestion.
    ///
    /// Mirrors the intake form: everything except publications count and
    /// awards is required.
    pub fn validate_for_submission(&self) -> Result<(), DomainError> {
        Self::require("full_name", &self.full_name)?;
        Self::require("field", &self.field)?;
        Self::require("degree", &self.degree)?;
        if self.experience_years.is_none() {
            return Err(DomainError::validation(
                "experience_years",
                "Years of experience is required",
            ));
        }
        Self::require("achievements", &self.achievements)?;
        Self::require("current_position", &self.current_position)?;
        Self::require("research_focus", &self.research_focus)?;
        Ok(())
    }

    /// Applies CV extraction output over this record.
    ///
    /// Every extracted field overwrites the current value unconditionally;
    /// absent fields are untouched. A missing extracted name falls back to
    /// the client's on-file name.
    pub fn apply_extraction(&mut self, extraction: BackgroundExtraction, on_file_name: &str) {
        self.full_name = extraction
            .full_name
            .unwrap_or_else(|| on_file_name.to_string());
        if let Some(field) = extraction.field {
            self.field = field;
        }
        if let Some(degree) = extraction.degree {
            self.degree = degree;
        }
        if let Some(years) = extraction.experience_years {
            self.experience_years = Some(years);
        }
        if let Some(achievements) = extraction.achievements {
            self.achievements = achievements;
        }
        if let Some(count) = extraction.publications_count {
            self.publications_count = Some(count);
        }
        if let Some(awards) = extraction.awards {
            self.awards = awards;
        }
        if let Some(position) = extraction.current_position {
            self.current_position = position;
        }
        if let Some(focus) = extraction.research_focus {
            self.research_focus = focus;
        }
    }

    fn require(field: &str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            Err(DomainError::validation(
                field,
                format!("Field '{}' is required", field),
            ))
        } else {
            Ok(())
        }
    }
}

/// Partial background fields returned by the CV extraction collaborator.
///
/// Option-per-field: `None` means the extractor said nothing about that
/// field, not that the field is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundExtraction {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    #[serde(default)]
    pub achievements: Option<String>,
    #[serde(default)]
    pub publications_count: Option<u32>,
    #[serde(default)]
    pub awards: Option<String>,
    #[serde(default)]
    pub current_position: Option<String>,
    #[serde(default)]
    pub research_focus: Option<String>,
}
