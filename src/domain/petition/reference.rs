//! Recommender records and generated reference letters.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::GenerationId;

/// Details about one recommender, entered by the caseworker.
///
/// A record is *complete* (eligible for letter generation) once name,
/// position, and institution are all non-empty; relationship and focus
/// enrich the prompt but are not required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommenderInfo {
    /// Recommender's name.
    pub name: String,
    /// Position or title, e.g. "Professor of Computer Science".
    pub position: String,
    /// Institution, e.g. "MIT".
    pub institution: String,
    /// Relationship to the petitioner, e.g. "PhD advisor".
    pub relationship: String,
    /// Focus area for the letter, e.g. "Research collaboration".
    pub focus: String,
}

impl RecommenderInfo {
    /// Creates a blank record for form entry.
    pub fn blank() -> Self {
        Self::default()
    }

    /// True once the record qualifies for letter generation.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.position.trim().is_empty()
            && !self.institution.trim().is_empty()
    }

    /// Sets one field by name, for form-style updates.
    pub fn set(&mut self, field: RecommenderField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RecommenderField::Name => self.name = value,
            RecommenderField::Position => self.position = value,
            RecommenderField::Institution => self.institution = value,
            RecommenderField::Relationship => self.relationship = value,
            RecommenderField::Focus => self.focus = value,
        }
    }
}

/// Editable fields of a recommender record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommenderField {
    Name,
    Position,
    Institution,
    Relationship,
    Focus,
}

/// A generated reference letter, one per complete recommender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLetter {
    /// Opaque generation reference id.
    pub generation_id: GenerationId,
    /// Name of the recommender the letter speaks for.
    pub recommender_name: String,
    /// Full letter text.
    pub text: String,
}
