//! Drafted cover letter value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{GenerationId, ValidationError};

/// A drafted petition cover letter.
///
/// Produced once by the generation collaborator and replaced wholesale on
/// each revision. There is no diffing or merging; a revision is always a
/// complete new document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverLetter {
    text: String,
    generation_id: GenerationId,
}

impl CoverLetter {
    /// Creates a cover letter, rejecting empty text.
    pub fn new(text: impl Into<String>, generation_id: GenerationId) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("cover_letter"));
        }
        Ok(Self {
            text,
            generation_id,
        })
    }

    /// The full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Opaque generation reference id.
    pub fn generation_id(&self) -> &GenerationId {
        &self.generation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen_id(s: &str) -> GenerationId {
        GenerationId::new(s).unwrap()
    }

    #[test]
    fn accepts_non_empty_text() {
        let letter = CoverLetter::new("Dear Officer,", gen_id("msg-1")).unwrap();
        assert_eq!(letter.text(), "Dear Officer,");
        assert_eq!(letter.generation_id().as_str(), "msg-1");
    }

    #[test]
    fn rejects_empty_text() {
        assert!(CoverLetter::new("", gen_id("msg-1")).is_err());
        assert!(CoverLetter::new("   \n", gen_id("msg-1")).is_err());
    }
}
