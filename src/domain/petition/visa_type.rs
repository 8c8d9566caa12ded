//! Visa category labels used on generation requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visa category a petition is filed under.
///
/// The builder currently drives EB-2 NIW only; the label travels on every
/// generation request so the collaborator can pick matching templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisaType {
    #[serde(rename = "EB2NIW")]
    Eb2Niw,
}

impl VisaType {
    /// Wire label for this visa type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eb2Niw => "EB2NIW",
        }
    }
}

impl fmt::Display for VisaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_wire_label() {
        let json = serde_json::to_string(&VisaType::Eb2Niw).unwrap();
        assert_eq!(json, "\"EB2NIW\"");
    }

    #[test]
    fn displays_wire_label() {
        assert_eq!(VisaType::Eb2Niw.to_string(), "EB2NIW");
    }
}
