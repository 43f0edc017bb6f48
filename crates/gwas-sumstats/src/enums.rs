//! Closed enumerations used by the field model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which allele column holds the reference allele.
///
/// Serialized with the two-letter wire tags used by the published tabular
/// schema, never as a bare string type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefAlleleState {
    /// The effect allele is the reference allele.
    #[serde(rename = "EA")]
    EffectAllele,
    /// The other allele is the reference allele.
    #[serde(rename = "OA")]
    OtherAllele,
}

impl RefAlleleState {
    /// The wire tag for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            RefAlleleState::EffectAllele => "EA",
            RefAlleleState::OtherAllele => "OA",
        }
    }

    /// Parse a wire tag. Exact match only.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "EA" => Some(RefAlleleState::EffectAllele),
            "OA" => Some(RefAlleleState::OtherAllele),
            _ => None,
        }
    }
}

impl fmt::Display for RefAlleleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
