//! Declarative constraints applied after normalization.

use once_cell::sync::Lazy;
use regex::Regex;

use super::descriptor::Canonical;
use crate::error::ValidationError;
use crate::normalize;

/// A single legal-value constraint.
///
/// Constraints only ever see the canonical value; whichever view they need
/// (numeric or textual) is taken through [`Canonical`], and a constraint
/// that does not apply to the field's kind is a no-op.
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// Inclusive numeric bounds; either side may be open.
    Range {
        /// Lowest accepted value.
        min: Option<f64>,
        /// Highest accepted value.
        max: Option<f64>,
    },
    /// Strictly positive.
    Positive,
    /// Minimum string length.
    MinLength(usize),
    /// Every character in the {A, C, T, G} allele alphabet.
    Alphabet,
    /// Full-string regex match.
    Pattern {
        /// The pattern source, used in error payloads.
        pattern: &'static str,
        /// The compiled pattern.
        regex: &'static Lazy<Regex>,
    },
}

impl Constraint {
    /// Human-readable form used in error payloads.
    pub fn describe(&self) -> String {
        match self {
            Constraint::Range {
                min: Some(min),
                max: Some(max),
            } => format!("{min} <= v <= {max}"),
            Constraint::Range {
                min: Some(min),
                max: None,
            } => format!("v >= {min}"),
            Constraint::Range {
                min: None,
                max: Some(max),
            } => format!("v <= {max}"),
            Constraint::Range {
                min: None,
                max: None,
            } => "unbounded".to_string(),
            Constraint::Positive => "v > 0".to_string(),
            Constraint::MinLength(min) => format!("length >= {min}"),
            Constraint::Alphabet => "characters in {A, C, T, G}".to_string(),
            Constraint::Pattern { pattern, .. } => format!("matches {pattern}"),
        }
    }

    /// Check a canonical value against this constraint.
    pub(crate) fn check<T: Canonical>(&self, value: &T) -> Result<(), ValidationError> {
        match self {
            Constraint::Range { min, max } => {
                let Some(n) = value.as_number() else {
                    return Ok(());
                };
                let below = min.map(|m| n < m).unwrap_or(false);
                let above = max.map(|m| n > m).unwrap_or(false);
                if below || above {
                    return Err(self.out_of_range(value));
                }
                Ok(())
            }
            Constraint::Positive => {
                let Some(n) = value.as_number() else {
                    return Ok(());
                };
                if n <= 0.0 {
                    return Err(self.out_of_range(value));
                }
                Ok(())
            }
            Constraint::MinLength(min) => {
                let Some(s) = value.as_text() else {
                    return Ok(());
                };
                if s.chars().count() < *min {
                    return Err(self.out_of_range(value));
                }
                Ok(())
            }
            Constraint::Alphabet => match value.as_text() {
                Some(s) => normalize::check_sequence(s),
                None => Ok(()),
            },
            Constraint::Pattern { pattern, regex } => {
                let Some(s) = value.as_text() else {
                    return Ok(());
                };
                if regex.is_match(s) {
                    Ok(())
                } else {
                    Err(ValidationError::InvalidPattern {
                        raw: s.to_string(),
                        pattern: (*pattern).to_string(),
                    })
                }
            }
        }
    }

    fn out_of_range<T: Canonical>(&self, value: &T) -> ValidationError {
        ValidationError::InvalidRange {
            raw: value.to_string(),
            constraint: self.describe(),
        }
    }
}
