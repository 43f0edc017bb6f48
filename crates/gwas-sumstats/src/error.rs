//! Error types for the field validation layer.

use std::collections::BTreeSet;

use thiserror::Error;

/// A violated validation rule.
///
/// All variants are raised synchronously, per field, and are not recoverable
/// at this layer; payloads carry enough context for the caller to decide
/// whether to skip the row, collect a report, or abort ingestion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Chromosome token that is neither an integer nor a symbolic name.
    #[error("invalid chromosome '{raw}'")]
    InvalidChromosome {
        /// Original raw input.
        raw: String,
    },

    /// Allele containing characters outside the {A, C, T, G} alphabet.
    #[error("invalid allele '{value}': bad characters {bad:?}")]
    InvalidAllele {
        /// The offending sequence.
        value: String,
        /// Every character found outside the alphabet.
        bad: BTreeSet<char>,
    },

    /// Numeric or length value outside its declared bound.
    #[error("value {raw} outside allowed range ({constraint})")]
    InvalidRange {
        /// The out-of-bound value.
        raw: String,
        /// The bound it violated, rendered.
        constraint: String,
    },

    /// String failing a required shape.
    #[error("'{raw}' does not match pattern {pattern}")]
    InvalidPattern {
        /// The non-matching string.
        raw: String,
        /// The required pattern.
        pattern: String,
    },

    /// Variant identifier with the wrong number of `_` delimiters.
    #[error("malformed identifier '{raw}': expected 3 '_' delimiters, found {delimiters}")]
    MalformedIdentifier {
        /// The identifier as supplied.
        raw: String,
        /// How many delimiters the split actually found.
        delimiters: usize,
    },

    /// Raw value that cannot be interpreted as the field's primitive kind.
    #[error("cannot interpret '{raw}' as {expected}")]
    TypeMismatch {
        /// The uninterpretable raw value.
        raw: String,
        /// The primitive kind the field requires.
        expected: &'static str,
    },

    /// Failure of one positional part of a composite identifier.
    #[error("part '{part}' is invalid: {source}")]
    IdentifierPart {
        /// Which part failed.
        part: &'static str,
        /// The underlying rule violation.
        #[source]
        source: Box<ValidationError>,
    },
}

/// A rule violation bound to the field it occurred on.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {source}")]
pub struct FieldError {
    /// Field name from the published tabular schema.
    pub field: &'static str,
    /// The violated rule.
    #[source]
    pub source: ValidationError,
}

impl FieldError {
    /// Bind a rule violation to a field.
    pub fn new(field: &'static str, source: ValidationError) -> Self {
        Self { field, source }
    }
}

/// Result type alias for field validation.
pub type Result<T> = std::result::Result<T, FieldError>;
