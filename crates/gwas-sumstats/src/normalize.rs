//! Normalizers: pure coercions from raw scalars to canonical forms.

use std::collections::BTreeSet;

use crate::error::ValidationError;
use crate::raw::RawValue;

/// Symbolic chromosome names and their integer encodings.
pub const CHROMOSOME_MAP: [(&str, i64); 3] = [("X", 23), ("Y", 24), ("MT", 25)];

/// The allele alphabet. Case-sensitive; ambiguity codes are not accepted.
pub const VALID_ALLELES: [char; 4] = ['A', 'C', 'T', 'G'];

/// Remap a chromosome token to its integer encoding.
///
/// An integer parse of the trimmed token wins; otherwise the symbolic map is
/// consulted with an exact, case-sensitive lookup. The 1..=26 range check
/// belongs to the field layer, not this function, so an out-of-range integer
/// still normalizes here and fails later.
pub fn chromosome_to_integer(raw: &RawValue) -> Result<i64, ValidationError> {
    if let RawValue::Int(n) = raw {
        return Ok(*n);
    }
    let token = raw.to_string();
    if let Ok(n) = token.trim().parse::<i64>() {
        return Ok(n);
    }
    let trimmed = token.trim();
    CHROMOSOME_MAP
        .iter()
        .find(|(name, _)| *name == trimmed)
        .map(|(_, n)| *n)
        .ok_or_else(|| ValidationError::InvalidChromosome { raw: token.clone() })
}

/// Normalizer adapter for field descriptors.
pub(crate) fn chromosome_raw(raw: &RawValue) -> Result<RawValue, ValidationError> {
    chromosome_to_integer(raw).map(RawValue::Int)
}

/// Coerce R-style missing tokens to an explicit absent value.
///
/// Only the exact text tokens `NA` and `#NA` coerce, case-sensitively.
/// Non-string scalars can never equal them and always pass through.
pub fn coerce_na(raw: RawValue) -> RawValue {
    match raw {
        RawValue::Text(ref s) if s == "NA" || s == "#NA" => RawValue::Null,
        other => other,
    }
}

/// Check that every character of a sequence belongs to the allele alphabet.
///
/// Reports the full set of offending characters. The empty string passes;
/// minimum length is a separate constraint.
pub fn check_sequence(value: &str) -> Result<(), ValidationError> {
    let bad: BTreeSet<char> = value
        .chars()
        .filter(|c| !VALID_ALLELES.contains(c))
        .collect();
    if bad.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::InvalidAllele {
            value: value.to_string(),
            bad,
        })
    }
}
