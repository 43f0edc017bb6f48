//! Composite variant identifier validation.

use crate::error::{FieldError, ValidationError};
use crate::fields::{BASE_PAIR_LOCATION, CHROMOSOME};
use crate::normalize::check_sequence;

/// Validate a `<chromosome>_<position>_<ref_allele>_<alt_allele>` identifier.
///
/// The string is split on the first three `_` delimiters; a fourth
/// underscore, if present, stays inside the final part. Anything other than
/// exactly four parts is a malformed identifier. Part one must pass full
/// chromosome validation (symbolic names included), part two full
/// base-pair-location validation, and both allele parts the alphabet check.
/// A sub-failure propagates tagged with the positional part that failed.
///
/// On success the original string is returned unchanged; callers needing
/// the parts re-split it.
pub fn validate_variant_id(variant_id: &str) -> Result<&str, FieldError> {
    let parts: Vec<&str> = variant_id.splitn(4, '_').collect();
    if parts.len() != 4 {
        return Err(FieldError::new(
            "variant_id",
            ValidationError::MalformedIdentifier {
                raw: variant_id.to_string(),
                delimiters: parts.len() - 1,
            },
        ));
    }

    CHROMOSOME
        .validate(parts[0])
        .map_err(|e| in_part("chromosome", e.source))?;
    BASE_PAIR_LOCATION
        .validate(parts[1])
        .map_err(|e| in_part("base_pair_location", e.source))?;
    check_sequence(parts[2]).map_err(|e| in_part("reference_allele", e))?;
    check_sequence(parts[3]).map_err(|e| in_part("alternate_allele", e))?;

    Ok(variant_id)
}

fn in_part(part: &'static str, source: ValidationError) -> FieldError {
    FieldError::new(
        "variant_id",
        ValidationError::IdentifierPart {
            part,
            source: Box::new(source),
        },
    )
}
