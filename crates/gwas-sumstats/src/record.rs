//! Row-level assembly: raw dictionaries in, validated records or structured
//! rejections out.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::enums::RefAlleleState;
use crate::error::{FieldError, ValidationError};
use crate::fields::{self, Canonical, FieldDef};
use crate::raw::RawValue;
use crate::variant::validate_variant_id;

/// A raw row keyed by column name, in source order.
pub type RawRecord = IndexMap<String, RawValue>;

/// One fully validated summary-statistics record.
///
/// Every field is optional at the record level; a present value is always
/// canonical and constraint-checked. A column that was never supplied and a
/// value coerced from an `NA` token are both `None`. Records are
/// independent of one another and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SumstatRecord {
    /// Chromosome in integer form (X=23, Y=24, MT=25).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chromosome: Option<i64>,
    /// 1-based position in the reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_pair_location: Option<i64>,
    /// The allele associated with the effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_allele: Option<String>,
    /// The non-effect allele.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_allele: Option<String>,
    /// Effect size of numeric traits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    /// Effect measured as odds ratio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub odds_ratio: Option<f64>,
    /// Effect measured as hazard ratio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazard_ratio: Option<f64>,
    /// Standard error of the effect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_error: Option<f64>,
    /// Frequency of the effect allele in the control population.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_allele_frequency: Option<f64>,
    /// P-value of the association statistic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_value: Option<f64>,
    /// Negative log10 p-value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neg_log10_p_value: Option<f64>,
    /// Reference SNP identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rs_id: Option<String>,
    /// Composite variant identifier, kept in its validated string form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    /// Imputation information metric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<f64>,
    /// Upper confidence bound for the odds ratio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci_upper: Option<f64>,
    /// Lower confidence bound for the odds ratio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci_lower: Option<f64>,
    /// Which allele column holds the reference allele.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_allele: Option<RefAlleleState>,
    /// Sample size per variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<i64>,
}

/// One rejected field: name, raw input, violated rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldFault {
    /// Field the failure occurred on.
    pub field: String,
    /// Raw input exactly as supplied.
    pub raw: RawValue,
    /// The rule that was violated, rendered for the collaborator.
    pub rule: String,
}

/// Structured rejection handed back to the collaborator.
///
/// Carries one fault per failing field. Deciding whether to skip the row,
/// collect an error report, or halt ingestion is the caller's business;
/// this layer never logs and never retries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    /// Every field failure found in the row, in column order.
    pub faults: Vec<FieldFault>,
    /// When the row was rejected.
    pub detected_at: DateTime<Utc>,
}

impl Rejection {
    fn new(faults: Vec<FieldFault>) -> Self {
        Self {
            faults,
            detected_at: Utc::now(),
        }
    }

    /// Names of the failing fields, in column order.
    pub fn fields(&self) -> Vec<&str> {
        self.faults.iter().map(|f| f.field.as_str()).collect()
    }
}

/// Validate one raw row into a canonical record.
///
/// Every failing field is reported; validation never stops at the first
/// fault. Columns outside the summary-statistics schema are ignored, since
/// column-to-field mapping belongs to the caller.
pub fn validate_record(raw: &RawRecord) -> Result<SumstatRecord, Rejection> {
    let mut record = SumstatRecord::default();
    let mut faults = Vec::new();

    for (column, value) in raw {
        match column.as_str() {
            "chromosome" => set(&fields::CHROMOSOME, value, &mut record.chromosome, &mut faults),
            "base_pair_location" => set(
                &fields::BASE_PAIR_LOCATION,
                value,
                &mut record.base_pair_location,
                &mut faults,
            ),
            "effect_allele" => set(
                &fields::EFFECT_ALLELE,
                value,
                &mut record.effect_allele,
                &mut faults,
            ),
            "other_allele" => set(
                &fields::OTHER_ALLELE,
                value,
                &mut record.other_allele,
                &mut faults,
            ),
            "beta" => set(&fields::BETA, value, &mut record.beta, &mut faults),
            "odds_ratio" => set(&fields::ODDS_RATIO, value, &mut record.odds_ratio, &mut faults),
            "hazard_ratio" => set(
                &fields::HAZARD_RATIO,
                value,
                &mut record.hazard_ratio,
                &mut faults,
            ),
            "standard_error" => set(
                &fields::STANDARD_ERROR,
                value,
                &mut record.standard_error,
                &mut faults,
            ),
            "effect_allele_frequency" => set(
                &fields::EFFECT_ALLELE_FREQUENCY,
                value,
                &mut record.effect_allele_frequency,
                &mut faults,
            ),
            "p_value" => set(&fields::P_VALUE, value, &mut record.p_value, &mut faults),
            "neg_log10_p_value" => set(
                &fields::NEG_LOG10_P_VALUE,
                value,
                &mut record.neg_log10_p_value,
                &mut faults,
            ),
            "rs_id" => set(&fields::RS_ID, value, &mut record.rs_id, &mut faults),
            "variant_id" => match value.as_text() {
                Some(id) => match validate_variant_id(id) {
                    Ok(id) => record.variant_id = Some(id.to_string()),
                    Err(e) => faults.push(fault(value, e)),
                },
                None => faults.push(fault(
                    value,
                    FieldError::new(
                        "variant_id",
                        ValidationError::TypeMismatch {
                            raw: value.to_string(),
                            expected: "a string",
                        },
                    ),
                )),
            },
            "info" => set(&fields::INFO, value, &mut record.info, &mut faults),
            "ci_upper" => set(&fields::CI_UPPER, value, &mut record.ci_upper, &mut faults),
            "ci_lower" => set(&fields::CI_LOWER, value, &mut record.ci_lower, &mut faults),
            "ref_allele" => set(&fields::REF_ALLELE, value, &mut record.ref_allele, &mut faults),
            "n" => set(&fields::N, value, &mut record.n, &mut faults),
            _ => {}
        }
    }

    if faults.is_empty() {
        Ok(record)
    } else {
        Err(Rejection::new(faults))
    }
}

fn set<T: Canonical>(
    def: &FieldDef<T>,
    raw: &RawValue,
    slot: &mut Option<T>,
    faults: &mut Vec<FieldFault>,
) {
    match def.validate(raw.clone()) {
        Ok(value) => *slot = value,
        Err(e) => faults.push(fault(raw, e)),
    }
}

fn fault(raw: &RawValue, e: FieldError) -> FieldFault {
    FieldFault {
        field: e.field.to_string(),
        raw: raw.clone(),
        rule: e.source.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, RawValue)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_valid_row_assembles() {
        let raw = row(&[
            ("chromosome", RawValue::from("X")),
            ("base_pair_location", RawValue::from("1000")),
            ("effect_allele", RawValue::from("A")),
            ("other_allele", RawValue::from("G")),
            ("beta", RawValue::from("NA")),
            ("p_value", RawValue::from("0.05")),
        ]);

        let record = validate_record(&raw).unwrap();
        assert_eq!(record.chromosome, Some(23));
        assert_eq!(record.base_pair_location, Some(1000));
        assert_eq!(record.effect_allele.as_deref(), Some("A"));
        assert_eq!(record.other_allele.as_deref(), Some("G"));
        assert_eq!(record.beta, None);
        assert_eq!(record.p_value, Some(0.05));
        assert_eq!(record.rs_id, None);
    }

    #[test]
    fn test_every_fault_is_collected() {
        let raw = row(&[
            ("chromosome", RawValue::from("chr7")),
            ("base_pair_location", RawValue::from("0")),
            ("effect_allele", RawValue::from("acgt")),
            ("p_value", RawValue::from("0.5")),
        ]);

        let rejection = validate_record(&raw).unwrap_err();
        assert_eq!(
            rejection.fields(),
            vec!["chromosome", "base_pair_location", "effect_allele"]
        );
    }

    #[test]
    fn test_fault_carries_raw_and_rule() {
        let raw = row(&[("chromosome", RawValue::from("chr7"))]);

        let rejection = validate_record(&raw).unwrap_err();
        let fault = &rejection.faults[0];
        assert_eq!(fault.field, "chromosome");
        assert_eq!(fault.raw, RawValue::from("chr7"));
        assert!(fault.rule.contains("invalid chromosome"));
    }

    #[test]
    fn test_unmapped_columns_are_ignored() {
        let raw = row(&[
            ("chromosome", RawValue::from("1")),
            ("study_accession", RawValue::from("GCST001")),
        ]);

        let record = validate_record(&raw).unwrap();
        assert_eq!(record.chromosome, Some(1));
    }

    #[test]
    fn test_variant_id_must_be_textual() {
        let raw = row(&[("variant_id", RawValue::Int(7))]);
        let rejection = validate_record(&raw).unwrap_err();
        assert_eq!(rejection.fields(), vec!["variant_id"]);
    }

    #[test]
    fn test_empty_row_is_a_valid_empty_record() {
        let record = validate_record(&RawRecord::new()).unwrap();
        assert_eq!(record, SumstatRecord::default());
    }
}
