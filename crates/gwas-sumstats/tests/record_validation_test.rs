//! Integration tests for row-level validation.

use gwas_sumstats::fields::{EFFECT_ALLELE_FREQUENCY, P_VALUE, RS_ID};
use gwas_sumstats::{
    Inconsistency, RawRecord, RawValue, RefAlleleState, cross_check, validate_record,
};

/// Helper to build a raw row from column/value pairs.
fn row(pairs: &[(&str, RawValue)]) -> RawRecord {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_mixed_row_normalizes_to_canonical_record() {
    let raw = row(&[
        ("chromosome", RawValue::from("X")),
        ("base_pair_location", RawValue::from("1000")),
        ("effect_allele", RawValue::from("A")),
        ("other_allele", RawValue::from("G")),
        ("beta", RawValue::from("NA")),
        ("p_value", RawValue::from("0.05")),
    ]);

    let record = validate_record(&raw).expect("row should validate");

    assert_eq!(record.chromosome, Some(23));
    assert_eq!(record.base_pair_location, Some(1000));
    assert_eq!(record.effect_allele.as_deref(), Some("A"));
    assert_eq!(record.other_allele.as_deref(), Some("G"));
    assert_eq!(record.beta, None);
    assert_eq!(record.p_value, Some(0.05));
}

#[test]
fn test_full_schema_row() {
    let raw = row(&[
        ("chromosome", RawValue::Int(7)),
        ("base_pair_location", RawValue::Int(92383888)),
        ("effect_allele", RawValue::from("C")),
        ("other_allele", RawValue::from("T")),
        ("odds_ratio", RawValue::Float(1.21)),
        ("standard_error", RawValue::Float(0.04)),
        ("effect_allele_frequency", RawValue::Float(0.0)),
        ("p_value", RawValue::Float(1e-8)),
        ("ci_lower", RawValue::Float(1.12)),
        ("ci_upper", RawValue::Float(1.31)),
        ("rs_id", RawValue::from("rs2395029")),
        ("variant_id", RawValue::from("7_92383888_C_T")),
        ("ref_allele", RawValue::from("OA")),
        ("n", RawValue::Int(48192)),
        ("info", RawValue::Float(0.97)),
    ]);

    let record = validate_record(&raw).expect("row should validate");

    assert_eq!(record.odds_ratio, Some(1.21));
    assert_eq!(record.variant_id.as_deref(), Some("7_92383888_C_T"));
    assert_eq!(record.ref_allele, Some(RefAlleleState::OtherAllele));
    assert_eq!(record.n, Some(48192));
    assert!(cross_check(&record).is_empty());
}

// =============================================================================
// Rejection reporting
// =============================================================================

#[test]
fn test_rejection_reports_every_failing_field() {
    let raw = row(&[
        ("chromosome", RawValue::from("chrX")),
        ("base_pair_location", RawValue::from("-4")),
        ("effect_allele", RawValue::from("A")),
        ("rs_id", RawValue::from("ss12345")),
        ("variant_id", RawValue::from("1_100_A")),
    ]);

    let rejection = validate_record(&raw).unwrap_err();
    assert_eq!(
        rejection.fields(),
        vec!["chromosome", "base_pair_location", "rs_id", "variant_id"]
    );
}

#[test]
fn test_rejection_serializes_with_context() {
    let raw = row(&[("p_value", RawValue::Float(1.5))]);

    let rejection = validate_record(&raw).unwrap_err();
    let json = serde_json::to_value(&rejection).unwrap();

    assert_eq!(json["faults"][0]["field"], "p_value");
    assert_eq!(json["faults"][0]["raw"], 1.5);
    let rule = json["faults"][0]["rule"].as_str().unwrap();
    assert!(rule.contains("0 <= v <= 1"), "rule was: {rule}");
    assert!(json["detected_at"].is_string());
}

#[test]
fn test_record_round_trips_through_json() {
    let raw = row(&[
        ("chromosome", RawValue::from("MT")),
        ("p_value", RawValue::from("0.5")),
        ("ref_allele", RawValue::from("EA")),
    ]);

    let record = validate_record(&raw).unwrap();
    let json = serde_json::to_string(&record).unwrap();
    let back: gwas_sumstats::SumstatRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, back);
}

// =============================================================================
// Field-level entry points
// =============================================================================

#[test]
fn test_p_value_boundaries_at_field_level() {
    assert_eq!(P_VALUE.validate(RawValue::Float(0.0)), Ok(Some(0.0)));
    assert_eq!(P_VALUE.validate(RawValue::Float(1.0)), Ok(Some(1.0)));
    assert!(P_VALUE.validate(RawValue::Float(-0.0001)).is_err());
    assert!(P_VALUE.validate(RawValue::Float(1.0001)).is_err());
}

#[test]
fn test_effect_allele_frequency_degenerate_bound_is_preserved() {
    // The declared interval pins the frequency to exactly zero; any real
    // frequency is rejected. Kept as declared so a future widening is a
    // visible change, not a silent one.
    assert_eq!(
        EFFECT_ALLELE_FREQUENCY.validate(RawValue::Float(0.0)),
        Ok(Some(0.0))
    );
    assert!(EFFECT_ALLELE_FREQUENCY.validate(RawValue::Float(0.25)).is_err());
    assert!(EFFECT_ALLELE_FREQUENCY.validate(RawValue::Float(1.0)).is_err());
}

#[test]
fn test_rs_id_shape() {
    assert!(RS_ID.validate("rs7412").is_ok());
    assert!(RS_ID.validate("rs").is_err());
    assert!(RS_ID.validate("RS7412").is_err());
}

// =============================================================================
// Cross-field checks on validated records
// =============================================================================

#[test]
fn test_cross_check_flags_disagreeing_p_representations() {
    let raw = row(&[
        ("p_value", RawValue::Float(0.05)),
        ("neg_log10_p_value", RawValue::Float(2.0)),
    ]);

    let record = validate_record(&raw).expect("both fields are individually valid");
    let findings = cross_check(&record);
    assert!(matches!(
        findings.as_slice(),
        [Inconsistency::PValueMismatch { .. }]
    ));
}

#[test]
fn test_cross_check_accepts_matching_p_representations() {
    let raw = row(&[
        ("p_value", RawValue::Float(0.05)),
        ("neg_log10_p_value", RawValue::Float(1.301_029_995_663_981_2)),
    ]);

    let record = validate_record(&raw).unwrap();
    assert!(cross_check(&record).is_empty());
}

#[test]
fn test_cross_check_flags_reversed_interval() {
    let raw = row(&[
        ("ci_lower", RawValue::Float(1.9)),
        ("ci_upper", RawValue::Float(1.1)),
    ]);

    let record = validate_record(&raw).unwrap();
    assert_eq!(
        cross_check(&record),
        vec![Inconsistency::ConfidenceIntervalReversed {
            ci_lower: 1.9,
            ci_upper: 1.1,
        }]
    );
}
