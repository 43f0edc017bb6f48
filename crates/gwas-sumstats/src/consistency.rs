//! Advisory cross-field consistency checks.
//!
//! These relationships are not enforced during field validation; a record
//! that trips one is still structurally valid. Callers opt in per record
//! and decide what a finding means for their ingestion.

use serde::{Deserialize, Serialize};

use crate::record::SumstatRecord;

/// Default relative tolerance when comparing `p_value` against
/// `10^(-neg_log10_p_value)`.
pub const DEFAULT_P_TOLERANCE: f64 = 1e-6;

/// A cross-field relationship that does not hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inconsistency {
    /// Both p-value representations are present and disagree beyond
    /// tolerance.
    PValueMismatch {
        /// The linear p-value as recorded.
        p_value: f64,
        /// The log-transformed p-value as recorded.
        neg_log10_p_value: f64,
        /// The linear p-value the log form implies.
        implied_p_value: f64,
    },
    /// Lower confidence bound above the upper bound.
    ConfidenceIntervalReversed {
        ci_lower: f64,
        ci_upper: f64,
    },
    /// Odds ratio outside its own confidence interval.
    OddsRatioOutsideInterval {
        odds_ratio: f64,
        ci_lower: f64,
        ci_upper: f64,
    },
}

/// Run every cross-field check with the default tolerance.
pub fn cross_check(record: &SumstatRecord) -> Vec<Inconsistency> {
    cross_check_with_tolerance(record, DEFAULT_P_TOLERANCE)
}

/// Run every cross-field check with an explicit relative tolerance for the
/// p-value comparison.
pub fn cross_check_with_tolerance(record: &SumstatRecord, tolerance: f64) -> Vec<Inconsistency> {
    let mut findings = Vec::new();

    if let (Some(p_value), Some(neg_log10_p_value)) = (record.p_value, record.neg_log10_p_value) {
        let implied_p_value = 10f64.powf(-neg_log10_p_value);
        if !within_tolerance(p_value, implied_p_value, tolerance) {
            findings.push(Inconsistency::PValueMismatch {
                p_value,
                neg_log10_p_value,
                implied_p_value,
            });
        }
    }

    if let (Some(ci_lower), Some(ci_upper)) = (record.ci_lower, record.ci_upper) {
        if ci_lower > ci_upper {
            findings.push(Inconsistency::ConfidenceIntervalReversed { ci_lower, ci_upper });
        } else if let Some(odds_ratio) = record.odds_ratio {
            if odds_ratio < ci_lower || odds_ratio > ci_upper {
                findings.push(Inconsistency::OddsRatioOutsideInterval {
                    odds_ratio,
                    ci_lower,
                    ci_upper,
                });
            }
        }
    }

    findings
}

fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(f64::MIN_POSITIVE);
    (a - b).abs() <= tolerance * scale
}
