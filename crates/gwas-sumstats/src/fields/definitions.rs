//! The per-field declarative table for the GWAS summary-statistics schema.
//!
//! Field names and descriptions follow the published summary-statistics
//! format (<https://www.ebi.ac.uk/gwas/docs/summary-statistics-format>).
//! Each entry binds a primitive kind, the normalizers that run first, and
//! the constraints checked after, in declaration order.

use once_cell::sync::Lazy;
use regex::Regex;

use super::constraint::Constraint;
use super::descriptor::FieldDef;
use crate::enums::RefAlleleState;
use crate::normalize;

/// rsID shape: `rs` followed by one or more digits.
pub const RS_ID_PATTERN: &str = "^rs[0-9]+$";

static RS_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(RS_ID_PATTERN).unwrap());

static RS_ID_CONSTRAINTS: [Constraint; 1] = [Constraint::Pattern {
    pattern: RS_ID_PATTERN,
    regex: &RS_ID_RE,
}];

/// Chromosome, remapped to its integer encoding before the range check.
pub static CHROMOSOME: FieldDef<i64> =
    FieldDef::new("chromosome", "Chromosome where the variant is located")
        .with_normalizer(normalize::chromosome_raw)
        .with_constraints(&[Constraint::Range {
            min: Some(1.0),
            max: Some(26.0),
        }]);

/// 1-based position of the variant in the reference.
pub static BASE_PAIR_LOCATION: FieldDef<i64> = FieldDef::new(
    "base_pair_location",
    "First position of the variant in the reference, counting from 1",
)
.with_constraints(&[Constraint::Positive]);

/// The allele whose association with the trait is measured.
pub static EFFECT_ALLELE: FieldDef<String> =
    FieldDef::new("effect_allele", "The allele associated with the effect")
        .with_constraints(&[Constraint::MinLength(1), Constraint::Alphabet]);

/// The non-effect allele.
pub static OTHER_ALLELE: FieldDef<String> =
    FieldDef::new("other_allele", "The non-effect allele")
        .with_constraints(&[Constraint::MinLength(1), Constraint::Alphabet]);

/// Effect size for numeric traits. Signed, and coercible to absent.
pub static BETA: FieldDef<f64> =
    FieldDef::new("beta", "Effect size of numeric traits").coercing_missing();

/// Effect measured as an odds ratio.
pub static ODDS_RATIO: FieldDef<f64> =
    FieldDef::new("odds_ratio", "Effect measured as odds ratio").with_constraints(&[
        Constraint::Range {
            min: Some(0.0),
            max: None,
        },
    ]);

/// Effect measured as a hazard ratio.
pub static HAZARD_RATIO: FieldDef<f64> =
    FieldDef::new("hazard_ratio", "Effect measured as hazard ratio").with_constraints(&[
        Constraint::Range {
            min: Some(0.0),
            max: None,
        },
    ]);

/// Standard error of the effect. Unconstrained.
pub static STANDARD_ERROR: FieldDef<f64> =
    FieldDef::new("standard_error", "Standard error of the effect");

/// Frequency of the effect allele in the control population.
///
/// TODO: confirm the intended interval (and whether 0/1 are included); as
/// declared, only exactly 0 is accepted.
pub static EFFECT_ALLELE_FREQUENCY: FieldDef<f64> = FieldDef::new(
    "effect_allele_frequency",
    "Frequency of the effect allele in the control population",
)
.with_constraints(&[Constraint::Range {
    min: Some(0.0),
    max: Some(0.0),
}]);

/// P-value of the association statistic.
pub static P_VALUE: FieldDef<f64> =
    FieldDef::new("p_value", "P-value of the association statistic").with_constraints(&[
        Constraint::Range {
            min: Some(0.0),
            max: Some(1.0),
        },
    ]);

/// Negative log10 p-value, the log-transformed twin of `p_value`.
pub static NEG_LOG10_P_VALUE: FieldDef<f64> = FieldDef::new(
    "neg_log10_p_value",
    "Negative log10 p-value of the association statistic",
)
.with_constraints(&[Constraint::Range {
    min: Some(0.0),
    max: None,
}]);

/// Reference SNP identifier.
pub static RS_ID: FieldDef<String> = FieldDef::new("rs_id", "The rsID of the variant")
    .with_constraints(&RS_ID_CONSTRAINTS);

/// Imputation information metric.
pub static INFO: FieldDef<f64> = FieldDef::new("info", "Imputation information metric")
    .with_constraints(&[Constraint::Range {
        min: Some(0.0),
        max: Some(1.0),
    }]);

/// Upper confidence bound for the odds ratio.
pub static CI_UPPER: FieldDef<f64> = FieldDef::new(
    "ci_upper",
    "Upper confidence interval for the odds ratio",
)
.with_constraints(&[Constraint::Range {
    min: Some(0.0),
    max: None,
}]);

/// Lower confidence bound for the odds ratio.
pub static CI_LOWER: FieldDef<f64> = FieldDef::new(
    "ci_lower",
    "Lower confidence interval for the odds ratio",
)
.with_constraints(&[Constraint::Range {
    min: Some(0.0),
    max: None,
}]);

/// Which allele column holds the reference allele. Coercible to absent.
pub static REF_ALLELE: FieldDef<RefAlleleState> = FieldDef::new(
    "ref_allele",
    "States which of the alleles is the reference allele",
)
.coercing_missing();

/// Sample size per variant.
pub static N: FieldDef<i64> =
    FieldDef::new("n", "Sample size per variant").with_constraints(&[Constraint::Positive]);
