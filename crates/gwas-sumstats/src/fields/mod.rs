//! Declarative field definitions and the generic validation machinery.
//!
//! Every field of the summary-statistics schema is described by a
//! [`FieldDef`]: the primitive kind it resolves to, the normalizers that run
//! first, and the constraints checked after. The definitions themselves are
//! `static` descriptors, freely shareable across threads.

mod constraint;
mod definitions;
mod descriptor;

pub use constraint::Constraint;
pub use definitions::{
    BASE_PAIR_LOCATION, BETA, CHROMOSOME, CI_LOWER, CI_UPPER, EFFECT_ALLELE,
    EFFECT_ALLELE_FREQUENCY, HAZARD_RATIO, INFO, N, NEG_LOG10_P_VALUE, ODDS_RATIO, OTHER_ALLELE,
    P_VALUE, REF_ALLELE, RS_ID, RS_ID_PATTERN, STANDARD_ERROR,
};
pub use descriptor::{Canonical, FieldDef, Normalizer};
