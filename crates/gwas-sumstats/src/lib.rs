//! Validated field model for GWAS summary-statistics records.
//!
//! One row per variant association test, following the published
//! summary-statistics tabular schema. This crate owns only the per-field
//! and per-record validation contract: semantic types with parsing rules,
//! legal-value constraints, and cross-field consistency checks. File
//! parsing, column mapping, and output writing belong to the caller, which
//! feeds raw row dictionaries in and receives either a canonical record or
//! a structured rejection.
//!
//! # Core principles
//!
//! - **Validate once**: a value either exists in canonical form or does not
//!   exist; nothing is mutated after construction.
//! - **No side effects**: every normalizer and validator is a pure
//!   function, freely callable concurrently. The core never logs.
//! - **Errors carry context**: field name, raw input, and the violated
//!   rule travel with every failure.
//!
//! # Example
//!
//! ```
//! use gwas_sumstats::{RawRecord, RawValue, validate_record};
//!
//! let mut row = RawRecord::new();
//! row.insert("chromosome".to_string(), RawValue::from("X"));
//! row.insert("base_pair_location".to_string(), RawValue::from("1000"));
//! row.insert("beta".to_string(), RawValue::from("NA"));
//! row.insert("p_value".to_string(), RawValue::from("0.05"));
//!
//! let record = validate_record(&row).unwrap();
//! assert_eq!(record.chromosome, Some(23));
//! assert_eq!(record.base_pair_location, Some(1000));
//! assert_eq!(record.beta, None);
//! assert_eq!(record.p_value, Some(0.05));
//! ```

pub mod consistency;
pub mod enums;
pub mod error;
pub mod fields;
pub mod normalize;
pub mod raw;
pub mod record;
pub mod variant;

pub use consistency::{Inconsistency, cross_check, cross_check_with_tolerance};
pub use enums::RefAlleleState;
pub use error::{FieldError, Result, ValidationError};
pub use fields::{Canonical, Constraint, FieldDef};
pub use raw::RawValue;
pub use record::{FieldFault, RawRecord, Rejection, SumstatRecord, validate_record};
pub use variant::validate_variant_id;
