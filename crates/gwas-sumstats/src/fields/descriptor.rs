//! Field descriptors: declarative bindings of raw kind, normalizer, and
//! constraints, with one generic validation entry point.

use std::fmt;
use std::marker::PhantomData;

use super::constraint::Constraint;
use crate::enums::RefAlleleState;
use crate::error::{FieldError, ValidationError};
use crate::normalize;
use crate::raw::RawValue;

/// Normalizer signature: raw scalar in, canonical-representation scalar out.
pub type Normalizer = fn(&RawValue) -> Result<RawValue, ValidationError>;

/// A canonical primitive kind a field can resolve to.
pub trait Canonical: Sized + fmt::Display {
    /// Name of the primitive kind, used in type-mismatch payloads.
    const EXPECTED: &'static str;

    /// Interpret a normalized raw scalar as this kind.
    fn from_raw(raw: &RawValue) -> Option<Self>;

    /// Numeric view for range constraints.
    fn as_number(&self) -> Option<f64> {
        None
    }

    /// Textual view for length, alphabet, and pattern constraints.
    fn as_text(&self) -> Option<&str> {
        None
    }
}

impl Canonical for i64 {
    const EXPECTED: &'static str = "an integer";

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Int(n) => Some(*n),
            RawValue::Float(x) if x.fract() == 0.0 => Some(*x as i64),
            RawValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl Canonical for f64 {
    const EXPECTED: &'static str = "a real number";

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Int(n) => Some(*n as f64),
            RawValue::Float(x) => Some(*x),
            RawValue::Text(s) => s.trim().parse().ok(),
            RawValue::Null => None,
        }
    }

    fn as_number(&self) -> Option<f64> {
        Some(*self)
    }
}

impl Canonical for String {
    const EXPECTED: &'static str = "a string";

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_text().map(str::to_string)
    }

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Canonical for RefAlleleState {
    const EXPECTED: &'static str = "one of EA, OA";

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.as_text().and_then(RefAlleleState::from_token)
    }
}

/// Declarative binding of raw kind, normalizer, and constraints for one
/// field of the summary-statistics schema.
///
/// Validation order is fixed: missing-value coercion (when declared), then
/// the normalizer, then the canonical parse, then each constraint in order.
/// A value coerced to absent short-circuits every later step.
#[derive(Debug)]
pub struct FieldDef<T> {
    /// Field name as published in the tabular schema.
    pub name: &'static str,
    /// Human-readable description, for documentation and messages.
    pub description: &'static str,
    coerce_missing: bool,
    normalizer: Option<Normalizer>,
    constraints: &'static [Constraint],
    marker: PhantomData<fn() -> T>,
}

impl<T: Canonical> FieldDef<T> {
    /// New descriptor with no normalizer and no constraints.
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            coerce_missing: false,
            normalizer: None,
            constraints: &[],
            marker: PhantomData,
        }
    }

    /// Coerce `NA`/`#NA` to an absent value before anything else runs.
    pub const fn coercing_missing(mut self) -> Self {
        self.coerce_missing = true;
        self
    }

    /// Run a normalizer between missing-value coercion and parsing.
    pub const fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Constraints checked, in order, after the canonical parse.
    pub const fn with_constraints(mut self, constraints: &'static [Constraint]) -> Self {
        self.constraints = constraints;
        self
    }

    /// Whether this field coerces `NA` tokens to absent.
    pub fn is_missing_coercible(&self) -> bool {
        self.coerce_missing
    }

    /// The declared constraint list.
    pub fn constraints(&self) -> &'static [Constraint] {
        self.constraints
    }

    /// Validate one raw scalar into this field's canonical value.
    ///
    /// Returns `Ok(None)` only when the field is missing-coercible and the
    /// input was absent or coerced to absent; absence is a valid terminal
    /// state, never a failure.
    pub fn validate(&self, raw: impl Into<RawValue>) -> Result<Option<T>, FieldError> {
        let mut raw = raw.into();
        if self.coerce_missing {
            raw = normalize::coerce_na(raw);
            if raw.is_null() {
                return Ok(None);
            }
        }
        if let Some(normalizer) = self.normalizer {
            raw = normalizer(&raw).map_err(|source| self.fail(source))?;
        }
        let value = T::from_raw(&raw).ok_or_else(|| {
            self.fail(ValidationError::TypeMismatch {
                raw: raw.to_string(),
                expected: T::EXPECTED,
            })
        })?;
        for constraint in self.constraints {
            constraint.check(&value).map_err(|source| self.fail(source))?;
        }
        Ok(Some(value))
    }

    fn fail(&self, source: ValidationError) -> FieldError {
        FieldError::new(self.name, source)
    }
}
