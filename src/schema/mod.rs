//! # Schema Validation
//!
//! Runtime checks of search input and output values against JSON Schema
//! (Draft 2020-12) definitions embedded in the crate.
//!
//! The compile-time models in [`crate::client::models`] describe the same
//! shapes, but a deserialized value only proves that serde accepted it. These
//! validators are meant for the I/O boundary: they inspect an arbitrary
//! [`serde_json::Value`] without mutating it and return a
//! [`ValidationResult`] describing every violation instead of failing on the
//! first one.
//!
//! Output validation has two stages. Structural validation runs first; when
//! it passes, the paginated envelope is checked for internal consistency
//! (see [`envelope_violations`]).

use std::fmt;

use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, ValidationError, Validator};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::client::models::SearchOutput;

mod envelope;

pub use envelope::{envelope_violations, envelope_violations_in};

const INPUT_SCHEMA_NAME: &str = "search-input.schema.json";
const OUTPUT_SCHEMA_NAME: &str = "search-output.schema.json";

const INPUT_SCHEMA: &str = include_str!("../../schemas/search-input.schema.json");
const OUTPUT_SCHEMA: &str = include_str!("../../schemas/search-output.schema.json");

static INPUT_VALIDATOR: Lazy<CompiledSchema> =
    Lazy::new(|| CompiledSchema::compile(INPUT_SCHEMA_NAME, INPUT_SCHEMA));

static OUTPUT_VALIDATOR: Lazy<CompiledSchema> =
    Lazy::new(|| CompiledSchema::compile(OUTPUT_SCHEMA_NAME, OUTPUT_SCHEMA));

/// Category of a single violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Value has the wrong JSON type (including `null` for a non-nullable field)
    TypeMismatch,
    /// A required field is absent
    MissingField,
    /// Value is outside a closed set, e.g. `statusCode`
    EnumMismatch,
    /// Number outside the allowed range
    OutOfRange,
    /// Pagination envelope fields contradict each other
    Envelope,
    /// Anything else reported by the validator
    Other,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViolationKind::TypeMismatch => "type mismatch",
            ViolationKind::MissingField => "missing field",
            ViolationKind::EnumMismatch => "enum mismatch",
            ViolationKind::OutOfRange => "out of range",
            ViolationKind::Envelope => "inconsistent envelope",
            ViolationKind::Other => "invalid",
        };
        f.write_str(name)
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer within the schema that triggered the error.
    pub schema_path: String,
    pub kind: ViolationKind,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    fn from_error(error: ValidationError<'_>) -> Self {
        let message = error.to_string();
        let mut instance_path = error.instance_path.to_string();

        let kind = match &error.kind {
            ValidationErrorKind::Type { .. } => ViolationKind::TypeMismatch,
            ValidationErrorKind::Required { property } => {
                // Point at the missing field rather than at its parent object
                let name = property
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| property.to_string());
                instance_path = format!("{instance_path}/{name}");
                ViolationKind::MissingField
            }
            ValidationErrorKind::Enum { .. } | ValidationErrorKind::Constant { .. } => {
                ViolationKind::EnumMismatch
            }
            ValidationErrorKind::Minimum { .. }
            | ValidationErrorKind::ExclusiveMinimum { .. }
            | ValidationErrorKind::Maximum { .. }
            | ValidationErrorKind::ExclusiveMaximum { .. } => ViolationKind::OutOfRange,
            _ => ViolationKind::Other,
        };

        Self {
            instance_path,
            schema_path: error.schema_path.to_string(),
            kind,
            message,
        }
    }

    pub(crate) fn envelope(instance_path: &str, message: String) -> Self {
        Self {
            instance_path: instance_path.to_string(),
            schema_path: String::new(),
            kind: ViolationKind::Envelope,
            message,
        }
    }

    fn other(message: String) -> Self {
        Self {
            instance_path: String::new(),
            schema_path: String::new(),
            kind: ViolationKind::Other,
            message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}: {}", self.kind, self.message)
        } else {
            write!(f, "{}: {}: {}", self.instance_path, self.kind, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations {
    violations: Vec<Violation>,
}

impl Violations {
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Violations whose instance path is exactly `path`
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations.iter().filter(move |v| v.instance_path == path)
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {v}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Outcome of a validation. Failure is a value, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Violations),
}

impl ValidationResult {
    fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(Violations { violations })
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// All violations; empty when valid
    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(v) => &v.violations,
        }
    }

    /// Convert into a `Result` for callers that prefer `?`
    pub fn into_result(self) -> std::result::Result<(), Violations> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(v) => Err(v),
        }
    }
}

/// An embedded schema compiled once per process
struct CompiledSchema {
    name: &'static str,
    validator: std::result::Result<Validator, String>,
}

impl CompiledSchema {
    fn compile(name: &'static str, source: &str) -> Self {
        let validator = serde_json::from_str::<Value>(source)
            .map_err(|e| e.to_string())
            .and_then(|schema| {
                let mut opts = jsonschema::options();
                opts.with_draft(Draft::Draft202012);
                opts.build(&schema).map_err(|e| e.to_string())
            });

        if let Err(reason) = &validator {
            log::warn!("Schema {} failed to compile: {}", name, reason);
        }

        Self { name, validator }
    }

    fn violations(&self, instance: &Value) -> Vec<Violation> {
        match &self.validator {
            Ok(validator) => validator
                .iter_errors(instance)
                .map(Violation::from_error)
                .collect(),
            Err(reason) => vec![Violation::other(format!(
                "schema '{}' is unusable: {}",
                self.name, reason
            ))],
        }
    }
}

/// Validate a value against the search input definition.
///
/// All fields are optional; `page` and `size` must be integers in the `u32` range.
pub fn validate_input(value: &Value) -> ValidationResult {
    ValidationResult::from_violations(INPUT_VALIDATOR.violations(value))
}

/// Validate a value against the search output definition.
///
/// Reports every structural violation. If the structure is valid, the
/// pagination envelope invariants are checked as well.
pub fn validate_output(value: &Value) -> ValidationResult {
    let violations = OUTPUT_VALIDATOR.violations(value);
    if !violations.is_empty() {
        log::debug!(
            "Search output failed validation with {} violation(s)",
            violations.len()
        );
        return ValidationResult::from_violations(violations);
    }

    ValidationResult::from_violations(envelope_violations_in(value))
}

/// Re-check an already deserialized page through the output definition
pub fn check_output(output: &SearchOutput) -> ValidationResult {
    match serde_json::to_value(output) {
        Ok(value) => validate_output(&value),
        Err(e) => ValidationResult::from_violations(vec![Violation::other(e.to_string())]),
    }
}
