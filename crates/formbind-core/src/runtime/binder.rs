// crates/formbind-core/src/runtime/binder.rs
// ============================================================================
// Module: Formbind Declarative Binder
// Description: Default schema factory with coercion and constraint checks.
// Purpose: Bind resolved raw values into validated data objects.
// Dependencies: crate::{core, interfaces}, serde_json
// ============================================================================

//! ## Overview
//! The declarative binder is the built-in schema collaborator: a registry of
//! schema descriptors producing single-use form instances. Submission runs
//! in two phases per field, in declaration order: kind-driven coercion (form
//! strings such as `"25"` become numbers), then constraint evaluation over
//! the coerced value. A coercion failure invalidates the submission but is
//! recorded apart from the violation list, which carries genuine constraint
//! failures only.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde_json::Map;
use serde_json::Number;
use serde_json::Value;

use crate::core::Constraint;
use crate::core::ConstraintViolation;
use crate::core::FieldKind;
use crate::core::FieldSpec;
use crate::core::ResolvedFieldSet;
use crate::core::SchemaDescriptor;
use crate::core::SchemaId;
use crate::interfaces::SchemaError;
use crate::interfaces::SchemaFactory;
use crate::interfaces::SchemaInstance;

// ============================================================================
// SECTION: Schema Factory
// ============================================================================

/// Registry-backed factory for declarative schemas.
///
/// # Invariants
/// - Registrations are keyed by schema identifier; later registrations
///   replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct DeclarativeSchemaFactory {
    /// Registered schema descriptors.
    schemas: BTreeMap<SchemaId, SchemaDescriptor>,
}

impl DeclarativeSchemaFactory {
    /// Creates an empty factory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            schemas: BTreeMap::new(),
        }
    }

    /// Registers a schema descriptor under its own identifier.
    pub fn register(&mut self, descriptor: SchemaDescriptor) {
        self.schemas.insert(descriptor.id.clone(), descriptor);
    }
}

impl SchemaFactory for DeclarativeSchemaFactory {
    fn provides(&self, id: &SchemaId) -> bool {
        self.schemas.contains_key(id)
    }

    fn create(&self, id: &SchemaId) -> Result<Box<dyn SchemaInstance>, SchemaError> {
        self.schemas.get(id).map_or_else(
            || Err(SchemaError::UnknownSchema(id.clone())),
            |descriptor| {
                Ok(Box::new(DeclarativeForm::new(descriptor.clone())) as Box<dyn SchemaInstance>)
            },
        )
    }
}

// ============================================================================
// SECTION: Coercion Failures
// ============================================================================

/// One kind-coercion failure for one field path.
///
/// Coercion failures are structural conditions, distinct from constraint
/// violations; they invalidate the submission without entering the
/// violation list.
#[derive(Debug, Clone, PartialEq)]
pub struct CoercionFailure {
    /// Field path that failed coercion.
    pub path: String,
    /// The value that could not be coerced.
    pub value: Value,
}

// ============================================================================
// SECTION: Declarative Form
// ============================================================================

/// Single-use schema instance backed by a descriptor.
///
/// # Invariants
/// - `submit` is called at most once; outcome accessors reflect the last
///   submission only.
#[derive(Debug, Clone)]
pub struct DeclarativeForm {
    /// Backing schema descriptor.
    descriptor: SchemaDescriptor,
    /// Bound data after submission.
    data: Map<String, Value>,
    /// Constraint violations in first-encountered order.
    violations: Vec<ConstraintViolation>,
    /// Structural coercion failures.
    coercion_failures: Vec<CoercionFailure>,
    /// Whether a submission happened.
    submitted: bool,
}

impl DeclarativeForm {
    /// Creates a fresh form for the descriptor.
    #[must_use]
    pub fn new(descriptor: SchemaDescriptor) -> Self {
        Self {
            descriptor,
            data: Map::new(),
            violations: Vec::new(),
            coercion_failures: Vec::new(),
            submitted: false,
        }
    }

    /// Returns the structural coercion failures of the last submission.
    #[must_use]
    pub fn coercion_failures(&self) -> &[CoercionFailure] {
        &self.coercion_failures
    }
}

impl SchemaInstance for DeclarativeForm {
    fn fields(&self) -> &[FieldSpec] {
        &self.descriptor.fields
    }

    fn submit(&mut self, values: ResolvedFieldSet) {
        let mut data = Map::new();
        let mut violations = Vec::new();
        let mut coercion_failures = Vec::new();

        for field in &self.descriptor.fields {
            let raw = values.get(&field.name).cloned().unwrap_or(Value::Null);
            if raw.is_null() {
                if field.required {
                    violations.push(ConstraintViolation::new(
                        field.name.clone(),
                        "is required",
                        Value::Null,
                    ));
                }
                data.insert(field.name.clone(), Value::Null);
                continue;
            }
            match coerce_value(field.kind, raw) {
                Ok(value) => {
                    check_constraints(&field.constraints, &field.name, &value, &mut violations);
                    data.insert(field.name.clone(), value);
                }
                Err(invalid) => {
                    coercion_failures.push(CoercionFailure {
                        path: field.name.clone(),
                        value: invalid,
                    });
                    data.insert(field.name.clone(), Value::Null);
                }
            }
        }

        self.data = data;
        self.violations = violations;
        self.coercion_failures = coercion_failures;
        self.submitted = true;
    }

    fn is_valid(&self) -> bool {
        self.submitted && self.violations.is_empty() && self.coercion_failures.is_empty()
    }

    fn violations(&self) -> &[ConstraintViolation] {
        &self.violations
    }

    fn into_data(self: Box<Self>) -> Value {
        Value::Object(self.data)
    }
}

// ============================================================================
// SECTION: Coercion
// ============================================================================

/// Coerces a raw value to the field kind, or returns it as invalid.
fn coerce_value(kind: FieldKind, value: Value) -> Result<Value, Value> {
    match kind {
        FieldKind::Text => match value {
            Value::String(_) => Ok(value),
            Value::Number(number) => Ok(Value::String(number.to_string())),
            Value::Bool(flag) => Ok(Value::String(flag.to_string())),
            other => Err(other),
        },
        FieldKind::Integer => match value {
            Value::Number(ref number) if number.is_i64() || number.is_u64() => Ok(value),
            Value::String(text) => match text.trim().parse::<i64>() {
                Ok(parsed) => Ok(Value::from(parsed)),
                Err(_) => Err(Value::String(text)),
            },
            other => Err(other),
        },
        FieldKind::Number => match value {
            Value::Number(_) => Ok(value),
            Value::String(text) => match text.trim().parse::<f64>() {
                Ok(parsed) => {
                    Number::from_f64(parsed).map_or(Err(Value::String(text)), |number| {
                        Ok(Value::Number(number))
                    })
                }
                Err(_) => Err(Value::String(text)),
            },
            other => Err(other),
        },
        FieldKind::Boolean => match value {
            Value::Bool(_) => Ok(value),
            Value::String(text) => match text.trim() {
                "true" | "1" => Ok(Value::Bool(true)),
                "false" | "0" => Ok(Value::Bool(false)),
                _ => Err(Value::String(text)),
            },
            other => Err(other),
        },
        FieldKind::List => match value {
            Value::Array(_) => Ok(value),
            // A single form value binds as a one-element list.
            scalar @ (Value::String(_) | Value::Number(_) | Value::Bool(_)) => {
                Ok(Value::Array(vec![scalar]))
            }
            other => Err(other),
        },
    }
}

// ============================================================================
// SECTION: Constraint Evaluation
// ============================================================================

/// Evaluates constraints against a coerced value, collecting violations.
///
/// Rules that do not match the value shape are skipped; shape mismatches are
/// coercion territory, not validation.
fn check_constraints(
    constraints: &[Constraint],
    path: &str,
    value: &Value,
    out: &mut Vec<ConstraintViolation>,
) {
    for constraint in constraints {
        match constraint {
            Constraint::NotBlank => {
                if is_blank(value) {
                    out.push(ConstraintViolation::new(path, "must not be blank", value.clone()));
                }
            }
            Constraint::Length {
                min,
                max,
            } => {
                if let Some(text) = value.as_str() {
                    let count = text.chars().count();
                    if let Some(min) = min
                        && count < *min
                    {
                        out.push(ConstraintViolation::new(
                            path,
                            format!("must be at least {min} characters"),
                            value.clone(),
                        ));
                    }
                    if let Some(max) = max
                        && count > *max
                    {
                        out.push(ConstraintViolation::new(
                            path,
                            format!("must be at most {max} characters"),
                            value.clone(),
                        ));
                    }
                }
            }
            Constraint::Email => {
                if let Some(text) = value.as_str()
                    && !is_plausible_email(text)
                {
                    out.push(ConstraintViolation::new(
                        path,
                        "must be a valid email address",
                        value.clone(),
                    ));
                }
            }
            Constraint::Range {
                min,
                max,
            } => {
                if let Some(number) = value.as_f64() {
                    if let Some(min) = min
                        && number < *min
                    {
                        out.push(ConstraintViolation::new(
                            path,
                            format!("must be at least {min}"),
                            value.clone(),
                        ));
                    }
                    if let Some(max) = max
                        && number > *max
                    {
                        out.push(ConstraintViolation::new(
                            path,
                            format!("must be at most {max}"),
                            value.clone(),
                        ));
                    }
                }
            }
            Constraint::Count {
                min,
                max,
            } => {
                if let Some(items) = value.as_array() {
                    if let Some(min) = min
                        && items.len() < *min
                    {
                        out.push(ConstraintViolation::new(
                            path,
                            format!("must contain at least {min} elements"),
                            value.clone(),
                        ));
                    }
                    if let Some(max) = max
                        && items.len() > *max
                    {
                        out.push(ConstraintViolation::new(
                            path,
                            format!("must contain at most {max} elements"),
                            value.clone(),
                        ));
                    }
                }
            }
            Constraint::Each(inner) => {
                if let Some(items) = value.as_array() {
                    for (index, item) in items.iter().enumerate() {
                        check_constraints(inner, &format!("{path}[{index}]"), item, out);
                    }
                }
            }
        }
    }
}

/// Returns true when a value counts as blank.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Structural email plausibility check: one `@`, non-empty local part, and
/// a dotted domain.
fn is_plausible_email(text: &str) -> bool {
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((head, tail)) = domain.rsplit_once('.') else {
        return false;
    };
    !head.is_empty() && !tail.is_empty()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
