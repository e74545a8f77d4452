// crates/formbind-core/src/core/schema.rs
// ============================================================================
// Module: Formbind Field Schemas
// Description: Declarative field specifications for request binding.
// Purpose: Describe the fields, kinds, and constraints a target type binds.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A schema descriptor is an ordered list of field specifications. Field
//! order is declaration order and fixes both field-resolution order and
//! violation order. Constraints are declarative; evaluation lives in the
//! runtime binder, so alternative schema-instance implementations can plug
//! in a different constraint engine behind the same descriptor.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::SchemaId;

// ============================================================================
// SECTION: Field Kinds
// ============================================================================

/// Coercion target for a bound field.
///
/// # Invariants
/// - Variants are stable for schema serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// UTF-8 text value.
    Text,
    /// Whole number value; form strings such as `"25"` coerce.
    Integer,
    /// Floating point number value.
    Number,
    /// Boolean value; form strings `"true"`/`"false"`/`"1"`/`"0"` coerce.
    Boolean,
    /// Ordered list of values.
    List,
}

// ============================================================================
// SECTION: Constraints
// ============================================================================

/// Declarative validation rule attached to a field.
///
/// # Invariants
/// - Rules apply to the coerced value; a rule that does not match the value
///   shape (for example `Length` on a number) is skipped rather than failed,
///   since shape mismatches are coercion conditions, not violations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    /// Value must not be null, empty, or whitespace-only.
    NotBlank,
    /// Text length bounds in characters.
    Length {
        /// Minimum length, inclusive.
        min: Option<usize>,
        /// Maximum length, inclusive.
        max: Option<usize>,
    },
    /// Value must be a plausible email address.
    Email,
    /// Numeric bounds, inclusive.
    Range {
        /// Minimum value, inclusive.
        min: Option<f64>,
        /// Maximum value, inclusive.
        max: Option<f64>,
    },
    /// List element count bounds, inclusive.
    Count {
        /// Minimum element count, inclusive.
        min: Option<usize>,
        /// Maximum element count, inclusive.
        max: Option<usize>,
    },
    /// Rules applied to every element of a list value.
    Each(Vec<Constraint>),
}

// ============================================================================
// SECTION: Field Specification
// ============================================================================

/// Specification of one bound field.
///
/// # Invariants
/// - `name` is the bound attribute name; `lookup_key`, when set, is the
///   wire-level name used for sourcing instead of `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Bound attribute name.
    pub name: String,
    /// Coercion target kind.
    pub kind: FieldKind,
    /// Whether an unresolved (null) value is a violation.
    pub required: bool,
    /// Optional wire-level name override.
    pub lookup_key: Option<String>,
    /// Validation rules in declaration order.
    pub constraints: Vec<Constraint>,
}

impl FieldSpec {
    /// Creates a required field with no constraints.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
            lookup_key: None,
            constraints: Vec::new(),
        }
    }

    /// Marks the field as optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the wire-level lookup key override.
    #[must_use]
    pub fn lookup_key(mut self, key: impl Into<String>) -> Self {
        self.lookup_key = Some(key.into());
        self
    }

    /// Appends a validation rule.
    #[must_use]
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Returns the wire-level key used for value sourcing.
    #[must_use]
    pub fn wire_key(&self) -> &str {
        self.lookup_key.as_deref().unwrap_or(&self.name)
    }
}

// ============================================================================
// SECTION: Schema Descriptor
// ============================================================================

/// Ordered field schema bound to a target type.
///
/// # Invariants
/// - Field order is declaration order and is preserved through resolution,
///   binding, and violation reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDescriptor {
    /// Schema identifier.
    pub id: SchemaId,
    /// Field specifications in declaration order.
    pub fields: Vec<FieldSpec>,
}

impl SchemaDescriptor {
    /// Creates an empty schema descriptor.
    #[must_use]
    pub fn new(id: SchemaId) -> Self {
        Self {
            id,
            fields: Vec::new(),
        }
    }

    /// Appends a field specification.
    #[must_use]
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }
}
