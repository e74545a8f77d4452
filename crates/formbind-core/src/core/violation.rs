// crates/formbind-core/src/core/violation.rs
// ============================================================================
// Module: Formbind Constraint Violations
// Description: Violation records produced by schema validation.
// Purpose: Carry field path, message, and the offending value per failure.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A violation names the field path that failed, a human-readable message,
//! and the invalid value. Nested list-element failures flatten to indexed
//! paths (`tags[0]`). Violation order is first-encountered order and follows
//! schema declaration order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Violation Types
// ============================================================================

/// One constraint failure for one field path.
///
/// # Invariants
/// - Every field is populated; no partially constructed violations exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintViolation {
    /// Field path, with list elements as `field[index]`.
    pub path: String,
    /// Human-readable failure message.
    pub message: String,
    /// The value that failed the rule.
    pub invalid_value: Value,
}

impl ConstraintViolation {
    /// Creates a violation record.
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>, invalid_value: Value) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            invalid_value,
        }
    }
}

/// Ordered list of constraint violations.
pub type ViolationList = Vec<ConstraintViolation>;
