// crates/formbind-core/src/interfaces/mod.rs
// ============================================================================
// Module: Formbind Interfaces
// Description: Collaborator seams for schema building, decoding, and metadata.
// Purpose: Define the contract surfaces the resolver runtime calls into.
// Dependencies: crate::core, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how formbind integrates with schema builders, body
//! decoders, and controller metadata without embedding host specifics.
//! Implementations must be side-effect-free per call and safe to share
//! across concurrent resolutions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::core::ConstraintViolation;
use crate::core::ControllerId;
use crate::core::FieldSpec;
use crate::core::Format;
use crate::core::ResolvedFieldSet;
use crate::core::SchemaId;

// ============================================================================
// SECTION: Schema Factory
// ============================================================================

/// Schema factory errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// No schema is registered under the requested identifier.
    #[error("unknown schema: {0}")]
    UnknownSchema(SchemaId),
}

/// Builds schema instances from schema identifiers.
pub trait SchemaFactory: Send + Sync {
    /// Returns true when a schema exists under the given identifier.
    fn provides(&self, id: &SchemaId) -> bool;

    /// Creates a fresh schema instance.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when no schema exists under the identifier.
    fn create(&self, id: &SchemaId) -> Result<Box<dyn SchemaInstance>, SchemaError>;
}

/// One schema-bound form accepting a submission.
///
/// Instances are single-use: create, submit once, then read the outcome.
pub trait SchemaInstance {
    /// Returns the field specifications in declaration order.
    fn fields(&self) -> &[FieldSpec];

    /// Submits resolved raw values for coercion and validation.
    fn submit(&mut self, values: ResolvedFieldSet);

    /// Returns true when the submission produced no failures of any kind.
    fn is_valid(&self) -> bool;

    /// Returns the constraint violations in first-encountered order.
    ///
    /// Coercion failures render the instance invalid but are not constraint
    /// violations and do not appear here.
    fn violations(&self) -> &[ConstraintViolation];

    /// Consumes the instance, yielding the bound data object.
    fn into_data(self: Box<Self>) -> Value;
}

// ============================================================================
// SECTION: Body Decoder
// ============================================================================

/// Body decoding errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Payload is not syntactically valid for the format.
    #[error("payload is not valid {format}: {detail}")]
    Syntax {
        /// Format token being decoded.
        format: String,
        /// Parser failure detail.
        detail: String,
    },
    /// Payload parsed but its root cannot supply named fields.
    #[error("payload root must be an object, found {found}")]
    UnexpectedRoot {
        /// Description of the encountered root value.
        found: String,
    },
}

/// Decodes an encoded request body into a flat field mapping.
pub trait BodyDecoder: Send + Sync {
    /// Returns the format token this decoder handles.
    fn format(&self) -> Format;

    /// Decodes a non-empty body into named field values.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the body is malformed for the format.
    fn decode(&self, body: &[u8]) -> Result<Map<String, Value>, DecodeError>;
}

// ============================================================================
// SECTION: Metadata Reader
// ============================================================================

/// Reads declarative schema associations for controller entry points.
pub trait MetadataReader: Send + Sync {
    /// Returns the schema associations declared on the controller's entry
    /// point, in declaration order. Empty when none are declared.
    fn schema_associations(&self, controller: &ControllerId) -> Vec<SchemaId>;
}
