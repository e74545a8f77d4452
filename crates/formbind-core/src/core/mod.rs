// crates/formbind-core/src/core/mod.rs
// ============================================================================
// Module: Formbind Core Types
// Description: Canonical schema, request, and violation structures.
// Purpose: Provide stable, serializable types for request binding.
// Dependencies: bytes, serde, serde_json
// ============================================================================

//! ## Overview
//! Core types define field schemas, the read-only request view, resolved
//! field sets, and constraint violations. These types are the canonical
//! source of truth for any derived transport surface (HTTP or otherwise).

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod format;
pub mod identifiers;
pub mod request;
pub mod schema;
pub mod violation;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use format::Format;
pub use identifiers::ControllerId;
pub use identifiers::SchemaId;
pub use request::ArgumentMetadata;
pub use request::RequestContext;
pub use request::ResolvedFieldSet;
pub use schema::Constraint;
pub use schema::FieldKind;
pub use schema::FieldSpec;
pub use schema::SchemaDescriptor;
pub use violation::ConstraintViolation;
pub use violation::ViolationList;
