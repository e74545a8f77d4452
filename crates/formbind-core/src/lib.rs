// crates/formbind-core/src/lib.rs
// ============================================================================
// Module: Formbind Core Library
// Description: Public API surface for the formbind request resolver.
// Purpose: Expose core types, collaborator interfaces, and the resolver runtime.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Formbind resolves one typed controller argument per request: it locates a
//! field schema for the declared argument type, negotiates the request
//! format, sources raw field values with a layered fallback (decoded body,
//! then query/form parameters, then headers), binds them into a data object,
//! and validates it. It is host-agnostic and integrates through explicit
//! collaborator interfaces rather than embedding into a web framework.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::BodyDecoder;
pub use interfaces::DecodeError;
pub use interfaces::MetadataReader;
pub use interfaces::SchemaError;
pub use interfaces::SchemaFactory;
pub use interfaces::SchemaInstance;
pub use runtime::DeclarativeForm;
pub use runtime::DeclarativeSchemaFactory;
pub use runtime::DecoderRegistry;
pub use runtime::FormatNegotiator;
pub use runtime::JsonDecoder;
pub use runtime::StaticMetadataReader;
pub use runtime::resolve_fields;
pub use runtime::resolver::BoundObject;
pub use runtime::resolver::DtoResolver;
pub use runtime::resolver::ResolveError;
