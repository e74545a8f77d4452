// crates/formbind-core/src/runtime/mod.rs
// ============================================================================
// Module: Formbind Runtime
// Description: The resolution pipeline and default collaborator implementations.
// Purpose: Execute schema location, negotiation, sourcing, and binding.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement the resolution pipeline: format negotiation,
//! field-value sourcing, binding with constraint evaluation, and the
//! top-level resolver entry point. Default collaborators (declarative schema
//! factory, JSON decoder, static metadata reader) live here too so the
//! library works out of the box.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod binder;
pub mod decode;
pub mod fields;
pub mod metadata;
pub mod negotiate;
pub mod resolver;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use binder::DeclarativeForm;
pub use binder::DeclarativeSchemaFactory;
pub use decode::DecoderRegistry;
pub use decode::JsonDecoder;
pub use fields::resolve_fields;
pub use metadata::StaticMetadataReader;
pub use negotiate::FormatNegotiator;
pub use resolver::BoundObject;
pub use resolver::DtoResolver;
pub use resolver::ResolveError;
