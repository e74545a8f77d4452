// crates/formbind-core/src/runtime/resolver.rs
// ============================================================================
// Module: Formbind Resolver
// Description: The top-level argument resolution pipeline.
// Purpose: Resolve one typed controller argument from a request snapshot.
// Dependencies: crate::{core, interfaces, runtime}, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The resolver runs the full pipeline: applicability check, schema
//! location, format negotiation, one body decode, field-value sourcing, and
//! binding with validation. Not-applicable arguments yield an empty result
//! so other resolvers can claim them; every genuine failure is a typed error
//! carrying everything the host needs to answer the client. The resolver
//! holds no mutable state and is safe to share across concurrent requests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::core::ArgumentMetadata;
use crate::core::ControllerId;
use crate::core::Format;
use crate::core::RequestContext;
use crate::core::SchemaId;
use crate::core::ViolationList;
use crate::interfaces::MetadataReader;
use crate::interfaces::SchemaError;
use crate::interfaces::SchemaFactory;
use crate::runtime::decode::DecoderRegistry;
use crate::runtime::fields::resolve_fields;
use crate::runtime::negotiate::FormatNegotiator;

// ============================================================================
// SECTION: Bound Object
// ============================================================================

/// A successfully bound and validated argument value.
///
/// # Invariants
/// - `data` contains exactly the schema-declared fields.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundObject {
    /// Declared target type name.
    type_name: String,
    /// Bound field data.
    data: Value,
}

impl BoundObject {
    /// Creates a bound object.
    #[must_use]
    pub fn new(type_name: impl Into<String>, data: Value) -> Self {
        Self {
            type_name: type_name.into(),
            data,
        }
    }

    /// Returns the declared target type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the bound field data.
    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.data
    }

    /// Deserializes the bound data into a concrete type.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error when the data does not fit the target
    /// type's shape.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.data.clone())
    }

    /// Consumes the object, yielding the bound data.
    #[must_use]
    pub fn into_data(self) -> Value {
        self.data
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Resolution errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling; every variant is fully
///   populated and maps cleanly onto one protocol error class.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No schema association is declared and the type is not self-describing.
    #[error("no schema association declared for controller {controller}")]
    MissingSchemaAssociation {
        /// Controller whose entry point lacks an association.
        controller: ControllerId,
    },
    /// The associated schema could not be built.
    #[error("schema lookup failed: {0}")]
    Schema(#[from] SchemaError),
    /// The Content-Type header maps outside the supported format set.
    #[error("unsupported request format: {format}")]
    UnsupportedFormat {
        /// Rejected format token.
        format: String,
    },
    /// A non-empty body failed structured decoding.
    #[error("malformed request payload: {detail}")]
    MalformedPayload {
        /// Decoder failure detail.
        detail: String,
    },
    /// Binding produced constraint violations.
    #[error("invalid parameters for {type_name}")]
    InvalidParams {
        /// Declared target type name.
        type_name: String,
        /// Violations in first-encountered order.
        violations: ViolationList,
    },
}

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Argument resolver over injected collaborators.
///
/// # Invariants
/// - Stateless per request; collaborators are immutable after construction.
pub struct DtoResolver {
    /// Capability contract argument types must satisfy.
    target_marker: String,
    /// Schema factory collaborator.
    schemas: Arc<dyn SchemaFactory>,
    /// Controller metadata collaborator.
    metadata: Arc<dyn MetadataReader>,
    /// Registered body decoders.
    decoders: DecoderRegistry,
    /// Format negotiator derived from the decoder registry.
    negotiator: FormatNegotiator,
}

impl DtoResolver {
    /// Creates a resolver from its collaborators.
    #[must_use]
    pub fn new(
        target_marker: impl Into<String>,
        schemas: Arc<dyn SchemaFactory>,
        metadata: Arc<dyn MetadataReader>,
        decoders: DecoderRegistry,
    ) -> Self {
        let negotiator = FormatNegotiator::new(&decoders);
        Self {
            target_marker: target_marker.into(),
            schemas,
            metadata,
            decoders,
            negotiator,
        }
    }

    /// Resolves the argument, yielding zero or one bound objects.
    ///
    /// An untyped argument, or one whose declared type does not satisfy the
    /// configured target marker, yields an empty result: this resolver
    /// declines and another may claim the argument.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] for every genuine failure: missing schema
    /// association, unsupported format, malformed payload, or constraint
    /// violations.
    pub fn resolve(
        &self,
        ctx: &RequestContext,
        argument: &ArgumentMetadata,
    ) -> Result<Vec<BoundObject>, ResolveError> {
        let Some(type_name) = argument.declared_type.as_deref() else {
            return Ok(Vec::new());
        };
        if !argument.satisfies(&self.target_marker) {
            return Ok(Vec::new());
        }

        let schema_id = self.locate_schema(ctx.controller(), type_name)?;
        let mut form = self.schemas.create(&schema_id)?;
        let format = self.negotiator.negotiate(ctx)?;
        let decoded = self.decode_body(ctx, &format)?;
        let values = resolve_fields(form.fields(), ctx, decoded.as_ref());
        form.submit(values);

        if form.is_valid() {
            Ok(vec![BoundObject::new(type_name, form.into_data())])
        } else {
            Err(ResolveError::InvalidParams {
                type_name: type_name.to_string(),
                violations: form.violations().to_vec(),
            })
        }
    }

    /// Locates the schema for the declared type.
    ///
    /// A type whose name the factory itself provides is self-describing and
    /// needs no metadata lookup; otherwise the first declared association on
    /// the controller wins.
    fn locate_schema(
        &self,
        controller: &ControllerId,
        type_name: &str,
    ) -> Result<SchemaId, ResolveError> {
        let self_describing = SchemaId::new(type_name);
        if self.schemas.provides(&self_describing) {
            return Ok(self_describing);
        }
        self.metadata
            .schema_associations(controller)
            .into_iter()
            .next()
            .ok_or_else(|| ResolveError::MissingSchemaAssociation {
                controller: controller.clone(),
            })
    }

    /// Decodes the body at most once, per the negotiated format.
    ///
    /// Form requests and empty bodies skip decoding entirely; fields then
    /// resolve through parameters and headers.
    fn decode_body(
        &self,
        ctx: &RequestContext,
        format: &Format,
    ) -> Result<Option<Map<String, Value>>, ResolveError> {
        if format.is_form() || ctx.body().is_empty() {
            return Ok(None);
        }
        let Some(decoder) = self.decoders.get(format) else {
            return Err(ResolveError::UnsupportedFormat {
                format: format.as_str().to_string(),
            });
        };
        let map = decoder
            .decode(ctx.body())
            .map_err(|err| ResolveError::MalformedPayload {
                detail: err.to_string(),
            })?;
        Ok(Some(map))
    }
}
