// crates/formbind-core/src/core/request.rs
// ============================================================================
// Module: Formbind Request View
// Description: Read-only request snapshot and argument metadata.
// Purpose: Provide the immutable inputs a single resolution operates on.
// Dependencies: bytes, serde_json
// ============================================================================

//! ## Overview
//! A `RequestContext` is the read-only view of one request: content type,
//! merged query/form parameters, lowercased headers, the raw body, and the
//! controller identifier. It is built once per request by the host adapter;
//! the body is materialized exactly once and never re-read. Argument
//! metadata carries the declared parameter type and the capability contracts
//! that type satisfies.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use bytes::Bytes;
use serde_json::Value;

use crate::core::identifiers::ControllerId;

// ============================================================================
// SECTION: Argument Metadata
// ============================================================================

/// Metadata for the controller argument under resolution.
///
/// # Invariants
/// - `contracts` lists the capability contracts the declared type satisfies,
///   as supplied by the host pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentMetadata {
    /// Declared parameter type name, when the argument is typed.
    pub declared_type: Option<String>,
    /// Capability contract identifiers the declared type satisfies.
    pub contracts: Vec<String>,
}

impl ArgumentMetadata {
    /// Creates metadata for a typed argument.
    #[must_use]
    pub fn new(declared_type: impl Into<String>) -> Self {
        Self {
            declared_type: Some(declared_type.into()),
            contracts: Vec::new(),
        }
    }

    /// Creates metadata for an untyped argument.
    #[must_use]
    pub const fn untyped() -> Self {
        Self {
            declared_type: None,
            contracts: Vec::new(),
        }
    }

    /// Declares a capability contract the argument type satisfies.
    #[must_use]
    pub fn with_contract(mut self, contract: impl Into<String>) -> Self {
        self.contracts.push(contract.into());
        self
    }

    /// Returns true when the declared type satisfies the given contract.
    #[must_use]
    pub fn satisfies(&self, contract: &str) -> bool {
        self.contracts.iter().any(|candidate| candidate == contract)
    }
}

// ============================================================================
// SECTION: Request Context
// ============================================================================

/// Read-only view of one request.
///
/// # Invariants
/// - Header names are lowercased at construction; lookups are
///   case-insensitive.
/// - The body is a snapshot taken once; resolution never re-reads it.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Controller invocation entry point handling the request.
    controller: ControllerId,
    /// Raw Content-Type header value, when present.
    content_type: Option<String>,
    /// Query and form parameters merged per host convention.
    params: BTreeMap<String, Value>,
    /// Whether any parameter came from a pre-parsed form body.
    has_form_params: bool,
    /// Request headers with lowercased names.
    headers: BTreeMap<String, String>,
    /// Raw request body snapshot.
    body: Bytes,
}

impl RequestContext {
    /// Creates an empty context for the given controller.
    #[must_use]
    pub fn new(controller: ControllerId) -> Self {
        Self {
            controller,
            content_type: None,
            params: BTreeMap::new(),
            has_form_params: false,
            headers: BTreeMap::new(),
            body: Bytes::new(),
        }
    }

    /// Sets the Content-Type header value.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Adds a query-string parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: Value) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// Adds a parameter from a pre-parsed form body.
    ///
    /// Form-body parameters join the merged parameter layer and also mark
    /// the request as form data, which negotiation prefers over the
    /// Content-Type header.
    #[must_use]
    pub fn with_form_param(mut self, name: impl Into<String>, value: Value) -> Self {
        self.params.insert(name.into(), value);
        self.has_form_params = true;
        self
    }

    /// Adds a header, lowercasing its name.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    /// Sets the raw body snapshot.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the controller identifier.
    #[must_use]
    pub const fn controller(&self) -> &ControllerId {
        &self.controller
    }

    /// Returns the Content-Type header value, when present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Returns true when any parameter came from a pre-parsed form body.
    #[must_use]
    pub const fn has_form_params(&self) -> bool {
        self.has_form_params
    }

    /// Returns a pre-parsed parameter by name.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Returns a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Returns the raw body snapshot.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

// ============================================================================
// SECTION: Resolved Field Set
// ============================================================================

/// Ordered mapping from field name to resolved raw value.
///
/// # Invariants
/// - Entry order is schema declaration order.
/// - Unresolved fields are stored as `Value::Null`, never omitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedFieldSet {
    /// Resolved values in insertion order.
    values: Vec<(String, Value)>,
}

impl ResolvedFieldSet {
    /// Creates an empty field set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: Vec::new(),
        }
    }

    /// Appends a resolved value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.push((name.into(), value));
    }

    /// Returns the resolved value for a field name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, value)| value)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when no entries exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
