// crates/formbind-core/src/runtime/fields.rs
// ============================================================================
// Module: Formbind Field-Value Sourcing
// Description: Layered per-field value resolution.
// Purpose: Source each schema field from body, parameters, or headers.
// Dependencies: crate::core, serde_json
// ============================================================================

//! ## Overview
//! Each field resolves through a fixed precedence: decoded structured body,
//! then merged query/form parameters, then headers. A field may override its
//! wire-level lookup key independently of the bound attribute name. A null
//! value at one layer is "present but null" and falls through to the next
//! layer. Iteration follows schema declaration order, which keeps violation
//! ordering stable downstream.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;

use crate::core::FieldSpec;
use crate::core::RequestContext;
use crate::core::ResolvedFieldSet;

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves raw values for every schema field.
///
/// `decoded` is the structured body mapping when one was decoded; `None`
/// means the request carries form-style data (or no body) and the body layer
/// is skipped entirely.
#[must_use]
pub fn resolve_fields(
    fields: &[FieldSpec],
    ctx: &RequestContext,
    decoded: Option<&Map<String, Value>>,
) -> ResolvedFieldSet {
    let mut set = ResolvedFieldSet::new();
    for field in fields {
        let key = field.wire_key();
        let mut value = decoded
            .and_then(|map| map.get(key))
            .cloned()
            .unwrap_or(Value::Null);
        if value.is_null() {
            value = ctx.param(key).cloned().unwrap_or(Value::Null);
        }
        if value.is_null() {
            value = ctx
                .header(key)
                .map_or(Value::Null, |raw| Value::String(raw.to_string()));
        }
        set.insert(field.name.clone(), value);
    }
    set
}

// ============================================================================
// SECTION: Tests
// ============================================================================
