// crates/formbind-http/src/context.rs
// ============================================================================
// Module: HTTP Request Context
// Description: Builds the resolver's request snapshot from http parts.
// Purpose: Materialize query, form, header, and body data exactly once.
// Dependencies: axum, bytes, formbind-core, url
// ============================================================================

//! ## Overview
//! The context builder reads request parts and the already-collected body:
//! query-string parameters parse into the fallback layer, urlencoded form
//! bodies pre-parse into form parameters (which force form negotiation),
//! and headers carry over with lowercased names. Repeated keys collect into
//! arrays; a `[]` key suffix forces an array even for a single value. The
//! body is collected by the host once; this builder never reads a stream.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use bytes::Bytes;
use formbind_core::ControllerId;
use formbind_core::RequestContext;
use serde_json::Value;
use thiserror::Error;
use url::form_urlencoded;

// ============================================================================
// SECTION: Controller Route
// ============================================================================

/// Request extension naming the controller handling the request.
///
/// Hosts attach this per route, typically in a router layer, so resolution
/// can look up the controller's schema association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerRoute(pub ControllerId);

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Context construction errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ContextError {
    /// Collected body exceeds the configured cap.
    #[error("request body too large: {size} bytes (limit {limit})")]
    BodyTooLarge {
        /// Collected body size in bytes.
        size: usize,
        /// Enforced limit in bytes.
        limit: usize,
    },
    /// No controller route extension is attached to the request.
    #[error("request has no controller route attached")]
    MissingRoute,
}

// ============================================================================
// SECTION: Context Builder
// ============================================================================

/// Builds a resolver request snapshot from request parts and the body.
///
/// # Errors
///
/// Returns [`ContextError`] when the body exceeds `max_body_bytes` or the
/// request carries no [`ControllerRoute`] extension.
pub fn context_from_parts(
    parts: &Parts,
    body: &Bytes,
    max_body_bytes: usize,
) -> Result<RequestContext, ContextError> {
    if body.len() > max_body_bytes {
        return Err(ContextError::BodyTooLarge {
            size: body.len(),
            limit: max_body_bytes,
        });
    }
    let route = parts
        .extensions
        .get::<ControllerRoute>()
        .ok_or(ContextError::MissingRoute)?;

    let content_type = parts
        .headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let mut ctx = RequestContext::new(route.0.clone());
    if let Some(content_type) = &content_type {
        ctx = ctx.with_content_type(content_type.clone());
    }
    for (name, value) in &parts.headers {
        if let Ok(text) = value.to_str() {
            ctx = ctx.with_header(name.as_str(), text);
        }
    }
    if let Some(query) = parts.uri.query() {
        for (name, value) in collect_pairs(query.as_bytes()) {
            ctx = ctx.with_param(name, value);
        }
    }
    if is_urlencoded_form(content_type.as_deref()) && !body.is_empty() {
        for (name, value) in collect_pairs(body) {
            ctx = ctx.with_form_param(name, value);
        }
    }
    Ok(ctx.with_body(body.clone()))
}

/// Returns true for an urlencoded form media type.
fn is_urlencoded_form(content_type: Option<&str>) -> bool {
    content_type
        .map(|raw| raw.split(';').next().unwrap_or(raw).trim().to_ascii_lowercase())
        .is_some_and(|media_type| media_type == "application/x-www-form-urlencoded")
}

/// Parses urlencoded pairs, collecting repeated keys into arrays.
fn collect_pairs(raw: &[u8]) -> Vec<(String, Value)> {
    /// Collected values for one key plus the forced-array marker.
    struct Entry {
        /// Whether the wire key carried a `[]` suffix.
        forced_array: bool,
        /// Values in wire order.
        values: Vec<String>,
    }

    let mut grouped: BTreeMap<String, Entry> = BTreeMap::new();
    for (key, value) in form_urlencoded::parse(raw) {
        let (name, forced_array) = key
            .strip_suffix("[]")
            .map_or_else(|| (key.to_string(), false), |stripped| (stripped.to_string(), true));
        let entry = grouped.entry(name).or_insert_with(|| Entry {
            forced_array,
            values: Vec::new(),
        });
        entry.forced_array |= forced_array;
        entry.values.push(value.to_string());
    }
    grouped
        .into_iter()
        .map(|(name, mut entry)| {
            let value = if entry.forced_array || entry.values.len() > 1 {
                Value::Array(entry.values.into_iter().map(Value::String).collect())
            } else {
                Value::String(entry.values.remove(0))
            };
            (name, value)
        })
        .collect()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
