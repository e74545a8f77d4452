// crates/formbind-core/src/runtime/decode.rs
// ============================================================================
// Module: Formbind Body Decoders
// Description: Decoder registry and the default JSON decoder.
// Purpose: Turn encoded request bodies into flat field mappings.
// Dependencies: crate::{core, interfaces}, serde_json
// ============================================================================

//! ## Overview
//! The registry holds one decoder per format token; the supported format set
//! is derived from it. The JSON decoder requires an object at the payload
//! root, since named fields cannot be extracted from scalars or arrays.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde_json::Map;
use serde_json::Value;

use crate::core::Format;
use crate::interfaces::BodyDecoder;
use crate::interfaces::DecodeError;

// ============================================================================
// SECTION: Decoder Registry
// ============================================================================

/// Registry of body decoders keyed by format token.
///
/// # Invariants
/// - At most one decoder per format token; later registrations replace
///   earlier ones.
#[derive(Clone)]
pub struct DecoderRegistry {
    /// Registered decoders.
    decoders: Vec<Arc<dyn BodyDecoder>>,
}

impl DecoderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            decoders: Vec::new(),
        }
    }

    /// Creates a registry with the default JSON decoder.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(JsonDecoder));
        registry
    }

    /// Registers a decoder, replacing any decoder for the same format.
    pub fn register(&mut self, decoder: Arc<dyn BodyDecoder>) {
        let format = decoder.format();
        self.decoders.retain(|existing| existing.format() != format);
        self.decoders.push(decoder);
    }

    /// Returns the decoder for the given format, when registered.
    #[must_use]
    pub fn get(&self, format: &Format) -> Option<&dyn BodyDecoder> {
        self.decoders
            .iter()
            .find(|decoder| decoder.format() == *format)
            .map(AsRef::as_ref)
    }

    /// Returns the format tokens with a registered decoder.
    #[must_use]
    pub fn formats(&self) -> Vec<Format> {
        self.decoders.iter().map(|decoder| decoder.format()).collect()
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ============================================================================
// SECTION: JSON Decoder
// ============================================================================

/// Default decoder for JSON request bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl BodyDecoder for JsonDecoder {
    fn format(&self) -> Format {
        Format::json()
    }

    fn decode(&self, body: &[u8]) -> Result<Map<String, Value>, DecodeError> {
        let value: Value = serde_json::from_slice(body).map_err(|err| DecodeError::Syntax {
            format: Format::json().as_str().to_string(),
            detail: err.to_string(),
        })?;
        match value {
            Value::Object(map) => Ok(map),
            other => Err(DecodeError::UnexpectedRoot {
                found: root_kind(&other).to_string(),
            }),
        }
    }
}

/// Names a JSON value kind for error reporting.
const fn root_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
