// crates/formbind-core/src/runtime/negotiate.rs
// ============================================================================
// Module: Formbind Format Negotiation
// Description: Decides how the request body yields field values.
// Purpose: Choose form-style or decoded-body sourcing per request.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! Negotiation is pure and never touches the body. Pre-parsed form-body
//! parameters take precedence over the Content-Type header: when they are
//! present the request is treated as form data regardless of what the header
//! claims. Query-string parameters alone do not force form; they stay a
//! fallback sourcing layer under a decoded body. A missing header degrades
//! to form, so bodyless GET-style requests resolve through parameters and
//! headers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use crate::core::Format;
use crate::core::RequestContext;
use crate::runtime::decode::DecoderRegistry;
use crate::runtime::resolver::ResolveError;

// ============================================================================
// SECTION: Negotiator
// ============================================================================

/// Pure format negotiator over a fixed supported set.
///
/// # Invariants
/// - The supported set is form plus every registered decoder format; it is
///   fixed at construction.
#[derive(Debug, Clone)]
pub struct FormatNegotiator {
    /// Format tokens accepted by this negotiator.
    supported: BTreeSet<Format>,
}

impl FormatNegotiator {
    /// Creates a negotiator supporting form plus the registry's formats.
    #[must_use]
    pub fn new(decoders: &DecoderRegistry) -> Self {
        let mut supported: BTreeSet<Format> = decoders.formats().into_iter().collect();
        supported.insert(Format::form());
        Self {
            supported,
        }
    }

    /// Negotiates the request format.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnsupportedFormat`] when the Content-Type
    /// header maps outside the supported set.
    pub fn negotiate(&self, ctx: &RequestContext) -> Result<Format, ResolveError> {
        if ctx.has_form_params() {
            return Ok(Format::form());
        }
        let Some(content_type) = ctx.content_type() else {
            return Ok(Format::form());
        };
        let format = Format::from_content_type(content_type);
        if self.supported.contains(&format) {
            Ok(format)
        } else {
            Err(ResolveError::UnsupportedFormat {
                format: format.as_str().to_string(),
            })
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
