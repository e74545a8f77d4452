// crates/formbind-core/src/core/format.rs
// ============================================================================
// Module: Formbind Request Formats
// Description: Format tokens and content-type mapping.
// Purpose: Translate Content-Type headers into stable format tokens.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A format is a short lowercase token (`form`, `json`, ...). The mapping
//! from a Content-Type header is pure: media-type parameters are stripped,
//! structured-syntax suffixes (`+json`, `+xml`) are honored, and unknown
//! types fall back to their subtype token so the rejection carries a
//! meaningful name. The supported set is decided elsewhere, by decoder
//! registration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Format Token
// ============================================================================

/// Negotiated request format token.
///
/// # Invariants
/// - Tokens are lowercase; comparison is exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Format(String);

impl Format {
    /// Creates a format token, lowercasing the input.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().to_ascii_lowercase())
    }

    /// The form format: fields arrive pre-parsed as parameters.
    #[must_use]
    pub fn form() -> Self {
        Self("form".to_string())
    }

    /// The JSON format: fields arrive in an encoded body object.
    #[must_use]
    pub fn json() -> Self {
        Self("json".to_string())
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when this is the form format.
    #[must_use]
    pub fn is_form(&self) -> bool {
        self.0 == "form"
    }

    /// Maps a Content-Type header value to a format token.
    ///
    /// Media-type parameters after `;` are stripped. Known types map to
    /// their canonical token, structured-syntax suffixes map to the suffix
    /// token, and anything else maps to its subtype (with any `x-` prefix
    /// removed) so unsupported-format errors carry a recognizable name.
    #[must_use]
    pub fn from_content_type(content_type: &str) -> Self {
        let media_type = content_type
            .split(';')
            .next()
            .unwrap_or(content_type)
            .trim()
            .to_ascii_lowercase();
        let token = match media_type.as_str() {
            "application/x-www-form-urlencoded" | "multipart/form-data" => "form",
            "application/json" | "application/x-json" | "text/json" => "json",
            "application/xml" | "application/x-xml" | "text/xml" => "xml",
            "text/html" | "application/xhtml+xml" => "html",
            "text/plain" => "txt",
            other => {
                if let Some(suffix) = other.rsplit_once('+').map(|(_, suffix)| suffix) {
                    suffix
                } else if let Some(subtype) = other.rsplit_once('/').map(|(_, subtype)| subtype) {
                    subtype.strip_prefix("x-").unwrap_or(subtype)
                } else {
                    other
                }
            }
        };
        Self(token.to_string())
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
