// crates/formbind-http/src/respond.rs
// ============================================================================
// Module: Error Responses
// Description: Maps resolution failures to HTTP statuses and JSON bodies.
// Purpose: Give hosts one place that turns typed errors into wire responses.
// Dependencies: axum, formbind-core, serde, serde_json
// ============================================================================

//! ## Overview
//! Resolution failures map to statuses by who is at fault: unsupported
//! formats are `415`, malformed payloads are `400`, constraint violations
//! are `422` with the full violation list, oversized bodies are `413`, and
//! wiring mistakes (missing schema association, missing route) are `500`.
//! Bodies carry a stable machine-readable `error` token plus a human
//! message.

// ============================================================================
// SECTION: Imports
// ============================================================================

use axum::Json;
use axum::http::StatusCode;
use formbind_core::ConstraintViolation;
use formbind_core::ResolveError;
use serde::Serialize;

use crate::context::ContextError;

// ============================================================================
// SECTION: Error Body
// ============================================================================

/// JSON error payload returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable error token.
    pub error: &'static str,
    /// Human-readable summary.
    pub message: String,
    /// Name of the type that failed to bind, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Constraint violations, present on validation failures.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<ConstraintViolation>,
}

impl ErrorBody {
    /// Builds a body with no type name or violations.
    fn bare(error: &'static str, message: String) -> Self {
        Self {
            error,
            message,
            type_name: None,
            violations: Vec::new(),
        }
    }
}

// ============================================================================
// SECTION: Mapping
// ============================================================================

/// Maps a resolution error to a status and JSON body.
#[must_use]
pub fn error_response(error: &ResolveError) -> (StatusCode, Json<ErrorBody>) {
    let (status, body) = match error {
        ResolveError::MissingSchemaAssociation { .. } | ResolveError::Schema(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::bare("schema_unavailable", error.to_string()),
        ),
        ResolveError::UnsupportedFormat { .. } => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ErrorBody::bare("unsupported_format", error.to_string()),
        ),
        ResolveError::MalformedPayload { .. } => (
            StatusCode::BAD_REQUEST,
            ErrorBody::bare("malformed_payload", error.to_string()),
        ),
        ResolveError::InvalidParams {
            type_name,
            violations,
        } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorBody {
                error: "invalid_params",
                message: error.to_string(),
                type_name: Some(type_name.clone()),
                violations: violations.clone(),
            },
        ),
    };
    (status, Json(body))
}

/// Maps a context construction error to a status and JSON body.
#[must_use]
pub fn context_error_response(error: &ContextError) -> (StatusCode, Json<ErrorBody>) {
    let (status, body) = match error {
        ContextError::BodyTooLarge { .. } => (
            StatusCode::PAYLOAD_TOO_LARGE,
            ErrorBody::bare("body_too_large", error.to_string()),
        ),
        ContextError::MissingRoute => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::bare("missing_route", error.to_string()),
        ),
    };
    (status, Json(body))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions are permitted."
    )]

    use formbind_core::ControllerId;
    use serde_json::json;

    use super::*;

    #[test]
    fn unsupported_format_maps_to_415() {
        let error = ResolveError::UnsupportedFormat {
            format: "yaml".to_string(),
        };
        let (status, Json(body)) = error_response(&error);
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body.error, "unsupported_format");
    }

    #[test]
    fn malformed_payload_maps_to_400() {
        let error = ResolveError::MalformedPayload {
            detail: "expected value at line 1".to_string(),
        };
        let (status, Json(body)) = error_response(&error);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "malformed_payload");
    }

    #[test]
    fn invalid_params_maps_to_422_with_violations() {
        let error = ResolveError::InvalidParams {
            type_name: "ComplexDto".to_string(),
            violations: vec![ConstraintViolation {
                path: "email".to_string(),
                message: "must be a valid email address".to_string(),
                invalid_value: json!("nope"),
            }],
        };
        let (status, Json(body)) = error_response(&error);
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.type_name.as_deref(), Some("ComplexDto"));
        assert_eq!(body.violations.len(), 1);
        assert_eq!(body.violations[0].path, "email");
    }

    #[test]
    fn missing_association_maps_to_500() {
        let error = ResolveError::MissingSchemaAssociation {
            controller: ControllerId::new("app.controller.bare"),
        };
        let (status, Json(body)) = error_response(&error);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "schema_unavailable");
    }

    #[test]
    fn oversized_body_maps_to_413() {
        let error = ContextError::BodyTooLarge { size: 64, limit: 16 };
        let (status, Json(body)) = context_error_response(&error);
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body.error, "body_too_large");
    }

    #[test]
    fn violation_list_serializes_into_body() {
        let body = ErrorBody {
            error: "invalid_params",
            message: "validation failed".to_string(),
            type_name: Some("SimpleDto".to_string()),
            violations: vec![ConstraintViolation {
                path: "foo".to_string(),
                message: "must not be blank".to_string(),
                invalid_value: json!(""),
            }],
        };
        let rendered = serde_json::to_value(&body).expect("serialize");
        assert_eq!(rendered["error"], "invalid_params");
        assert_eq!(rendered["violations"][0]["path"], "foo");
    }

    #[test]
    fn empty_violation_list_is_omitted() {
        let body = ErrorBody::bare("malformed_payload", "bad json".to_string());
        let rendered = serde_json::to_value(&body).expect("serialize");
        assert!(rendered.get("violations").is_none());
        assert!(rendered.get("type_name").is_none());
    }
}
