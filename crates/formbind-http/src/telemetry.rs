// crates/formbind-http/src/telemetry.rs
// ============================================================================
// Module: Resolver Telemetry
// Description: Observability hooks for argument resolution outcomes.
// Purpose: Provide metric events and latency buckets without hard deps.
// Dependencies: formbind-core
// ============================================================================

//! ## Overview
//! This module exposes a thin metrics interface for resolution counters and
//! latency histograms. It is intentionally dependency-light so downstream
//! deployments can plug in Prometheus or OpenTelemetry without redesign.
//! Outcome labels never carry request payloads or header values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use formbind_core::BoundObject;
use formbind_core::ResolveError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default latency buckets in milliseconds for resolution histograms.
pub const RESOLVE_LATENCY_BUCKETS_MS: &[u64] =
    &[1, 2, 5, 10, 25, 50, 100, 250, 500, 1_000];

// ============================================================================
// SECTION: Metric Labels
// ============================================================================

/// Resolution outcome classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ResolutionOutcome {
    /// One or more objects bound successfully.
    Resolved,
    /// The argument is not a resolution target; nothing was bound.
    NotApplicable,
    /// The controller has no schema association.
    MissingSchema,
    /// The schema factory refused the association.
    SchemaFailure,
    /// The request format has no registered decoder.
    UnsupportedFormat,
    /// The request body could not be decoded.
    MalformedPayload,
    /// Binding succeeded but validation failed.
    InvalidParams,
    /// The request was refused before resolution ran.
    Rejected,
}

impl ResolutionOutcome {
    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::NotApplicable => "not_applicable",
            Self::MissingSchema => "missing_schema",
            Self::SchemaFailure => "schema_failure",
            Self::UnsupportedFormat => "unsupported_format",
            Self::MalformedPayload => "malformed_payload",
            Self::InvalidParams => "invalid_params",
            Self::Rejected => "rejected",
        }
    }

    /// Classifies a resolution result.
    #[must_use]
    pub fn classify(result: &Result<Vec<BoundObject>, ResolveError>) -> Self {
        match result {
            Ok(bound) if bound.is_empty() => Self::NotApplicable,
            Ok(_) => Self::Resolved,
            Err(ResolveError::MissingSchemaAssociation { .. }) => Self::MissingSchema,
            Err(ResolveError::Schema(_)) => Self::SchemaFailure,
            Err(ResolveError::UnsupportedFormat { .. }) => Self::UnsupportedFormat,
            Err(ResolveError::MalformedPayload { .. }) => Self::MalformedPayload,
            Err(ResolveError::InvalidParams { .. }) => Self::InvalidParams,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Metrics sink for resolution outcomes and latencies.
pub trait ResolverMetrics: Send + Sync {
    /// Records one resolution attempt with its outcome and elapsed time.
    fn record_resolution(&self, outcome: ResolutionOutcome, elapsed: Duration);
}

/// No-op metrics sink.
///
/// # Invariants
/// - Metrics are intentionally discarded.
pub struct NoopMetrics;

impl ResolverMetrics for NoopMetrics {
    fn record_resolution(&self, _outcome: ResolutionOutcome, _elapsed: Duration) {}
}

// ============================================================================
// SECTION: Tests
// ============================================================================
