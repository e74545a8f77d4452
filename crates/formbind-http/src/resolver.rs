// crates/formbind-http/src/resolver.rs
// ============================================================================
// Module: HTTP Resolver Facade
// Description: Wires context construction, resolution, and telemetry.
// Purpose: Give hosts one entry point from request parts to bound objects.
// Dependencies: axum, bytes, formbind-config, formbind-core
// ============================================================================

//! ## Overview
//! [`HttpDtoResolver`] wraps the core resolver for HTTP hosts: it builds the
//! request snapshot from parts and the collected body, runs resolution,
//! records one telemetry observation per attempt, and surfaces failures as
//! [`HttpResolveError`], which renders directly as an axum response.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::time::Instant;

use axum::http::request::Parts;
use axum::response::IntoResponse;
use axum::response::Response;
use bytes::Bytes;
use formbind_config::ResolverConfig;
use formbind_core::ArgumentMetadata;
use formbind_core::BoundObject;
use formbind_core::DtoResolver;
use formbind_core::ResolveError;
use thiserror::Error;

use crate::context::ContextError;
use crate::context::context_from_parts;
use crate::respond::context_error_response;
use crate::respond::error_response;
use crate::telemetry::NoopMetrics;
use crate::telemetry::ResolutionOutcome;
use crate::telemetry::ResolverMetrics;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures surfaced to HTTP hosts.
#[derive(Debug, Error)]
pub enum HttpResolveError {
    /// The request could not be turned into a resolution context.
    #[error(transparent)]
    Context(#[from] ContextError),
    /// Resolution itself failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl IntoResponse for HttpResolveError {
    fn into_response(self) -> Response {
        match &self {
            Self::Context(error) => context_error_response(error).into_response(),
            Self::Resolve(error) => error_response(error).into_response(),
        }
    }
}

// ============================================================================
// SECTION: Facade
// ============================================================================

/// HTTP-facing resolver facade.
///
/// # Invariants
/// - Every call to [`HttpDtoResolver::resolve`] records exactly one
///   telemetry observation.
pub struct HttpDtoResolver {
    /// Core resolution pipeline.
    resolver: DtoResolver,
    /// Body size cap in bytes.
    max_body_bytes: usize,
    /// Telemetry sink.
    metrics: Arc<dyn ResolverMetrics>,
}

impl HttpDtoResolver {
    /// Builds a facade around a configured core resolver.
    #[must_use]
    pub fn new(resolver: DtoResolver, config: &ResolverConfig) -> Self {
        Self {
            resolver,
            max_body_bytes: config.max_body_bytes,
            metrics: Arc::new(NoopMetrics),
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<dyn ResolverMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Resolves one controller argument from request parts and the body.
    ///
    /// The body must already be collected by the host; this facade never
    /// reads a stream.
    ///
    /// # Errors
    ///
    /// Returns [`HttpResolveError::Context`] when the request cannot be
    /// snapshotted and [`HttpResolveError::Resolve`] for pipeline failures.
    pub fn resolve(
        &self,
        parts: &Parts,
        body: &Bytes,
        argument: &ArgumentMetadata,
    ) -> Result<Vec<BoundObject>, HttpResolveError> {
        let started = Instant::now();
        let ctx = match context_from_parts(parts, body, self.max_body_bytes) {
            Ok(ctx) => ctx,
            Err(error) => {
                self.metrics
                    .record_resolution(ResolutionOutcome::Rejected, started.elapsed());
                return Err(error.into());
            }
        };
        let result = self.resolver.resolve(&ctx, argument);
        self.metrics
            .record_resolution(ResolutionOutcome::classify(&result), started.elapsed());
        result.map_err(HttpResolveError::from)
    }
}
