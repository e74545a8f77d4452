// crates/formbind-http/src/lib.rs
// ============================================================================
// Module: Formbind HTTP Library
// Description: HTTP adapter for the formbind resolver.
// Purpose: Bridge http requests into resolution and errors into responses.
// Dependencies: axum, formbind-core, formbind-config
// ============================================================================

//! ## Overview
//! `formbind-http` owns everything HTTP-specific: building the read-only
//! request snapshot from request parts and a collected body, translating
//! resolver errors into status codes with a stable JSON error body, and a
//! dependency-light telemetry seam. The core resolver stays transport-
//! agnostic; hosts on other transports can skip this crate entirely.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod context;
pub mod respond;
pub mod resolver;
pub mod telemetry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use context::ContextError;
pub use context::ControllerRoute;
pub use context::context_from_parts;
pub use resolver::HttpDtoResolver;
pub use resolver::HttpResolveError;
pub use respond::ErrorBody;
pub use respond::context_error_response;
pub use respond::error_response;
pub use telemetry::NoopMetrics;
pub use telemetry::ResolutionOutcome;
pub use telemetry::ResolverMetrics;
