// crates/formbind-config/src/lib.rs
// ============================================================================
// Module: Formbind Config Library
// Description: Canonical config model and validation for formbind.
// Purpose: Single source of truth for formbind.toml semantics.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! `formbind-config` defines the canonical configuration model for formbind
//! hosts: the target capability marker that activates the resolver and the
//! operational limits the HTTP adapter enforces. Loading is strict and fails
//! closed: unknown keys, oversized files, and empty markers are refused.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::ConfigError;
pub use config::ResolverConfig;
pub use examples::config_toml_example;
