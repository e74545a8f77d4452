// crates/formbind-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for formbind configuration. Output is deterministic and
//! kept in sync with the config model; tests parse it back through the
//! loader.

/// Returns a canonical example `formbind.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"# Capability contract argument types must satisfy for the resolver
# to activate.
target_marker = "app.request_dto"

# Request body cap in bytes enforced by the HTTP adapter.
max_body_bytes = 1048576
"#,
    )
}
