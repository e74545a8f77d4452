// crates/formbind-config/src/config.rs
// ============================================================================
// Module: Formbind Configuration
// Description: Configuration loading and validation for formbind hosts.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits. The one
//! semantic setting is the target capability marker; everything else is an
//! operational limit with a safe default. Missing or invalid configuration
//! fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "formbind.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "FORMBIND_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;
/// Maximum length of the target marker identifier.
pub(crate) const MAX_MARKER_LENGTH: usize = 256;
/// Default request body cap in bytes.
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Default for [`ResolverConfig::max_body_bytes`].
const fn default_max_body_bytes() -> usize {
    DEFAULT_MAX_BODY_BYTES
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file does not exist at the resolved path.
    #[error("config file not found: {path}")]
    NotFound {
        /// Path that was probed.
        path: PathBuf,
    },
    /// Config file exceeds the size limit.
    #[error("config file too large: {size} bytes (limit {limit})")]
    TooLarge {
        /// Actual file size in bytes.
        size: u64,
        /// Enforced limit in bytes.
        limit: u64,
    },
    /// Config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// Config file is not valid TOML for this model.
    #[error("failed to parse config: {0}")]
    Parse(String),
    /// Config parsed but violates a semantic rule.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Canonical formbind host configuration.
///
/// # Invariants
/// - `target_marker` is non-empty and within length limits after validation.
/// - `max_body_bytes` is non-zero after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Capability contract identifier argument types must satisfy for the
    /// resolver to activate.
    pub target_marker: String,
    /// Request body cap in bytes enforced by the HTTP adapter.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl ResolverConfig {
    /// Loads configuration from an explicit path, the `FORMBIND_CONFIG`
    /// environment variable, or `formbind.toml` in the working directory,
    /// in that order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file is missing, oversized,
    /// unreadable, unparsable, or semantically invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = match path {
            Some(path) => path.to_path_buf(),
            None => env::var(CONFIG_ENV_VAR)
                .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_NAME), PathBuf::from),
        };
        if !resolved.exists() {
            return Err(ConfigError::NotFound {
                path: resolved,
            });
        }
        let size = fs::metadata(&resolved)?.len();
        if size > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::TooLarge {
                size,
                limit: MAX_CONFIG_FILE_SIZE,
            });
        }
        let raw = fs::read_to_string(&resolved)?;
        Self::from_toml_str(&raw)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing fails or a semantic rule is
    /// violated.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates semantic rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_marker.trim().is_empty() {
            return Err(ConfigError::Invalid("target_marker must not be empty".to_string()));
        }
        if self.target_marker.len() > MAX_MARKER_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "target_marker exceeds {MAX_MARKER_LENGTH} characters"
            )));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::Invalid("max_body_bytes must be non-zero".to_string()));
        }
        Ok(())
    }
}
