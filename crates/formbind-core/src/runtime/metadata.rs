// crates/formbind-core/src/runtime/metadata.rs
// ============================================================================
// Module: Formbind Metadata Registry
// Description: Static controller-to-schema association table.
// Purpose: Answer schema-association lookups without hot-path introspection.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Schema associations are declared once at startup and stored in an
//! immutable table, so lookups on the request path are plain map reads and
//! safe under concurrency. When a controller declares several associations
//! the first declared wins; the reader returns them in declaration order and
//! leaves that choice to the locator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::ControllerId;
use crate::core::SchemaId;
use crate::interfaces::MetadataReader;

// ============================================================================
// SECTION: Static Reader
// ============================================================================

/// Startup-built association table from controllers to schemas.
///
/// # Invariants
/// - Associations per controller keep declaration order.
#[derive(Debug, Clone, Default)]
pub struct StaticMetadataReader {
    /// Declared associations per controller.
    associations: BTreeMap<ControllerId, Vec<SchemaId>>,
}

impl StaticMetadataReader {
    /// Creates an empty association table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            associations: BTreeMap::new(),
        }
    }

    /// Declares a schema association on a controller's entry point.
    pub fn associate(&mut self, controller: ControllerId, schema: SchemaId) {
        self.associations.entry(controller).or_default().push(schema);
    }
}

impl MetadataReader for StaticMetadataReader {
    fn schema_associations(&self, controller: &ControllerId) -> Vec<SchemaId> {
        self.associations.get(controller).cloned().unwrap_or_default()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
