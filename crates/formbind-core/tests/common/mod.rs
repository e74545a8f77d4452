// crates/formbind-core/tests/common/mod.rs
// ============================================================================
// Module: Shared Resolver Test Fixtures
// Description: Schemas, controllers, and resolver builders for integration tests.
// Purpose: Keep resolver test suites on one canonical fixture set.
// Dependencies: formbind-core, serde
// ============================================================================

//! ## Overview
//! Fixture schemas mirror three shapes: a simple form with a lookup-key
//! override, a complex form exercising every constraint kind, and a
//! self-describing target type registered under its own type name.

#![allow(dead_code, reason = "Each test binary uses a subset of the fixtures.")]

use std::sync::Arc;

use formbind_core::ArgumentMetadata;
use formbind_core::Constraint;
use formbind_core::ControllerId;
use formbind_core::DeclarativeSchemaFactory;
use formbind_core::DecoderRegistry;
use formbind_core::DtoResolver;
use formbind_core::FieldKind;
use formbind_core::FieldSpec;
use formbind_core::SchemaDescriptor;
use formbind_core::SchemaId;
use formbind_core::StaticMetadataReader;
use serde::Deserialize;

/// Capability contract fixture types satisfy.
pub const TARGET_MARKER: &str = "formbind.target_dto";

/// Controller associated with the simple form schema.
pub const SIMPLE_CONTROLLER: &str = "app.controller.simple";
/// Controller associated with the complex form schema.
pub const COMPLEX_CONTROLLER: &str = "app.controller.complex";
/// Controller with no declared schema association.
pub const BARE_CONTROLLER: &str = "app.controller.bare";

/// Simple form schema identifier.
pub const SIMPLE_SCHEMA: &str = "app.form.simple";
/// Complex form schema identifier.
pub const COMPLEX_SCHEMA: &str = "app.form.complex";
/// Self-describing target type name and schema identifier.
pub const SELF_DESCRIBING_TYPE: &str = "TargetDtoAsForm";

/// Typed view of the complex schema's bound data.
#[derive(Debug, PartialEq, Deserialize)]
pub struct ComplexDto {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Age in years.
    pub age: i64,
    /// Free-form tags.
    pub tags: Vec<String>,
}

/// Simple schema: two required text fields plus an optional field with a
/// wire-level lookup-key override.
pub fn simple_schema() -> SchemaDescriptor {
    SchemaDescriptor::new(SchemaId::new(SIMPLE_SCHEMA))
        .field(FieldSpec::new("foo", FieldKind::Text).constraint(Constraint::NotBlank))
        .field(FieldSpec::new("bar", FieldKind::Text).constraint(Constraint::NotBlank))
        .field(FieldSpec::new("baz", FieldKind::Text).optional().lookup_key("Baz-key"))
}

/// Complex schema exercising length, email, range, count, and element rules.
pub fn complex_schema() -> SchemaDescriptor {
    SchemaDescriptor::new(SchemaId::new(COMPLEX_SCHEMA))
        .field(
            FieldSpec::new("name", FieldKind::Text)
                .constraint(Constraint::NotBlank)
                .constraint(Constraint::Length {
                    min: Some(3),
                    max: Some(50),
                }),
        )
        .field(
            FieldSpec::new("email", FieldKind::Text)
                .constraint(Constraint::NotBlank)
                .constraint(Constraint::Email),
        )
        .field(FieldSpec::new("age", FieldKind::Integer).constraint(Constraint::Range {
            min: Some(18.0),
            max: Some(150.0),
        }))
        .field(
            FieldSpec::new("tags", FieldKind::List)
                .constraint(Constraint::Count {
                    min: Some(1),
                    max: None,
                })
                .constraint(Constraint::Each(vec![
                    Constraint::NotBlank,
                    Constraint::Length {
                        min: Some(2),
                        max: None,
                    },
                ])),
        )
}

/// Self-describing schema registered under the target type's own name.
pub fn self_describing_schema() -> SchemaDescriptor {
    SchemaDescriptor::new(SchemaId::new(SELF_DESCRIBING_TYPE))
        .field(FieldSpec::new("foo", FieldKind::Text).constraint(Constraint::NotBlank))
        .field(FieldSpec::new("bar", FieldKind::Text).constraint(Constraint::NotBlank))
}

/// Builds the canonical fixture resolver.
pub fn resolver() -> DtoResolver {
    let mut factory = DeclarativeSchemaFactory::new();
    factory.register(simple_schema());
    factory.register(complex_schema());
    factory.register(self_describing_schema());

    let mut metadata = StaticMetadataReader::new();
    metadata.associate(ControllerId::new(SIMPLE_CONTROLLER), SchemaId::new(SIMPLE_SCHEMA));
    metadata.associate(ControllerId::new(COMPLEX_CONTROLLER), SchemaId::new(COMPLEX_SCHEMA));

    DtoResolver::new(
        TARGET_MARKER,
        Arc::new(factory),
        Arc::new(metadata),
        DecoderRegistry::with_defaults(),
    )
}

/// Argument metadata for a type satisfying the target marker.
pub fn target_argument(type_name: &str) -> ArgumentMetadata {
    ArgumentMetadata::new(type_name).with_contract(TARGET_MARKER)
}
