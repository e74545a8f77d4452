// crates/formbind-http/tests/http_mapping.rs
// ============================================================================
// Module: HTTP Mapping Integration Tests
// Description: End-to-end coverage of the HTTP resolver facade.
// Purpose: Verify request snapshotting, status mapping, and telemetry.
// Dependencies: axum, bytes, formbind-config, formbind-core, formbind-http
// ============================================================================

//! ## Overview
//! These tests drive [`HttpDtoResolver`] with real request parts: requests
//! bind through the facade, failures map to the documented statuses, and
//! every attempt records exactly one telemetry observation.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "Test-only assertions are permitted."
)]

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use axum::http::Request;
use axum::http::StatusCode;
use axum::http::request::Parts;
use bytes::Bytes;
use formbind_config::ResolverConfig;
use formbind_core::ArgumentMetadata;
use formbind_core::Constraint;
use formbind_core::ControllerId;
use formbind_core::DeclarativeSchemaFactory;
use formbind_core::DecoderRegistry;
use formbind_core::DtoResolver;
use formbind_core::FieldKind;
use formbind_core::FieldSpec;
use formbind_core::ResolveError;
use formbind_core::SchemaDescriptor;
use formbind_core::SchemaId;
use formbind_core::StaticMetadataReader;
use formbind_http::ContextError;
use formbind_http::ControllerRoute;
use formbind_http::HttpDtoResolver;
use formbind_http::HttpResolveError;
use formbind_http::ResolutionOutcome;
use formbind_http::ResolverMetrics;
use formbind_http::error_response;
use serde_json::json;

/// Capability contract fixture arguments satisfy.
const TARGET_MARKER: &str = "formbind.target_dto";
/// Controller associated with the signup schema.
const SIGNUP_CONTROLLER: &str = "app.controller.signup";
/// Signup schema identifier.
const SIGNUP_SCHEMA: &str = "app.form.signup";

/// Telemetry sink that records every observation.
#[derive(Default)]
struct RecordingMetrics {
    /// Recorded outcomes in call order.
    outcomes: Mutex<Vec<ResolutionOutcome>>,
}

impl ResolverMetrics for RecordingMetrics {
    fn record_resolution(&self, outcome: ResolutionOutcome, _elapsed: Duration) {
        self.outcomes.lock().expect("metrics lock").push(outcome);
    }
}

fn signup_schema() -> SchemaDescriptor {
    SchemaDescriptor::new(SchemaId::new(SIGNUP_SCHEMA))
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
            max: None,
        }))
}

fn core_resolver() -> DtoResolver {
    let mut factory = DeclarativeSchemaFactory::new();
    factory.register(signup_schema());

    let mut metadata = StaticMetadataReader::new();
    metadata.associate(ControllerId::new(SIGNUP_CONTROLLER), SchemaId::new(SIGNUP_SCHEMA));

    DtoResolver::new(
        TARGET_MARKER,
        Arc::new(factory),
        Arc::new(metadata),
        DecoderRegistry::with_defaults(),
    )
}

fn facade(metrics: Arc<RecordingMetrics>) -> HttpDtoResolver {
    let config = ResolverConfig {
        target_marker: TARGET_MARKER.to_string(),
        max_body_bytes: 1024,
    };
    HttpDtoResolver::new(core_resolver(), &config).with_metrics(metrics)
}

fn target_argument() -> ArgumentMetadata {
    ArgumentMetadata::new("SignupDto").with_contract(TARGET_MARKER)
}

fn request_parts(uri: &str, content_type: Option<&str>, route: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    if let Some(controller) = route {
        builder = builder.extension(ControllerRoute(ControllerId::new(controller)));
    }
    let (parts, ()) = builder.body(()).expect("request").into_parts();
    parts
}

#[test]
fn json_request_binds_through_the_facade() {
    let metrics = Arc::new(RecordingMetrics::default());
    let facade = facade(Arc::clone(&metrics));
    let parts = request_parts("/signup", Some("application/json"), Some(SIGNUP_CONTROLLER));
    let body = Bytes::from(
        serde_json::to_vec(&json!({
            "name": "John Doe",
            "email": "john@example.com",
            "age": 25,
        }))
        .expect("body"),
    );

    let bound = facade.resolve(&parts, &body, &target_argument()).expect("resolution");

    assert_eq!(bound.len(), 1);
    assert_eq!(bound[0].type_name(), "SignupDto");
    assert_eq!(bound[0].data()["age"], json!(25));
    assert_eq!(
        *metrics.outcomes.lock().expect("metrics lock"),
        vec![ResolutionOutcome::Resolved]
    );
}

#[test]
fn urlencoded_form_body_binds_with_coercion() {
    let metrics = Arc::new(RecordingMetrics::default());
    let facade = facade(Arc::clone(&metrics));
    let parts = request_parts(
        "/signup",
        Some("application/x-www-form-urlencoded"),
        Some(SIGNUP_CONTROLLER),
    );
    let body = Bytes::from_static(b"name=John+Doe&email=john%40example.com&age=25");

    let bound = facade.resolve(&parts, &body, &target_argument()).expect("resolution");

    assert_eq!(bound[0].data()["name"], json!("John Doe"));
    assert_eq!(bound[0].data()["age"], json!(25));
}

#[test]
fn non_target_argument_resolves_to_nothing() {
    let metrics = Arc::new(RecordingMetrics::default());
    let facade = facade(Arc::clone(&metrics));
    let parts = request_parts("/signup", None, Some(SIGNUP_CONTROLLER));
    let argument = ArgumentMetadata::new("PlainArgument");

    let bound = facade.resolve(&parts, &Bytes::new(), &argument).expect("resolution");

    assert!(bound.is_empty());
    assert_eq!(
        *metrics.outcomes.lock().expect("metrics lock"),
        vec![ResolutionOutcome::NotApplicable]
    );
}

#[test]
fn validation_failure_surfaces_as_422_with_violations() {
    let metrics = Arc::new(RecordingMetrics::default());
    let facade = facade(Arc::clone(&metrics));
    let parts = request_parts("/signup", Some("application/json"), Some(SIGNUP_CONTROLLER));
    let body = Bytes::from(
        serde_json::to_vec(&json!({
            "name": "Jo",
            "email": "not-an-email",
            "age": 12,
        }))
        .expect("body"),
    );

    let error = facade.resolve(&parts, &body, &target_argument()).unwrap_err();

    let HttpResolveError::Resolve(resolve_error) = &error else {
        panic!("expected a resolution error, got {error:?}");
    };
    let ResolveError::InvalidParams {
        type_name,
        violations,
    } = resolve_error
    else {
        panic!("expected invalid params, got {resolve_error:?}");
    };
    assert_eq!(type_name, "SignupDto");
    let paths: Vec<&str> = violations.iter().map(|violation| violation.path.as_str()).collect();
    assert!(paths.contains(&"name"));
    assert!(paths.contains(&"email"));
    assert!(paths.contains(&"age"));
    let (status, _body) = error_response(resolve_error);
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        *metrics.outcomes.lock().expect("metrics lock"),
        vec![ResolutionOutcome::InvalidParams]
    );
}

#[test]
fn unsupported_media_type_surfaces_as_415() {
    let metrics = Arc::new(RecordingMetrics::default());
    let facade = facade(Arc::clone(&metrics));
    let parts = request_parts("/signup", Some("application/yaml"), Some(SIGNUP_CONTROLLER));
    let body = Bytes::from_static(b"name: John");

    let error = facade.resolve(&parts, &body, &target_argument()).unwrap_err();

    assert!(matches!(
        error,
        HttpResolveError::Resolve(ResolveError::UnsupportedFormat { ref format }) if format == "yaml"
    ));
    assert_eq!(
        *metrics.outcomes.lock().expect("metrics lock"),
        vec![ResolutionOutcome::UnsupportedFormat]
    );
}

#[test]
fn malformed_json_surfaces_as_400() {
    let metrics = Arc::new(RecordingMetrics::default());
    let facade = facade(Arc::clone(&metrics));
    let parts = request_parts("/signup", Some("application/json"), Some(SIGNUP_CONTROLLER));
    let body = Bytes::from_static(b"{\"name\": ");

    let error = facade.resolve(&parts, &body, &target_argument()).unwrap_err();

    assert!(matches!(
        error,
        HttpResolveError::Resolve(ResolveError::MalformedPayload { .. })
    ));
    assert_eq!(
        *metrics.outcomes.lock().expect("metrics lock"),
        vec![ResolutionOutcome::MalformedPayload]
    );
}

#[test]
fn oversized_body_is_rejected_before_resolution() {
    let metrics = Arc::new(RecordingMetrics::default());
    let facade = facade(Arc::clone(&metrics));
    let parts = request_parts("/signup", Some("application/json"), Some(SIGNUP_CONTROLLER));
    let body = Bytes::from(vec![b'x'; 2048]);

    let error = facade.resolve(&parts, &body, &target_argument()).unwrap_err();

    assert!(matches!(
        error,
        HttpResolveError::Context(ContextError::BodyTooLarge { size: 2048, limit: 1024 })
    ));
    assert_eq!(
        *metrics.outcomes.lock().expect("metrics lock"),
        vec![ResolutionOutcome::Rejected]
    );
}

#[test]
fn missing_route_extension_is_rejected() {
    let metrics = Arc::new(RecordingMetrics::default());
    let facade = facade(Arc::clone(&metrics));
    let parts = request_parts("/signup", Some("application/json"), None);

    let error = facade.resolve(&parts, &Bytes::new(), &target_argument()).unwrap_err();

    assert!(matches!(error, HttpResolveError::Context(ContextError::MissingRoute)));
}

#[test]
fn query_params_fill_fields_on_empty_body() {
    let metrics = Arc::new(RecordingMetrics::default());
    let facade = facade(Arc::clone(&metrics));
    let parts = request_parts(
        "/signup?name=John+Doe&email=john%40example.com&age=30",
        None,
        Some(SIGNUP_CONTROLLER),
    );

    let bound = facade
        .resolve(&parts, &Bytes::new(), &target_argument())
        .expect("resolution");

    assert_eq!(bound[0].data()["name"], json!("John Doe"));
    assert_eq!(bound[0].data()["age"], json!(30));
}
