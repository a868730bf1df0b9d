//! Unit tests for the metadata model.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;

use super::*;

#[rstest]
#[case::nested("app::commands", "Deploy", "app::commands::Deploy")]
#[case::root("", "Deploy", "Deploy")]
fn full_name_joins_namespace(#[case] namespace: &str, #[case] name: &str, #[case] expected: &str) {
    assert_eq!(TypeInfo::new(namespace, name).full_name(), expected);
}

#[rstest]
fn identity_ignores_properties() {
    let bare = TypeInfo::new("app", "Opts");
    let rich = TypeInfo::new("app", "Opts").with_property(PropertyInfo::new("Name", ValueType::String));
    assert_eq!(bare, rich);
    assert_ne!(bare, TypeInfo::new("other", "Opts"));
}

#[rstest]
fn capabilities_are_recorded_once() {
    let info = TypeInfo::new("app", "Opts").global().global();
    assert_eq!(info.capabilities(), &[Capability::GlobalOptionsContainer]);
    assert!(info.is_global_options_container());
    assert!(!TypeInfo::new("app", "Plain").is_global_options_container());
}

#[rstest]
fn vec_provider_filters_by_kind() -> Result<()> {
    let markers = Markers::from(vec![
        Marker::description("first"),
        Marker::Required,
        Marker::description("second"),
    ]);
    let found = markers.lookup(MarkerKind::Description).map_err(|err| anyhow!("{err}"))?;
    ensure!(found.len() == 2, "expected two description markers");
    ensure!(
        matches!(found.first(), Some(Marker::Description(text)) if text == "first"),
        "declaration order must be preserved"
    );
    ensure!(markers.lookup(MarkerKind::Hidden).map_err(|err| anyhow!("{err}"))?.is_empty(), "no hidden marker declared");
    Ok(())
}

#[rstest]
fn static_completions_filter_by_prefix() {
    let source = CompletionSource::from_values(["staging", "stable", "prod"]);
    assert_eq!(source.complete("st"), vec!["staging", "stable"]);
    assert!(source.complete("x").is_empty());
}

#[rstest]
#[case::scalar(ValueType::Integer { bits: 32, signed: true }, true)]
#[case::list(ValueType::list(ValueType::Path), true)]
#[case::nested_list(ValueType::list(ValueType::list(ValueType::String)), false)]
#[case::custom(ValueType::Custom { name: "Shape".into() }, false)]
#[case::list_of_custom(ValueType::list(ValueType::Custom { name: "Shape".into() }), false)]
fn supported_value_types(#[case] value_type: ValueType, #[case] expected: bool) {
    assert_eq!(value_type.is_supported(), expected);
}

#[rstest]
#[case(ValueType::Integer { bits: 64, signed: false }, "u64")]
#[case(ValueType::list(ValueType::Float { bits: 64 }), "list<f64>")]
#[case(ValueType::Custom { name: "Shape".into() }, "Shape")]
fn value_types_render_compactly(#[case] value_type: ValueType, #[case] expected: &str) {
    assert_eq!(value_type.to_string(), expected);
}

#[rstest]
fn list_defaults_render_per_element() {
    let value = Value::from(vec![1, 2, 3]);
    assert_eq!(value.to_string(), "1,2,3");
    assert_eq!(value.to_strings(), vec!["1", "2", "3"]);
    assert_eq!(Value::from("x").to_strings(), vec!["x"]);
}

#[rstest]
fn value_types_serialise_for_tooling() -> Result<()> {
    let json = serde_json::to_value(ValueType::list(ValueType::Integer { bits: 32, signed: true }))?;
    ensure!(
        json == serde_json::json!({ "List": { "of": { "Integer": { "bits": 32, "signed": true } } } }),
        "unexpected serialisation: {json}"
    );
    Ok(())
}
