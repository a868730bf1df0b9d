//! Unit tests for error rendering and classification.

use std::error::Error as _;

use rstest::rstest;

use super::StarterError;

#[rstest]
fn type_enumeration_renders_module_and_count() {
    let err = StarterError::type_enumeration("app.plugins", 2, "missing dependency".into());
    assert_eq!(
        err.to_string(),
        "failed to enumerate types of module 'app.plugins' (2 loaded): missing dependency"
    );
    assert!(err.source().is_some());
}

#[rstest]
#[case::modules(StarterError::module_enumeration("host unavailable"), true)]
#[case::types(StarterError::type_enumeration("m", 0, "boom".into()), true)]
#[case::conflict(StarterError::flag_conflict("app", "--help"), false)]
#[case::unsupported(StarterError::unsupported_value_type("Opts", "Shape", "Custom(Shape)"), false)]
fn classifies_discovery_failures(#[case] err: StarterError, #[case] expected: bool) {
    assert_eq!(err.is_discovery_failure(), expected);
}

#[rstest]
fn unsupported_value_type_names_member() {
    let err = StarterError::unsupported_value_type("Opts", "Shape", "Custom(Shape)");
    assert_eq!(
        err.to_string(),
        "unsupported option type 'Custom(Shape)' for 'Opts.Shape'"
    );
}

#[rstest]
fn flag_conflict_names_command_and_flag() {
    let err = StarterError::flag_conflict("deploy", "-h");
    assert_eq!(
        err.to_string(),
        "'-h' is declared more than once on command 'deploy'"
    );
}
