//! End-to-end assembly of a command line from discovered containers.
#![expect(clippy::expect_used, reason = "tests panic on unexpected outcomes")]

use cmd_starter::{
    CommandNode, ErrorHandlingMode, GlobalOptionsManager, InclusionFilter, Marker, MarkerKind,
    Markers, MethodInfo, ModuleGuard, ParameterInfo, PropertyInfo, Reflect, TypeInfo, Value,
    ValueType, load_arguments, load_options, synthesize_arguments, synthesize_options,
};
use test_helpers::events::EventRecorder;
use test_helpers::hosts::{FakeHost, FakeModule};
use test_helpers::markers::FailingMarkers;
use rstest::{fixture, rstest};

#[derive(Debug, PartialEq, Reflect)]
#[starter(global, namespace = "app::opts")]
struct Output {
    /// Suppress progress output.
    #[starter(alias = "-q")]
    quiet: bool,
}

fn int() -> ValueType {
    ValueType::Integer {
        bits: 32,
        signed: true,
    }
}

#[fixture]
fn host() -> FakeHost {
    FakeHost::new()
        .with_module(FakeModule::ok(
            "app",
            vec![
                Output::type_info(),
                TypeInfo::new("app::commands", "DeployOptions"),
            ],
        ))
        .with_module(FakeModule::ok(
            "vendor",
            vec![TypeInfo::new("vendor::opts", "Telemetry").global().with_property(
                PropertyInfo::new("Endpoint", ValueType::String),
            )],
        ))
        .with_module(FakeModule::failing("broken", "cannot load"))
}

fn run_method() -> MethodInfo {
    MethodInfo::new("Run")
        .with_parameter(ParameterInfo::new("target", ValueType::String))
        .with_parameter(ParameterInfo::new("attempts", int()).with_default(3))
}

#[rstest]
fn name_and_retries_become_options() {
    let info = TypeInfo::new("app::commands", "DeployOptions")
        .with_property(PropertyInfo::new("Name", ValueType::String))
        .with_property(
            PropertyInfo::new("Retries", ValueType::list(int())).with_markers(vec![Marker::Required]),
        );
    let options = synthesize_options(&info).expect("supported types");
    let shape: Vec<(&str, bool, bool)> = options
        .iter()
        .map(|option| (option.name.as_str(), option.required, option.multiple))
        .collect();
    assert_eq!(shape, [("--name", false, false), ("--retries", true, true)]);
}

#[rstest]
fn handler_parameters_become_positionals() {
    let arguments = synthesize_arguments(&run_method()).expect("supported types");
    let shape: Vec<(&str, Option<&Value>)> = arguments
        .iter()
        .map(|argument| (argument.name.as_str(), argument.default.as_ref()))
        .collect();
    assert_eq!(shape, [("target", None), ("attempts", Some(&Value::Int(3)))]);
}

#[rstest]
fn failing_description_lookup_keeps_the_option() {
    let markers = FailingMarkers::new(
        vec![Marker::Required, Marker::Hidden, Marker::description("lost")],
        [MarkerKind::Description],
    );
    let info = TypeInfo::new("app", "Opts").with_property(
        PropertyInfo::new("DryRun", ValueType::Bool).with_markers(Markers::new(markers)),
    );
    let options = synthesize_options(&info).expect("lookup failures are not errors");
    let option = options.first().expect("one option");
    assert_eq!(option.name, "--dry-run");
    assert_eq!(option.value_type, ValueType::Bool);
    assert!(option.required && option.hidden);
    assert!(option.description.is_empty());
}

#[rstest]
fn every_lookup_failing_still_yields_a_plain_option() {
    let info = TypeInfo::new("app", "Opts").with_property(
        PropertyInfo::new("Region", ValueType::String)
            .with_markers(Markers::new(FailingMarkers::always())),
    );
    let options = synthesize_options(&info).expect("lookup failures are not errors");
    let option = options.first().expect("one option");
    assert_eq!(option.name, "--region");
    assert!(!option.required && !option.hidden);
    assert!(option.aliases.is_empty() && option.completions.is_empty());
}

#[rstest]
fn discovered_globals_reach_every_subcommand(host: FakeHost) {
    let recorder = EventRecorder::default();
    let mut guard = ModuleGuard::builder(host.clone())
        .mode(ErrorHandlingMode::RaiseEvent)
        .build();
    recorder.attach(&mut guard);

    let mut manager = GlobalOptionsManager::new();
    let kept = manager
        .filter_types(&guard, &InclusionFilter::new().namespace("app"))
        .expect("raise-event mode does not fail");
    assert_eq!(kept.len(), 1);
    assert_eq!(recorder.type_events().len(), 1);

    let mut deploy = CommandNode::new("deploy");
    load_arguments(&run_method(), &mut deploy).expect("supported types");
    let mut root = CommandNode::new("app").with_subcommand(deploy);
    assert_eq!(manager.load_options(&mut root).expect("supported types"), 1);

    let matches = root
        .to_clap()
        .expect("renderable")
        .try_get_matches_from(["app", "deploy", "prod", "-q"])
        .expect("valid command line");
    let deploy_matches = matches.subcommand_matches("deploy").expect("deploy");
    assert!(deploy_matches.get_flag("quiet"));
    assert_eq!(deploy_matches.get_one::<String>("target").map(String::as_str), Some("prod"));
    assert_eq!(deploy_matches.get_one::<i64>("attempts"), Some(&3));

    manager.set_global_options(Output {
        quiet: deploy_matches.get_flag("quiet"),
    });
    assert_eq!(
        manager.get_global_options::<Output>(),
        Some(&Output { quiet: true })
    );
    assert_eq!(host.module_calls(), 1);
}

#[rstest]
fn local_types_attach_as_local_options() {
    let mut node = CommandNode::new("deploy");
    let info = TypeInfo::new("app::commands", "DeployOptions")
        .with_property(PropertyInfo::new("Force", ValueType::Bool));
    assert_eq!(load_options(&info, &mut node).expect("supported types"), 1);
    assert!(node.global_options().is_empty());
    assert!(node.find_option("--force").is_some());
}
