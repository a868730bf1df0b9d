//! Unit tests for the module access guard's error routing.
#![expect(
    clippy::expect_used,
    reason = "tests panic when a recorded event lock is poisoned"
)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rstest::{fixture, rstest};

use super::*;
use crate::host::StaticModule;
use crate::meta::TypeInfo;

struct FailingHost;

impl ModuleHost for FailingHost {
    fn modules(&self) -> Result<Vec<ModuleRef>, BoxError> {
        Err("module table unavailable".into())
    }
}

struct PartialModule {
    loaded: Vec<TypeRef>,
}

impl Module for PartialModule {
    fn name(&self) -> &str {
        "partial"
    }

    fn types(&self) -> Result<Vec<TypeRef>, TypeLoadFailure> {
        Err(TypeLoadFailure::partial(self.loaded.clone(), "missing dependency"))
    }
}

#[fixture]
fn partial_module() -> PartialModule {
    PartialModule {
        loaded: vec![Arc::new(TypeInfo::new("app", "Survivor"))],
    }
}

fn counting_guard(mode: ErrorHandlingMode, counter: &Arc<AtomicUsize>) -> ModuleGuard {
    let types = Arc::clone(counter);
    let modules = Arc::clone(counter);
    ModuleGuard::builder(FailingHost)
        .mode(mode)
        .on_type_load_error(move |_| {
            types.fetch_add(1, Ordering::SeqCst);
        })
        .on_module_load_error(move |_| {
            modules.fetch_add(1, Ordering::SeqCst);
        })
        .build()
}

#[rstest]
fn absent_module_yields_no_types() {
    let guard = ModuleGuard::builder(FailingHost)
        .mode(ErrorHandlingMode::Throw)
        .build();
    let types = guard.list_types(None).expect("absent module is not a failure");
    assert!(types.is_empty());
}

#[rstest]
fn healthy_module_lists_every_type() {
    let guard = ModuleGuard::new(FailingHost);
    let module = StaticModule::new("app")
        .with_type_info(TypeInfo::new("app", "A"))
        .with_type_info(TypeInfo::new("app", "B"));
    let types = guard.list_types(Some(&module)).expect("static modules never fail");
    let names: Vec<_> = types.iter().map(|info| info.name().to_owned()).collect();
    assert_eq!(names, ["A", "B"]);
}

#[rstest]
#[case::silent(ErrorHandlingMode::Silent, 0)]
#[case::raise_event(ErrorHandlingMode::RaiseEvent, 1)]
fn partial_types_survive_outside_throw(
    partial_module: PartialModule,
    #[case] mode: ErrorHandlingMode,
    #[case] expected_events: usize,
) {
    let counter = Arc::new(AtomicUsize::new(0));
    let guard = counting_guard(mode, &counter);
    let types = guard
        .list_types(Some(&partial_module))
        .expect("non-throwing modes never fail");
    assert_eq!(types.len(), 1);
    assert_eq!(counter.load(Ordering::SeqCst), expected_events);
}

#[rstest]
fn throw_mode_returns_type_failure(partial_module: PartialModule) {
    let counter = Arc::new(AtomicUsize::new(0));
    let guard = counting_guard(ErrorHandlingMode::Throw, &counter);
    let err = guard
        .list_types(Some(&partial_module))
        .expect_err("throw mode propagates");
    assert!(matches!(
        err.as_ref(),
        StarterError::TypeEnumeration { module, loaded: 1, .. } if module == "partial"
    ));
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[rstest]
#[case::silent(ErrorHandlingMode::Silent, 0)]
#[case::raise_event(ErrorHandlingMode::RaiseEvent, 1)]
fn module_list_failure_yields_empty(#[case] mode: ErrorHandlingMode, #[case] expected_events: usize) {
    let counter = Arc::new(AtomicUsize::new(0));
    let guard = counting_guard(mode, &counter);
    let modules = guard.list_modules().expect("non-throwing modes never fail");
    assert!(modules.is_empty());
    assert_eq!(counter.load(Ordering::SeqCst), expected_events);
}

#[rstest]
fn module_list_failure_throws() {
    let guard = ModuleGuard::builder(FailingHost)
        .mode(ErrorHandlingMode::Throw)
        .build();
    let err = guard.list_modules().err().expect("throw mode propagates");
    assert!(matches!(err.as_ref(), StarterError::ModuleEnumeration { .. }));
    assert_eq!(
        err.to_string(),
        "failed to enumerate loaded modules: module table unavailable"
    );
}

#[rstest]
fn events_carry_module_and_failure(partial_module: PartialModule) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut guard = ModuleGuard::new(FailingHost);
    guard.set_mode(ErrorHandlingMode::RaiseEvent);
    guard.on_type_load_error(move |event| {
        sink.lock().expect("event lock").push(format!(
            "{}:{}:{}",
            event.module().name(),
            event.loaded(),
            event.error()
        ));
    });
    let _types = guard.list_types(Some(&partial_module));
    let recorded = seen.lock().expect("event lock").clone();
    assert_eq!(recorded, ["partial:1:missing dependency"]);
}

#[rstest]
fn mode_change_applies_to_later_calls(partial_module: PartialModule) {
    let mut guard = ModuleGuard::new(FailingHost);
    assert!(guard.list_types(Some(&partial_module)).is_ok());
    guard.set_mode(ErrorHandlingMode::Throw);
    assert!(guard.list_types(Some(&partial_module)).is_err());
}

#[rstest]
#[case("silent", ErrorHandlingMode::Silent)]
#[case("raise-event", ErrorHandlingMode::RaiseEvent)]
#[case("throw", ErrorHandlingMode::Throw)]
fn modes_parse_from_cli_values(#[case] raw: &str, #[case] expected: ErrorHandlingMode) {
    let parsed = ErrorHandlingMode::from_str(raw, false).expect("known mode");
    assert_eq!(parsed, expected);
}
