//! Unit tests for memoised type discovery.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;

use super::*;
use crate::host::{Module, ModuleHost, ModuleRef, StaticHost, StaticModule, TypeLoadFailure};
use crate::meta::TypeInfo;
use crate::{BoxError, ErrorHandlingMode};

/// Host that counts how often it is asked for modules.
struct CountingHost {
    calls: Arc<AtomicUsize>,
    inner: StaticHost,
}

impl ModuleHost for CountingHost {
    fn modules(&self) -> Result<Vec<ModuleRef>, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.modules()
    }
}

struct BrokenModule;

impl Module for BrokenModule {
    fn name(&self) -> &str {
        "broken"
    }

    fn types(&self) -> Result<Vec<TypeRef>, TypeLoadFailure> {
        Err(TypeLoadFailure::total("corrupt metadata"))
    }
}

fn sample_host() -> StaticHost {
    StaticHost::new()
        .with_module(
            StaticModule::new("app")
                .with_type_info(TypeInfo::new("app::opts", "Verbosity").global())
                .with_type_info(TypeInfo::new("app::commands", "Deploy")),
        )
        .with_module(BrokenModule)
        .with_module(
            StaticModule::new("plugin")
                .with_type_info(TypeInfo::new("plugin::opts", "Proxy").global())
                .with_type_info(TypeInfo::new("app::opts", "Verbosity").global()),
        )
}

fn names(found: &CandidateTypes) -> Vec<String> {
    found.iter().map(|info| info.full_name()).collect()
}

#[rstest]
fn keeps_only_unique_global_containers() -> Result<()> {
    let guard = ModuleGuard::new(sample_host());
    let discovery = TypeDiscovery::new();
    let found = discovery.discover(&guard).map_err(|err| anyhow!("{err}"))?;
    ensure!(
        names(found) == ["app::opts::Verbosity", "plugin::opts::Proxy"],
        "unexpected candidates: {:?}",
        names(found)
    );
    Ok(())
}

#[rstest]
fn scans_once() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let guard = ModuleGuard::new(CountingHost {
        calls: Arc::clone(&calls),
        inner: sample_host(),
    });
    let discovery = TypeDiscovery::new();
    ensure!(!discovery.is_computed(), "nothing runs before first use");
    let first = discovery.discover(&guard).map_err(|err| anyhow!("{err}"))?.clone();
    let second = discovery.discover(&guard).map_err(|err| anyhow!("{err}"))?;
    ensure!(&first == second, "memoised result must not change");
    ensure!(calls.load(Ordering::SeqCst) == 1, "host consulted more than once");
    Ok(())
}

#[rstest]
fn throw_failure_is_reported_once_and_cached_empty() {
    let guard = ModuleGuard::builder(sample_host())
        .mode(ErrorHandlingMode::Throw)
        .build();
    let discovery = TypeDiscovery::new();
    assert!(discovery.discover(&guard).is_err());
    let retry = discovery.discover(&guard);
    assert!(matches!(retry, Ok(found) if found.is_empty()));
}

#[rstest]
fn computed_empty_differs_from_not_computed() {
    let guard = ModuleGuard::new(StaticHost::new());
    let discovery = TypeDiscovery::new();
    assert!(discovery.cached().is_none());
    assert!(matches!(discovery.discover(&guard), Ok(found) if found.is_empty()));
    assert!(discovery.cached().is_some());
}
