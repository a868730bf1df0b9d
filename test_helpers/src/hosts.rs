//! Fake module hosts for exercising discovery failure paths.
//!
//! # Examples
//!
//! ```
//! use cmd_starter::{ModuleGuard, TypeInfo};
//! use cmd_starter_test_helpers::hosts::{FakeHost, FakeModule};
//!
//! let host = FakeHost::new()
//!     .with_module(FakeModule::ok("app", vec![TypeInfo::new("app", "Opts").global()]))
//!     .with_module(FakeModule::failing("broken", "missing dependency"));
//! let guard = ModuleGuard::new(host.clone());
//! assert_eq!(guard.list_modules().map(|m| m.len()).ok(), Some(2));
//! assert_eq!(host.module_calls(), 1);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use cmd_starter::{BoxError, Module, ModuleHost, ModuleRef, TypeInfo, TypeLoadFailure, TypeRef};

#[derive(Debug, Clone)]
enum Outcome {
    Loaded,
    Partial(String),
    Failed(String),
}

/// A module whose type enumeration succeeds, partially fails or fails.
#[derive(Debug, Clone)]
pub struct FakeModule {
    name: String,
    types: Vec<TypeRef>,
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
}

impl FakeModule {
    fn build(name: impl Into<String>, types: Vec<TypeInfo>, outcome: Outcome) -> Self {
        Self {
            name: name.into(),
            types: types.into_iter().map(Arc::new).collect(),
            outcome,
            calls: Arc::default(),
        }
    }

    /// A module that lists `types` without failing.
    #[must_use]
    pub fn ok(name: impl Into<String>, types: Vec<TypeInfo>) -> Self {
        Self::build(name, types, Outcome::Loaded)
    }

    /// A module that lists `types` and then reports `error`.
    #[must_use]
    pub fn partial(name: impl Into<String>, types: Vec<TypeInfo>, error: &str) -> Self {
        Self::build(name, types, Outcome::Partial(error.to_owned()))
    }

    /// A module that cannot list any type.
    #[must_use]
    pub fn failing(name: impl Into<String>, error: &str) -> Self {
        Self::build(name, Vec::new(), Outcome::Failed(error.to_owned()))
    }

    /// How many times the module was asked for its types.
    #[must_use]
    pub fn type_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Module for FakeModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn types(&self) -> Result<Vec<TypeRef>, TypeLoadFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Loaded => Ok(self.types.clone()),
            Outcome::Partial(error) => Err(TypeLoadFailure::partial(
                self.types.clone(),
                error.as_str(),
            )),
            Outcome::Failed(error) => Err(TypeLoadFailure::total(error.as_str())),
        }
    }
}

/// A host that serves fixed modules, or fails to list them, and counts how
/// often it was asked.
///
/// Clones share the call counter.
#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    modules: Vec<FakeModule>,
    failure: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl FakeHost {
    /// A host without modules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose module listing always fails with `error`.
    #[must_use]
    pub fn failing(error: &str) -> Self {
        Self {
            failure: Some(error.to_owned()),
            ..Self::default()
        }
    }

    /// Adds a module.
    #[must_use]
    pub fn with_module(mut self, module: FakeModule) -> Self {
        self.modules.push(module);
        self
    }

    /// How many times the modules were listed.
    #[must_use]
    pub fn module_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ModuleHost for FakeHost {
    fn modules(&self) -> Result<Vec<ModuleRef>, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.as_str().into());
        }
        Ok(self
            .modules
            .iter()
            .map(|module| Arc::new(module.clone()) as ModuleRef)
            .collect())
    }
}
