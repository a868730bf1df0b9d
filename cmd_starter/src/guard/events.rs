//! Discovery error events delivered in [`super::ErrorHandlingMode::RaiseEvent`].

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::host::Module;

/// Listener invoked for module enumeration failures.
pub type ModuleLoadListener = Arc<dyn Fn(&ModuleLoadError<'_>) + Send + Sync>;

/// Listener invoked for type enumeration failures.
pub type TypeLoadListener = Arc<dyn Fn(&TypeLoadError<'_>) + Send + Sync>;

/// A module, or the module list itself, failed to load.
///
/// Events borrow from the failing call and only live for the duration of the
/// listener invocation.
#[derive(Clone, Copy)]
pub struct ModuleLoadError<'a> {
    module: Option<&'a dyn Module>,
    error: &'a (dyn Error + Send + Sync + 'static),
}

impl<'a> ModuleLoadError<'a> {
    pub(super) const fn new(
        module: Option<&'a dyn Module>,
        error: &'a (dyn Error + Send + Sync + 'static),
    ) -> Self {
        Self { module, error }
    }

    /// The module that failed, or `None` when the module list itself failed.
    #[must_use]
    pub const fn module(&self) -> Option<&'a dyn Module> {
        self.module
    }

    /// The underlying failure.
    #[must_use]
    pub const fn error(&self) -> &'a (dyn Error + Send + Sync + 'static) {
        self.error
    }
}

impl fmt::Debug for ModuleLoadError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleLoadError")
            .field("module", &self.module.map(|module| module.name()))
            .field("error", &self.error.to_string())
            .finish()
    }
}

/// A module failed to list some or all of its types.
#[derive(Clone, Copy)]
pub struct TypeLoadError<'a> {
    module: &'a dyn Module,
    loaded: usize,
    error: &'a (dyn Error + Send + Sync + 'static),
}

impl<'a> TypeLoadError<'a> {
    pub(super) const fn new(
        module: &'a dyn Module,
        loaded: usize,
        error: &'a (dyn Error + Send + Sync + 'static),
    ) -> Self {
        Self {
            module,
            loaded,
            error,
        }
    }

    /// The module whose types were being listed.
    #[must_use]
    pub const fn module(&self) -> &'a dyn Module {
        self.module
    }

    /// How many types loaded despite the failure.
    #[must_use]
    pub const fn loaded(&self) -> usize {
        self.loaded
    }

    /// The underlying failure.
    #[must_use]
    pub const fn error(&self) -> &'a (dyn Error + Send + Sync + 'static) {
        self.error
    }
}

impl fmt::Debug for TypeLoadError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeLoadError")
            .field("module", &self.module.name())
            .field("loaded", &self.loaded)
            .field("error", &self.error.to_string())
            .finish()
    }
}
