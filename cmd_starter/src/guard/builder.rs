//! Builder for [`ModuleGuard`].

use std::sync::Arc;

use super::{ErrorHandlingMode, ModuleGuard, ModuleLoadError, TypeLoadError};
use crate::host::ModuleHost;

/// Configures a [`ModuleGuard`] before first use.
///
/// # Examples
///
/// ```rust
/// use cmd_starter::{ErrorHandlingMode, Module, ModuleGuard, StaticHost};
///
/// let guard = ModuleGuard::builder(StaticHost::new())
///     .mode(ErrorHandlingMode::RaiseEvent)
///     .on_type_load_error(|event| eprintln!("{}: {}", event.module().name(), event.error()))
///     .build();
/// assert_eq!(guard.mode(), ErrorHandlingMode::RaiseEvent);
/// ```
#[must_use]
pub struct ModuleGuardBuilder {
    guard: ModuleGuard,
}

impl ModuleGuardBuilder {
    /// Creates a builder for `host`.
    pub fn new(host: Arc<dyn ModuleHost>) -> Self {
        Self {
            guard: ModuleGuard::from_shared(host),
        }
    }

    /// Sets the error handling mode.
    pub const fn mode(mut self, mode: ErrorHandlingMode) -> Self {
        self.guard.mode = mode;
        self
    }

    /// Registers a module enumeration listener.
    pub fn on_module_load_error<F>(mut self, listener: F) -> Self
    where
        F: Fn(&ModuleLoadError<'_>) + Send + Sync + 'static,
    {
        self.guard.on_module_load_error(listener);
        self
    }

    /// Registers a type enumeration listener.
    pub fn on_type_load_error<F>(mut self, listener: F) -> Self
    where
        F: Fn(&TypeLoadError<'_>) + Send + Sync + 'static,
    {
        self.guard.on_type_load_error(listener);
        self
    }

    /// Finishes configuration.
    pub fn build(self) -> ModuleGuard {
        self.guard
    }
}
