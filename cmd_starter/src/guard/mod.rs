//! Module access guard.
//!
//! [`ModuleGuard`] wraps a [`ModuleHost`] so that listing modules and their
//! types never fails in an uncontrolled way. Every failure is routed through
//! the current [`ErrorHandlingMode`]:
//!
//! - `Silent` drops the failure and returns whatever loaded.
//! - `RaiseEvent` notifies the registered listeners once per failing module,
//!   then behaves like `Silent`.
//! - `Throw` returns the failure to the caller.
//!
//! Partially loaded type lists survive in the first two modes.

mod builder;
mod events;

use std::fmt;
use std::sync::Arc;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::host::{Module, ModuleHost, ModuleRef, TypeLoadFailure};
use crate::meta::TypeRef;
use crate::{BoxError, StarterError, StarterResult};

pub use builder::ModuleGuardBuilder;
pub use events::{ModuleLoadError, ModuleLoadListener, TypeLoadError, TypeLoadListener};

/// How discovery failures are surfaced.
///
/// Set the mode before the first discovery call: the discovery result is
/// memoised, so a later change only affects new guard calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorHandlingMode {
    /// Swallow the failure and continue with partial results.
    #[default]
    Silent,
    /// Notify listeners, then continue with partial results.
    RaiseEvent,
    /// Return the failure to the caller.
    Throw,
}

/// Failure-isolating access to the host's modules and types.
pub struct ModuleGuard {
    host: Arc<dyn ModuleHost>,
    mode: ErrorHandlingMode,
    module_listeners: Vec<ModuleLoadListener>,
    type_listeners: Vec<TypeLoadListener>,
}

impl ModuleGuard {
    /// Creates a guard in [`ErrorHandlingMode::Silent`] without listeners.
    #[must_use]
    pub fn new(host: impl ModuleHost + 'static) -> Self {
        Self::from_shared(Arc::new(host))
    }

    /// Creates a guard over an already shared host.
    #[must_use]
    pub fn from_shared(host: Arc<dyn ModuleHost>) -> Self {
        Self {
            host,
            mode: ErrorHandlingMode::default(),
            module_listeners: Vec::new(),
            type_listeners: Vec::new(),
        }
    }

    /// Starts a [`ModuleGuardBuilder`] for `host`.
    #[must_use]
    pub fn builder(host: impl ModuleHost + 'static) -> ModuleGuardBuilder {
        ModuleGuardBuilder::new(Arc::new(host))
    }

    /// Current error handling mode.
    #[must_use]
    pub const fn mode(&self) -> ErrorHandlingMode {
        self.mode
    }

    /// Changes the error handling mode for subsequent calls.
    pub const fn set_mode(&mut self, mode: ErrorHandlingMode) {
        self.mode = mode;
    }

    /// Registers a listener for module enumeration failures.
    pub fn on_module_load_error<F>(&mut self, listener: F)
    where
        F: Fn(&ModuleLoadError<'_>) + Send + Sync + 'static,
    {
        self.module_listeners.push(Arc::new(listener));
    }

    /// Registers a listener for type enumeration failures.
    pub fn on_type_load_error<F>(&mut self, listener: F)
    where
        F: Fn(&TypeLoadError<'_>) + Send + Sync + 'static,
    {
        self.type_listeners.push(Arc::new(listener));
    }

    /// Lists the host's loaded modules.
    ///
    /// Outside [`ErrorHandlingMode::Throw`] a host failure yields an empty
    /// list.
    ///
    /// # Errors
    ///
    /// Returns [`StarterError::ModuleEnumeration`] in `Throw` mode when the
    /// host cannot list its modules.
    pub fn list_modules(&self) -> StarterResult<Vec<ModuleRef>> {
        match self.host.modules() {
            Ok(modules) => {
                debug!(count = modules.len(), "listed loaded modules");
                Ok(modules)
            }
            Err(source) => self.module_failure(None, source).map(|()| Vec::new()),
        }
    }

    /// Lists the types defined by `module`.
    ///
    /// An absent module yields an empty list and is not a failure. When the
    /// module reports a partial list alongside its failure, the loaded types
    /// are returned outside [`ErrorHandlingMode::Throw`].
    ///
    /// # Errors
    ///
    /// Returns [`StarterError::TypeEnumeration`] in `Throw` mode when the
    /// module fails to list its types.
    pub fn list_types(&self, module: Option<&dyn Module>) -> StarterResult<Vec<TypeRef>> {
        let Some(module) = module else {
            return Ok(Vec::new());
        };
        match module.types() {
            Ok(types) => Ok(types),
            Err(TypeLoadFailure { loaded, source }) => {
                self.type_failure(module, loaded.len(), source)?;
                Ok(loaded)
            }
        }
    }

    fn module_failure(&self, module: Option<&dyn Module>, source: BoxError) -> StarterResult<()> {
        match self.mode {
            ErrorHandlingMode::Silent => {
                debug!(error = %source, "ignoring module enumeration failure");
                Ok(())
            }
            ErrorHandlingMode::RaiseEvent => {
                warn!(error = %source, "module enumeration failed");
                let event = ModuleLoadError::new(module, source.as_ref());
                for listener in &self.module_listeners {
                    listener(&event);
                }
                Ok(())
            }
            ErrorHandlingMode::Throw => Err(Arc::new(StarterError::module_enumeration(source))),
        }
    }

    fn type_failure(&self, module: &dyn Module, loaded: usize, source: BoxError) -> StarterResult<()> {
        match self.mode {
            ErrorHandlingMode::Silent => {
                debug!(module = module.name(), loaded, error = %source, "ignoring type enumeration failure");
                Ok(())
            }
            ErrorHandlingMode::RaiseEvent => {
                warn!(module = module.name(), loaded, error = %source, "type enumeration failed");
                let event = TypeLoadError::new(module, loaded, source.as_ref());
                for listener in &self.type_listeners {
                    listener(&event);
                }
                Ok(())
            }
            ErrorHandlingMode::Throw => Err(Arc::new(StarterError::type_enumeration(
                module.name(),
                loaded,
                source,
            ))),
        }
    }
}

impl fmt::Debug for ModuleGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleGuard")
            .field("mode", &self.mode)
            .field("module_listeners", &self.module_listeners.len())
            .field("type_listeners", &self.type_listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
