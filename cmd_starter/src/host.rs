//! Host environment seams: loaded modules and the types they define.
//!
//! The guard in [`crate::guard`] is the only caller of these traits. Hosts
//! report failures through plain `Result`s and never decide how a failure is
//! surfaced; that policy belongs to [`crate::ErrorHandlingMode`].

use std::fmt;
use std::sync::Arc;

use crate::BoxError;
use crate::meta::{Reflect, TypeRef};

/// Shared handle to a loaded module.
pub type ModuleRef = Arc<dyn Module>;

/// A loaded unit of code that defines types.
pub trait Module: Send + Sync {
    /// Human-readable module name used in diagnostics.
    fn name(&self) -> &str;

    /// Lists every type the module defines.
    ///
    /// # Errors
    ///
    /// Returns a [`TypeLoadFailure`] carrying whichever types did load.
    fn types(&self) -> Result<Vec<TypeRef>, TypeLoadFailure>;
}

/// Enumerates the modules currently loaded by the process.
pub trait ModuleHost: Send + Sync {
    /// Lists the loaded modules.
    ///
    /// # Errors
    ///
    /// Returns the host failure when the modules cannot be listed at all.
    fn modules(&self) -> Result<Vec<ModuleRef>, BoxError>;
}

/// Failure to list a module's types, possibly after some types loaded.
#[derive(Debug)]
pub struct TypeLoadFailure {
    /// Types that loaded successfully; empty for a total failure.
    pub loaded: Vec<TypeRef>,
    /// Underlying failure.
    pub source: BoxError,
}

impl TypeLoadFailure {
    /// Failure where no type could be listed.
    #[must_use]
    pub fn total(source: impl Into<BoxError>) -> Self {
        Self {
            loaded: Vec::new(),
            source: source.into(),
        }
    }

    /// Failure reported alongside the types that did load.
    #[must_use]
    pub fn partial(loaded: Vec<TypeRef>, source: impl Into<BoxError>) -> Self {
        Self {
            loaded,
            source: source.into(),
        }
    }
}

impl fmt::Display for TypeLoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} types loaded)", self.source, self.loaded.len())
    }
}

impl std::error::Error for TypeLoadFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Infallible module backed by a list of types.
///
/// # Examples
///
/// ```rust
/// use cmd_starter::{Module, StaticModule, TypeInfo};
///
/// let module = StaticModule::new("app").with_type_info(TypeInfo::new("app", "Opts").global());
/// assert_eq!(module.types().map(|types| types.len()).ok(), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticModule {
    name: String,
    types: Vec<TypeRef>,
}

impl StaticModule {
    /// Creates an empty module named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Registers a reflected Rust type.
    #[must_use]
    pub fn with_type<T: Reflect>(self) -> Self {
        self.with_type_info(T::type_info())
    }

    /// Registers hand-built metadata.
    #[must_use]
    pub fn with_type_info(mut self, info: crate::TypeInfo) -> Self {
        self.types.push(Arc::new(info));
        self
    }
}

impl Module for StaticModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn types(&self) -> Result<Vec<TypeRef>, TypeLoadFailure> {
        Ok(self.types.clone())
    }
}

/// Infallible host backed by a fixed list of modules.
#[derive(Clone, Default)]
pub struct StaticHost {
    modules: Vec<ModuleRef>,
}

impl StaticHost {
    /// Creates a host with no modules.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Adds a module.
    #[must_use]
    pub fn with_module(mut self, module: impl Module + 'static) -> Self {
        self.modules.push(Arc::new(module));
        self
    }

    /// Adds an already shared module.
    #[must_use]
    pub fn with_module_ref(mut self, module: ModuleRef) -> Self {
        self.modules.push(module);
        self
    }
}

impl ModuleHost for StaticHost {
    fn modules(&self) -> Result<Vec<ModuleRef>, BoxError> {
        Ok(self.modules.clone())
    }
}

impl fmt::Debug for StaticHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.modules.iter().map(|module| module.name()))
            .finish()
    }
}
