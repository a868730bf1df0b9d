//! Coordination of discovery, filtering and the options registry.

use tracing::debug;

use crate::command::Receptacle;
use crate::discovery::TypeDiscovery;
use crate::filter::InclusionFilter;
use crate::guard::ModuleGuard;
use crate::meta::{GlobalOptionsContainer, TypeRef};
use crate::registry::GlobalOptionsRegistry;
use crate::StarterResult;
use crate::synth::synthesize_options;

/// Owns everything an application needs to expose global options.
///
/// Discovery is deferred until the first [`filter_types`](Self::filter_types)
/// call so the guard can be configured first. The filtered list starts empty.
#[derive(Debug, Default)]
pub struct GlobalOptionsManager {
    discovery: TypeDiscovery,
    types: Vec<TypeRef>,
    registry: GlobalOptionsRegistry,
}

impl GlobalOptionsManager {
    /// Creates a manager with nothing discovered yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovers containers if needed, then replaces the filtered list with
    /// those accepted by `filter`.
    ///
    /// # Errors
    ///
    /// Propagates a discovery failure raised in
    /// [`crate::ErrorHandlingMode::Throw`]. The filtered list is left empty in
    /// that case.
    pub fn filter_types(
        &mut self,
        guard: &ModuleGuard,
        filter: &InclusionFilter,
    ) -> StarterResult<&[TypeRef]> {
        self.types.clear();
        let candidates = self.discovery.discover(guard)?;
        self.types = filter.apply(candidates);
        debug!(
            candidates = candidates.len(),
            kept = self.types.len(),
            "filtered global options containers"
        );
        Ok(&self.types)
    }

    /// The containers kept by the last [`filter_types`](Self::filter_types).
    #[must_use]
    pub fn global_options_types(&self) -> &[TypeRef] {
        &self.types
    }

    /// Attaches the options of every filtered container as global options.
    ///
    /// Returns the number of options attached. Containers are synthesised
    /// before anything is attached, so a failure leaves `receptacle`
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StarterError::UnsupportedValueType`] when a container
    /// declares a property the parser cannot model.
    pub fn load_options<R>(&self, receptacle: &mut R) -> StarterResult<usize>
    where
        R: Receptacle + ?Sized,
    {
        let mut options = Vec::new();
        for info in &self.types {
            options.extend(synthesize_options(info)?);
        }
        let count = options.len();
        for option in options {
            receptacle.add_global_option(option);
        }
        debug!(containers = self.types.len(), count, "attached global options");
        Ok(count)
    }

    /// Returns the live instance of container `T`, if one was stored.
    #[must_use]
    pub fn get_global_options<T>(&self) -> Option<&T>
    where
        T: GlobalOptionsContainer + Send + Sync + 'static,
    {
        self.registry.get()
    }

    /// Stores the live instance of container `T`, replacing any previous one.
    pub fn set_global_options<T>(&mut self, instance: T)
    where
        T: GlobalOptionsContainer + Send + Sync + 'static,
    {
        self.registry.set(instance);
    }

    /// The underlying registry.
    #[must_use]
    pub const fn registry(&self) -> &GlobalOptionsRegistry {
        &self.registry
    }

    /// Mutable access to the underlying registry.
    pub const fn registry_mut(&mut self) -> &mut GlobalOptionsRegistry {
        &mut self.registry
    }

    /// The discovery cache.
    #[must_use]
    pub const fn discovery(&self) -> &TypeDiscovery {
        &self.discovery
    }
}
