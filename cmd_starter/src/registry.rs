//! Typed storage for live global options instances.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::meta::GlobalOptionsContainer;

type Entry = Box<dyn Any + Send + Sync>;

/// Holds at most one instance per global options container type.
///
/// Entries are keyed by the Rust type, so two containers that happen to share
/// a name never collide. [`set`](Self::set) always replaces the previous
/// instance.
///
/// ```rust
/// use cmd_starter::{GlobalOptionsContainer, GlobalOptionsRegistry, Reflect, TypeInfo};
///
/// struct Verbosity(u8);
///
/// impl Reflect for Verbosity {
///     fn type_info() -> TypeInfo {
///         TypeInfo::new("app", "Verbosity").global()
///     }
/// }
/// impl GlobalOptionsContainer for Verbosity {}
///
/// let mut registry = GlobalOptionsRegistry::new();
/// registry.set(Verbosity(1));
/// registry.set(Verbosity(3));
/// assert_eq!(registry.get::<Verbosity>().map(|v| v.0), Some(3));
/// ```
#[derive(Default)]
pub struct GlobalOptionsRegistry {
    entries: HashMap<TypeId, Entry>,
}

impl GlobalOptionsRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the instance stored for `T`, if any.
    #[must_use]
    pub fn get<T>(&self) -> Option<&T>
    where
        T: GlobalOptionsContainer + Send + Sync + 'static,
    {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref())
    }

    /// Returns the instance stored for `T` for in-place updates.
    pub fn get_mut<T>(&mut self) -> Option<&mut T>
    where
        T: GlobalOptionsContainer + Send + Sync + 'static,
    {
        self.entries
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_mut())
    }

    /// Stores `instance`, returning the one it replaced.
    pub fn set<T>(&mut self, instance: T) -> Option<T>
    where
        T: GlobalOptionsContainer + Send + Sync + 'static,
    {
        debug!(container = type_name::<T>(), "storing global options");
        self.entries
            .insert(TypeId::of::<T>(), Box::new(instance))
            .and_then(|previous| previous.downcast().ok())
            .map(|previous| *previous)
    }

    /// Removes and returns the instance stored for `T`.
    pub fn remove<T>(&mut self) -> Option<T>
    where
        T: GlobalOptionsContainer + Send + Sync + 'static,
    {
        self.entries
            .remove(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast().ok())
            .map(|entry| *entry)
    }

    /// Whether an instance of `T` is stored.
    #[must_use]
    pub fn contains<T>(&self) -> bool
    where
        T: GlobalOptionsContainer + 'static,
    {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Number of stored instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for GlobalOptionsRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalOptionsRegistry")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::meta::{Reflect, TypeInfo};

    #[derive(Debug, PartialEq)]
    struct Auth {
        token: String,
    }

    impl Reflect for Auth {
        fn type_info() -> TypeInfo {
            TypeInfo::new("app", "Auth").global()
        }
    }

    impl GlobalOptionsContainer for Auth {}

    #[derive(Debug, PartialEq)]
    struct Output {
        quiet: bool,
    }

    impl Reflect for Output {
        fn type_info() -> TypeInfo {
            TypeInfo::new("app", "Output").global()
        }
    }

    impl GlobalOptionsContainer for Output {}

    fn auth(token: &str) -> Auth {
        Auth {
            token: token.to_owned(),
        }
    }

    #[rstest]
    fn last_write_wins() {
        let mut registry = GlobalOptionsRegistry::new();
        assert_eq!(registry.set(auth("first")), None);
        assert_eq!(registry.set(auth("second")), Some(auth("first")));
        assert_eq!(registry.get::<Auth>(), Some(&auth("second")));
        assert_eq!(registry.len(), 1);
    }

    #[rstest]
    fn unset_type_is_absent() {
        let mut registry = GlobalOptionsRegistry::new();
        registry.set(auth("token"));
        assert_eq!(registry.get::<Output>(), None);
        assert!(!registry.contains::<Output>());
        assert!(registry.contains::<Auth>());
    }

    #[rstest]
    fn get_mut_updates_in_place() {
        let mut registry = GlobalOptionsRegistry::new();
        registry.set(Output { quiet: false });
        if let Some(output) = registry.get_mut::<Output>() {
            output.quiet = true;
        }
        assert_eq!(registry.get::<Output>(), Some(&Output { quiet: true }));
    }

    #[rstest]
    fn remove_empties_the_slot() {
        let mut registry = GlobalOptionsRegistry::new();
        registry.set(auth("token"));
        assert_eq!(registry.remove::<Auth>(), Some(auth("token")));
        assert!(registry.is_empty());
        assert_eq!(registry.remove::<Auth>(), None);
    }
}
