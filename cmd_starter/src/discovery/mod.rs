//! Type discovery cache.
//!
//! [`TypeDiscovery`] performs the guarded scan of every loaded module once
//! and memoises the resulting [`CandidateTypes`]. Nothing runs until the
//! first call to [`TypeDiscovery::discover`], so the guard's error handling
//! mode and listeners can be configured after construction.

use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::debug;

use crate::StarterResult;
use crate::guard::ModuleGuard;
use crate::meta::TypeRef;

/// Global options containers found across all loaded modules.
///
/// Entries are unique by full name and keep the order in which modules and
/// their types were enumerated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateTypes(Vec<TypeRef>);

impl CandidateTypes {
    /// Number of candidates.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no candidate was found.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Candidates in enumeration order.
    #[must_use]
    pub fn as_slice(&self) -> &[TypeRef] {
        &self.0
    }

    /// Iterates the candidates in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, TypeRef> {
        self.0.iter()
    }

    /// Whether a candidate with `full_name` exists.
    #[must_use]
    pub fn contains(&self, full_name: &str) -> bool {
        self.0.iter().any(|info| info.full_name() == full_name)
    }
}

impl<'a> IntoIterator for &'a CandidateTypes {
    type Item = &'a TypeRef;
    type IntoIter = std::slice::Iter<'a, TypeRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Memoised discovery of global options containers.
#[derive(Debug, Default)]
pub struct TypeDiscovery {
    found: OnceLock<CandidateTypes>,
}

impl TypeDiscovery {
    /// Creates a cache in the "not yet computed" state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            found: OnceLock::new(),
        }
    }

    /// Whether the scan already ran.
    #[must_use]
    pub fn is_computed(&self) -> bool {
        self.found.get().is_some()
    }

    /// Returns the memoised candidates without scanning.
    #[must_use]
    pub fn cached(&self) -> Option<&CandidateTypes> {
        self.found.get()
    }

    /// Scans every loaded module on first use and returns the candidates.
    ///
    /// Later calls return the memoised set without consulting `guard`, even
    /// if its mode or the host's modules changed. A scan that fails in
    /// [`crate::ErrorHandlingMode::Throw`] is cached as the empty set and not
    /// attempted again.
    ///
    /// # Errors
    ///
    /// Returns the first module or type enumeration failure when `guard` is
    /// in `Throw` mode; only the call that performed the scan observes it.
    pub fn discover(&self, guard: &ModuleGuard) -> StarterResult<&CandidateTypes> {
        let mut failure = None;
        let found = self.found.get_or_init(|| {
            scan(guard).unwrap_or_else(|err| {
                failure = Some(err);
                CandidateTypes::default()
            })
        });
        failure.map_or(Ok(found), Err)
    }
}

fn scan(guard: &ModuleGuard) -> StarterResult<CandidateTypes> {
    let modules = guard.list_modules()?;
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for module in &modules {
        for info in guard.list_types(Some(module.as_ref()))? {
            if info.is_global_options_container() && seen.insert(info.full_name()) {
                candidates.push(info);
            }
        }
    }
    debug!(
        modules = modules.len(),
        candidates = candidates.len(),
        "discovered global options containers"
    );
    Ok(CandidateTypes(candidates))
}

#[cfg(test)]
mod tests;
