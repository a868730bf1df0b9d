//! Convenience constructors for [`StarterError`].

use super::{BoxError, StarterError};

impl StarterError {
    /// Wraps a host failure raised while listing modules.
    #[must_use]
    pub fn module_enumeration(source: impl Into<BoxError>) -> Self {
        Self::ModuleEnumeration {
            source: source.into(),
        }
    }

    /// Wraps a module failure raised while listing its types.
    #[must_use]
    pub fn type_enumeration(module: impl Into<String>, loaded: usize, source: BoxError) -> Self {
        Self::TypeEnumeration {
            module: module.into(),
            loaded,
            source,
        }
    }

    /// Builds an [`StarterError::UnsupportedValueType`] for `owner.member`.
    #[must_use]
    pub fn unsupported_value_type(
        owner: impl Into<String>,
        member: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::UnsupportedValueType {
            owner: owner.into(),
            member: member.into(),
            type_name: type_name.into(),
        }
    }

    /// Builds a [`StarterError::FlagConflict`] for `flag` on `command`.
    #[must_use]
    pub fn flag_conflict(command: impl Into<String>, flag: impl Into<String>) -> Self {
        Self::FlagConflict {
            command: command.into(),
            flag: flag.into(),
        }
    }

    /// Returns `true` for failures raised by the module access guard.
    #[must_use]
    pub const fn is_discovery_failure(&self) -> bool {
        matches!(
            self,
            Self::ModuleEnumeration { .. } | Self::TypeEnumeration { .. }
        )
    }
}
