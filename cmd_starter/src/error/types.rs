//! Primary error enum for discovery and synthesis flows.

use std::sync::Arc;

use thiserror::Error;

/// Boxed failure reported by the host environment or a marker provider.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used across the crate.
///
/// Errors are shared behind an [`Arc`] so a single failure can be handed to
/// several observers and still be returned to the caller.
pub type StarterResult<T> = Result<T, Arc<StarterError>>;

/// Errors that can occur while discovering option containers or
/// synthesising descriptors from their metadata.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StarterError {
    /// The host could not list its loaded modules at all.
    #[error("failed to enumerate loaded modules: {source}")]
    ModuleEnumeration {
        /// Underlying failure reported by the host.
        #[source]
        source: BoxError,
    },

    /// A module could not list (some of) its types.
    #[error("failed to enumerate types of module '{module}' ({loaded} loaded): {source}")]
    TypeEnumeration {
        /// Name of the module whose types failed to load.
        module: String,
        /// Number of types that loaded before the failure was reported.
        loaded: usize,
        /// Underlying failure reported by the module.
        #[source]
        source: BoxError,
    },

    /// A property or parameter declares a value type the parser cannot model.
    #[error("unsupported option type '{type_name}' for '{owner}.{member}'")]
    UnsupportedValueType {
        /// Type or method declaring the member.
        owner: String,
        /// Property or parameter name.
        member: String,
        /// Rendered value type.
        type_name: String,
    },

    /// An alias marker cannot be expressed as a command-line flag.
    #[error("invalid alias '{alias}' for option '{option}': {reason}")]
    InvalidAlias {
        /// Canonical flag name of the option carrying the alias.
        option: String,
        /// Alias text as declared.
        alias: String,
        /// Why the alias was rejected.
        reason: &'static str,
    },

    /// Two arguments of one command claim the same id, flag or alias.
    #[error("'{flag}' is declared more than once on command '{command}'")]
    FlagConflict {
        /// Name of the command whose arguments collide.
        command: String,
        /// The contested id, flag or alias as typed on the command line.
        flag: String,
    },
}
