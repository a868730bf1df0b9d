//! Discovery of option containers and synthesis of command-line descriptors.
//!
//! The crate walks the modules exposed by a [`ModuleHost`], picks out the
//! types that declare the [`Capability::GlobalOptionsContainer`] capability
//! and turns their properties into [`OptionDescriptor`]s. Handler methods
//! become positional [`ArgumentDescriptor`]s the same way. Descriptors are
//! attached to any [`Receptacle`]; [`CommandNode`] renders them as a
//! [`clap::Command`].
//!
//! Metadata is produced at compile time by `#[derive(Reflect)]`, provided by
//! the companion `cmd_starter_macros` crate.
//!
//! ```rust
//! use cmd_starter::{
//!     CommandNode, GlobalOptionsManager, InclusionFilter, ModuleGuard, Reflect, StaticHost,
//!     StaticModule,
//! };
//!
//! #[derive(Reflect)]
//! #[starter(global, namespace = "app::opts")]
//! struct Output {
//!     /// Suppress progress output.
//!     #[starter(alias = "-q")]
//!     quiet: bool,
//! }
//!
//! let host = StaticHost::new().with_module(StaticModule::new("app").with_type::<Output>());
//! let guard = ModuleGuard::new(host);
//!
//! let mut manager = GlobalOptionsManager::new();
//! manager.filter_types(&guard, &InclusionFilter::new())?;
//!
//! let mut root = CommandNode::new("app");
//! manager.load_options(&mut root)?;
//! let matches = root.to_clap()?.try_get_matches_from(["app", "-q"])?;
//! assert!(matches.get_flag("quiet"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use cmd_starter_macros::Reflect;

mod command;
mod discovery;
mod error;
mod filter;
pub mod guard;
mod host;
mod manager;
mod meta;
mod registry;
mod synth;

pub use command::{CommandNode, Receptacle};
pub use discovery::{CandidateTypes, TypeDiscovery};
pub use error::{BoxError, StarterError, StarterResult};
pub use filter::{InclusionFilter, filter_types};
pub use guard::{ErrorHandlingMode, ModuleGuard, ModuleGuardBuilder};
pub use host::{Module, ModuleHost, ModuleRef, StaticHost, StaticModule, TypeLoadFailure};
pub use manager::GlobalOptionsManager;
pub use meta::{
    Capability, CompletionSource, GlobalOptionsContainer, Marker, MarkerKind, MarkerProvider,
    Markers, MethodInfo, ParameterInfo, PropertyInfo, Reflect, TypeInfo, TypeRef, Value,
    ValueType,
};
pub use registry::GlobalOptionsRegistry;
pub use synth::{
    ArgumentDescriptor, DESCRIPTION_JOINER, OPTION_PREFIX, OptionDescriptor, OptionScope,
    load_arguments, load_options, option_name, synthesize_arguments, synthesize_options,
};
