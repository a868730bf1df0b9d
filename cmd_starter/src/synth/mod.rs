//! Descriptor synthesis.
//!
//! Converts a type's properties into [`OptionDescriptor`]s and a handler's
//! parameters into [`ArgumentDescriptor`]s. Both paths share the fail-safe
//! marker reads in `lookup`: a broken description, alias or completion
//! marker empties that one field and never aborts the member or its owner.

mod lookup;
mod naming;

use std::sync::Arc;

use tracing::debug;

use crate::command::Receptacle;
use crate::meta::{CompletionSource, MarkerKind, MethodInfo, PropertyInfo, TypeInfo, Value, ValueType};
use crate::{StarterError, StarterResult};

pub use naming::{DESCRIPTION_JOINER, OPTION_PREFIX, option_name};

/// Where an option is attached on the receiving command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionScope {
    /// Shared with every subcommand.
    Global,
    /// Only valid on the receiving command.
    Local,
}

/// Synthesised description of one command-line option.
#[derive(Debug, Clone)]
pub struct OptionDescriptor {
    /// Canonical flag, including [`OPTION_PREFIX`].
    pub name: String,
    /// Identifier of the source property.
    pub property: String,
    /// Declared value type.
    pub value_type: ValueType,
    /// Whether the option must be supplied.
    pub required: bool,
    /// Whether the option is omitted from help.
    pub hidden: bool,
    /// Whether the option accepts several values.
    pub multiple: bool,
    /// Help text; empty when none was declared or it could not be read.
    pub description: String,
    /// Alternative names in declaration order.
    pub aliases: Vec<String>,
    /// Completion providers in declaration order.
    pub completions: Vec<CompletionSource>,
    /// Attachment scope.
    pub scope: OptionScope,
}

impl OptionDescriptor {
    /// Flag name without [`OPTION_PREFIX`].
    #[must_use]
    pub fn long(&self) -> &str {
        self.name.strip_prefix(OPTION_PREFIX).unwrap_or(&self.name)
    }

    /// Candidates from every completion provider, in declaration order.
    #[must_use]
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        complete_all(&self.completions, prefix)
    }
}

/// Synthesised description of one positional argument.
#[derive(Debug, Clone)]
pub struct ArgumentDescriptor {
    /// Parameter identifier, verbatim.
    pub name: String,
    /// Declared value type.
    pub value_type: ValueType,
    /// Whether the argument is omitted from help.
    pub hidden: bool,
    /// Value used when the argument is not supplied.
    pub default: Option<Value>,
    /// Help text; empty when none was declared or it could not be read.
    pub description: String,
    /// Completion providers in declaration order.
    pub completions: Vec<CompletionSource>,
}

impl ArgumentDescriptor {
    /// Candidates from every completion provider, in declaration order.
    #[must_use]
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        complete_all(&self.completions, prefix)
    }
}

fn complete_all(sources: &[CompletionSource], prefix: &str) -> Vec<String> {
    sources
        .iter()
        .flat_map(|source| source.complete(prefix))
        .collect()
}

/// Builds one option descriptor per public property of `info`.
///
/// Options of a global options container are scoped
/// [`OptionScope::Global`]; all others are [`OptionScope::Local`].
///
/// # Errors
///
/// Returns [`StarterError::UnsupportedValueType`] when a property's type is
/// [`ValueType::Custom`] or a nested list.
pub fn synthesize_options(info: &TypeInfo) -> StarterResult<Vec<OptionDescriptor>> {
    let scope = if info.is_global_options_container() {
        OptionScope::Global
    } else {
        OptionScope::Local
    };
    info.properties()
        .iter()
        .map(|property| option_descriptor(info, property, scope))
        .collect()
}

fn option_descriptor(
    owner: &TypeInfo,
    property: &PropertyInfo,
    scope: OptionScope,
) -> StarterResult<OptionDescriptor> {
    let member = property.name();
    let value_type = property.value_type();
    ensure_supported(owner.name(), member, value_type)?;
    let markers = property.markers();
    Ok(OptionDescriptor {
        name: option_name(member),
        property: member.to_owned(),
        value_type: value_type.clone(),
        required: lookup::has_marker(markers, MarkerKind::Required, member),
        hidden: lookup::has_marker(markers, MarkerKind::Hidden, member),
        multiple: value_type.is_list(),
        description: lookup::description(markers, member),
        aliases: lookup::aliases(markers, member),
        completions: lookup::completions(markers, member),
        scope,
    })
}

/// Builds one argument descriptor per named parameter of `method`.
///
/// Parameters without a resolvable name are skipped.
///
/// # Errors
///
/// Returns [`StarterError::UnsupportedValueType`] when a parameter's type is
/// [`ValueType::Custom`] or a nested list.
pub fn synthesize_arguments(method: &MethodInfo) -> StarterResult<Vec<ArgumentDescriptor>> {
    let mut arguments = Vec::with_capacity(method.parameters().len());
    for parameter in method.parameters() {
        let Some(name) = parameter.name() else {
            debug!(method = method.name(), "skipping parameter without a name");
            continue;
        };
        ensure_supported(method.name(), name, parameter.value_type())?;
        let markers = parameter.markers();
        arguments.push(ArgumentDescriptor {
            name: name.to_owned(),
            value_type: parameter.value_type().clone(),
            hidden: lookup::has_marker(markers, MarkerKind::Hidden, name),
            default: parameter.default_value().cloned(),
            description: lookup::description(markers, name),
            completions: lookup::completions(markers, name),
        });
    }
    Ok(arguments)
}

fn ensure_supported(owner: &str, member: &str, value_type: &ValueType) -> StarterResult<()> {
    if value_type.is_supported() {
        Ok(())
    } else {
        Err(Arc::new(StarterError::unsupported_value_type(
            owner,
            member,
            value_type.to_string(),
        )))
    }
}

/// Synthesises the options of `info` and attaches them to `receptacle`.
///
/// Returns the number of options attached. Nothing is attached when any
/// property has an unsupported type.
///
/// # Errors
///
/// Propagates [`synthesize_options`] failures.
pub fn load_options<R>(info: &TypeInfo, receptacle: &mut R) -> StarterResult<usize>
where
    R: Receptacle + ?Sized,
{
    let options = synthesize_options(info)?;
    let count = options.len();
    for option in options {
        match option.scope {
            OptionScope::Global => receptacle.add_global_option(option),
            OptionScope::Local => receptacle.add_option(option),
        }
    }
    debug!(owner = %info, count, "attached options");
    Ok(count)
}

/// Synthesises the arguments of `method` and attaches them to `receptacle`.
///
/// Returns the number of arguments attached.
///
/// # Errors
///
/// Propagates [`synthesize_arguments`] failures.
pub fn load_arguments<R>(method: &MethodInfo, receptacle: &mut R) -> StarterResult<usize>
where
    R: Receptacle + ?Sized,
{
    let arguments = synthesize_arguments(method)?;
    let count = arguments.len();
    for argument in arguments {
        receptacle.add_argument(argument);
    }
    debug!(method = method.name(), count, "attached arguments");
    Ok(count)
}
