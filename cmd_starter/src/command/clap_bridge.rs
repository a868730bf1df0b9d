//! Rendering of descriptors as clap arguments.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Arg, ArgAction, Command, value_parser};
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};

use super::CommandNode;
use crate::meta::{CompletionSource, ValueType};
use crate::synth::{ArgumentDescriptor, OptionDescriptor};
use crate::{StarterError, StarterResult};

/// Ids, long names and short flags already taken on one command.
///
/// clap only detects collisions in debug assertions at parse time, so every
/// rendered argument is claimed here first.
#[derive(Debug, Clone)]
struct Claimed {
    ids: HashSet<String>,
    longs: HashSet<String>,
    shorts: HashSet<char>,
}

impl Claimed {
    /// The automatic `-h`/`--help` flag every command carries.
    fn reserved() -> Self {
        Self {
            ids: HashSet::from(["help".to_owned()]),
            longs: HashSet::from(["help".to_owned()]),
            shorts: HashSet::from(['h']),
        }
    }

    fn claim(&mut self, command: &str, arg: &Arg) -> StarterResult<()> {
        let conflict = |flag: String| Err(Arc::new(StarterError::flag_conflict(command, flag)));
        let id = arg.get_id().as_str();
        if !self.ids.insert(id.to_owned()) {
            return conflict(id.to_owned());
        }
        let longs = arg.get_long().into_iter().chain(arg.get_all_aliases().unwrap_or_default());
        for long in longs {
            if !self.longs.insert(long.to_owned()) {
                return conflict(format!("--{long}"));
            }
        }
        let shorts = arg.get_short().into_iter().chain(arg.get_all_short_aliases().unwrap_or_default());
        for short in shorts {
            if !self.shorts.insert(short) {
                return conflict(format!("-{short}"));
            }
        }
        Ok(())
    }
}

pub(super) fn command(node: &CommandNode) -> StarterResult<Command> {
    render(node, Claimed::reserved())
}

/// Renders `node` with `claimed` holding the globals inherited from its
/// ancestors.
fn render(node: &CommandNode, mut claimed: Claimed) -> StarterResult<Command> {
    let mut rendered = Command::new(node.name.clone());
    if let Some(about) = &node.about {
        rendered = rendered.about(about.clone());
    }
    for option in &node.global_options {
        let arg = option_arg(option, true)?;
        claimed.claim(&node.name, &arg)?;
        rendered = rendered.arg(arg);
    }
    let inherited = claimed.clone();
    for option in &node.options {
        let arg = option_arg(option, false)?;
        claimed.claim(&node.name, &arg)?;
        rendered = rendered.arg(arg);
    }
    for (position, argument) in node.arguments.iter().enumerate() {
        let arg = argument_arg(argument, position + 1)?;
        claimed.claim(&node.name, &arg)?;
        rendered = rendered.arg(arg);
    }
    for subcommand in &node.subcommands {
        rendered = rendered.subcommand(render(subcommand, inherited.clone())?);
    }
    Ok(rendered)
}

fn option_arg(option: &OptionDescriptor, global: bool) -> StarterResult<Arg> {
    let long = option.long().to_owned();
    let mut arg = Arg::new(long.clone())
        .long(long)
        .hide(option.hidden)
        .global(global)
        .required(option.required && !global);
    if !option.description.is_empty() {
        arg = arg.help(option.description.clone());
    }
    arg = if option.multiple {
        arg.action(ArgAction::Append).num_args(1..)
    } else if option.value_type == ValueType::Bool {
        arg.action(ArgAction::SetTrue)
    } else {
        arg.action(ArgAction::Set)
    };
    if option.value_type != ValueType::Bool {
        arg = with_parser(arg, &option.property, &option.value_type)?;
    }
    for alias in &option.aliases {
        arg = with_alias(arg, option, alias)?;
    }
    Ok(with_completions(arg, &option.completions))
}

fn argument_arg(argument: &ArgumentDescriptor, index: usize) -> StarterResult<Arg> {
    let mut arg = Arg::new(argument.name.clone())
        .value_name(argument.name.clone())
        .index(index)
        .hide(argument.hidden)
        .required(argument.default.is_none());
    if !argument.description.is_empty() {
        arg = arg.help(argument.description.clone());
    }
    if argument.value_type.is_list() {
        arg = arg.action(ArgAction::Append).num_args(1..);
    }
    if let Some(default) = &argument.default {
        arg = arg.default_values(default.to_strings());
    }
    arg = with_completions(arg, &argument.completions);
    with_parser(arg, &argument.name, &argument.value_type)
}

/// Serves the descriptor's completion sources to `clap_complete`'s dynamic
/// engine.
fn with_completions(arg: Arg, sources: &[CompletionSource]) -> Arg {
    if sources.is_empty() {
        return arg;
    }
    let sources = sources.to_vec();
    arg.add(ArgValueCompleter::new(move |current: &OsStr| {
        let prefix = current.to_string_lossy();
        sources
            .iter()
            .flat_map(|source| source.complete(&prefix))
            .map(CompletionCandidate::new)
            .collect::<Vec<_>>()
    }))
}

/// Integers parse as `i64`/`u64` and floats as `f64` whatever their width.
fn with_parser(arg: Arg, member: &str, value_type: &ValueType) -> StarterResult<Arg> {
    let parsed = match value_type.element() {
        ValueType::Bool => arg.value_parser(value_parser!(bool)),
        ValueType::String => arg.value_parser(value_parser!(String)),
        ValueType::Integer { signed: true, .. } => arg.value_parser(value_parser!(i64)),
        ValueType::Integer { signed: false, .. } => arg.value_parser(value_parser!(u64)),
        ValueType::Float { .. } => arg.value_parser(value_parser!(f64)),
        ValueType::Path => arg.value_parser(value_parser!(PathBuf)),
        ValueType::List { .. } | ValueType::Custom { .. } => {
            return Err(Arc::new(StarterError::unsupported_value_type(
                arg.get_id().as_str(),
                member,
                value_type.to_string(),
            )));
        }
    };
    Ok(parsed)
}

fn with_alias(arg: Arg, option: &OptionDescriptor, alias: &str) -> StarterResult<Arg> {
    let invalid = |reason| {
        Arc::new(StarterError::InvalidAlias {
            option: option.name.clone(),
            alias: alias.to_owned(),
            reason,
        })
    };
    if alias.chars().any(char::is_whitespace) {
        return Err(invalid("aliases must not contain whitespace"));
    }
    let bare = alias.strip_prefix("--").or_else(|| alias.strip_prefix('-')).unwrap_or(alias);
    let mut chars = bare.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(invalid("aliases must not be empty")),
        (Some(short), None) if !alias.starts_with("--") => Ok(match arg.get_short() {
            None => arg.short(short),
            Some(_) => arg.visible_short_alias(short),
        }),
        _ if bare.starts_with('-') => Err(invalid("aliases must not start with three dashes")),
        (Some(_), Some(_)) if alias.starts_with('-') && !alias.starts_with("--") => {
            Err(invalid("single-dash aliases must be one character"))
        }
        _ => Ok(arg.visible_alias(bare.to_owned())),
    }
}
