//! Command nodes that receive synthesised descriptors.
//!
//! [`Receptacle`] is the seam between synthesis and whatever builds the
//! command tree. [`CommandNode`] is the in-memory implementation shipped with
//! the crate; [`CommandNode::to_clap`] renders it as a [`clap::Command`].

mod clap_bridge;

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::StarterResult;
use crate::synth::{ArgumentDescriptor, OptionDescriptor};

/// Receives descriptors produced by [`crate::load_options`] and
/// [`crate::load_arguments`].
pub trait Receptacle {
    /// Attaches an option valid on this command only.
    fn add_option(&mut self, option: OptionDescriptor);

    /// Attaches an option shared with every subcommand.
    fn add_global_option(&mut self, option: OptionDescriptor);

    /// Appends a positional argument.
    fn add_argument(&mut self, argument: ArgumentDescriptor);
}

/// A command and the descriptors attached to it.
#[derive(Debug, Clone, Default)]
pub struct CommandNode {
    name: String,
    about: Option<String>,
    options: Vec<OptionDescriptor>,
    global_options: Vec<OptionDescriptor>,
    arguments: Vec<ArgumentDescriptor>,
    subcommands: Vec<CommandNode>,
}

impl CommandNode {
    /// Creates an empty command named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the help summary.
    #[must_use]
    pub fn with_about(mut self, about: impl Into<String>) -> Self {
        self.about = Some(about.into());
        self
    }

    /// Nests a subcommand.
    #[must_use]
    pub fn with_subcommand(mut self, subcommand: Self) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    /// Command name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Command-local options in attachment order.
    #[must_use]
    pub fn options(&self) -> &[OptionDescriptor] {
        &self.options
    }

    /// Global options in attachment order.
    #[must_use]
    pub fn global_options(&self) -> &[OptionDescriptor] {
        &self.global_options
    }

    /// Positional arguments in attachment order.
    #[must_use]
    pub fn arguments(&self) -> &[ArgumentDescriptor] {
        &self.arguments
    }

    /// Nested subcommands.
    #[must_use]
    pub fn subcommands(&self) -> &[Self] {
        &self.subcommands
    }

    /// Mutable access to a direct subcommand by name.
    pub fn subcommand_mut(&mut self, name: &str) -> Option<&mut Self> {
        self.subcommands.iter_mut().find(|sub| sub.name == name)
    }

    /// Finds a local or global option by canonical name or alias.
    #[must_use]
    pub fn find_option(&self, flag: &str) -> Option<&OptionDescriptor> {
        self.global_options
            .iter()
            .chain(&self.options)
            .find(|option| option.name == flag || option.aliases.iter().any(|alias| alias == flag))
    }

    /// Renders the node and its subcommands as a [`clap::Command`].
    ///
    /// clap rejects global arguments marked as required, so required global
    /// options are rendered as optional; check them after parsing with
    /// [`CommandNode::missing_required_globals`]. Completion sources are
    /// attached as `clap_complete` value completers.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StarterError::UnsupportedValueType`] or
    /// [`crate::StarterError::InvalidAlias`] when a descriptor cannot be
    /// expressed as a clap argument, and
    /// [`crate::StarterError::FlagConflict`] when two arguments of a command
    /// share an id, flag or alias. The automatic `-h`/`--help` flag and the
    /// globals inherited from parent commands count as taken.
    pub fn to_clap(&self) -> StarterResult<clap::Command> {
        clap_bridge::command(self)
    }

    /// Canonical names of required global options not supplied on the
    /// command line.
    #[must_use]
    pub fn missing_required_globals(&self, matches: &ArgMatches) -> Vec<String> {
        self.global_options
            .iter()
            .filter(|option| option.required)
            .filter(|option| matches.value_source(option.long()) != Some(ValueSource::CommandLine))
            .map(|option| option.name.clone())
            .collect()
    }
}

impl Receptacle for CommandNode {
    fn add_option(&mut self, option: OptionDescriptor) {
        self.options.push(option);
    }

    fn add_global_option(&mut self, option: OptionDescriptor) {
        self.global_options.push(option);
    }

    fn add_argument(&mut self, argument: ArgumentDescriptor) {
        self.arguments.push(argument);
    }
}
