//! Command metadata as read by the help renderer.
//!
//! The command host owns its command objects. It exposes them to this crate
//! through [`CommandDescriptor`]; [`CommandInfo`] is a ready-made
//! implementation for hosts that have no command type of their own.

use std::time::Duration;

use crate::set::ArgumentSet;

/// Read-only view of a command registered with the host.
pub trait CommandDescriptor {
    fn name(&self) -> &str;

    fn aliases(&self) -> &[String];

    fn category(&self) -> Option<&str> {
        None
    }

    fn help(&self) -> &str;

    /// Per-use cooldown.
    fn cooldown(&self) -> Duration {
        Duration::ZERO
    }

    fn is_hidden(&self) -> bool {
        false
    }

    fn is_owner_only(&self) -> bool {
        false
    }

    /// Argument schema, if the command declares one.
    fn arguments(&self) -> Option<&ArgumentSet> {
        None
    }

    /// Whether `target` is this command's name or one of its aliases.
    /// Comparison is case-sensitive.
    fn answers_to(&self, target: &str) -> bool {
        self.name() == target || self.aliases().iter().any(|a| a == target)
    }
}

/// Plain command metadata.
///
/// # Examples
///
/// ```
/// use command_args_core::{Argument, ArgumentSet, CommandDescriptor, CommandInfo};
///
/// let cmd = CommandInfo::new("test", "a testing command")
///     .with_alias("t")
///     .with_arguments(ArgumentSet::new(vec![Argument::new("number").unwrap()], vec![]));
///
/// assert!(cmd.answers_to("t"));
/// assert!(!cmd.answers_to("T"));
/// assert_eq!(cmd.arguments().unwrap().usage(), "{NUMBER}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandInfo {
    pub name: String,
    pub aliases: Vec<String>,
    pub category: Option<String>,
    pub help: String,
    pub cooldown: Duration,
    pub hidden: bool,
    pub owner_only: bool,
    pub arguments: Option<ArgumentSet>,
}

impl CommandInfo {
    pub fn new(name: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            ..Default::default()
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn owner_only(mut self) -> Self {
        self.owner_only = true;
        self
    }

    pub fn with_arguments(mut self, arguments: ArgumentSet) -> Self {
        self.arguments = Some(arguments);
        self
    }
}

impl CommandDescriptor for CommandInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn aliases(&self) -> &[String] {
        &self.aliases
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn help(&self) -> &str {
        &self.help
    }

    fn cooldown(&self) -> Duration {
        self.cooldown
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn is_owner_only(&self) -> bool {
        self.owner_only
    }

    fn arguments(&self) -> Option<&ArgumentSet> {
        self.arguments.as_ref()
    }
}
