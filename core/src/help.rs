//! Help rendering for a command catalog.
//!
//! Produces display-ready [`Document`]s: a catalog overview listing every
//! visible command, or the detailed view of a single command including one
//! block per declared argument.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::command::CommandDescriptor;
use crate::tokenize::is_token_separator;
use crate::types::Argument;

/// Default catalog title.
pub const DEFAULT_TITLE: &str = "Help";

/// Default catalog description, shown above the format legend.
pub const DEFAULT_DESCRIPTION: &str = "A list of commands and functionalities of this bot.";

/// Legend appended to the catalog description.
pub const FORMAT_LEGEND: &str =
    "**Format:** `<command> (<aliases>)` `{<required argument>}` `[<optional argument>]`";

const NO_TYPE: &str = "(no type specified)";
const NO_DESCRIPTION: &str = "No description found!";

/// Name of the built-in help command. Catalog commands may not use it.
pub const HELP_COMMAND: &str = "help";

/// A titled text document with field blocks, rendered verbatim by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// One named block of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Help request that cannot be answered with a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HelpError {
    /// The target matched no command name or alias.
    #[error("Command '{0}' not found!")]
    CommandNotFound(String),
    /// The target contained whitespace (`help X Y`).
    #[error("Invalid usage of 'help'!")]
    InvalidUsage,
}

/// Renders catalog and single-command help.
///
/// # Examples
///
/// ```
/// use command_args_core::{Argument, ArgumentSet, CommandInfo, HelpRenderer};
///
/// let commands = vec![
///     CommandInfo::new("test", "a testing command")
///         .with_alias("t")
///         .with_arguments(ArgumentSet::new(
///             vec![Argument::builder("number").with_type("number").build().unwrap()],
///             vec![],
///         )),
/// ];
/// let renderer = HelpRenderer::new("!");
///
/// let catalog = renderer.render_catalog(&commands, false);
/// assert_eq!(catalog.fields[1].name, "`!test (!t)` {NUMBER: number}");
/// assert_eq!(catalog.fields[1].value, "A testing command");
///
/// let detail = renderer.render_command(&commands, "t").unwrap();
/// assert_eq!(detail, renderer.render_command(&commands, "test").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct HelpRenderer {
    prefix: String,
    title: String,
    description: String,
}

impl HelpRenderer {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Answers a `help` invocation.
    ///
    /// An empty (or whitespace-only) `args` renders the catalog; otherwise
    /// `args` names a single command.
    pub fn respond<C: CommandDescriptor>(
        &self,
        commands: &[C],
        args: &str,
        caller_is_owner: bool,
    ) -> Result<Document, HelpError> {
        let target = args.trim_matches(is_token_separator);
        if target.is_empty() {
            Ok(self.render_catalog(commands, caller_is_owner))
        } else {
            self.render_command(commands, target)
        }
    }

    /// Lists every visible command in catalog order.
    ///
    /// Hidden commands are always skipped; owner-only commands are shown only
    /// to the owner.
    pub fn render_catalog<C: CommandDescriptor>(
        &self,
        commands: &[C],
        caller_is_owner: bool,
    ) -> Document {
        let prefix = &self.prefix;
        let mut fields = vec![Field::new(
            format!("`{prefix}{HELP_COMMAND} [COMMAND]`"),
            "Displays help for this command",
        )];

        for command in commands
            .iter()
            .filter(|c| !c.is_hidden() && (!c.is_owner_only() || caller_is_owner))
        {
            let mut name = format!("`{prefix}{}", command.name());
            if !command.aliases().is_empty() {
                let aliases = command
                    .aliases()
                    .iter()
                    .map(|alias| format!("{prefix}{alias}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                name.push_str(&format!(" ({aliases})"));
            }
            name.push('`');
            if let Some(usage) = command.arguments().map(|a| a.usage()) {
                if !usage.is_empty() {
                    name.push(' ');
                    name.push_str(&usage);
                }
            }
            if let Some(category) = command.category() {
                name.push_str(&format!(" (`{category}`)"));
            }
            fields.push(Field::new(name, capitalize_first(command.help())));
        }

        Document {
            title: self.title.clone(),
            description: format!("{}\n\n{FORMAT_LEGEND}", self.description),
            fields,
        }
    }

    /// Renders the detailed view of the command named `target`.
    ///
    /// Names are matched before aliases, case-sensitively, in catalog order.
    ///
    /// # Errors
    ///
    /// [`HelpError::InvalidUsage`] if `target` contains whitespace (checked
    /// before any lookup), [`HelpError::CommandNotFound`] if nothing matches.
    pub fn render_command<C: CommandDescriptor>(
        &self,
        commands: &[C],
        target: &str,
    ) -> Result<Document, HelpError> {
        if target.chars().any(is_token_separator) {
            return Err(HelpError::InvalidUsage);
        }

        let Some(command) = commands.iter().find(|c| c.answers_to(target)) else {
            debug!(command = target, "Help lookup found no command");
            return Err(HelpError::CommandNotFound(target.to_string()));
        };

        let mut description = command.help().to_string();
        if !command.aliases().is_empty() {
            description.push_str(&format!(
                "\n**Aliases:** `{}`",
                command.aliases().join(" ")
            ));
        }
        description.push_str(&format!("\n**Usage:** `{}{}`", self.prefix, command.name()));
        if let Some(usage) = command.arguments().map(|a| a.usage()) {
            if !usage.is_empty() {
                description.push_str(&format!(" `{usage}`"));
            }
        }
        description.push_str(&format!(
            "\n**Cooldown:** {} second(s)",
            command.cooldown().as_secs()
        ));

        let mut fields = Vec::new();
        if let Some(arguments) = command.arguments() {
            if let Some(field) = argument_field("Required Arguments", arguments.required()) {
                fields.push(field);
            }
            if let Some(field) = argument_field("Optional Arguments", arguments.optional()) {
                fields.push(field);
            }
        }

        Ok(Document {
            title: command.name().to_string(),
            description,
            fields,
        })
    }
}

fn argument_field(label: &str, arguments: &[Argument]) -> Option<Field> {
    if arguments.is_empty() {
        return None;
    }
    let blocks = arguments
        .iter()
        .map(|argument| {
            let value_type = match argument.value_type() {
                Some(value_type) => format!("type: `{value_type}`"),
                None => NO_TYPE.to_string(),
            };
            format!(
                "**`{}`** {value_type}\n{}",
                argument.display_name(),
                argument.description().unwrap_or(NO_DESCRIPTION)
            )
        })
        .collect::<Vec<_>>();
    Some(Field::new(label, blocks.join("\n\n")))
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
