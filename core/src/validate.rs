//! Structural validation of a command catalog.
//!
//! Per-argument invariants are enforced by the constructors; this module
//! catches the problems that only show up across arguments or commands,
//! such as duplicate names and aliases that shadow another command.
//!
//! # Examples
//!
//! ```
//! use command_args_core::*;
//!
//! let ok = vec![CommandInfo::new("test", "a testing command").with_alias("t")];
//! assert!(validate_catalog(&ok).is_empty());
//!
//! let clash = vec![
//!     CommandInfo::new("test", "a testing command").with_alias("t"),
//!     CommandInfo::new("t", "shadowed by an alias"),
//! ];
//! assert_eq!(
//!     validate_catalog(&clash),
//!     vec![ValidationError::DuplicateCommand("t".to_string())]
//! );
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::command::CommandDescriptor;
use crate::help::HELP_COMMAND;

/// Catalog validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Command name is empty.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// Command name or alias contains whitespace and could never be invoked.
    #[error("command name or alias cannot contain whitespace: {0:?}")]
    WhitespaceInName(String),
    /// Name or alias is taken by the built-in help command.
    #[error("command name or alias `{0}` is reserved for the help command")]
    ReservedName(String),
    /// An alias is empty.
    #[error("alias of command `{0}` cannot be empty")]
    EmptyAlias(String),
    /// An alias repeats the command name or another alias.
    #[error("duplicate alias in command `{command}`: {alias}")]
    DuplicateAlias { command: String, alias: String },
    /// Two arguments of the same command share a name.
    #[error("duplicate argument in command `{command}`: {argument}")]
    DuplicateArgument { command: String, argument: String },
    /// Two commands share a name or alias.
    #[error("duplicate command name or alias in catalog: {0}")]
    DuplicateCommand(String),
}

/// Validates a whole catalog.
///
/// Every command is validated on its own, then names and aliases are checked
/// for clashes across commands. Stops at the first problem.
pub fn validate_catalog<C: CommandDescriptor>(commands: &[C]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for command in commands {
        errors.extend(validate_command(command));
        if !errors.is_empty() {
            return errors;
        }

        let names = std::iter::once(command.name())
            .chain(command.aliases().iter().map(String::as_str));
        for name in names {
            if !seen.insert(name) {
                errors.push(ValidationError::DuplicateCommand(name.to_string()));
                return errors;
            }
        }
    }

    errors
}

/// Validates a single command's name, aliases and argument names.
pub fn validate_command<C: CommandDescriptor + ?Sized>(command: &C) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let name = command.name();

    if name.is_empty() {
        errors.push(ValidationError::EmptyCommandName);
        return errors;
    }
    if name.chars().any(char::is_whitespace) {
        errors.push(ValidationError::WhitespaceInName(name.to_string()));
        return errors;
    }
    if name == HELP_COMMAND {
        errors.push(ValidationError::ReservedName(name.to_string()));
        return errors;
    }

    let mut seen = HashSet::from([name]);
    for alias in command.aliases() {
        if alias.is_empty() {
            errors.push(ValidationError::EmptyAlias(name.to_string()));
            return errors;
        }
        if alias.chars().any(char::is_whitespace) {
            errors.push(ValidationError::WhitespaceInName(alias.clone()));
            return errors;
        }
        if alias == HELP_COMMAND {
            errors.push(ValidationError::ReservedName(alias.clone()));
            return errors;
        }
        if !seen.insert(alias.as_str()) {
            errors.push(ValidationError::DuplicateAlias {
                command: name.to_string(),
                alias: alias.clone(),
            });
            return errors;
        }
    }

    if let Some(arguments) = command.arguments() {
        let mut seen_args = HashSet::new();
        for argument in arguments.iter() {
            if !seen_args.insert(argument.name()) {
                errors.push(ValidationError::DuplicateArgument {
                    command: name.to_string(),
                    argument: argument.name().to_string(),
                });
                return errors;
            }
        }
    }

    errors
}
