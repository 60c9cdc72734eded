//! Routes one chat message to help or to an argument-validated command.

use command_args_core::{
    CommandDescriptor, Dispatcher, Document, HELP_COMMAND, Invocation, is_token_separator,
};
use tracing::debug;

use crate::catalog::Catalog;
use crate::config::HostConfig;

/// The sender of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Stable id, compared against [`HostConfig::owner_ids`].
    pub id: String,
    /// Display name used in replies.
    pub name: String,
}

impl Caller {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Result of handling one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Not a command for this host (no prefix or unknown name).
    Ignored,
    /// Arguments validated; business logic should run with `tokens`.
    Accepted { command: String, tokens: Vec<String> },
    /// Ready-to-display rejection text.
    Rejected(String),
    /// Help document to display.
    Help(Document),
}

/// Reference command host: prefix handling, lookup, help and dispatch.
///
/// # Examples
///
/// ```
/// use command_args_host::{Caller, Catalog, Host, HostConfig, Outcome};
///
/// let catalog = Catalog::from_yaml_str(r#"
/// commands:
///   - name: test
///     aliases: [t]
///     help: a testing command
///     required:
///       - name: number
///         type: number
///         validator: { kind: integer, message: "Invalid integer provided!" }
/// "#).unwrap();
/// let host = Host::new(HostConfig::default(), catalog);
/// let caller = Caller::new("1", "alice");
///
/// assert_eq!(
///     host.handle("!t 5", &caller),
///     Outcome::Accepted { command: "test".into(), tokens: vec!["5".into()] }
/// );
/// assert_eq!(host.handle("hello", &caller), Outcome::Ignored);
/// ```
#[derive(Debug, Clone)]
pub struct Host {
    config: HostConfig,
    catalog: Catalog,
}

impl Host {
    pub fn new(config: HostConfig, catalog: Catalog) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Handles one raw chat message from `caller`.
    pub fn handle(&self, message: &str, caller: &Caller) -> Outcome {
        let Some(body) = message.strip_prefix(self.config.prefix.as_str()) else {
            return Outcome::Ignored;
        };
        let (name, raw_args) = match body.split_once(is_token_separator) {
            Some((name, rest)) => (name, rest.trim_matches(is_token_separator)),
            None => (body, ""),
        };
        if name.is_empty() {
            return Outcome::Ignored;
        }

        if name == HELP_COMMAND {
            debug!(args = raw_args, "Routing to help");
            let is_owner = self.config.is_owner(&caller.id);
            return match self.config.help_renderer().respond(
                self.catalog.commands(),
                raw_args,
                is_owner,
            ) {
                Ok(document) => Outcome::Help(document),
                Err(err) => Outcome::Rejected(err.to_string()),
            };
        }

        let Some(command) = self.catalog.find(name) else {
            debug!(command = name, "Ignoring unknown command");
            return Outcome::Ignored;
        };

        let Some(arguments) = command.arguments() else {
            return Outcome::Accepted {
                command: command.name().to_string(),
                tokens: Vec::new(),
            };
        };

        let invocation = Invocation::new(&self.config.prefix, command.name(), &caller.name);
        Dispatcher::new(arguments, invocation).dispatch(
            raw_args,
            |tokens| Outcome::Accepted {
                command: command.name().to_string(),
                tokens,
            },
            Outcome::Rejected,
        )
    }
}
