//! Reference command host for `command-args-core`.
//!
//! A real chat framework owns connections, registration and delivery. This
//! crate is a minimal stand-in for it, used by the `argcheck` CLI and
//! by tests:
//!
//! - [`HostConfig`]: YAML configuration (prefix, owners, help text).
//! - [`Catalog`]: commands loaded from a YAML or JSON catalog file.
//! - [`Host`]: turns one chat message into an [`Outcome`].
//! - [`output`]: formats help documents as JSON, YAML, Markdown or text.
//!
//! # Quick start
//!
//! ```no_run
//! use command_args_host::{Caller, Catalog, Host, HostConfig, Outcome};
//!
//! let config = HostConfig::load("bot.yml").unwrap();
//! let catalog = Catalog::from_path("commands.yml").unwrap();
//! let host = Host::new(config, catalog);
//!
//! match host.handle("!test 5", &Caller::new("1", "alice")) {
//!     Outcome::Accepted { command, tokens } => println!("{command}: {tokens:?}"),
//!     Outcome::Rejected(reply) => println!("{reply}"),
//!     Outcome::Help(doc) => println!("{}", doc.title),
//!     Outcome::Ignored => {}
//! }
//! ```

mod catalog;
mod config;
mod error;
mod host;
pub mod output;

pub use catalog::{
    ArgumentDefinition, Catalog, CatalogFile, CatalogSource, CommandDefinition,
    ValidatorDefinition,
};
pub use config::{DEFAULT_PREFIX, HelpConfig, HostConfig};
pub use error::{HostError, Result};
pub use host::{Caller, Host, Outcome};
