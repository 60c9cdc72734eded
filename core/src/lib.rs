//! Argument parsing and validation for chat bot commands.
//!
//! This crate turns the raw text that follows a command name into a list of
//! validated argument tokens, or into a precise, user-facing rejection:
//!
//! - [`split_arguments`]: tokenizes a raw string, honoring single and
//!   double quotes.
//! - [`Argument`]: schema for one positional argument: name, description,
//!   type label and an optional [`Validator`].
//! - [`ArgumentSet`]: ordered required + optional arguments of a command;
//!   renders the canonical usage string.
//! - [`Dispatcher`]: the validation pipeline, returning tokens or a
//!   [`DispatchError`].
//! - [`HelpRenderer`]: catalog and single-command help [`Document`]s built
//!   from [`CommandDescriptor`]s.
//!
//! Catalog-level checks (duplicate names, aliases, arguments) live in
//! [`validate_catalog`].
//!
//! # Example
//!
//! ```
//! use command_args_core::*;
//!
//! let args = ArgumentSet::new(
//!     vec![Argument::builder("number")
//!         .with_description("the test number")
//!         .with_type("number")
//!         .with_validator(validators::Integer::with_message("Invalid integer provided!").unwrap())
//!         .build()
//!         .unwrap()],
//!     vec![],
//! );
//! assert_eq!(args.usage(), "{NUMBER: number}");
//!
//! let dispatcher = Dispatcher::new(&args, Invocation::new("!", "test", "alice"));
//! assert_eq!(dispatcher.parse("5").unwrap(), vec!["5"]);
//!
//! let err = dispatcher.parse("abc").unwrap_err();
//! assert_eq!(err.message(), "Invalid integer provided!");
//! ```

mod command;
mod dispatch;
mod error;
mod help;
mod set;
mod tokenize;
mod types;
mod validate;
mod validator;

pub use command::{CommandDescriptor, CommandInfo};
pub use dispatch::{Dispatcher, Invocation};
pub use error::{DispatchError, SchemaError};
pub use help::{
    DEFAULT_DESCRIPTION, DEFAULT_TITLE, Document, FORMAT_LEGEND, Field, HELP_COMMAND, HelpError,
    HelpRenderer,
};
pub use set::ArgumentSet;
pub use tokenize::{is_token_separator, split_arguments};
pub use types::{Argument, ArgumentBuilder, ErrorMessage, ValidatorOutput};
pub use validate::{ValidationError, validate_catalog, validate_command};
pub use validator::{Validator, validators};
