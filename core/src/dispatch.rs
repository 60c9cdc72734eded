//! Validation pipeline from raw argument string to validated tokens.
//!
//! Steps, short-circuiting on the first failure:
//!
//! 1. an [`ArgumentSet`] without arguments accepts immediately with no tokens,
//! 2. the raw string is tokenized ([`split_arguments`]),
//! 3. no tokens with at least one required argument is a missing-arguments
//!    rejection addressed to the author,
//! 4. fewer tokens than required arguments names the unmet arguments,
//! 5. more tokens than slots is a too-many-arguments rejection,
//! 6. each token is checked by the validator of its slot, stopping at the
//!    first rejection.
//!
//! Rejections are ordinary return values, never panics.

use tracing::debug;

use crate::error::DispatchError;
use crate::set::ArgumentSet;
use crate::tokenize::split_arguments;

/// Who invoked which command, and with which prefix.
///
/// Only used to phrase rejection messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub prefix: &'a str,
    pub command: &'a str,
    pub author: &'a str,
}

impl<'a> Invocation<'a> {
    pub fn new(prefix: &'a str, command: &'a str, author: &'a str) -> Self {
        Self {
            prefix,
            command,
            author,
        }
    }
}

/// Validates raw argument strings against one command's [`ArgumentSet`].
///
/// Holds only shared references, so one dispatcher per incoming message is
/// cheap and concurrent dispatches never share mutable state.
///
/// # Examples
///
/// ```
/// use command_args_core::{Argument, ArgumentSet, Dispatcher, Invocation, validators::Integer};
///
/// let args = ArgumentSet::new(
///     vec![Argument::builder("number")
///         .with_type("number")
///         .with_validator(Integer::with_message("Invalid integer provided!").unwrap())
///         .build()
///         .unwrap()],
///     vec![],
/// );
/// let dispatcher = Dispatcher::new(&args, Invocation::new("!", "test", "alice"));
///
/// assert_eq!(dispatcher.parse("5").unwrap(), vec!["5"]);
///
/// let reply = dispatcher.dispatch("abc", |_| String::new(), |message| message);
/// assert_eq!(
///     reply,
///     "Invalid integer provided!\nThe proper usage would be: `!test {NUMBER: number}`"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    arguments: &'a ArgumentSet,
    invocation: Invocation<'a>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(arguments: &'a ArgumentSet, invocation: Invocation<'a>) -> Self {
        Self {
            arguments,
            invocation,
        }
    }

    /// The line appended to every rejection.
    pub fn proper_usage(&self) -> String {
        format!(
            "The proper usage would be: `{}{} {}`",
            self.invocation.prefix,
            self.invocation.command,
            self.arguments.usage()
        )
    }

    /// Runs the pipeline and returns the validated tokens.
    ///
    /// Tokens are returned unmodified and in input order; any conversion is
    /// left to the caller.
    pub fn parse(&self, raw: &str) -> Result<Vec<String>, DispatchError> {
        let result = self.run(raw);
        match &result {
            Ok(tokens) => debug!(
                command = %self.invocation.command,
                tokens = tokens.len(),
                "Arguments accepted"
            ),
            Err(err) => debug!(
                command = %self.invocation.command,
                kind = err.kind(),
                "Arguments rejected"
            ),
        }
        result
    }

    /// Callback form of [`parse`](Self::parse).
    ///
    /// Calls exactly one of `on_success` (with the validated tokens) or
    /// `on_reject` (with the ready-to-display rejection text).
    pub fn dispatch<R>(
        &self,
        raw: &str,
        on_success: impl FnOnce(Vec<String>) -> R,
        on_reject: impl FnOnce(String) -> R,
    ) -> R {
        match self.parse(raw) {
            Ok(tokens) => on_success(tokens),
            Err(err) => on_reject(err.to_string()),
        }
    }

    fn run(&self, raw: &str) -> Result<Vec<String>, DispatchError> {
        let arguments = self.arguments;
        if arguments.is_empty() {
            return Ok(Vec::new());
        }

        let tokens = split_arguments(raw);
        let required = arguments.required_count();

        if tokens.len() < required {
            return Err(DispatchError::MissingArguments {
                provided: tokens.len(),
                missing: arguments.required()[tokens.len()..]
                    .iter()
                    .map(|a| a.name().to_string())
                    .collect(),
                author: self.invocation.author.to_string(),
                proper_usage: self.proper_usage(),
            });
        }

        if tokens.len() > arguments.len() {
            return Err(DispatchError::TooManyArguments {
                provided: tokens.len(),
                max: arguments.len(),
                proper_usage: self.proper_usage(),
            });
        }

        for (position, token) in tokens.iter().enumerate() {
            // Bounded by the too-many check above.
            let Some(argument) = arguments.slot(position) else {
                break;
            };
            let output = argument.validate(token);
            if output.is_valid() {
                continue;
            }
            let message = match output.error_message() {
                Some(message) => message.to_string(),
                None => format!(
                    "You provided an invalid argument `{}` for command `{}`!",
                    argument.display_name(),
                    self.invocation.command
                ),
            };
            return Err(DispatchError::InvalidArgument {
                position,
                argument: argument.name().to_string(),
                message,
                proper_usage: self.proper_usage(),
            });
        }

        Ok(tokens)
    }
}
