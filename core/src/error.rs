//! Error types for argument schemas and dispatch.
//!
//! [`SchemaError`] covers programmer mistakes made while declaring a schema
//! and is returned by the constrained constructors. [`DispatchError`] covers
//! the recoverable, user-facing outcomes of validating a raw argument string.
//! Its `Display` impl is the ready-to-send reply text.

use thiserror::Error;

/// Construction-time schema faults.
///
/// These are returned immediately when an invalid [`Argument`](crate::Argument),
/// [`ErrorMessage`](crate::ErrorMessage) or built-in validator would be created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Argument name is empty.
    #[error("argument name cannot be empty")]
    EmptyArgumentName,
    /// A type label was supplied but is empty.
    #[error("type label of argument `{0}` cannot be empty")]
    EmptyTypeLabel(String),
    /// A custom error message was supplied but is empty.
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
    /// A choice validator was given no choices.
    #[error("choice list cannot be empty")]
    EmptyChoices,
    /// A pattern validator was given a regex that does not compile.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    /// A length validator has `min > max`.
    #[error("invalid length bounds: min {min} exceeds max {max}")]
    InvalidLengthBounds { min: usize, max: usize },
}

/// Dispatch-time rejection.
///
/// Every variant carries the "proper usage" line for the invoked command and
/// renders as `<reason>\n<proper usage>`.
///
/// # Examples
///
/// ```
/// use command_args_core::{Argument, ArgumentSet, DispatchError, Dispatcher, Invocation};
///
/// let args = ArgumentSet::new(vec![Argument::new("target").unwrap()], vec![]);
/// let dispatcher = Dispatcher::new(&args, Invocation::new("!", "kick", "alice"));
///
/// let err = dispatcher.parse("").unwrap_err();
/// assert!(matches!(err, DispatchError::MissingArguments { .. }));
/// assert_eq!(
///     err.to_string(),
///     "You didn't provide any arguments, alice!\nThe proper usage would be: `!kick {TARGET}`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Fewer tokens than required arguments.
    ///
    /// `missing` lists every required argument from the first unmet
    /// position onward. When `provided` is zero the reply addresses the
    /// author instead of naming the arguments.
    #[error("{}\n{proper_usage}", missing_summary(.provided, .author, .missing))]
    MissingArguments {
        provided: usize,
        missing: Vec<String>,
        author: String,
        proper_usage: String,
    },
    /// More tokens than required + optional slots.
    #[error("You provided too many arguments!\n{proper_usage}")]
    TooManyArguments {
        provided: usize,
        max: usize,
        proper_usage: String,
    },
    /// A token was rejected by its positional validator.
    #[error("{message}\n{proper_usage}")]
    InvalidArgument {
        position: usize,
        argument: String,
        message: String,
        proper_usage: String,
    },
}

impl DispatchError {
    /// Returns the "proper usage" line attached to this rejection.
    pub fn proper_usage(&self) -> &str {
        match self {
            Self::MissingArguments { proper_usage, .. }
            | Self::TooManyArguments { proper_usage, .. }
            | Self::InvalidArgument { proper_usage, .. } => proper_usage,
        }
    }

    /// Returns the rejection reason without the usage line.
    pub fn message(&self) -> String {
        match self {
            Self::MissingArguments {
                provided,
                missing,
                author,
                ..
            } => missing_summary(provided, author, missing),
            Self::TooManyArguments { .. } => "You provided too many arguments!".to_string(),
            Self::InvalidArgument { message, .. } => message.clone(),
        }
    }

    /// Short machine-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingArguments { .. } => "missing_arguments",
            Self::TooManyArguments { .. } => "too_many_arguments",
            Self::InvalidArgument { .. } => "invalid_argument",
        }
    }
}

fn missing_summary(provided: &usize, author: &str, missing: &[String]) -> String {
    if *provided == 0 {
        format!("You didn't provide any arguments, {author}!")
    } else {
        format!(
            "You didn't provide the required arg(s) \"{}\"!",
            missing.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_arguments_names_remaining() {
        let err = DispatchError::MissingArguments {
            provided: 1,
            missing: vec!["b".into(), "c".into()],
            author: "alice".into(),
            proper_usage: "usage".into(),
        };
        assert_eq!(
            err.to_string(),
            "You didn't provide the required arg(s) \"b, c\"!\nusage"
        );
        assert_eq!(err.proper_usage(), "usage");
        assert_eq!(err.kind(), "missing_arguments");
    }

    #[test]
    fn test_invalid_argument_message_excludes_usage() {
        let err = DispatchError::InvalidArgument {
            position: 0,
            argument: "number".into(),
            message: "Invalid integer provided!".into(),
            proper_usage: "usage".into(),
        };
        assert_eq!(err.message(), "Invalid integer provided!");
        assert_eq!(err.to_string(), "Invalid integer provided!\nusage");
    }
}
