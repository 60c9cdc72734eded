//! Argument schema and validator output types.
//!
//! Everything here is immutable after construction. Constructors that could
//! produce a value violating an invariant (empty name, empty type label,
//! empty error message) return [`SchemaError`] instead.

use std::fmt;
use std::sync::Arc;

use crate::error::SchemaError;
use crate::validator::Validator;

/// A non-empty custom rejection message.
///
/// # Examples
///
/// ```
/// use command_args_core::{ErrorMessage, SchemaError};
///
/// let msg = ErrorMessage::new("Invalid integer provided!").unwrap();
/// assert_eq!(msg.as_str(), "Invalid integer provided!");
/// assert_eq!(ErrorMessage::new(""), Err(SchemaError::EmptyErrorMessage));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorMessage(String);

impl ErrorMessage {
    /// Creates a message, rejecting the empty string.
    pub fn new(message: impl Into<String>) -> Result<Self, SchemaError> {
        let message = message.into();
        if message.is_empty() {
            return Err(SchemaError::EmptyErrorMessage);
        }
        Ok(Self(message))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Verdict of a single [`Validator`] call.
///
/// Produced fresh on every call. A rejection may carry a custom
/// [`ErrorMessage`]; without one the dispatcher substitutes its default.
///
/// # Examples
///
/// ```
/// use command_args_core::ValidatorOutput;
///
/// assert!(ValidatorOutput::valid().is_valid());
///
/// let rejected = ValidatorOutput::invalid_with("Invalid integer provided!").unwrap();
/// assert!(!rejected.is_valid());
/// assert_eq!(rejected.error_message(), Some("Invalid integer provided!"));
///
/// assert!(ValidatorOutput::new(false, Some(String::new())).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorOutput {
    is_valid: bool,
    error_message: Option<ErrorMessage>,
}

impl ValidatorOutput {
    /// Creates an output from a verdict and an optional message.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyErrorMessage`] if `error_message` is
    /// `Some("")`.
    pub fn new(is_valid: bool, error_message: Option<String>) -> Result<Self, SchemaError> {
        let error_message = error_message.map(ErrorMessage::new).transpose()?;
        Ok(Self {
            is_valid,
            error_message,
        })
    }

    /// Accepts the token.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    /// Rejects the token with the dispatcher's default message.
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            error_message: None,
        }
    }

    /// Rejects the token with an already validated message.
    pub fn rejected(message: ErrorMessage) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message),
        }
    }

    /// Rejects the token with a custom message.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyErrorMessage`] if `message` is empty.
    pub fn invalid_with(message: impl Into<String>) -> Result<Self, SchemaError> {
        Ok(Self::rejected(ErrorMessage::new(message)?))
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_ref().map(ErrorMessage::as_str)
    }
}

/// Schema for one positional argument of a command.
///
/// Build with [`Argument::new`] for the common case, or
/// [`Argument::builder`] to attach a description, type label and
/// validator. Cloning is cheap; the validator is shared.
///
/// # Examples
///
/// ```
/// use command_args_core::{Argument, ValidatorOutput, validators::Integer};
///
/// let number = Argument::builder("number")
///     .with_description("the test number")
///     .with_type("number")
///     .with_validator(Integer::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(number.name(), "number");
/// assert_eq!(number.value_type(), Some("number"));
/// assert!(number.validate("5").is_valid());
/// assert!(!number.validate("abc").is_valid());
///
/// assert!(Argument::new("").is_err());
/// ```
#[derive(Clone)]
pub struct Argument {
    name: String,
    description: Option<String>,
    value_type: Option<String>,
    validator: Option<Arc<dyn Validator>>,
}

impl Argument {
    /// Creates an argument with only a name.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyArgumentName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, SchemaError> {
        Self::builder(name).build()
    }

    /// Starts building an argument.
    pub fn builder(name: impl Into<String>) -> ArgumentBuilder {
        ArgumentBuilder {
            name: name.into(),
            description: None,
            value_type: None,
            validator: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human description; `None` when absent or empty.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// User-facing type label.
    pub fn value_type(&self) -> Option<&str> {
        self.value_type.as_deref()
    }

    pub fn has_validator(&self) -> bool {
        self.validator.is_some()
    }

    /// Runs the validator; an argument without one accepts everything.
    pub fn validate(&self, token: &str) -> ValidatorOutput {
        match &self.validator {
            Some(validator) => validator.validate(token),
            None => ValidatorOutput::valid(),
        }
    }

    /// Upper-cased name as shown in usage strings and help.
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argument")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("value_type", &self.value_type)
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}

/// Builder for [`Argument`]. Invariants are checked in [`build`](Self::build).
pub struct ArgumentBuilder {
    name: String,
    description: Option<String>,
    value_type: Option<String>,
    validator: Option<Arc<dyn Validator>>,
}

impl ArgumentBuilder {
    /// Adds a description. An empty description is treated as absent.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a type label. Must be non-empty.
    pub fn with_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    /// Attaches a validator.
    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Attaches a validator that is already shared.
    pub fn with_shared_validator(mut self, validator: Arc<dyn Validator>) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Finishes the argument.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyArgumentName`] for an empty name and
    /// [`SchemaError::EmptyTypeLabel`] for a present but empty type label.
    pub fn build(self) -> Result<Argument, SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyArgumentName);
        }
        if self.value_type.as_deref() == Some("") {
            return Err(SchemaError::EmptyTypeLabel(self.name));
        }
        Ok(Argument {
            name: self.name,
            description: self.description,
            value_type: self.value_type,
            validator: self.validator,
        })
    }
}
