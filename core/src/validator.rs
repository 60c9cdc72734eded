//! The validator contract and a small set of built-in validators.
//!
//! A validator is a single-method capability: one raw token in, one
//! [`ValidatorOutput`] out. Any `Fn(&str) -> ValidatorOutput` closure that is
//! `Send + Sync` is a validator, so custom checks need no new types.
//!
//! # Examples
//!
//! ```
//! use command_args_core::{Validator, ValidatorOutput};
//!
//! let non_negative = |token: &str| match token.parse::<i64>() {
//!     Ok(n) if n >= 0 => ValidatorOutput::valid(),
//!     _ => ValidatorOutput::invalid(),
//! };
//!
//! assert!(non_negative.validate("3").is_valid());
//! assert!(!non_negative.validate("-3").is_valid());
//! ```

use crate::types::ValidatorOutput;

/// Per-argument acceptance check.
///
/// Implementations must be pure: no side effects and no dependency on the
/// order of calls. They are shared across threads by the command host.
pub trait Validator: Send + Sync {
    /// Checks one raw token.
    fn validate(&self, token: &str) -> ValidatorOutput;
}

impl<F> Validator for F
where
    F: Fn(&str) -> ValidatorOutput + Send + Sync,
{
    fn validate(&self, token: &str) -> ValidatorOutput {
        self(token)
    }
}

/// Built-in validators.
///
/// Each one rejects with its custom message when configured through
/// `with_message`, otherwise with the dispatcher's default.
pub mod validators {
    use regex::Regex;

    use super::Validator;
    use crate::error::SchemaError;
    use crate::types::{ErrorMessage, ValidatorOutput};

    fn reject(message: &Option<ErrorMessage>) -> ValidatorOutput {
        match message {
            Some(message) => ValidatorOutput::rejected(message.clone()),
            None => ValidatorOutput::invalid(),
        }
    }

    /// Accepts tokens that parse as a 32-bit signed integer.
    ///
    /// ```
    /// use command_args_core::{Validator, validators::Integer};
    ///
    /// let v = Integer::with_message("Invalid integer provided!").unwrap();
    /// assert!(v.validate("-42").is_valid());
    /// assert_eq!(v.validate("4.2").error_message(), Some("Invalid integer provided!"));
    /// ```
    #[derive(Debug, Clone, Default)]
    pub struct Integer {
        message: Option<ErrorMessage>,
    }

    impl Integer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_message(message: impl Into<String>) -> Result<Self, SchemaError> {
            Ok(Self {
                message: Some(ErrorMessage::new(message)?),
            })
        }
    }

    impl Validator for Integer {
        fn validate(&self, token: &str) -> ValidatorOutput {
            match token.parse::<i32>() {
                Ok(_) => ValidatorOutput::valid(),
                Err(_) => reject(&self.message),
            }
        }
    }

    /// Accepts tokens that parse as a finite floating point number.
    #[derive(Debug, Clone, Default)]
    pub struct Number {
        message: Option<ErrorMessage>,
    }

    impl Number {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_message(message: impl Into<String>) -> Result<Self, SchemaError> {
            Ok(Self {
                message: Some(ErrorMessage::new(message)?),
            })
        }
    }

    impl Validator for Number {
        fn validate(&self, token: &str) -> ValidatorOutput {
            match token.parse::<f64>() {
                Ok(n) if n.is_finite() => ValidatorOutput::valid(),
                _ => reject(&self.message),
            }
        }
    }

    /// Accepts one of a fixed set of choices.
    ///
    /// ```
    /// use command_args_core::{Validator, validators::OneOf};
    ///
    /// let v = OneOf::new(["on", "off"]).unwrap().ignore_case();
    /// assert!(v.validate("ON").is_valid());
    /// assert!(!v.validate("maybe").is_valid());
    /// ```
    #[derive(Debug, Clone)]
    pub struct OneOf {
        choices: Vec<String>,
        ignore_case: bool,
        message: Option<ErrorMessage>,
    }

    impl OneOf {
        /// # Errors
        ///
        /// Returns [`SchemaError::EmptyChoices`] when `choices` is empty.
        pub fn new<I, S>(choices: I) -> Result<Self, SchemaError>
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
            if choices.is_empty() {
                return Err(SchemaError::EmptyChoices);
            }
            Ok(Self {
                choices,
                ignore_case: false,
                message: None,
            })
        }

        /// Compares choices case-insensitively, using Unicode lowercase.
        pub fn ignore_case(mut self) -> Self {
            self.ignore_case = true;
            self
        }

        pub fn with_message(mut self, message: impl Into<String>) -> Result<Self, SchemaError> {
            self.message = Some(ErrorMessage::new(message)?);
            Ok(self)
        }

        pub fn choices(&self) -> &[String] {
            &self.choices
        }
    }

    impl Validator for OneOf {
        fn validate(&self, token: &str) -> ValidatorOutput {
            let matched = if self.ignore_case {
                let token = token.to_lowercase();
                self.choices.iter().any(|c| c.to_lowercase() == token)
            } else {
                self.choices.iter().any(|c| c == token)
            };
            if matched {
                ValidatorOutput::valid()
            } else {
                reject(&self.message)
            }
        }
    }

    /// Accepts tokens fully matched by a regular expression.
    ///
    /// The pattern is anchored, so `[a-z]+` rejects `abc1`.
    #[derive(Debug, Clone)]
    pub struct Pattern {
        regex: Regex,
        message: Option<ErrorMessage>,
    }

    impl Pattern {
        /// # Errors
        ///
        /// Returns [`SchemaError::InvalidPattern`] when the regex does not
        /// compile.
        pub fn new(pattern: &str) -> Result<Self, SchemaError> {
            let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|err| {
                SchemaError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: err.to_string(),
                }
            })?;
            Ok(Self {
                regex,
                message: None,
            })
        }

        pub fn with_message(mut self, message: impl Into<String>) -> Result<Self, SchemaError> {
            self.message = Some(ErrorMessage::new(message)?);
            Ok(self)
        }
    }

    impl Validator for Pattern {
        fn validate(&self, token: &str) -> ValidatorOutput {
            if self.regex.is_match(token) {
                ValidatorOutput::valid()
            } else {
                reject(&self.message)
            }
        }
    }

    /// Accepts tokens whose length in characters lies within bounds.
    #[derive(Debug, Clone)]
    pub struct Length {
        min: Option<usize>,
        max: Option<usize>,
        message: Option<ErrorMessage>,
    }

    impl Length {
        /// # Errors
        ///
        /// Returns [`SchemaError::InvalidLengthBounds`] when `min > max`.
        pub fn new(min: Option<usize>, max: Option<usize>) -> Result<Self, SchemaError> {
            if let (Some(min), Some(max)) = (min, max) {
                if min > max {
                    return Err(SchemaError::InvalidLengthBounds { min, max });
                }
            }
            Ok(Self {
                min,
                max,
                message: None,
            })
        }

        pub fn with_message(mut self, message: impl Into<String>) -> Result<Self, SchemaError> {
            self.message = Some(ErrorMessage::new(message)?);
            Ok(self)
        }
    }

    impl Validator for Length {
        fn validate(&self, token: &str) -> ValidatorOutput {
            let len = token.chars().count();
            let too_short = self.min.is_some_and(|min| len < min);
            let too_long = self.max.is_some_and(|max| len > max);
            if too_short || too_long {
                reject(&self.message)
            } else {
                ValidatorOutput::valid()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;
    use super::*;
    use crate::error::SchemaError;

    #[test]
    fn test_integer_matches_i32_range() {
        let v = Integer::new();
        assert!(v.validate("2147483647").is_valid());
        assert!(!v.validate("2147483648").is_valid());
        assert!(!v.validate("").is_valid());
        assert!(!v.validate(" 5").is_valid());
    }

    #[test]
    fn test_integer_default_rejection_has_no_message() {
        let out = Integer::new().validate("abc");
        assert!(!out.is_valid());
        assert_eq!(out.error_message(), None);
    }

    #[test]
    fn test_number_rejects_non_finite() {
        let v = Number::new();
        assert!(v.validate("3.5").is_valid());
        assert!(v.validate("-1e3").is_valid());
        assert!(!v.validate("inf").is_valid());
        assert!(!v.validate("NaN").is_valid());
    }

    #[test]
    fn test_one_of_is_case_sensitive_by_default() {
        let v = OneOf::new(["red", "green"]).unwrap();
        assert!(v.validate("red").is_valid());
        assert!(!v.validate("Red").is_valid());
        assert_eq!(OneOf::new(Vec::<String>::new()).unwrap_err(), SchemaError::EmptyChoices);
    }

    #[test]
    fn test_one_of_ignore_case_handles_non_ascii() {
        let v = OneOf::new(["Äpfel", "Straße"]).unwrap().ignore_case();
        assert!(v.validate("äpfel").is_valid());
        assert!(v.validate("ÄPFEL").is_valid());
        assert!(v.validate("straße").is_valid());
        assert!(!v.validate("apfel").is_valid());
    }

    #[test]
    fn test_pattern_is_anchored() {
        let v = Pattern::new("[a-z]+")
            .unwrap()
            .with_message("Lowercase letters only!")
            .unwrap();
        assert!(v.validate("abc").is_valid());
        let out = v.validate("abc1");
        assert_eq!(out.error_message(), Some("Lowercase letters only!"));
    }

    #[test]
    fn test_pattern_rejects_bad_regex() {
        assert!(matches!(
            Pattern::new("(unclosed"),
            Err(SchemaError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_length_bounds() {
        let v = Length::new(Some(2), Some(4)).unwrap();
        assert!(!v.validate("a").is_valid());
        assert!(v.validate("ab").is_valid());
        assert!(v.validate("äöüß").is_valid());
        assert!(!v.validate("abcde").is_valid());
        assert_eq!(
            Length::new(Some(5), Some(1)).unwrap_err(),
            SchemaError::InvalidLengthBounds { min: 5, max: 1 }
        );
    }

    #[test]
    fn test_with_message_rejects_empty() {
        assert_eq!(
            Integer::with_message("").unwrap_err(),
            SchemaError::EmptyErrorMessage
        );
    }
}
