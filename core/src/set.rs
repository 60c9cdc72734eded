//! Ordered required + optional argument schema for one command.

use crate::types::Argument;

/// Ordered argument schema of one command.
///
/// Required arguments occupy the first `required_count()` token positions,
/// optional arguments the positions after them, each group in declared
/// order. The two groups are passed separately, so a required argument can
/// never follow an optional one.
///
/// # Examples
///
/// ```
/// use command_args_core::{Argument, ArgumentSet};
///
/// let set = ArgumentSet::new(
///     vec![
///         Argument::builder("user").with_type("mention").build().unwrap(),
///         Argument::new("reason").unwrap(),
///     ],
///     vec![Argument::builder("days").with_type("number").build().unwrap()],
/// );
///
/// assert_eq!(set.usage(), "{USER: mention} {REASON} [DAYS: number]");
/// assert_eq!(set.required_count(), 2);
/// assert_eq!(set.slot(2).unwrap().name(), "days");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgumentSet {
    arguments: Vec<Argument>,
    required_count: usize,
}

impl ArgumentSet {
    pub fn new(required: Vec<Argument>, optional: Vec<Argument>) -> Self {
        let required_count = required.len();
        let mut arguments = required;
        arguments.extend(optional);
        Self {
            arguments,
            required_count,
        }
    }

    /// A set with no arguments; dispatch skips all checks.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn required(&self) -> &[Argument] {
        &self.arguments[..self.required_count]
    }

    pub fn optional(&self) -> &[Argument] {
        &self.arguments[self.required_count..]
    }

    pub fn required_count(&self) -> usize {
        self.required_count
    }

    pub fn optional_count(&self) -> usize {
        self.arguments.len() - self.required_count
    }

    /// Total number of token positions.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Argument that validates token position `position`.
    pub fn slot(&self, position: usize) -> Option<&Argument> {
        self.arguments.get(position)
    }

    /// Whether `position` belongs to a required argument.
    pub fn is_required_slot(&self, position: usize) -> bool {
        position < self.required_count
    }

    /// Iterates all arguments, required first.
    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter()
    }

    /// Canonical usage string, without prefix or command name.
    ///
    /// Required arguments render as `{NAME}` or `{NAME: TYPE}`, optional ones
    /// as `[NAME]` or `[NAME: TYPE]`, all separated by single spaces.
    pub fn usage(&self) -> String {
        self.arguments
            .iter()
            .enumerate()
            .map(|(position, argument)| {
                let (open, close) = if self.is_required_slot(position) {
                    ('{', '}')
                } else {
                    ('[', ']')
                };
                match argument.value_type() {
                    Some(value_type) => {
                        format!("{open}{}: {value_type}{close}", argument.display_name())
                    }
                    None => format!("{open}{}{close}", argument.display_name()),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
