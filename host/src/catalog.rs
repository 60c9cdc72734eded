//! Declarative command catalogs.
//!
//! A catalog file lists commands with their metadata and argument schemas.
//! Validators are referenced by kind and built with the constrained
//! constructors of `command-args-core`, so an invalid definition fails the
//! load instead of surfacing at dispatch time.
//!
//! # Example YAML
//!
//! ```yaml
//! commands:
//!   - name: test
//!     aliases: [t]
//!     help: a testing command
//!     required:
//!       - name: number
//!         description: the test number
//!         type: number
//!         validator:
//!           kind: integer
//!           message: Invalid integer provided!
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use command_args_core::{
    Argument, ArgumentSet, CommandDescriptor, CommandInfo, SchemaError, Validator,
    validate_catalog, validators,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{HostError, Result};

/// Built-in validator reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidatorDefinition {
    /// 32-bit signed integer.
    Integer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Finite floating point number.
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// One of a fixed list of choices.
    OneOf {
        choices: Vec<String>,
        #[serde(default)]
        ignore_case: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Anchored regular expression.
    Pattern {
        regex: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Length bounds in characters.
    Length {
        #[serde(default)]
        min: Option<usize>,
        #[serde(default)]
        max: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl ValidatorDefinition {
    /// Builds the validator.
    ///
    /// # Errors
    ///
    /// Returns the [`SchemaError`] of the underlying constructor (empty
    /// message, empty choices, bad regex, inverted bounds).
    pub fn build(&self) -> std::result::Result<Arc<dyn Validator>, SchemaError> {
        let validator: Arc<dyn Validator> = match self {
            Self::Integer { message } => {
                let v = match message {
                    Some(message) => validators::Integer::with_message(message.clone())?,
                    None => validators::Integer::new(),
                };
                Arc::new(v)
            }
            Self::Number { message } => {
                let v = match message {
                    Some(message) => validators::Number::with_message(message.clone())?,
                    None => validators::Number::new(),
                };
                Arc::new(v)
            }
            Self::OneOf {
                choices,
                ignore_case,
                message,
            } => {
                let mut v = validators::OneOf::new(choices.iter().cloned())?;
                if *ignore_case {
                    v = v.ignore_case();
                }
                if let Some(message) = message {
                    v = v.with_message(message.clone())?;
                }
                Arc::new(v)
            }
            Self::Pattern { regex, message } => {
                let mut v = validators::Pattern::new(regex)?;
                if let Some(message) = message {
                    v = v.with_message(message.clone())?;
                }
                Arc::new(v)
            }
            Self::Length { min, max, message } => {
                let mut v = validators::Length::new(*min, *max)?;
                if let Some(message) = message {
                    v = v.with_message(message.clone())?;
                }
                Arc::new(v)
            }
        };
        Ok(validator)
    }
}

/// Serialized form of one argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDefinition {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validator: Option<ValidatorDefinition>,
}

impl ArgumentDefinition {
    pub fn build(&self) -> std::result::Result<Argument, SchemaError> {
        let mut builder = Argument::builder(self.name.clone());
        if let Some(description) = &self.description {
            builder = builder.with_description(description.clone());
        }
        if let Some(value_type) = &self.value_type {
            builder = builder.with_type(value_type.clone());
        }
        if let Some(validator) = &self.validator {
            builder = builder.with_shared_validator(validator.build()?);
        }
        builder.build()
    }
}

/// Serialized form of one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub help: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Cooldown in seconds.
    #[serde(default)]
    pub cooldown: u64,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub owner_only: bool,
    #[serde(default)]
    pub required: Vec<ArgumentDefinition>,
    #[serde(default)]
    pub optional: Vec<ArgumentDefinition>,
}

impl CommandDefinition {
    /// Builds command metadata, attaching an argument set only when the
    /// definition declares arguments.
    pub fn build(&self) -> Result<CommandInfo> {
        let build_all = |defs: &[ArgumentDefinition]| {
            defs.iter()
                .map(ArgumentDefinition::build)
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|source| HostError::Schema {
                    command: self.name.clone(),
                    source,
                })
        };

        let mut info = CommandInfo::new(self.name.clone(), self.help.clone())
            .with_cooldown(Duration::from_secs(self.cooldown));
        info.aliases = self.aliases.clone();
        info.category = self.category.clone();
        info.hidden = self.hidden;
        info.owner_only = self.owner_only;
        if !self.required.is_empty() || !self.optional.is_empty() {
            info.arguments = Some(ArgumentSet::new(
                build_all(&self.required)?,
                build_all(&self.optional)?,
            ));
        }
        Ok(info)
    }
}

/// Root of a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub commands: Vec<CommandDefinition>,
}

/// Describes where a [`Catalog`] was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Inline,
}

/// Validated, ordered command catalog.
///
/// # Examples
///
/// ```
/// use command_args_host::Catalog;
/// use command_args_core::CommandDescriptor;
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
///
/// let test = catalog.find("t").unwrap();
/// assert_eq!(test.name(), "test");
/// assert_eq!(test.arguments().unwrap().usage(), "{NUMBER: number}");
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    commands: Vec<CommandInfo>,
    source: CatalogSource,
}

impl Catalog {
    /// Builds and validates a catalog from already-constructed commands.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidCatalog`] when validation finds problems.
    pub fn new(commands: Vec<CommandInfo>) -> Result<Self> {
        Self::validated(commands, CatalogSource::Inline)
    }

    /// Loads a catalog file, choosing JSON for `.json` and YAML for
    /// `.yml`/`.yaml`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::UnsupportedFormat`] for other extensions, I/O and
    /// parse errors, [`HostError::Schema`] for invalid definitions and
    /// [`HostError::InvalidCatalog`] for structural problems.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let file: CatalogFile = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&raw)?,
            Some("yml" | "yaml") => serde_yaml::from_str(&raw)?,
            _ => return Err(HostError::UnsupportedFormat(path.to_path_buf())),
        };
        let catalog = Self::from_file(file, CatalogSource::File(path.to_path_buf()))?;
        info!(
            path = %path.display(),
            commands = catalog.len(),
            "Loaded command catalog"
        );
        Ok(catalog)
    }

    /// Parses a YAML catalog.
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(raw)?;
        Self::from_file(file, CatalogSource::Inline)
    }

    /// Parses a JSON catalog.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::from_file(file, CatalogSource::Inline)
    }

    fn from_file(file: CatalogFile, source: CatalogSource) -> Result<Self> {
        let commands = file
            .commands
            .iter()
            .map(CommandDefinition::build)
            .collect::<Result<Vec<_>>>()?;
        Self::validated(commands, source)
    }

    fn validated(commands: Vec<CommandInfo>, source: CatalogSource) -> Result<Self> {
        let errors = validate_catalog(&commands);
        if !errors.is_empty() {
            return Err(HostError::InvalidCatalog(errors));
        }
        Ok(Self { commands, source })
    }

    /// Finds a command by name or alias: case-sensitive, first match in
    /// catalog order.
    pub fn find(&self, name: &str) -> Option<&CommandInfo> {
        self.commands.iter().find(|c| c.answers_to(name))
    }

    pub fn commands(&self) -> &[CommandInfo] {
        &self.commands
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use command_args_core::{SchemaError, ValidationError};

    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
commands:
  - name: test
    aliases: [t]
    help: a testing command
    category: Testing
    cooldown: 3
    required:
      - name: number
        description: the test number
        type: number
        validator:
          kind: integer
          message: Invalid integer provided!
    optional:
      - name: mode
        validator:
          kind: one_of
          choices: [fast, slow]
          ignore_case: true
  - name: ping
    help: checks the latency
  - name: shutdown
    help: shuts the bot down
    owner_only: true
"#
    }

    #[test]
    fn test_load_yaml() {
        let catalog = Catalog::from_yaml_str(sample_yaml()).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.source(), &CatalogSource::Inline);

        let test = catalog.find("test").unwrap();
        assert_eq!(test.category(), Some("Testing"));
        assert_eq!(test.cooldown(), Duration::from_secs(3));
        let args = test.arguments().unwrap();
        assert_eq!(args.usage(), "{NUMBER: number} [MODE]");
        assert_eq!(
            args.slot(0).unwrap().validate("x").error_message(),
            Some("Invalid integer provided!")
        );
        assert!(args.slot(1).unwrap().validate("FAST").is_valid());

        assert!(catalog.find("ping").unwrap().arguments().is_none());
        assert!(catalog.find("shutdown").unwrap().is_owner_only());
    }

    #[test]
    fn test_find_by_alias_and_case_sensitivity() {
        let catalog = Catalog::from_yaml_str(sample_yaml()).unwrap();
        assert_eq!(catalog.find("t").unwrap().name(), "test");
        assert!(catalog.find("Test").is_none());
    }

    #[test]
    fn test_load_json() {
        let json = r#"{"commands":[{"name":"roll","help":"rolls dice","optional":[{"name":"sides","type":"number","validator":{"kind":"integer"}}]}]}"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(
            catalog.find("roll").unwrap().arguments().unwrap().usage(),
            "[SIDES: number]"
        );
    }

    #[test]
    fn test_empty_type_label_fails_load() {
        let yaml = "commands:\n  - name: test\n    required:\n      - name: x\n        type: \"\"\n";
        match Catalog::from_yaml_str(yaml) {
            Err(HostError::Schema { command, source }) => {
                assert_eq!(command, "test");
                assert_eq!(source, SchemaError::EmptyTypeLabel("x".to_string()));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_validator_message_fails_load() {
        let yaml = "commands:\n  - name: test\n    required:\n      - name: x\n        validator: { kind: integer, message: \"\" }\n";
        assert!(matches!(
            Catalog::from_yaml_str(yaml),
            Err(HostError::Schema {
                source: SchemaError::EmptyErrorMessage,
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_alias_across_commands_fails_load() {
        let yaml = "commands:\n  - name: a\n    aliases: [x]\n  - name: b\n    aliases: [x]\n";
        match Catalog::from_yaml_str(yaml) {
            Err(HostError::InvalidCatalog(errors)) => {
                assert_eq!(errors, vec![ValidationError::DuplicateCommand("x".to_string())]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_from_path_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, "").unwrap();
        assert!(matches!(
            Catalog::from_path(&path),
            Err(HostError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_from_path_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(&path, sample_yaml()).unwrap();
        let catalog = Catalog::from_path(&path).unwrap();
        assert_eq!(catalog.source(), &CatalogSource::File(path));
    }

    #[test]
    fn test_definition_roundtrips_through_yaml() {
        let file: CatalogFile = serde_yaml::from_str(sample_yaml()).unwrap();
        let raw = serde_yaml::to_string(&file).unwrap();
        let again: CatalogFile = serde_yaml::from_str(&raw).unwrap();
        assert_eq!(file, again);
    }
}
