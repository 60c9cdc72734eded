//! Host configuration.
//!
//! Loaded from a YAML file. Every field has a default, so an empty file (or
//! no file at all) yields a working configuration.
//!
//! # Example YAML
//!
//! ```yaml
//! prefix: "!"
//! owner_ids:
//!   - "1234"
//! help:
//!   title: Help
//!   description: A list of commands and functionalities of this bot.
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use command_args_core::{DEFAULT_DESCRIPTION, DEFAULT_TITLE, HelpRenderer};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default command prefix.
pub const DEFAULT_PREFIX: &str = "!";

/// Text shown at the top of the catalog help.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    pub title: String,
    pub description: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

/// Top-level host configuration.
///
/// # Examples
///
/// ```
/// use command_args_host::HostConfig;
///
/// let config: HostConfig = serde_yaml::from_str("prefix: \"?\"\nowner_ids: [\"42\"]").unwrap();
/// assert_eq!(config.prefix, "?");
/// assert!(config.is_owner("42"));
/// assert_eq!(config.help.title, "Help");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Prefix every command message must start with.
    pub prefix: String,
    /// Caller ids treated as bot owners.
    pub owner_ids: Vec<String>,
    /// Catalog help text.
    pub help: HelpConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            owner_ids: Vec::new(),
            help: HelpConfig::default(),
        }
    }
}

impl HostConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::HostError::IoError) if the file cannot be
    /// read, or [`YamlError`](crate::HostError::YamlError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::HostError::IoError) if the file cannot be
    /// written, or [`YamlError`](crate::HostError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Returns `true` if `caller_id` is listed as an owner.
    pub fn is_owner(&self, caller_id: &str) -> bool {
        self.owner_ids.iter().any(|id| id == caller_id)
    }

    /// Builds a help renderer using this prefix and help text.
    pub fn help_renderer(&self) -> HelpRenderer {
        HelpRenderer::new(self.prefix.clone())
            .with_title(self.help.title.clone())
            .with_description(self.help.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
prefix: "?"
owner_ids:
  - "1234"
  - "5678"
help:
  title: Commands
  description: Everything this bot can do.
"#
    }

    #[test]
    fn test_deserialize_complete() {
        let config: HostConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(config.prefix, "?");
        assert_eq!(config.owner_ids, vec!["1234", "5678"]);
        assert_eq!(config.help.title, "Commands");
        assert_eq!(config.help.description, "Everything this bot can do.");
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let config: HostConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.prefix, DEFAULT_PREFIX);
    }

    #[test]
    fn test_partial_help_section() {
        let config: HostConfig = serde_yaml::from_str("help:\n  title: Commands\n").unwrap();
        assert_eq!(config.help.title, "Commands");
        assert_eq!(config.help.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_is_owner() {
        let config: HostConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert!(config.is_owner("1234"));
        assert!(!config.is_owner("9999"));
    }

    #[test]
    fn test_help_renderer_uses_config() {
        let config: HostConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        let doc = config
            .help_renderer()
            .render_catalog::<command_args_core::CommandInfo>(&[], false);
        assert_eq!(doc.title, "Commands");
        assert_eq!(doc.fields[0].name, "`?help [COMMAND]`");
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");

        let original: HostConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        original.save(&path).unwrap();

        let loaded = HostConfig::load(&path).unwrap();
        assert_eq!(loaded, original);
    }
}
