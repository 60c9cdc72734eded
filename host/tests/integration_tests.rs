use std::fs;
use std::path::PathBuf;

use command_args_host::output::{OutputFormat, format_document};
use command_args_host::{Caller, Catalog, CatalogSource, Host, HostConfig, HostError, Outcome};
use command_args_core::ValidationError;
use tempfile::TempDir;

const CATALOG_YAML: &str = r#"
commands:
  - name: test
    aliases: [t]
    help: a testing command
    cooldown: 3
    required:
      - name: number
        description: the test number
        type: number
        validator:
          kind: integer
          message: Invalid integer provided!
  - name: color
    help: picks a color
    category: fun
    required:
      - name: shade
        validator:
          kind: one_of
          choices: [red, green, blue]
          ignore_case: true
    optional:
      - name: note
        type: text
        validator:
          kind: length
          max: 10
  - name: secret
    help: owner tools
    owner_only: true
  - name: ghost
    help: invisible
    hidden: true
"#;

const CONFIG_YAML: &str = r#"
prefix: "?"
owner_ids: ["99"]
help:
  title: Bot Help
  description: Commands of the test bot.
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write fixture");
    path
}

fn load_host(dir: &TempDir) -> Host {
    let catalog = Catalog::from_path(write(dir, "commands.yml", CATALOG_YAML)).unwrap();
    let config = HostConfig::load(write(dir, "bot.yml", CONFIG_YAML)).unwrap();
    Host::new(config, catalog)
}

fn alice() -> Caller {
    Caller::new("1", "alice")
}

#[test]
fn test_catalog_from_file_records_source() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "commands.yaml", CATALOG_YAML);
    let catalog = Catalog::from_path(&path).unwrap();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.source(), &CatalogSource::File(path));
}

#[test]
fn test_catalog_json_file() {
    let dir = TempDir::new().unwrap();
    let json = r#"{"commands":[{"name":"ping","help":"pong"}]}"#;
    let catalog = Catalog::from_path(write(&dir, "commands.json", json)).unwrap();
    assert!(catalog.find("ping").is_some());
}

#[test]
fn test_catalog_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::from_path(write(&dir, "commands.toml", "")).unwrap_err();
    assert!(matches!(err, HostError::UnsupportedFormat(_)));
}

#[test]
fn test_catalog_with_clashing_alias_is_rejected() {
    let dir = TempDir::new().unwrap();
    let yaml = "commands:\n  - name: a\n    aliases: [b]\n  - name: b\n";
    let err = Catalog::from_path(write(&dir, "commands.yml", yaml)).unwrap_err();
    assert!(matches!(err, HostError::InvalidCatalog(_)));
}

#[test]
fn test_catalog_with_bad_pattern_is_rejected() {
    let dir = TempDir::new().unwrap();
    let yaml = "commands:\n  - name: a\n    required:\n      - name: x\n        validator: { kind: pattern, regex: \"(\" }\n";
    let err = Catalog::from_path(write(&dir, "commands.yml", yaml)).unwrap_err();
    assert!(matches!(err, HostError::Schema { ref command, .. } if command == "a"));
}

#[test]
fn test_catalog_cannot_shadow_help() {
    let dir = TempDir::new().unwrap();
    let yaml = "commands:\n  - name: manual\n    aliases: [help]\n";
    let err = Catalog::from_path(write(&dir, "commands.yml", yaml)).unwrap_err();
    assert!(matches!(
        err,
        HostError::InvalidCatalog(ref errors)
            if errors == &[ValidationError::ReservedName("help".to_string())]
    ));
}

#[test]
fn test_accepts_with_custom_prefix() {
    let dir = TempDir::new().unwrap();
    let host = load_host(&dir);
    assert_eq!(
        host.handle("?t 12", &alice()),
        Outcome::Accepted {
            command: "test".to_string(),
            tokens: vec!["12".to_string()],
        }
    );
    assert_eq!(host.handle("!t 12", &alice()), Outcome::Ignored);
}

#[test]
fn test_rejections_use_configured_prefix() {
    let dir = TempDir::new().unwrap();
    let host = load_host(&dir);
    assert_eq!(
        host.handle("?test 1.5", &alice()),
        Outcome::Rejected(
            "Invalid integer provided!\nThe proper usage would be: `?test {NUMBER: number}`"
                .to_string()
        )
    );
}

#[test]
fn test_quoted_optional_argument() {
    let dir = TempDir::new().unwrap();
    let host = load_host(&dir);
    assert_eq!(
        host.handle("?color RED \"so nice\"", &alice()),
        Outcome::Accepted {
            command: "color".to_string(),
            tokens: vec!["RED".to_string(), "so nice".to_string()],
        }
    );
}

#[test]
fn test_optional_argument_is_still_validated() {
    let dir = TempDir::new().unwrap();
    let host = load_host(&dir);
    let Outcome::Rejected(reply) = host.handle("?color red 'far too long'", &alice()) else {
        panic!("expected rejection");
    };
    assert!(reply.ends_with("The proper usage would be: `?color {SHADE} [NOTE: text]`"));
}

#[test]
fn test_too_many_arguments() {
    let dir = TempDir::new().unwrap();
    let host = load_host(&dir);
    let Outcome::Rejected(reply) = host.handle("?color red a b", &alice()) else {
        panic!("expected rejection");
    };
    assert!(reply.contains("`?color {SHADE} [NOTE: text]`"));
}

#[test]
fn test_help_catalog_uses_config_text() {
    let dir = TempDir::new().unwrap();
    let host = load_host(&dir);
    let Outcome::Help(doc) = host.handle("?help", &alice()) else {
        panic!("expected help");
    };
    assert_eq!(doc.title, "Bot Help");
    assert!(doc.description.starts_with("Commands of the test bot."));
    let names: Vec<&str> = doc.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "`?help [COMMAND]`",
            "`?test (?t)` {NUMBER: number}",
            "`?color` {SHADE} [NOTE: text] (`fun`)",
        ]
    );
}

#[test]
fn test_help_catalog_for_owner() {
    let dir = TempDir::new().unwrap();
    let host = load_host(&dir);
    let Outcome::Help(doc) = host.handle("?help", &Caller::new("99", "root")) else {
        panic!("expected help");
    };
    assert!(doc.fields.iter().any(|f| f.name == "`?secret`"));
    assert!(!doc.fields.iter().any(|f| f.name.contains("ghost")));
}

#[test]
fn test_help_detail_renders_as_text() {
    let dir = TempDir::new().unwrap();
    let host = load_host(&dir);
    let Outcome::Help(doc) = host.handle("?help test", &alice()) else {
        panic!("expected help");
    };
    let text = format_document(&doc, OutputFormat::Text).unwrap();
    assert_eq!(
        text,
        "test\n====\na testing command\nAliases: t\nUsage: ?test {NUMBER: number}\nCooldown: 3 second(s)\n\nRequired Arguments\n  NUMBER type: number\n  the test number\n"
    );
}
