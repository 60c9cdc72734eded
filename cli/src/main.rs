use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use command_args_core::{CommandDescriptor, Dispatcher, Invocation, split_arguments};
use command_args_host::output::{OutputFormat, format_document};
use command_args_host::{Caller, Catalog, Host, HostConfig, Outcome};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
    Markdown,
    Text,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(fmt: CliOutputFormat) -> Self {
        match fmt {
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Yaml => Self::Yaml,
            CliOutputFormat::Markdown => Self::Markdown,
            CliOutputFormat::Text => Self::Text,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "argcheck")]
#[command(about = "Check chat command catalogs and argument strings")]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Split a raw argument string into tokens.
    Tokenize(TokenizeArgs),
    /// Print the usage line of a command.
    Usage(UsageArgs),
    /// Validate an argument string against a command's arguments.
    Check(CheckArgs),
    /// Render the help catalog or a single command's help.
    Help(HelpArgs),
    /// Handle one chat message the way the bot would.
    Run(RunArgs),
    /// Load and validate a catalog file.
    Validate(ValidateArgs),
}

/// Catalog and configuration files shared by most subcommands.
#[derive(Debug, Args)]
struct SourceArgs {
    /// Command catalog (YAML or JSON).
    #[arg(long)]
    catalog: PathBuf,
    /// Host configuration (YAML). Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct TokenizeArgs {
    /// Raw argument string.
    raw: String,
}

#[derive(Debug, Args)]
struct UsageArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Command name or alias.
    command: String,
}

#[derive(Debug, Args)]
struct CheckArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Name used when addressing the caller.
    #[arg(long, default_value = "user")]
    author: String,
    /// Command name or alias.
    command: String,
    /// Raw argument string.
    #[arg(default_value = "")]
    raw: String,
}

#[derive(Debug, Args)]
struct HelpArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Render the catalog as seen by a bot owner.
    #[arg(long)]
    owner: bool,
    /// Output format.
    #[arg(long, default_value = "text")]
    format: CliOutputFormat,
    /// Command to describe; omit for the full catalog.
    target: Vec<String>,
}

#[derive(Debug, Args)]
struct RunArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Display name of the caller.
    #[arg(long, default_value = "user")]
    author: String,
    /// Id of the caller, matched against the configured owners.
    #[arg(long, default_value = "0")]
    caller_id: String,
    /// Output format for help replies.
    #[arg(long, default_value = "text")]
    format: CliOutputFormat,
    /// Full chat message, prefix included.
    message: String,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Command catalog (YAML or JSON).
    #[arg(long)]
    catalog: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Tokenize(args) => run_tokenize(args),
        Command::Usage(args) => run_usage(args),
        Command::Check(args) => run_check(args),
        Command::Help(args) => run_help(args),
        Command::Run(args) => run_run(args),
        Command::Validate(args) => run_validate(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_sources(source: &SourceArgs) -> Result<(HostConfig, Catalog), String> {
    let config = match &source.config {
        Some(path) => HostConfig::load(path)
            .map_err(|e| format!("failed to load config {}: {e}", path.display()))?,
        None => HostConfig::default(),
    };
    let catalog = Catalog::from_path(&source.catalog).map_err(|e| e.to_string())?;
    debug!(
        commands = catalog.len(),
        prefix = %config.prefix,
        "Loaded catalog and configuration"
    );
    Ok((config, catalog))
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

fn run_tokenize(args: TokenizeArgs) -> Result<(), String> {
    println!("{}", to_json(&split_arguments(&args.raw))?);
    Ok(())
}

fn run_usage(args: UsageArgs) -> Result<(), String> {
    let (config, catalog) = load_sources(&args.source)?;
    let command = catalog
        .find(&args.command)
        .ok_or_else(|| format!("unknown command: {}", args.command))?;

    let usage = command.arguments().map(|a| a.usage()).unwrap_or_default();
    if usage.is_empty() {
        println!("{}{}", config.prefix, command.name());
    } else {
        println!("{}{} {usage}", config.prefix, command.name());
    }
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), String> {
    let (config, catalog) = load_sources(&args.source)?;
    let command = catalog
        .find(&args.command)
        .ok_or_else(|| format!("unknown command: {}", args.command))?;

    let Some(arguments) = command.arguments() else {
        println!("[]");
        return Ok(());
    };

    let invocation = Invocation::new(&config.prefix, command.name(), &args.author);
    let tokens = Dispatcher::new(arguments, invocation)
        .parse(&args.raw)
        .map_err(|e| e.to_string())?;
    println!("{}", to_json(&tokens)?);
    Ok(())
}

fn run_help(args: HelpArgs) -> Result<(), String> {
    let (config, catalog) = load_sources(&args.source)?;
    let document = config
        .help_renderer()
        .respond(catalog.commands(), &args.target.join(" "), args.owner)
        .map_err(|e| e.to_string())?;
    println!("{}", format_document(&document, args.format.into())?);
    Ok(())
}

fn run_run(args: RunArgs) -> Result<(), String> {
    let (config, catalog) = load_sources(&args.source)?;
    let host = Host::new(config, catalog);
    let caller = Caller::new(args.caller_id, args.author);

    match host.handle(&args.message, &caller) {
        Outcome::Ignored => debug!("Message ignored"),
        Outcome::Accepted { command, tokens } => {
            let value = serde_json::json!({ "command": command, "tokens": tokens });
            println!("{}", to_json(&value)?);
        }
        Outcome::Rejected(reply) => println!("{reply}"),
        Outcome::Help(document) => {
            println!("{}", format_document(&document, args.format.into())?)
        }
    }
    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let catalog = Catalog::from_path(&args.catalog).map_err(|e| e.to_string())?;
    let arguments: usize = catalog
        .commands()
        .iter()
        .filter_map(|c| c.arguments())
        .map(|a| a.len())
        .sum();
    println!(
        "Validated {} command(s) with {arguments} argument(s).",
        catalog.len()
    );
    Ok(())
}
