//! Jackt CLI - A command-line front end for the Jack tokenizer.
//!
//! This is the main entry point for the jackt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input. Tokens go to stdout; logs and
//! errors go to stderr.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    init::{run_init, InitArgs},
    tokenize::{run_tokenize, TokenizeArgs},
};
use config::Config;
use error::{JacktError, Result};

/// Jackt - Jack language tokenizer
///
/// Jackt turns a Jack source file, or a directory of source files forming
/// one compilation unit, into a classified token stream.
#[derive(Parser, Debug)]
#[command(name = "jackt")]
#[command(author = "Jack Toolchain Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A command-line front end for the Jack tokenizer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "JACKT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "JACKT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "JACKT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the jackt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize a Jack source file or directory
    ///
    /// Prints one token per line as `<line>\t<category>\t<lexeme>`, or a
    /// JSON array of per-file token lists.
    Tokenize(TokenizeCommand),

    /// Write a default jackt.toml
    ///
    /// Creates a configuration file holding the default tokenizer and
    /// output settings in the specified or current directory.
    Init(InitCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Source file or directory
    path: PathBuf,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Extension of the source files collected from a directory
    #[arg(short, long)]
    extension: Option<String>,

    /// Line numbering (global, per-file)
    #[arg(long)]
    line_numbering: Option<String>,

    /// Identifier rule (alphanumeric, alphabetic)
    #[arg(long)]
    identifiers: Option<String>,

    /// Print a `# <file>` header before each file's tokens
    #[arg(long)]
    by_file: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to initialize (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the jackt CLI.
///
/// Parses command-line arguments, loads configuration, initializes
/// logging, and dispatches to the appropriate command handler. Any error
/// is printed to stderr and turns into a failing exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    // Configuration is loaded first so that its verbose flag can raise the
    // log level.
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs are written to stderr so that stdout carries only the token stream.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| JacktError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, verbose, config),
        Commands::Init(args) => execute_init(args, verbose),
    }
}

/// Execute the tokenize command.
fn execute_tokenize(args: TokenizeCommand, verbose: bool, config: Config) -> Result<()> {
    let tokenize_args = TokenizeArgs {
        path: args.path,
        format: args.format,
        extension: args.extension,
        line_numbering: args.line_numbering,
        identifiers: args.identifiers,
        by_file: args.by_file,
        verbose,
    };
    run_tokenize(tokenize_args, config)
}

/// Execute the init command.
fn execute_init(args: InitCommand, verbose: bool) -> Result<()> {
    let init_args = InitArgs {
        verbose,
        force: args.force,
        path: args.path,
    };
    run_init(init_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokenize() {
        let cli = Cli::parse_from(["jackt", "tokenize", "Main.jack"]);
        if let Commands::Tokenize(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("Main.jack"));
            assert!(args.format.is_none());
            assert!(!args.by_file);
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_cli_parse_tokenize_with_options() {
        let cli = Cli::parse_from([
            "jackt",
            "tokenize",
            "Square/",
            "--format",
            "json",
            "--extension",
            "src",
            "--line-numbering",
            "per-file",
            "--identifiers",
            "alphabetic",
            "--by-file",
        ]);
        if let Commands::Tokenize(args) = cli.command {
            assert_eq!(args.format, Some("json".to_string()));
            assert_eq!(args.extension, Some("src".to_string()));
            assert_eq!(args.line_numbering, Some("per-file".to_string()));
            assert_eq!(args.identifiers, Some("alphabetic".to_string()));
            assert!(args.by_file);
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_cli_parse_tokenize_requires_path() {
        assert!(Cli::try_parse_from(["jackt", "tokenize"]).is_err());
    }

    #[test]
    fn test_cli_parse_init_with_force() {
        let cli = Cli::parse_from(["jackt", "init", "--path", "/tmp/test", "--force"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/test")));
            assert!(args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["jackt", "--verbose", "tokenize", "Main.jack"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config_after_subcommand() {
        let cli = Cli::parse_from([
            "jackt",
            "tokenize",
            "Main.jack",
            "--config",
            "/path/to/jackt.toml",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/jackt.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["jackt", "--no-color", "init"]);
        assert!(cli.no_color);
    }
}
