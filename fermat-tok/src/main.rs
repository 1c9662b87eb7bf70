//! fermat-tok - Token dump tool for the fermat lexer.
//!
//! This is the main entry point for the fermat-tok CLI application.
//! It parses arguments with clap, layers them over the configuration file
//! and runs the dump command over every input source.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use fermat_lex::LexerOptions;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{Command, DumpArgs, DumpCommand};
use config::Config;
use error::{Result, TokError};

/// Exit status for any failed source or setup error.
const FAILURE_EXIT_CODE: u8 = 2;

/// Exit status for a malformed command line.
const USAGE_EXIT_CODE: u8 = 1;

/// Reported when no input file is given.
const MISSING_INPUT: &str = "Missing <INPUT_FILE>";

/// fermat-tok - Print the tokens of each input file
///
/// Every token is printed as `Token: <KIND>: <text>`. Sources that fail to
/// open or to tokenize are reported on stderr and processing continues.
#[derive(Parser, Debug)]
#[command(name = "fermat-tok")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the tokens of each input file", long_about = None)]
struct Cli {
    /// Input files to tokenize (`-` prints <stdin> and is skipped)
    #[arg(value_name = "INPUT_FILE")]
    inputs: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "FERMAT_TOK_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "FERMAT_TOK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "FERMAT_TOK_NO_COLOR")]
    no_color: bool,

    /// Scan `.name` as a single COMMAND token
    #[arg(long)]
    dot_commands: bool,

    /// Print quoted strings with their quotes
    #[arg(long)]
    keep_quotes: bool,

    /// Stop after the first source that fails
    #[arg(long)]
    fail_fast: bool,
}

/// Main entry point for fermat-tok.
///
/// Exits with 0 when every source succeeded, 1 on a malformed command line
/// and 2 otherwise.
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(USAGE_EXIT_CODE);
        },
    };

    if cli.inputs.is_empty() {
        eprintln!("ERROR: {}", MISSING_INPUT);
        eprintln!("\n{}\n", Cli::command().render_usage());
        return ExitCode::from(USAGE_EXIT_CODE);
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(FAILURE_EXIT_CODE),
        Err(e) => {
            eprintln!("ERROR: {}", e.diagnostic());
            ExitCode::from(FAILURE_EXIT_CODE)
        },
    }
}

/// Loads configuration, sets up logging and runs the dump.
///
/// # Returns
/// * `Result<bool>` - Whether every source succeeded
fn run(cli: Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    let args = dump_args(cli, &config);
    let result = DumpCommand::new(args).execute()?;
    Ok(result.success())
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with the token dump.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
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
        .map_err(|e| TokError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// # Arguments
/// * `config_path` - Optional path to configuration file
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Merges command-line flags over the configuration.
///
/// Flags can only switch behavior on; an unset flag leaves the configured
/// value in place.
fn dump_args(cli: Cli, config: &Config) -> DumpArgs {
    let configured = config.lexer_options();
    DumpArgs {
        verbose: cli.verbose || config.verbose,
        inputs: cli.inputs,
        options: LexerOptions {
            dot_commands: cli.dot_commands || configured.dot_commands,
        },
        strip_quotes: !cli.keep_quotes && config.output.strip_quotes,
        fail_fast: cli.fail_fast || config.output.fail_fast,
    }
}
