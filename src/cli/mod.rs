//! Command-line interface definitions.

pub mod check;
pub mod evaluate;
pub mod init;
pub mod output;
pub mod tree;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::error::Result;

/// emvcalc - Expected monetary value decision calculator.
#[derive(Parser, Debug)]
#[command(name = "emvcalc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute both EMVs and print the recommendation
    Evaluate(EvaluateArgs),

    /// Emit the decision tree as Graphviz DOT
    Tree(TreeArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Write a commented default configuration file
    Init(InitArgs),
}

/// Subcommands for `emvcalc check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Path to configuration file (defaults used when absent)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the fixed study cost
    #[arg(long)]
    pub study_cost: Option<Decimal>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,

    /// Emit machine-readable JSON instead of tables
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `tree` subcommand.
#[derive(Parser, Debug)]
pub struct TreeArgs {
    /// Path to configuration file (defaults used when absent)
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Override the fixed study cost
    #[arg(long)]
    pub study_cost: Option<Decimal>,

    /// Write DOT output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `init` subcommand.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the configuration file
    #[arg(default_value = "config.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Route a parsed command line to its handler.
pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Evaluate(args) => evaluate::execute(args),
        Commands::Tree(args) => tree::execute(args),
        Commands::Check(CheckCommand::Config(args)) => check::execute_config(&args.config),
        Commands::Init(args) => init::execute(args),
    }
}
