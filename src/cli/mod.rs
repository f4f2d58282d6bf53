//! CLI definitions and entry point.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

/// Check project-import mappings against a target system snapshot
#[derive(Parser, Debug)]
#[command(name = "imc", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of .imc/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// YAML message catalogue for localized output
    #[arg(long, global = true, value_name = "PATH")]
    pub messages: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (no output except errors)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a bundle and report whether the import can proceed
    Check(CheckArgs),

    /// List message keys and their templates
    Messages(MessagesArgs),

    /// Show the effective configuration
    Config(ConfigArgs),

    /// Show version information
    Version,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Bundle file (.json, .yaml or .yml)
    pub bundle: PathBuf,

    /// Override the workflow help link for this run
    #[arg(long, value_name = "URL")]
    pub workflow_help: Option<String>,

    /// Only list sections that have something to report
    #[arg(long)]
    pub hide_clean: bool,

    /// Include a generation timestamp in JSON output
    #[arg(long)]
    pub timestamp: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct MessagesArgs {
    /// Only keys starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Show the merged raw keys instead of the resolved settings
    #[arg(long)]
    pub raw: bool,
}
