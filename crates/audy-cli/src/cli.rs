//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Audy CLI - Recover the sources cited in a content generation log.
#[derive(Debug, Parser)]
#[command(name = "audy")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "AUDY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (one line per source)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the sources cited in a log
    Extract(InputArgs),

    /// Count the sources cited in a log, per lane
    Count(InputArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Where to read the log from.
#[derive(Debug, Parser)]
pub struct InputArgs {
    /// Log file; reads stdin when absent or `-`
    pub file: Option<PathBuf>,

    /// Treat the input as a JSON document (string, array of strings, or null)
    #[arg(short, long)]
    pub json_input: bool,
}

impl InputArgs {
    /// The file to read, `None` for stdin
    pub fn path(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

/// Arguments for config management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
