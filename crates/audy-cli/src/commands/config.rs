//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute a config management action.
pub fn execute_config(args: ConfigArgs, config: &Config, path: &Path, formatter: &Formatter) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", formatter.info(&format!("Config file: {}", path.display())));
            if !path.exists() {
                println!("{}", formatter.warning("File not found, showing defaults"));
            }
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            init_config(path, force)?;
            println!("{}", formatter.success(&format!("Wrote {}", path.display())));
        }
    }

    Ok(())
}

/// Write the default configuration to `path`.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save_to(path)
}
