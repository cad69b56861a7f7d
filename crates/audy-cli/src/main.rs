//! Audy CLI - Command-line interface for log-derived source extraction.

use audy_cli::commands;
use audy_cli::{logging, Cli, Command, Config, Formatter};
use audy_extractor::SourceExtractor;
use clap::Parser;
use tracing::warn;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> audy_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Load config, falling back to defaults when the file is missing
    let config_path = Config::resolve(cli.config.as_deref())?;
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        // A broken file must not block `config init --force`
        Err(e) if matches!(cli.command, Command::Config(_)) => {
            warn!("Ignoring unreadable config: {}", e);
            Config::default()
        }
        Err(e) => return Err(e),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Extract(args) => {
            let extractor = SourceExtractor::try_new(config.extractor)?;
            commands::execute_extract(args, &extractor, &formatter)?;
        }
        Command::Count(args) => {
            let extractor = SourceExtractor::try_new(config.extractor)?;
            commands::execute_count(args, &extractor, &formatter)?;
        }
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
