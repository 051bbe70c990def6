//! Harmonia CLI - Command-line interface for the Harmonia music-theory values.

use clap::Parser;
use harmonia_cli::commands;
use harmonia_cli::{logging, Cli, Command, Config, Formatter};
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> harmonia_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };

    // A broken config file should not block one-off commands
    let (config, load_error) = match Config::load_from(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    logging::init(&config.settings.log_level, cli.verbose);
    if let Some(e) = &load_error {
        tracing::warn!("Ignoring {}: {}", config_path.display(), e);
    }

    // Determine output settings
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let glyphs = cli.glyphs.map(Into::into).unwrap_or(config.settings.glyphs);
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled, glyphs);

    tracing::debug!(?format, ?glyphs, "Dispatching {:?}", cli.command);

    match cli.command {
        Command::Note(args) => commands::execute_note(args, &formatter)?,
        Command::Naturals => commands::execute_naturals(&formatter)?,
        Command::Freq(args) => commands::execute_freq(args, &formatter)?,
        Command::Interval(args) => commands::execute_interval(args, &formatter)?,
        Command::Pitch(args) => commands::execute_pitch(args, &formatter)?,
        Command::Config(args) => commands::execute_config(
            args,
            &config,
            load_error.as_ref(),
            &config_path,
            &formatter,
        )?,
    }

    Ok(())
}
