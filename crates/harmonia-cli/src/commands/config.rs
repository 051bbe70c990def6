//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// `load_error` is the reason `config` holds defaults instead of the file's
/// contents, if loading failed.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    load_error: Option<&CliError>,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, load_error, path, formatter),
        ConfigAction::Init { force } => init_config(path, force, formatter),
    }
}

/// Print the effective configuration as TOML.
fn show_config(
    config: &Config,
    load_error: Option<&CliError>,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    if let Some(e) = load_error {
        eprintln!(
            "{}",
            formatter.warning(&format!("Could not load {}: {}", path.display(), e))
        );
    }
    println!("{}", render_config(config, load_error.is_some(), path)?);
    Ok(())
}

/// Render settings as TOML under a header naming where they came from.
fn render_config(config: &Config, defaults: bool, path: &Path) -> Result<String> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
    let header = if defaults {
        format!("# defaults ({} could not be loaded)", path.display())
    } else {
        format!("# {}", path.display())
    };
    Ok(format!("{}\n{}", header, contents))
}

/// Write a default configuration file.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        println!(
            "{}",
            formatter.warning(&format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ))
        );
        return Ok(());
    }

    Config::default().save_to(path)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote default configuration to {}", path.display()))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use harmonia_domain::AccidentalGlyphs;

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false, AccidentalGlyphs::Ascii)
    }

    #[test]
    fn test_init_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init_config(&path, false, &formatter()).unwrap();
        assert!(path.exists());

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings]\ncolor = false\n").unwrap();

        init_config(&path, false, &formatter()).unwrap();
        assert!(!Config::load_from(&path).unwrap().settings.color);

        init_config(&path, true, &formatter()).unwrap();
        assert!(Config::load_from(&path).unwrap().settings.color);
    }

    #[test]
    fn test_show_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(show_config(&Config::default(), None, &path, &formatter()).is_ok());

        let rendered = render_config(&Config::default(), false, &path).unwrap();
        assert!(rendered.starts_with(&format!("# {}", path.display())));
        assert!(rendered.contains("log_level"));
    }

    #[test]
    fn test_show_labels_defaults_after_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings\ncolor = ").unwrap();

        let error = Config::load_from(&path).unwrap_err();
        assert!(show_config(&Config::default(), Some(&error), &path, &formatter()).is_ok());

        let rendered = render_config(&Config::default(), true, &path).unwrap();
        assert!(rendered.starts_with("# defaults ("));
        assert!(rendered.contains("could not be loaded"));
    }
}
