//! Generate config command

use std::path::Path;

use colored::Colorize;

use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;

const DEFAULT_SAMPLE_PATH: &str = "config.example.toml";

/// Generate example configuration file
pub fn generate_config(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| DEFAULT_SAMPLE_PATH.to_string());

    if Path::new(&path).exists() && !force {
        return Err(CliError::CommandError(format!(
            "{} already exists (use --force to overwrite)",
            path
        )));
    }

    let sample: StaticConfig = toml::from_str(&StaticConfig::generate_sample_config())
        .map_err(|e| CliError::ParseError(e.to_string()))?;
    sample.save_to_file(&path).map_err(|e| {
        CliError::CommandError(format!("Unable to write configuration file: {}", e))
    })?;

    println!(
        "{} Configuration file generated: {}",
        "✓".bold().green(),
        path.blue()
    );
    println!(
        "  {}",
        "Set database.database_url before starting the server".yellow()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_config_refuses_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let path_str = path.to_string_lossy().into_owned();

        generate_config(Some(path_str.clone()), false).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("sqlite://dynqr.db"));

        assert!(generate_config(Some(path_str.clone()), false).is_err());
        assert!(generate_config(Some(path_str), true).is_ok());
    }
}
