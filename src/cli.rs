//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// dynqr - Dynamic QR code redirect service
#[derive(Parser)]
#[command(name = "dynqr")]
#[command(version)]
#[command(about = "Dynamic QR code redirect service with scan tracking", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default when no command is given)
    Serve,

    /// Create a dynamic code with a generated short code
    Create {
        /// Display name
        name: String,

        /// Target URL (http/https)
        target_url: String,

        /// Owner user id
        #[arg(long, default_value = "cli")]
        user: String,
    },

    /// List dynamic codes, newest first
    List {
        /// Only codes owned by this user
        #[arg(long)]
        user: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one dynamic code
    Show {
        short_code: String,
    },

    /// Rename a dynamic code
    Rename {
        short_code: String,
        name: String,
    },

    /// Point a dynamic code at a new target URL
    Retarget {
        short_code: String,
        target_url: String,
    },

    /// Pause a dynamic code (scans get 404 "paused")
    Pause {
        short_code: String,
    },

    /// Resume a paused dynamic code
    Resume {
        short_code: String,
    },

    /// Delete a dynamic code and its scans
    Delete {
        short_code: String,
    },

    /// Show scan totals and recent scans
    Scans {
        short_code: String,

        /// Number of recent scans to show
        #[arg(long, default_value_t = 20)]
        limit: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["dynqr"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["dynqr", "list", "-c", "prod.toml"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some("prod.toml"));
        assert_eq!(
            cli.command,
            Some(Commands::List {
                user: None,
                json: false
            })
        );
    }

    #[test]
    fn test_create_defaults_user() {
        let cli =
            Cli::try_parse_from(["dynqr", "create", "Menu", "https://example.com/menu"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Create {
                name: "Menu".to_string(),
                target_url: "https://example.com/menu".to_string(),
                user: "cli".to_string(),
            })
        );
    }

    #[test]
    fn test_scans_limit() {
        let cli = Cli::try_parse_from(["dynqr", "scans", "AbCd1234", "--limit", "5"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Scans {
                short_code: "AbCd1234".to_string(),
                limit: 5,
                json: false
            })
        );
    }
}
