//! CLI interface module
//!
//! Management commands for dynamic codes. They talk to the database
//! directly through `CodeService`; the server does not need to be running.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::services::CodeService;
use crate::storage::StorageFactory;
use commands::{
    create_code, delete_code, generate_config, list_codes, rename_code, retarget_code,
    set_code_active, show_code, show_scans,
};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::DynQrError> for CliError {
    fn from(err: crate::errors::DynQrError) -> Self {
        use crate::errors::DynQrError;
        match err {
            DynQrError::Validation(_) | DynQrError::NotFound(_) | DynQrError::CodeGeneration(_) => {
                CliError::CommandError(err.to_string())
            }
            DynQrError::Serialization(_) => CliError::ParseError(err.to_string()),
            _ => CliError::StorageError(err.to_string()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    match cmd {
        // config generate 不需要数据库
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => generate_config(output_path, force),
        Commands::Serve => Err(CliError::CommandError(
            "serve is handled by the server runtime".to_string(),
        )),
        cmd => {
            config.validate()?;
            let storage = StorageFactory::create(&config.database).await?;
            let service = CodeService::new(storage, &config.codes);
            dispatch(cmd, &service).await
        }
    }
}

async fn dispatch(cmd: Commands, service: &CodeService) -> Result<(), CliError> {
    match cmd {
        Commands::Create {
            name,
            target_url,
            user,
        } => create_code(service, user, name, target_url).await,
        Commands::List { user, json } => list_codes(service, user.as_deref(), json).await,
        Commands::Show { short_code } => show_code(service, &short_code).await,
        Commands::Rename { short_code, name } => rename_code(service, &short_code, &name).await,
        Commands::Retarget {
            short_code,
            target_url,
        } => retarget_code(service, &short_code, &target_url).await,
        Commands::Pause { short_code } => set_code_active(service, &short_code, false).await,
        Commands::Resume { short_code } => set_code_active(service, &short_code, true).await,
        Commands::Delete { short_code } => delete_code(service, &short_code).await,
        Commands::Scans {
            short_code,
            limit,
            json,
        } => show_scans(service, &short_code, limit, json).await,
        Commands::Serve | Commands::Config { .. } => Err(CliError::CommandError(
            "command does not operate on dynamic codes".to_string(),
        )),
    }
}
