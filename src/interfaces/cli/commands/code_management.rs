//! Dynamic code management commands

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{CodeService, CreateCodeRequest};
use crate::storage::DynamicCode;

fn status_label(code: &DynamicCode) -> String {
    if code.active {
        "active".green().to_string()
    } else {
        "paused".yellow().to_string()
    }
}

fn print_code_line(code: &DynamicCode) {
    println!(
        "  {} {} -> {} [{}] {}",
        code.short_code.cyan(),
        code.name.bold(),
        code.target_url.blue().underline(),
        status_label(code),
        format!("(owner: {})", code.user_id).dimmed()
    );
}

pub async fn create_code(
    service: &CodeService,
    user_id: String,
    name: String,
    target_url: String,
) -> Result<(), CliError> {
    let code = service
        .create(CreateCodeRequest {
            user_id,
            name,
            target_url,
        })
        .await?;

    println!(
        "{} Created dynamic code: {} -> {}",
        "✓".bold().green(),
        code.short_code.cyan(),
        code.target_url.blue().underline()
    );
    println!("  {} {}", "id:".dimmed(), code.id);
    Ok(())
}

pub async fn list_codes(
    service: &CodeService,
    user_id: Option<&str>,
    json: bool,
) -> Result<(), CliError> {
    let codes = service.list(user_id).await?;

    if json {
        let output = serde_json::to_string_pretty(&codes)
            .map_err(|e| CliError::ParseError(e.to_string()))?;
        println!("{}", output);
        return Ok(());
    }

    if codes.is_empty() {
        println!("{} No dynamic codes found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Dynamic codes:".bold().green());
    println!();
    for code in &codes {
        print_code_line(code);
    }
    println!();
    println!(
        "{} Total {} dynamic codes",
        "ℹ".bold().blue(),
        codes.len().to_string().green()
    );
    Ok(())
}

pub async fn show_code(service: &CodeService, short_code: &str) -> Result<(), CliError> {
    let code = service.get(short_code).await?;

    println!("{}", "Dynamic code:".bold().green());
    println!("  {:<10} {}", "code".dimmed(), code.short_code.cyan());
    println!("  {:<10} {}", "id".dimmed(), code.id);
    println!("  {:<10} {}", "name".dimmed(), code.name);
    println!("  {:<10} {}", "target".dimmed(), code.target_url.blue().underline());
    println!("  {:<10} {}", "status".dimmed(), status_label(&code));
    println!("  {:<10} {}", "owner".dimmed(), code.user_id);
    println!(
        "  {:<10} {}",
        "created".dimmed(),
        code.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  {:<10} {}",
        "updated".dimmed(),
        code.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    Ok(())
}

pub async fn rename_code(
    service: &CodeService,
    short_code: &str,
    name: &str,
) -> Result<(), CliError> {
    let code = service.rename(short_code, name).await?;
    println!(
        "{} Renamed {} to {}",
        "✓".bold().green(),
        code.short_code.cyan(),
        code.name.bold()
    );
    Ok(())
}

pub async fn retarget_code(
    service: &CodeService,
    short_code: &str,
    target_url: &str,
) -> Result<(), CliError> {
    let code = service.retarget(short_code, target_url).await?;
    println!(
        "{} {} now redirects to {}",
        "✓".bold().green(),
        code.short_code.cyan(),
        code.target_url.blue().underline()
    );
    Ok(())
}

pub async fn set_code_active(
    service: &CodeService,
    short_code: &str,
    active: bool,
) -> Result<(), CliError> {
    let code = service.set_active(short_code, active).await?;
    println!(
        "{} {} is now {}",
        "✓".bold().green(),
        code.short_code.cyan(),
        status_label(&code)
    );
    Ok(())
}

pub async fn delete_code(service: &CodeService, short_code: &str) -> Result<(), CliError> {
    let code = service.delete(short_code).await?;
    println!(
        "{} Deleted dynamic code {} ({})",
        "✓".bold().green(),
        code.short_code.cyan(),
        code.name
    );
    Ok(())
}
