//! Scan summary command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::CodeService;

pub async fn show_scans(
    service: &CodeService,
    short_code: &str,
    limit: u64,
    json: bool,
) -> Result<(), CliError> {
    let summary = service.scan_summary(short_code, limit).await?;

    if json {
        let output = serde_json::to_string_pretty(&summary)
            .map_err(|e| CliError::ParseError(e.to_string()))?;
        println!("{}", output);
        return Ok(());
    }

    println!(
        "{} {} -> {}: {} scans",
        "ℹ".bold().blue(),
        summary.code.short_code.cyan(),
        summary.code.target_url.blue().underline(),
        summary.total_scans.to_string().green()
    );

    if summary.recent.is_empty() {
        return Ok(());
    }

    println!();
    for scan in &summary.recent {
        let mut parts = vec![scan.scanned_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()];
        if let Some(ip) = &scan.ip_address {
            parts.push(ip.yellow().to_string());
        }
        if let Some(country) = &scan.country {
            let place = match &scan.city {
                Some(city) => format!("{}/{}", country, city),
                None => country.clone(),
            };
            parts.push(place.magenta().to_string());
        }
        if let Some(referrer) = &scan.referrer {
            parts.push(format!("from {}", referrer).dimmed().to_string());
        }
        if let Some(ua) = &scan.user_agent {
            parts.push(ua.dimmed().to_string());
        }
        println!("  {}", parts.join("  "));
    }
    Ok(())
}
