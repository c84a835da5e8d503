use colored::Colorize;

use crate::application::services::monitor::{MonitorService, TickReport};
use crate::domain::entities::health_status::HealthStatus;
use crate::presentation::cli::formatters::status_fmt::print_section_header;
use crate::presentation::cli::formatters::table_fmt::format_status_table;

/// Run one tick over the registered targets, then print their latest status.
///
/// # Errors
///
/// Returns an error if the status projection or JSON serialization fails.
pub async fn run_status(service: &MonitorService, json: bool) -> anyhow::Result<()> {
    let report = service.run_tick().await;
    let statuses = service.latest_statuses()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(());
    }

    print_status(&statuses, Some(report));
    Ok(())
}

/// Print the status table, preceded by a tick summary when one is given.
pub fn print_status(statuses: &[HealthStatus], report: Option<TickReport>) {
    print_section_header("Website Health Status");
    if let Some(report) = report {
        println!(
            "  Checked {} target(s): {} healthy, {}",
            report.checked,
            report.healthy.to_string().green(),
            format!("{} unhealthy", report.unhealthy).red()
        );
    }
    if statuses.is_empty() {
        println!("  {}", "No targets configured.".dimmed());
        return;
    }
    println!("{}", format_status_table(statuses));
}
