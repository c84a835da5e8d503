use crate::application::services::monitor::MonitorService;
use crate::domain::entities::health_record::HealthCheckRecord;
use crate::presentation::cli::formatters::table_fmt::format_record_table;

/// Probe each URL once and print the results.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub async fn run_check(service: &MonitorService, urls: &[String], json: bool) -> anyhow::Result<()> {
    let records = service.check_many(urls).await;
    println!("{}", render_check(&records, json)?);
    Ok(())
}

/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_check(records: &[HealthCheckRecord], json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(records)?)
    } else {
        Ok(format_record_table(records))
    }
}
