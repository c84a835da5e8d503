use crate::domain::entities::health_record::HealthCheckRecord;
use crate::domain::entities::health_status::HealthStatus;

use super::status_fmt::{colorize_status_code, health_badge};

const NAME_WIDTH: usize = 24;
const URL_WIDTH: usize = 40;
const CODE_WIDTH: usize = 16;
const HEALTH_WIDTH: usize = 10;

/// Aligned table of the latest status of every registered target.
#[must_use]
pub fn format_status_table(statuses: &[HealthStatus]) -> String {
    let header = format!(
        "{:<NAME_WIDTH$} {:<URL_WIDTH$} {:<CODE_WIDTH$} {:<HEALTH_WIDTH$} {:<20} {}",
        "NAME", "URL", "STATUS", "HEALTH", "LAST CHECKED", "ENABLED"
    );
    let separator = "─".repeat(header.chars().count());
    let mut rows = vec![header, separator];

    for status in statuses {
        let checked = status.has_been_checked();
        let last_checked = status.last_checked.map_or_else(
            || "never".to_owned(),
            |ts| ts.format("%Y-%m-%d %H:%M:%S").to_string(),
        );
        let code = if checked {
            colorize_status_code(status.status_code, status.is_healthy, CODE_WIDTH).to_string()
        } else {
            format!("{:<CODE_WIDTH$}", "-")
        };
        rows.push(format!(
            "{:<NAME_WIDTH$} {:<URL_WIDTH$} {} {} {:<20} {}",
            truncate(&status.name, NAME_WIDTH),
            truncate(&status.url, URL_WIDTH),
            code,
            health_badge(status.is_healthy, checked, HEALTH_WIDTH),
            last_checked,
            if status.enabled { "yes" } else { "no" },
        ));
    }

    rows.join("\n")
}

/// Aligned table of one-shot probe results.
#[must_use]
pub fn format_record_table(records: &[HealthCheckRecord]) -> String {
    let header = format!(
        "{:<URL_WIDTH$} {:<CODE_WIDTH$} {:<HEALTH_WIDTH$} {}",
        "URL", "STATUS", "HEALTH", "CHECKED AT"
    );
    let separator = "─".repeat(header.chars().count());
    let mut rows = vec![header, separator];

    for record in records {
        rows.push(format!(
            "{:<URL_WIDTH$} {} {} {}",
            truncate(record.url(), URL_WIDTH),
            colorize_status_code(record.status_code(), record.is_healthy(), CODE_WIDTH),
            health_badge(record.is_healthy(), true, HEALTH_WIDTH),
            record.timestamp().format("%Y-%m-%d %H:%M:%S"),
        ));
    }

    rows.join("\n")
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_owned()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
