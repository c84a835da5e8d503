use colored::{ColoredString, Colorize};

use crate::domain::value_objects::status_code::{TIMEOUT_STATUS, TRANSPORT_FAILURE_STATUS};

/// Health badge padded to `width` before coloring so columns stay aligned.
#[must_use]
pub fn health_badge(is_healthy: bool, checked: bool, width: usize) -> ColoredString {
    if !checked {
        format!("{:<width$}", "PENDING").dimmed()
    } else if is_healthy {
        format!("{:<width$}", "HEALTHY").green().bold()
    } else {
        format!("{:<width$}", "UNHEALTHY").red().bold()
    }
}

/// Human label for a probe status code, e.g. `408 (timeout)`.
#[must_use]
pub fn describe_status_code(code: u16) -> String {
    match code {
        TRANSPORT_FAILURE_STATUS => "0 (unreachable)".to_owned(),
        TIMEOUT_STATUS => "408 (timeout)".to_owned(),
        other => other.to_string(),
    }
}

#[must_use]
pub fn colorize_status_code(code: u16, is_healthy: bool, width: usize) -> ColoredString {
    let text = format!("{:<width$}", describe_status_code(code));
    if is_healthy {
        text.green()
    } else if code == TRANSPORT_FAILURE_STATUS || code == TIMEOUT_STATUS || code >= 500 {
        text.red()
    } else {
        text.yellow()
    }
}

pub fn print_section_header(title: &str) {
    println!("{}", title.bold().cyan());
    let display_width = title.chars().count();
    println!("{}", "─".repeat(display_width).cyan());
}
