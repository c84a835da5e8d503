use std::borrow::Cow;

use async_trait::async_trait;
use colored::Colorize;

use crate::domain::entities::alert::HealthAlert;
use crate::domain::ports::notifier::{NotificationError, Notifier};
use crate::domain::value_objects::alert_kind::AlertKind;

const SEPARATOR_WIDTH: usize = 70;

/// Prints down/recovered banners on stdout.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn notify_down(&self, alert: &HealthAlert) -> Result<(), NotificationError> {
        println!("{}", render_alert(alert));
        Ok(())
    }

    async fn notify_recovered(&self, alert: &HealthAlert) -> Result<(), NotificationError> {
        println!("{}", render_alert(alert));
        Ok(())
    }
}

fn render_alert(alert: &HealthAlert) -> String {
    let separator = "\u{2500}".repeat(SEPARATOR_WIDTH);
    let status = match alert.kind {
        AlertKind::Down => alert.kind.health_label().red().bold(),
        AlertKind::Recovered => alert.kind.health_label().green().bold(),
    };
    [
        format!("\n{}", separator.dimmed()),
        format!("{} {}", kind_badge(alert.kind), sanitize(&alert.name).bold()),
        separator.dimmed().to_string(),
        format!("  URL         : {}", sanitize(&alert.url)),
        format!("  Status code : {}", alert.status_code),
        format!(
            "  Time        : {}",
            alert.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!("  Status      : {status}"),
        format!("{}\n", separator.dimmed()),
    ]
    .join("\n")
}

/// Drop control characters (except line breaks and tabs) so a target name
/// cannot smuggle terminal escape sequences into the banner.
fn sanitize(s: &str) -> Cow<'_, str> {
    if s.chars().any(is_unsafe_control) {
        Cow::Owned(s.chars().filter(|&c| !is_unsafe_control(c)).collect())
    } else {
        Cow::Borrowed(s)
    }
}

fn is_unsafe_control(c: char) -> bool {
    c.is_control() && !matches!(c, '\n' | '\r' | '\t')
}

#[must_use]
fn kind_badge(kind: AlertKind) -> String {
    match kind {
        AlertKind::Down => format!(" {} WEBSITE {} ", kind.emoji(), kind)
            .on_red()
            .white()
            .bold()
            .to_string(),
        AlertKind::Recovered => format!(" {} WEBSITE {} ", kind.emoji(), kind)
            .on_green()
            .black()
            .bold()
            .to_string(),
    }
}
