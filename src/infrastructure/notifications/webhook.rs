use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::domain::entities::alert::HealthAlert;
use crate::domain::ports::notifier::{NotificationError, Notifier};
use crate::domain::value_objects::alert_kind::AlertKind;

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(5);

/// Webhook payload format, auto-detected from the URL host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WebhookFormat {
    Slack,
    Discord,
    Generic,
}

/// Posts down/recovered alerts to an HTTP webhook.
///
/// Slack gets colored attachments, Discord gets embeds, anything else gets a
/// flat JSON object. Delivery failures are returned to the caller; the
/// monitor logs them and moves on.
pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    /// # Errors
    ///
    /// Returns `NotificationError::ChannelUnavailable` if the HTTP client
    /// cannot be initialized.
    pub fn new(url: String) -> Result<Self, NotificationError> {
        let client = reqwest::Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()
            .map_err(|e| {
                NotificationError::ChannelUnavailable(format!("cannot build HTTP client: {e}"))
            })?;

        Ok(Self { url, client })
    }

    fn detect_format(&self) -> WebhookFormat {
        let host = self
            .url
            .split("//")
            .nth(1)
            .and_then(|s| s.split('/').next())
            .and_then(|h| h.split(':').next())
            .unwrap_or("");

        if host == "hooks.slack.com" {
            WebhookFormat::Slack
        } else if host == "discord.com" || host == "discordapp.com" {
            WebhookFormat::Discord
        } else {
            WebhookFormat::Generic
        }
    }

    async fn send_payload(&self, payload: &Value) -> Result<(), NotificationError> {
        let resp = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("webhook error: {e}")))?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(NotificationError::SendFailed(format!(
                "webhook HTTP {}",
                resp.status()
            )))
        }
    }

    const fn color_hex(kind: AlertKind) -> &'static str {
        match kind {
            AlertKind::Down => "#E74C3C",
            AlertKind::Recovered => "#2ECC71",
        }
    }

    const fn color_decimal(kind: AlertKind) -> u32 {
        match kind {
            AlertKind::Down => 0x00_E7_4C_3C,
            AlertKind::Recovered => 0x00_2E_CC_71,
        }
    }

    fn format_alert(&self, alert: &HealthAlert) -> Value {
        match self.detect_format() {
            WebhookFormat::Slack => Self::format_alert_slack(alert),
            WebhookFormat::Discord => Self::format_alert_discord(alert),
            WebhookFormat::Generic => Self::format_alert_generic(alert),
        }
    }

    fn format_alert_slack(alert: &HealthAlert) -> Value {
        json!({
            "attachments": [{
                "color": Self::color_hex(alert.kind),
                "blocks": [
                    {
                        "type": "header",
                        "text": {
                            "type": "plain_text",
                            "text": format!("{} {}", alert.kind.emoji(), alert.subject())
                        }
                    },
                    {
                        "type": "section",
                        "fields": [
                            { "type": "mrkdwn", "text": format!("*URL:*\n{}", alert.url) },
                            { "type": "mrkdwn", "text": format!("*Status code:*\n{}", alert.status_code) },
                            { "type": "mrkdwn", "text": format!("*Status:*\n{}", alert.kind.health_label()) },
                            { "type": "mrkdwn", "text": format!("*Time:*\n{}", alert.timestamp.to_rfc3339()) }
                        ]
                    }
                ]
            }]
        })
    }

    fn format_alert_discord(alert: &HealthAlert) -> Value {
        json!({
            "username": "pulsewatch",
            "embeds": [{
                "title": format!("{} {}", alert.kind.emoji(), alert.subject()),
                "url": &alert.url,
                "color": Self::color_decimal(alert.kind),
                "fields": [
                    { "name": "URL", "value": &alert.url, "inline": false },
                    { "name": "Status code", "value": alert.status_code.to_string(), "inline": true },
                    { "name": "Status", "value": alert.kind.health_label(), "inline": true }
                ],
                "timestamp": alert.timestamp.to_rfc3339()
            }]
        })
    }

    fn format_alert_generic(alert: &HealthAlert) -> Value {
        json!({
            "source": "pulsewatch",
            "event": alert.kind,
            "name": &alert.name,
            "url": &alert.url,
            "statusCode": alert.status_code,
            "status": alert.kind.health_label(),
            "timestamp": alert.timestamp.to_rfc3339()
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify_down(&self, alert: &HealthAlert) -> Result<(), NotificationError> {
        self.send_payload(&self.format_alert(alert)).await
    }

    async fn notify_recovered(&self, alert: &HealthAlert) -> Result<(), NotificationError> {
        self.send_payload(&self.format_alert(alert)).await
    }
}
