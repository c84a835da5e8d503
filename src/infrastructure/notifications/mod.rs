pub mod composite;
pub mod terminal;
pub mod webhook;

use std::sync::Arc;

use crate::application::config::NotificationConfig;
use crate::domain::ports::Notifier;

use self::composite::CompositeNotifier;
use self::terminal::TerminalNotifier;
use self::webhook::WebhookNotifier;

/// Build the notifier chain described by the `[notifications]` section.
///
/// A webhook whose client cannot be built is skipped with a warning.
#[must_use]
pub fn create_notifier(config: &NotificationConfig) -> Arc<dyn Notifier> {
    let mut notifiers: Vec<Box<dyn Notifier>> = Vec::new();
    if config.terminal {
        notifiers.push(Box::new(TerminalNotifier::new()));
    }
    if let Some(url) = config.webhook_url.as_deref().map(str::trim) {
        if !url.is_empty() {
            match WebhookNotifier::new(url.to_owned()) {
                Ok(webhook) => notifiers.push(Box::new(webhook)),
                Err(e) => tracing::warn!("Webhook notifier disabled: {e}"),
            }
        }
    }
    Arc::new(CompositeNotifier::new(notifiers))
}
