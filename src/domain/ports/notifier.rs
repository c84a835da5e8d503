use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::alert::HealthAlert;
use crate::domain::value_objects::alert_kind::AlertKind;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("failed to send notification: {0}")]
    SendFailed(String),
    #[error("notification channel unavailable: {0}")]
    ChannelUnavailable(String),
}

/// Delivers down/recovered alerts. Each call is best-effort; the monitor
/// never retries and never waits on delivery before moving on.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Announce that a target went from healthy to unhealthy.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` if the notification fails to send
    /// or the channel is unavailable.
    async fn notify_down(&self, alert: &HealthAlert) -> Result<(), NotificationError>;

    /// Announce that a target went from unhealthy back to healthy.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` if the notification fails to send
    /// or the channel is unavailable.
    async fn notify_recovered(&self, alert: &HealthAlert) -> Result<(), NotificationError>;

    /// Route an alert to the method matching its kind.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying method.
    async fn dispatch(&self, alert: &HealthAlert) -> Result<(), NotificationError> {
        match alert.kind {
            AlertKind::Down => self.notify_down(alert).await,
            AlertKind::Recovered => self.notify_recovered(alert).await,
        }
    }
}
