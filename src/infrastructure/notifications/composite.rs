use async_trait::async_trait;
use futures::future::join_all;

use crate::domain::entities::alert::HealthAlert;
use crate::domain::ports::notifier::{NotificationError, Notifier};

/// Forwards every alert to all inner notifiers concurrently.
///
/// One failing channel never prevents delivery on the others; the first
/// error (in channel order) is returned once all have completed.
pub struct CompositeNotifier {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl CompositeNotifier {
    #[must_use]
    pub fn new(notifiers: Vec<Box<dyn Notifier>>) -> Self {
        Self { notifiers }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }

    async fn fan_out(&self, alert: &HealthAlert) -> Result<(), NotificationError> {
        let results = join_all(self.notifiers.iter().map(|n| n.dispatch(alert))).await;
        let mut first_error = None;
        for e in results.into_iter().filter_map(Result::err) {
            tracing::warn!(kind = %alert.kind, url = %alert.url, "Notification failed: {e}");
            if first_error.is_none() {
                first_error = Some(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl Default for CompositeNotifier {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl Notifier for CompositeNotifier {
    async fn notify_down(&self, alert: &HealthAlert) -> Result<(), NotificationError> {
        self.fan_out(alert).await
    }

    async fn notify_recovered(&self, alert: &HealthAlert) -> Result<(), NotificationError> {
        self.fan_out(alert).await
    }
}
