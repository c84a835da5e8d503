use chrono::{DateTime, Utc};
use serde::Serialize;

use super::health_record::HealthCheckRecord;
use super::target::{MonitoredTarget, TargetId};

/// Latest known status of one registered target, derived from the result log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub target_id: TargetId,
    pub name: String,
    pub url: String,
    pub enabled: bool,
    /// `None` until the target has been checked at least once.
    pub last_checked: Option<DateTime<Utc>>,
    pub status_code: u16,
    pub is_healthy: bool,
}

impl HealthStatus {
    /// Zero-value status for a target with no matching record.
    #[must_use]
    pub fn never_checked(target: &MonitoredTarget) -> Self {
        Self {
            target_id: target.id,
            name: target.name.clone(),
            url: target.url.clone(),
            enabled: target.enabled,
            last_checked: None,
            status_code: 0,
            is_healthy: false,
        }
    }

    #[must_use]
    pub fn from_record(target: &MonitoredTarget, record: &HealthCheckRecord) -> Self {
        Self {
            target_id: target.id,
            name: target.name.clone(),
            url: target.url.clone(),
            enabled: target.enabled,
            last_checked: Some(record.timestamp()),
            status_code: record.status_code(),
            is_healthy: record.is_healthy(),
        }
    }

    #[must_use]
    pub const fn has_been_checked(&self) -> bool {
        self.last_checked.is_some()
    }
}
