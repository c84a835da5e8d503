use chrono::{DateTime, Utc};
use serde::Serialize;

use super::health_record::HealthCheckRecord;
use crate::domain::value_objects::alert_kind::AlertKind;

/// Payload handed to the notification dispatcher on a health transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAlert {
    pub kind: AlertKind,
    pub name: String,
    pub url: String,
    pub status_code: u16,
    pub timestamp: DateTime<Utc>,
}

impl HealthAlert {
    #[must_use]
    pub fn from_record(kind: AlertKind, name: &str, record: &HealthCheckRecord) -> Self {
        Self {
            kind,
            name: name.to_owned(),
            url: record.url().to_owned(),
            status_code: record.status_code(),
            timestamp: record.timestamp(),
        }
    }

    /// Short subject line, e.g. `Website DOWN: Example API`.
    #[must_use]
    pub fn subject(&self) -> String {
        format!("Website {}: {}", self.kind, self.name)
    }
}
