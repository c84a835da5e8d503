use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::value_objects::status_code::{
    TIMEOUT_STATUS, TRANSPORT_FAILURE_STATUS, is_healthy_status,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one probe. Immutable once built.
///
/// Fields are private: `is_healthy` is derived from `status_code` by the
/// constructors, so it is true exactly for 200 and 201.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckRecord {
    id: RecordId,
    url: String,
    /// When the probe was initiated, not when it completed.
    timestamp: DateTime<Utc>,
    status_code: u16,
    is_healthy: bool,
}

impl HealthCheckRecord {
    #[must_use]
    pub fn new(url: &str, timestamp: DateTime<Utc>, status_code: u16) -> Self {
        Self {
            id: RecordId::new(),
            url: url.to_owned(),
            timestamp,
            status_code,
            is_healthy: is_healthy_status(status_code),
        }
    }

    #[must_use]
    pub fn timed_out(url: &str, timestamp: DateTime<Utc>) -> Self {
        Self::new(url, timestamp, TIMEOUT_STATUS)
    }

    #[must_use]
    pub fn transport_failure(url: &str, timestamp: DateTime<Utc>) -> Self {
        Self::new(url, timestamp, TRANSPORT_FAILURE_STATUS)
    }

    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    #[must_use]
    pub const fn is_healthy(&self) -> bool {
        self.is_healthy
    }
}
