use thiserror::Error;

use crate::domain::entities::health_record::HealthCheckRecord;

/// Records kept when no capacity is configured.
pub const DEFAULT_LOG_CAPACITY: usize = 1000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    #[error("result log unavailable: {0}")]
    Unavailable(String),
}

/// Append-only, capacity-bounded log of probe outcomes, newest first.
pub trait ResultLog: Send + Sync {
    /// Insert a record at the head, evicting the oldest once over capacity.
    ///
    /// # Errors
    ///
    /// Returns `LogError` if the log cannot be accessed.
    fn append(&self, record: HealthCheckRecord) -> Result<(), LogError>;

    /// Every retained record, most recent first.
    ///
    /// # Errors
    ///
    /// Returns `LogError` if the log cannot be accessed.
    fn list_all(&self) -> Result<Vec<HealthCheckRecord>, LogError>;

    /// Records for one URL, keeping the global ordering.
    ///
    /// # Errors
    ///
    /// Returns `LogError` if the log cannot be accessed.
    fn list_by_url(&self, url: &str) -> Result<Vec<HealthCheckRecord>, LogError>;

    /// Most recent record for one URL.
    ///
    /// # Errors
    ///
    /// Returns `LogError` if the log cannot be accessed.
    fn latest_by_url(&self, url: &str) -> Result<Option<HealthCheckRecord>, LogError>;

    /// Drop every record.
    ///
    /// # Errors
    ///
    /// Returns `LogError` if the log cannot be accessed.
    fn clear(&self) -> Result<(), LogError>;
}
