use thiserror::Error;

use crate::domain::entities::health_record::HealthCheckRecord;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("record sink I/O failed: {0}")]
    Io(String),
}

/// Durable, append-only copy of probe outcomes kept per target.
///
/// The in-memory log stays authoritative; sink failures are logged and ignored.
pub trait RecordSink: Send + Sync {
    /// Prepare storage for a newly registered target.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the backing storage cannot be written.
    fn open(&self, name: &str, url: &str) -> Result<(), SinkError>;

    /// Append one record for the target called `name`.
    ///
    /// # Errors
    ///
    /// Returns `SinkError` if the backing storage cannot be written.
    fn append(&self, name: &str, record: &HealthCheckRecord) -> Result<(), SinkError>;
}
