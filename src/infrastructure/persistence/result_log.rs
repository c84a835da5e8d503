use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::entities::health_record::HealthCheckRecord;
use crate::domain::ports::result_log::{DEFAULT_LOG_CAPACITY, LogError, ResultLog};

/// Bounded in-memory log, newest record at the front.
///
/// Eviction is strict FIFO by insertion regardless of URL, so a target that
/// reports often can push out other targets' history.
pub struct InMemoryResultLog {
    records: Mutex<VecDeque<HealthCheckRecord>>,
    capacity: usize,
}

impl InMemoryResultLog {
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryResultLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

impl ResultLog for InMemoryResultLog {
    fn append(&self, record: HealthCheckRecord) -> Result<(), LogError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| LogError::Unavailable("lock poisoned".into()))?;
        records.push_front(record);
        records.truncate(self.capacity);
        drop(records);
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<HealthCheckRecord>, LogError> {
        Ok(self
            .records
            .lock()
            .map_err(|_| LogError::Unavailable("lock poisoned".into()))?
            .iter()
            .cloned()
            .collect())
    }

    fn list_by_url(&self, url: &str) -> Result<Vec<HealthCheckRecord>, LogError> {
        Ok(self
            .records
            .lock()
            .map_err(|_| LogError::Unavailable("lock poisoned".into()))?
            .iter()
            .filter(|r| r.url() == url)
            .cloned()
            .collect())
    }

    fn latest_by_url(&self, url: &str) -> Result<Option<HealthCheckRecord>, LogError> {
        Ok(self
            .records
            .lock()
            .map_err(|_| LogError::Unavailable("lock poisoned".into()))?
            .iter()
            .find(|r| r.url() == url)
            .cloned())
    }

    fn clear(&self) -> Result<(), LogError> {
        self.records
            .lock()
            .map_err(|_| LogError::Unavailable("lock poisoned".into()))?
            .clear();
        Ok(())
    }
}
