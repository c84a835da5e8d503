use std::sync::Mutex;

use crate::domain::entities::target::{MonitoredTarget, TargetId};
use crate::domain::ports::registry::{TargetError, TargetRegistry};

/// Registry of monitored targets kept in registration order.
///
/// Duplicate URLs are allowed; each registration is an independent target.
pub struct InMemoryTargetRegistry {
    targets: Mutex<Vec<MonitoredTarget>>,
}

impl InMemoryTargetRegistry {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            targets: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryTargetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetRegistry for InMemoryTargetRegistry {
    fn register(&self, url: &str, name: Option<&str>) -> Result<MonitoredTarget, TargetError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(TargetError::InvalidInput("URL is required".into()));
        }
        let target = MonitoredTarget::new(url, name);
        self.targets
            .lock()
            .map_err(|_| TargetError::Unavailable("lock poisoned".into()))?
            .push(target.clone());
        Ok(target)
    }

    fn deregister(&self, id: TargetId) -> Result<(), TargetError> {
        self.targets
            .lock()
            .map_err(|_| TargetError::Unavailable("lock poisoned".into()))?
            .retain(|t| t.id != id);
        Ok(())
    }

    fn set_enabled(&self, id: TargetId, enabled: bool) -> Result<MonitoredTarget, TargetError> {
        let mut targets = self
            .targets
            .lock()
            .map_err(|_| TargetError::Unavailable("lock poisoned".into()))?;
        let target = targets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TargetError::NotFound(id))?;
        target.enabled = enabled;
        Ok(target.clone())
    }

    fn list(&self) -> Result<Vec<MonitoredTarget>, TargetError> {
        Ok(self
            .targets
            .lock()
            .map_err(|_| TargetError::Unavailable("lock poisoned".into()))?
            .clone())
    }

    fn find_by_url(&self, url: &str) -> Result<Option<MonitoredTarget>, TargetError> {
        Ok(self
            .targets
            .lock()
            .map_err(|_| TargetError::Unavailable("lock poisoned".into()))?
            .iter()
            .find(|t| t.url == url)
            .cloned())
    }

    fn clear(&self) -> Result<(), TargetError> {
        self.targets
            .lock()
            .map_err(|_| TargetError::Unavailable("lock poisoned".into()))?
            .clear();
        Ok(())
    }
}
