use thiserror::Error;

use crate::domain::entities::target::{MonitoredTarget, TargetId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("target not found: {0}")]
    NotFound(TargetId),
    #[error("target registry unavailable: {0}")]
    Unavailable(String),
}

pub trait TargetRegistry: Send + Sync {
    /// Register a new target, enabled by default.
    ///
    /// # Errors
    ///
    /// Returns `TargetError::InvalidInput` if the URL is empty.
    fn register(&self, url: &str, name: Option<&str>) -> Result<MonitoredTarget, TargetError>;

    /// Remove a target. Removing an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns `TargetError::Unavailable` if the registry cannot be accessed.
    fn deregister(&self, id: TargetId) -> Result<(), TargetError>;

    /// Enable or disable a target, returning its updated state.
    ///
    /// # Errors
    ///
    /// Returns `TargetError::NotFound` if no target has this id.
    fn set_enabled(&self, id: TargetId, enabled: bool) -> Result<MonitoredTarget, TargetError>;

    /// All targets in registration order.
    ///
    /// # Errors
    ///
    /// Returns `TargetError::Unavailable` if the registry cannot be accessed.
    fn list(&self) -> Result<Vec<MonitoredTarget>, TargetError>;

    /// First target registered under `url`, if any.
    ///
    /// # Errors
    ///
    /// Returns `TargetError::Unavailable` if the registry cannot be accessed.
    fn find_by_url(&self, url: &str) -> Result<Option<MonitoredTarget>, TargetError>;

    /// Drop every target.
    ///
    /// # Errors
    ///
    /// Returns `TargetError::Unavailable` if the registry cannot be accessed.
    fn clear(&self) -> Result<(), TargetError>;
}
