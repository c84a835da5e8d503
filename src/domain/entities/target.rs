use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a registered target, stable for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(Uuid);

impl TargetId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TargetId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TargetId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// An HTTP endpoint registered for periodic probing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoredTarget {
    pub id: TargetId,
    pub url: String,
    /// Display name; falls back to the URL when none was given.
    pub name: String,
    pub enabled: bool,
}

impl MonitoredTarget {
    /// Builds an enabled target with a fresh id. A missing or blank name
    /// defaults to the URL.
    #[must_use]
    pub fn new(url: &str, name: Option<&str>) -> Self {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(url);
        Self {
            id: TargetId::new(),
            url: url.to_owned(),
            name: name.to_owned(),
            enabled: true,
        }
    }
}
