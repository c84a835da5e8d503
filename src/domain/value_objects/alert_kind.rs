use serde::{Deserialize, Serialize};

/// Direction of a health transition worth alerting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Healthy → Unhealthy.
    Down,
    /// Unhealthy → Healthy.
    Recovered,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Down => write!(f, "DOWN"),
            Self::Recovered => write!(f, "RECOVERED"),
        }
    }
}

impl AlertKind {
    #[must_use]
    pub const fn emoji(&self) -> &str {
        match self {
            Self::Down => "\u{26A0}\u{FE0F}",
            Self::Recovered => "\u{2705}",
        }
    }

    #[must_use]
    pub const fn health_label(&self) -> &str {
        match self {
            Self::Down => "UNHEALTHY",
            Self::Recovered => "HEALTHY",
        }
    }
}
