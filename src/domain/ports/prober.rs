use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::health_record::HealthCheckRecord;

pub const DEFAULT_USER_AGENT: &str = concat!("pulsewatch/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("HTTP client unavailable: {0}")]
    ClientUnavailable(String),
}

#[async_trait]
pub trait Prober: Send + Sync {
    /// Perform one bounded GET against `url`.
    ///
    /// Never fails: timeouts and transport errors are encoded in the
    /// returned record's status code.
    async fn probe(&self, url: &str) -> HealthCheckRecord;
}
