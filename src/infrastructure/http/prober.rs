use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::domain::entities::health_record::HealthCheckRecord;
use crate::domain::ports::prober::{ProbeError, Prober};

/// Probes targets with a single GET bounded by a hard timeout.
///
/// Redirects are followed (up to reqwest's default limit of 10) and the
/// final response's status is recorded. The timeout covers the whole chain.
pub struct HttpProber {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpProber {
    /// # Errors
    ///
    /// Returns `ProbeError::ClientUnavailable` if the HTTP client
    /// cannot be initialized (e.g. TLS backend failure).
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| ProbeError::ClientUnavailable(e.to_string()))?;
        Ok(Self { client, timeout })
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> HealthCheckRecord {
        let started_at = Utc::now();
        // reqwest's own timeout covers connect + headers; the outer one also
        // bounds anything the client does not account for.
        let outcome = tokio::time::timeout(self.timeout, self.client.get(url).send()).await;

        match outcome {
            Ok(Ok(response)) => {
                HealthCheckRecord::new(url, started_at, response.status().as_u16())
            }
            Ok(Err(e)) if e.is_timeout() => {
                debug!(url, "probe timed out");
                HealthCheckRecord::timed_out(url, started_at)
            }
            Ok(Err(e)) => {
                debug!(url, error = %e, "probe transport failure");
                HealthCheckRecord::transport_failure(url, started_at)
            }
            Err(_) => {
                debug!(url, "probe timed out");
                HealthCheckRecord::timed_out(url, started_at)
            }
        }
    }
}
