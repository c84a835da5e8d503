use std::sync::Arc;

use futures::future::join_all;
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::alert::HealthAlert;
use crate::domain::entities::health_record::HealthCheckRecord;
use crate::domain::entities::health_status::HealthStatus;
use crate::domain::entities::target::{MonitoredTarget, TargetId};
use crate::domain::ports::notifier::Notifier;
use crate::domain::ports::prober::Prober;
use crate::domain::ports::registry::{TargetError, TargetRegistry};
use crate::domain::ports::result_log::{LogError, ResultLog};
use crate::domain::ports::sink::RecordSink;
use crate::domain::rules::NotificationStateMachine;
use crate::domain::value_objects::alert_kind::AlertKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonitorError {
    #[error(transparent)]
    Target(#[from] TargetError),
    #[error(transparent)]
    Log(#[from] LogError),
}

/// Summary of one monitoring tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub checked: usize,
    pub healthy: usize,
    pub unhealthy: usize,
}

/// Owns the registry, the result log and the alert state, and runs the
/// probe → log → notify sequence for each check.
pub struct MonitorService {
    registry: Arc<dyn TargetRegistry>,
    log: Arc<dyn ResultLog>,
    prober: Arc<dyn Prober>,
    notifier: Arc<dyn Notifier>,
    sink: Option<Arc<dyn RecordSink>>,
    states: NotificationStateMachine,
}

impl MonitorService {
    #[must_use]
    pub fn new(
        registry: Arc<dyn TargetRegistry>,
        log: Arc<dyn ResultLog>,
        prober: Arc<dyn Prober>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            registry,
            log,
            prober,
            notifier,
            sink: None,
            states: NotificationStateMachine::new(),
        }
    }

    /// Mirror every record of a registered target into `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn RecordSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// # Errors
    ///
    /// Returns `MonitorError::Target` if the URL is blank or the registry is unavailable.
    pub fn register_target(
        &self,
        url: &str,
        name: Option<&str>,
    ) -> Result<MonitoredTarget, MonitorError> {
        let target = self.registry.register(url, name)?;
        if let Some(sink) = &self.sink {
            if let Err(e) = sink.open(&target.name, &target.url) {
                tracing::warn!(url = %target.url, "Failed to open record sink: {e}");
            }
        }
        tracing::info!(id = %target.id, url = %target.url, name = %target.name, "Target registered");
        Ok(target)
    }

    /// Removing an unknown id is not an error.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError::Target` if the registry is unavailable.
    pub fn deregister_target(&self, id: TargetId) -> Result<(), MonitorError> {
        self.registry.deregister(id)?;
        tracing::debug!(%id, "Target deregistered");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `MonitorError::Target` with `TargetError::NotFound` if `id` is unknown.
    pub fn set_enabled(&self, id: TargetId, enabled: bool) -> Result<MonitoredTarget, MonitorError> {
        Ok(self.registry.set_enabled(id, enabled)?)
    }

    /// # Errors
    ///
    /// Returns `MonitorError::Target` if the registry is unavailable.
    pub fn list_targets(&self) -> Result<Vec<MonitoredTarget>, MonitorError> {
        Ok(self.registry.list()?)
    }

    /// Probe `url` once, record the outcome and raise any alert it warrants.
    ///
    /// Works for URLs outside the registry too; their records are logged but
    /// never reach the sink or the alert state.
    pub async fn check_now(&self, url: &str) -> HealthCheckRecord {
        let record = self.prober.probe(url).await;
        if !record.is_healthy() {
            tracing::debug!(url, status_code = record.status_code(), "Probe reported unhealthy");
        }
        self.process_record(&record);
        record
    }

    /// Probe several URLs concurrently. Records come back in input order.
    pub async fn check_many<S: AsRef<str> + Sync>(&self, urls: &[S]) -> Vec<HealthCheckRecord> {
        join_all(urls.iter().map(|url| self.check_now(url.as_ref()))).await
    }

    /// Most-recent-first; `Some(url)` keeps only that URL's records.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError::Log` if the result log is unavailable.
    pub fn list_logs(&self, url: Option<&str>) -> Result<Vec<HealthCheckRecord>, MonitorError> {
        Ok(match url {
            Some(url) => self.log.list_by_url(url)?,
            None => self.log.list_all()?,
        })
    }

    /// One entry per registered target, in registry order.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError` if the registry or the result log is unavailable.
    pub fn latest_statuses(&self) -> Result<Vec<HealthStatus>, MonitorError> {
        self.registry
            .list()?
            .iter()
            .map(|target| {
                Ok(match self.log.latest_by_url(&target.url)? {
                    Some(record) => HealthStatus::from_record(target, &record),
                    None => HealthStatus::never_checked(target),
                })
            })
            .collect()
    }

    /// Probe every enabled target concurrently and wait for all of them.
    pub async fn run_tick(&self) -> TickReport {
        let targets = match self.registry.list() {
            Ok(targets) => targets,
            Err(e) => {
                tracing::warn!("Tick skipped: {e}");
                return TickReport::default();
            }
        };

        let urls: Vec<&str> = targets
            .iter()
            .filter(|t| t.enabled)
            .map(|t| t.url.as_str())
            .collect();
        let records = self.check_many(&urls).await;

        let healthy = records.iter().filter(|r| r.is_healthy()).count();
        let report = TickReport {
            checked: records.len(),
            healthy,
            unhealthy: records.len() - healthy,
        };
        tracing::info!(
            checked = report.checked,
            healthy = report.healthy,
            unhealthy = report.unhealthy,
            "Tick complete"
        );
        report
    }

    /// Drop every target, record and alert state.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError` if the registry or the result log is unavailable.
    pub fn reset(&self) -> Result<(), MonitorError> {
        self.registry.clear()?;
        self.log.clear()?;
        self.states.clear();
        tracing::debug!("Monitor state reset");
        Ok(())
    }

    fn process_record(&self, record: &HealthCheckRecord) {
        if let Err(e) = self.log.append(record.clone()) {
            tracing::warn!(url = %record.url(), "Failed to append record: {e}");
        }

        let target = match self.registry.find_by_url(record.url()) {
            Ok(Some(target)) => target,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(url = %record.url(), "Target lookup failed: {e}");
                return;
            }
        };

        if let Some(sink) = &self.sink {
            if let Err(e) = sink.append(&target.name, record) {
                tracing::warn!(url = %record.url(), "Failed to write record sink: {e}");
            }
        }

        if record.is_healthy() {
            if self.states.observe_recovered(record.url(), true) {
                self.dispatch(HealthAlert::from_record(AlertKind::Recovered, &target.name, record));
            }
            self.states.reset(record.url());
        } else if self.states.observe_down(record.url(), false) {
            self.dispatch(HealthAlert::from_record(AlertKind::Down, &target.name, record));
        }
    }

    fn dispatch(&self, alert: HealthAlert) {
        tracing::info!(kind = %alert.kind, url = %alert.url, status_code = alert.status_code, "Dispatching alert");
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(e) = notifier.dispatch(&alert).await {
                tracing::warn!(kind = %alert.kind, url = %alert.url, "Alert dispatch failed: {e}");
            }
        });
    }
}
